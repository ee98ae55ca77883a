//! Literacy profiles: the per-person rate tables

use serde::{Deserialize, Serialize};

/// Which parameter set a simulated person uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Literacy {
    /// Financially literate (FL)
    Literate,
    /// Not financially literate (NFL)
    NotLiterate,
}

impl Literacy {
    pub fn from_flag(is_literate: bool) -> Self {
        if is_literate {
            Literacy::Literate
        } else {
            Literacy::NotLiterate
        }
    }

    pub fn is_literate(self) -> bool {
        matches!(self, Literacy::Literate)
    }

    /// Human-readable label used in reports
    pub fn label(self) -> &'static str {
        match self {
            Literacy::Literate => "Financially Literate",
            Literacy::NotLiterate => "Not Financially Literate",
        }
    }
}

/// Behavioral and market terms that differ between literacy levels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiteracyProfile {
    /// Annual growth rate on savings (mutual funds vs. savings account)
    pub savings_rate: f64,

    /// Fixed amount paid above the minimum debt payment each month
    pub extra_debt_payment: f64,

    /// Share of the house cost required up front
    pub down_payment_fraction: f64,

    /// Annual mortgage interest rate
    pub mortgage_rate: f64,
}

impl LiteracyProfile {
    pub fn literate_default() -> Self {
        Self {
            savings_rate: 0.07,
            extra_debt_payment: 15.0,
            down_payment_fraction: 0.20,
            mortgage_rate: 0.045,
        }
    }

    pub fn not_literate_default() -> Self {
        Self {
            savings_rate: 0.01,
            extra_debt_payment: 1.0,
            down_payment_fraction: 0.05,
            mortgage_rate: 0.05,
        }
    }

    /// Down payment owed on a house of the given cost
    pub fn down_payment(&self, house_cost: f64) -> f64 {
        house_cost * self.down_payment_fraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literacy_flag_round_trip() {
        assert_eq!(Literacy::from_flag(true), Literacy::Literate);
        assert_eq!(Literacy::from_flag(false), Literacy::NotLiterate);
        assert!(Literacy::Literate.is_literate());
        assert!(!Literacy::NotLiterate.is_literate());
    }

    #[test]
    fn test_literate_trades_stricter_equity_for_better_rate() {
        let fl = LiteracyProfile::literate_default();
        let nfl = LiteracyProfile::not_literate_default();

        assert!(fl.down_payment_fraction > nfl.down_payment_fraction);
        assert!(fl.mortgage_rate < nfl.mortgage_rate);
        assert_eq!(fl.down_payment(175_000.0), 35_000.0);
    }
}
