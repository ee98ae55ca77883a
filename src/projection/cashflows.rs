//! Per-year output rows and simulation results

use crate::assumptions::Literacy;
use serde::{Deserialize, Serialize};

/// Balances and flows for one simulated year, captured after all transitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearRow {
    pub year: u32,

    // End-of-year balances
    pub savings: f64,
    pub checking: f64,
    pub debt: f64,
    pub loan: f64,
    pub has_house: bool,

    // Flows during the year
    pub savings_contribution: f64,
    pub checking_contribution: f64,
    pub debt_paid: f64,
    pub rent_paid: f64,
    pub mortgage_paid: f64,
    pub bought_house: bool,

    pub wealth: i64,
}

/// Counters accumulated across a run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    /// Years ending with consumer debt or a mortgage outstanding
    pub years_in_debt: u32,

    /// Years spent renting, up to and including the purchase year
    pub years_rented: u32,

    /// Consumer debt payments across all years
    pub total_debt_paid: f64,

    /// Year the house was bought, if it was
    pub house_purchase_year: Option<u32>,
}

/// Final balances of the simulated person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalBalances {
    pub savings: f64,
    pub checking: f64,
    pub debt: f64,
    pub loan: f64,
    pub has_house: bool,
}

/// Complete result of one simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    pub literacy: Literacy,

    /// Wealth at year 0 followed by one entry per simulated year
    pub wealth_trajectory: Vec<i64>,

    pub summary: SimulationSummary,

    pub rows: Vec<YearRow>,

    pub final_balances: FinalBalances,
}

impl SimulationResult {
    pub fn final_wealth(&self) -> i64 {
        self.wealth_trajectory.last().copied().unwrap_or(0)
    }

    /// First year with non-negative wealth
    pub fn breakeven_year(&self) -> Option<usize> {
        self.wealth_trajectory.iter().position(|&w| w >= 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(trajectory: Vec<i64>) -> SimulationResult {
        SimulationResult {
            literacy: Literacy::Literate,
            wealth_trajectory: trajectory,
            summary: SimulationSummary::default(),
            rows: Vec::new(),
            final_balances: FinalBalances {
                savings: 0.0,
                checking: 0.0,
                debt: 0.0,
                loan: 0.0,
                has_house: false,
            },
        }
    }

    #[test]
    fn test_final_wealth_and_breakeven() {
        let r = result(vec![-25_100, -8_770, 9_192]);
        assert_eq!(r.final_wealth(), 9_192);
        assert_eq!(r.breakeven_year(), Some(2));

        let r = result(vec![-1, -2]);
        assert_eq!(r.breakeven_year(), None);
    }

    #[test]
    fn test_result_serializes() {
        let r = result(vec![-25_100]);
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"wealth_trajectory\":[-25100]"));
        assert!(json.contains("\"literacy\":\"Literate\""));
    }
}
