//! Model assumptions: starting balances, income, housing, debt terms and literacy profiles

mod profile;
pub mod loader;

pub use profile::{Literacy, LiteracyProfile};

use crate::error::SimulationError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Balances every simulated person starts with
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InitialBalances {
    pub savings: f64,
    pub checking: f64,
    pub debt: f64,
}

impl Default for InitialBalances {
    fn default() -> Self {
        Self {
            savings: 5_000.0,
            checking: 0.0,
            debt: 30_100.0,
        }
    }
}

/// Salary and how it is allocated each year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncomeAssumptions {
    pub annual_salary: f64,

    /// Share of salary contributed to savings
    pub savings_pct: f64,

    /// Share of salary contributed to checking
    pub checking_pct: f64,
}

impl Default for IncomeAssumptions {
    fn default() -> Self {
        Self {
            annual_salary: 59_000.0,
            savings_pct: 0.20,
            checking_pct: 0.30,
        }
    }
}

impl IncomeAssumptions {
    /// Total salary set aside each year across both accounts
    pub fn annual_contribution(&self) -> f64 {
        self.annual_salary * (self.savings_pct + self.checking_pct)
    }

    /// Annual contribution split into (savings, checking) shares
    pub fn split_contribution(&self) -> (f64, f64) {
        let total_pct = self.savings_pct + self.checking_pct;
        if total_pct <= 0.0 {
            return (0.0, 0.0);
        }
        let contribution = self.annual_contribution();
        (
            contribution * self.savings_pct / total_pct,
            contribution * self.checking_pct / total_pct,
        )
    }
}

/// Renting and house purchase terms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HousingAssumptions {
    pub monthly_rent: f64,
    pub house_cost: f64,
    pub mortgage_years: u32,
}

impl Default for HousingAssumptions {
    fn default() -> Self {
        Self {
            monthly_rent: 850.0,
            house_cost: 175_000.0,
            mortgage_years: 30,
        }
    }
}

impl HousingAssumptions {
    pub fn annual_rent(&self) -> f64 {
        self.monthly_rent * 12.0
    }

    pub fn mortgage_months(&self) -> u64 {
        u64::from(self.mortgage_years) * 12
    }
}

/// Longest mortgage term accepted by [`Assumptions::validate`]
pub const MAX_MORTGAGE_YEARS: u32 = 100;

/// Revolving consumer debt terms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DebtAssumptions {
    /// Interest applied once a year to any balance left after payments
    pub annual_interest_rate: f64,

    /// Minimum monthly payment as a share of the outstanding balance
    pub min_payment_pct: f64,
}

impl Default for DebtAssumptions {
    fn default() -> Self {
        Self {
            annual_interest_rate: 0.20,
            min_payment_pct: 0.03,
        }
    }
}

/// Container for all simulation assumptions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assumptions {
    pub initial: InitialBalances,
    pub income: IncomeAssumptions,
    pub housing: HousingAssumptions,
    pub debt: DebtAssumptions,
    pub literate: LiteracyProfile,
    pub not_literate: LiteracyProfile,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::default_model()
    }
}

impl Assumptions {
    /// The reference parameter table for the FL vs. NFL comparison
    pub fn default_model() -> Self {
        Self {
            initial: InitialBalances::default(),
            income: IncomeAssumptions::default(),
            housing: HousingAssumptions::default(),
            debt: DebtAssumptions::default(),
            literate: LiteracyProfile::literate_default(),
            not_literate: LiteracyProfile::not_literate_default(),
        }
    }

    /// Load the default model with overrides from `<path>`
    pub fn from_csv_path(path: &Path) -> Result<Self, SimulationError> {
        let overrides = loader::load_overrides(path)?;
        let mut assumptions = Self::default_model();
        loader::apply_overrides(&mut assumptions, &overrides)?;
        assumptions.validate()?;
        Ok(assumptions)
    }

    /// Rate table for the given literacy level
    pub fn profile(&self, literacy: Literacy) -> &LiteracyProfile {
        match literacy {
            Literacy::Literate => &self.literate,
            Literacy::NotLiterate => &self.not_literate,
        }
    }

    pub fn annual_contribution(&self) -> f64 {
        self.income.annual_contribution()
    }

    /// Reject parameter combinations the model cannot run with
    pub fn validate(&self) -> Result<(), SimulationError> {
        non_negative("initial_savings", self.initial.savings)?;
        finite("initial_checking", self.initial.checking)?;
        non_negative("initial_debt", self.initial.debt)?;
        non_negative("annual_salary", self.income.annual_salary)?;
        fraction("savings_pct", self.income.savings_pct)?;
        fraction("checking_pct", self.income.checking_pct)?;
        non_negative("monthly_rent", self.housing.monthly_rent)?;
        non_negative("house_cost", self.housing.house_cost)?;
        if self.housing.mortgage_years == 0 {
            return Err(SimulationError::InvalidParameter {
                name: "mortgage_years".to_string(),
                value: 0.0,
                reason: "mortgage term must be at least one year",
            });
        }
        if self.housing.mortgage_years > MAX_MORTGAGE_YEARS {
            return Err(SimulationError::InvalidParameter {
                name: "mortgage_years".to_string(),
                value: f64::from(self.housing.mortgage_years),
                reason: "mortgage term may not exceed 100 years",
            });
        }
        non_negative("debt_interest_rate", self.debt.annual_interest_rate)?;
        fraction("debt_min_payment_pct", self.debt.min_payment_pct)?;

        for (prefix, profile) in [("fl", &self.literate), ("nfl", &self.not_literate)] {
            non_negative(&format!("{prefix}_savings_rate"), profile.savings_rate)?;
            non_negative(&format!("{prefix}_extra_debt_payment"), profile.extra_debt_payment)?;
            fraction(&format!("{prefix}_down_payment_fraction"), profile.down_payment_fraction)?;
            non_negative(&format!("{prefix}_mortgage_rate"), profile.mortgage_rate)?;
        }
        Ok(())
    }
}

fn non_negative(name: &str, value: f64) -> Result<(), SimulationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SimulationError::InvalidParameter {
            name: name.to_string(),
            value,
            reason: "must be a finite, non-negative number",
        })
    }
}

fn finite(name: &str, value: f64) -> Result<(), SimulationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimulationError::InvalidParameter {
            name: name.to_string(),
            value,
            reason: "must be a finite number",
        })
    }
}

fn fraction(name: &str, value: f64) -> Result<(), SimulationError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SimulationError::InvalidParameter {
            name: name.to_string(),
            value,
            reason: "must lie between 0 and 1",
        })
    }
}
