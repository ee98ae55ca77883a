//! CSV-based assumption overrides
//!
//! An override file has a `parameter,value` header followed by one row per
//! parameter to replace in the default model, e.g.
//!
//! ```text
//! parameter,value
//! annual_salary,65000
//! fl_mortgage_rate,0.04
//! ```

use super::Assumptions;
use crate::error::SimulationError;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One `parameter,value` row
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParameterOverride {
    pub parameter: String,
    pub value: f64,
}

/// Load overrides from a CSV file
pub fn load_overrides(path: &Path) -> Result<Vec<ParameterOverride>, SimulationError> {
    let file = File::open(path)?;
    read_overrides(file)
}

/// Parse overrides from any reader
pub fn read_overrides<R: Read>(reader: R) -> Result<Vec<ParameterOverride>, SimulationError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut overrides = Vec::new();
    for result in reader.deserialize() {
        let row: ParameterOverride = result?;
        overrides.push(row);
    }
    Ok(overrides)
}

/// Apply overrides in file order; later rows win
pub fn apply_overrides(
    assumptions: &mut Assumptions,
    overrides: &[ParameterOverride],
) -> Result<(), SimulationError> {
    for o in overrides {
        let value = o.value;
        match o.parameter.as_str() {
            "initial_savings" => assumptions.initial.savings = value,
            "initial_checking" => assumptions.initial.checking = value,
            "initial_debt" => assumptions.initial.debt = value,
            "annual_salary" => assumptions.income.annual_salary = value,
            "savings_pct" => assumptions.income.savings_pct = value,
            "checking_pct" => assumptions.income.checking_pct = value,
            "monthly_rent" => assumptions.housing.monthly_rent = value,
            "house_cost" => assumptions.housing.house_cost = value,
            "mortgage_years" => assumptions.housing.mortgage_years = whole_years(value)?,
            "debt_interest_rate" => assumptions.debt.annual_interest_rate = value,
            "debt_min_payment_pct" => assumptions.debt.min_payment_pct = value,
            "fl_savings_rate" => assumptions.literate.savings_rate = value,
            "nfl_savings_rate" => assumptions.not_literate.savings_rate = value,
            "fl_extra_debt_payment" => assumptions.literate.extra_debt_payment = value,
            "nfl_extra_debt_payment" => assumptions.not_literate.extra_debt_payment = value,
            "fl_down_payment_fraction" => assumptions.literate.down_payment_fraction = value,
            "nfl_down_payment_fraction" => assumptions.not_literate.down_payment_fraction = value,
            "fl_mortgage_rate" => assumptions.literate.mortgage_rate = value,
            "nfl_mortgage_rate" => assumptions.not_literate.mortgage_rate = value,
            other => return Err(SimulationError::UnknownParameter(other.to_string())),
        }
        log::debug!("assumption override: {} = {}", o.parameter, value);
    }
    Ok(())
}

fn whole_years(value: f64) -> Result<u32, SimulationError> {
    if value.fract() != 0.0 || value < 0.0 || value > u32::MAX as f64 {
        return Err(SimulationError::InvalidParameter {
            name: "mortgage_years".to_string(),
            value,
            reason: "must be a whole number of years",
        });
    }
    Ok(value as u32)
}
