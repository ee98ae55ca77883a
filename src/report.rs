//! Presentation of completed simulations: text summaries, CSV trajectories, JSON

use crate::error::SimulationError;
use crate::projection::{FinancialActor, SimulationResult};
use crate::scenario::Comparison;
use serde::Serialize;
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

impl fmt::Display for FinancialActor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Person:", self.literacy().label())?;
        writeln!(f, "  Savings: ${:.2}", self.savings)?;
        writeln!(f, "  Checking: ${:.2}", self.checking)?;
        writeln!(f, "  Debt: ${:.2}", self.debt)?;
        writeln!(f, "  Loan: ${:.2}", self.loan)?;
        writeln!(f, "  Has House: {}", self.has_house())?;
        write!(f, "  Total Wealth: ${}", self.compute_wealth())
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation Results for {} Person:", self.literacy.label())?;
        writeln!(f, "  Years in Debt: {}", self.summary.years_in_debt)?;
        writeln!(f, "  Years Rented: {}", self.summary.years_rented)?;
        writeln!(f, "  Total Debt Paid: ${:.2}", self.summary.total_debt_paid)?;
        match self.breakeven_year() {
            Some(year) => writeln!(f, "  Positive Wealth From Year: {year}")?,
            None => writeln!(f, "  Positive Wealth From Year: never")?,
        }
        write!(f, "  Final Wealth: ${}", self.final_wealth())
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Results after {} years:", self.years)?;
        writeln!(f, "{}", self.literate)?;
        writeln!(f)?;
        writeln!(f, "{}", self.not_literate)?;
        writeln!(f)?;
        writeln!(f, "Comparison:")?;
        writeln!(
            f,
            "NFL paid ${:.2} more in debt than FL",
            self.extra_debt_paid_by_not_literate()
        )?;
        writeln!(
            f,
            "NFL spent {} more years in debt than FL",
            self.extra_years_in_debt_for_not_literate()
        )?;
        write!(
            f,
            "FL has ${:.2} more in wealth than NFL after {} years",
            self.wealth_advantage_of_literate() as f64,
            self.years
        )
    }
}

/// One CSV row of the aligned wealth trajectories
#[derive(Debug, Clone, Serialize)]
struct TrajectoryRecord {
    year: usize,
    literate_wealth: i64,
    not_literate_wealth: i64,
}

/// Write `year,literate_wealth,not_literate_wealth` rows to any writer
pub fn write_trajectory<W: Write>(writer: W, comparison: &Comparison) -> Result<(), SimulationError> {
    let mut writer = csv::Writer::from_writer(writer);
    for (year, literate_wealth, not_literate_wealth) in comparison.aligned_trajectories() {
        writer.serialize(TrajectoryRecord {
            year,
            literate_wealth,
            not_literate_wealth,
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the aligned trajectories to a CSV file
pub fn write_trajectory_csv(path: &Path, comparison: &Comparison) -> Result<(), SimulationError> {
    let file = File::create(path)?;
    write_trajectory(file, comparison)?;
    log::info!("wealth trajectories written to {}", path.display());
    Ok(())
}

/// Pretty-printed JSON of a full comparison
pub fn to_json(comparison: &Comparison) -> serde_json::Result<String> {
    serde_json::to_string_pretty(comparison)
}
