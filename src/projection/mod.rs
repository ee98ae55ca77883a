//! Year-by-year projection of a person's accounts

mod state;
mod engine;
mod cashflows;

pub use state::FinancialActor;
pub use engine::{checked_years, YearlySimulation, DEFAULT_YEARS};
pub use cashflows::{FinalBalances, SimulationResult, SimulationSummary, YearRow};
