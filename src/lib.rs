//! Literacy Wealth - deterministic 40-year wealth projection for two archetypal people
//!
//! This library provides:
//! - A per-person account model (savings, checking, revolving debt, mortgage)
//! - A yearly simulation driver producing wealth trajectories and summary counters
//! - Paired runs comparing financially literate and non-literate profiles
//! - Text, CSV and JSON reporting of completed runs

pub mod error;
pub mod assumptions;
pub mod projection;
pub mod scenario;
pub mod report;

// Re-export commonly used types
pub use error::SimulationError;
pub use assumptions::{Assumptions, Literacy, LiteracyProfile};
pub use projection::{FinancialActor, SimulationResult, SimulationSummary, YearlySimulation};
pub use scenario::{Comparison, ScenarioRunner};
