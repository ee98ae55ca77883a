//! Scenario runner for paired literate / non-literate comparisons
//!
//! Holds one set of assumptions and runs independent simulations against it.

use crate::assumptions::{Assumptions, Literacy};
use crate::error::SimulationError;
use crate::projection::{checked_years, SimulationResult, YearlySimulation};
use serde::{Deserialize, Serialize};

/// Runs simulations against a shared, immutable set of assumptions
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    assumptions: Assumptions,
}

impl ScenarioRunner {
    /// Create runner with the reference assumptions
    pub fn new() -> Self {
        Self {
            assumptions: Assumptions::default_model(),
        }
    }

    /// Create runner with validated custom assumptions
    pub fn with_assumptions(assumptions: Assumptions) -> Result<Self, SimulationError> {
        assumptions.validate()?;
        Ok(Self { assumptions })
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Simulate one fresh person
    pub fn run(&self, literacy: Literacy, years: u32) -> SimulationResult {
        let mut simulation = YearlySimulation::for_literacy(literacy, &self.assumptions);
        let trajectory = simulation.run(years);
        simulation.into_result(trajectory)
    }

    /// Simulate both profiles side by side
    ///
    /// The two runs share nothing, so they are executed in parallel.
    pub fn compare(&self, years: u32) -> Comparison {
        let (literate, not_literate) = rayon::join(
            || self.run(Literacy::Literate, years),
            || self.run(Literacy::NotLiterate, years),
        );
        Comparison {
            years,
            literate,
            not_literate,
        }
    }

    /// Like [`compare`](Self::compare), for a signed year count
    pub fn compare_checked(&self, years: i64) -> Result<Comparison, SimulationError> {
        Ok(self.compare(checked_years(years)?))
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Completed FL and NFL runs over the same horizon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    pub years: u32,
    pub literate: SimulationResult,
    pub not_literate: SimulationResult,
}

impl Comparison {
    pub fn extra_debt_paid_by_not_literate(&self) -> f64 {
        self.not_literate.summary.total_debt_paid - self.literate.summary.total_debt_paid
    }

    pub fn extra_years_in_debt_for_not_literate(&self) -> i64 {
        i64::from(self.not_literate.summary.years_in_debt)
            - i64::from(self.literate.summary.years_in_debt)
    }

    pub fn wealth_advantage_of_literate(&self) -> i64 {
        self.literate.final_wealth() - self.not_literate.final_wealth()
    }

    /// Wealth of both people per year index, aligned for charting
    pub fn aligned_trajectories(&self) -> impl Iterator<Item = (usize, i64, i64)> + '_ {
        self.literate
            .wealth_trajectory
            .iter()
            .zip(&self.not_literate.wealth_trajectory)
            .enumerate()
            .map(|(year, (&fl, &nfl))| (year, fl, nfl))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_reference_model() {
        let runner = ScenarioRunner::new();
        let comparison = runner.compare(40);

        assert_eq!(comparison.literate.wealth_trajectory.len(), 41);
        assert_eq!(comparison.not_literate.wealth_trajectory.len(), 41);
        assert!(comparison.wealth_advantage_of_literate() > 0);
        assert!(comparison.extra_debt_paid_by_not_literate() > 0.0);
        assert_eq!(comparison.extra_years_in_debt_for_not_literate(), 0);
        assert_eq!(comparison.aligned_trajectories().count(), 41);
    }

    #[test]
    fn test_runs_are_independent() {
        let runner = ScenarioRunner::new();
        let a = runner.run(Literacy::Literate, 10);
        let b = runner.run(Literacy::Literate, 10);
        assert_eq!(a.wealth_trajectory, b.wealth_trajectory);
    }

    #[test]
    fn test_custom_assumptions_change_outcome() {
        let mut assumptions = Assumptions::default_model();
        assumptions.income.annual_salary = 80_000.0;
        let richer = ScenarioRunner::with_assumptions(assumptions).unwrap();

        let base = ScenarioRunner::new().run(Literacy::NotLiterate, 1);
        let raised = richer.run(Literacy::NotLiterate, 1);
        assert_eq!(base.final_wealth(), -9_807);
        assert_eq!(raised.final_wealth(), 735);
    }

    #[test]
    fn test_early_purchase_books_loan_without_house_asset() {
        let mut assumptions = Assumptions::default_model();
        assumptions.income.annual_salary = 80_000.0;
        let richer = ScenarioRunner::with_assumptions(assumptions).unwrap();

        let result = richer.run(Literacy::NotLiterate, 5);
        assert_eq!(
            result.wealth_trajectory,
            vec![-25_100, 735, -147_567, -118_178, -88_017, -57_163]
        );
        assert_eq!(result.summary.house_purchase_year, Some(2));
        assert_eq!(result.summary.years_rented, 2);
    }

    #[test]
    fn test_invalid_assumptions_rejected() {
        let mut assumptions = Assumptions::default_model();
        assumptions.debt.min_payment_pct = -0.1;
        assert!(ScenarioRunner::with_assumptions(assumptions).is_err());
    }

    #[test]
    fn test_compare_checked() {
        let runner = ScenarioRunner::new();
        assert!(runner.compare_checked(-5).is_err());
        assert_eq!(runner.compare_checked(0).unwrap().literate.wealth_trajectory, vec![-25_100]);
    }
}
