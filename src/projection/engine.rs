//! Yearly simulation driver

use super::cashflows::{FinalBalances, SimulationResult, SimulationSummary, YearRow};
use super::state::FinancialActor;
use crate::assumptions::{Assumptions, IncomeAssumptions, Literacy};
use crate::error::SimulationError;
use log::{debug, info, warn};

/// Horizon of the reference comparison
pub const DEFAULT_YEARS: u32 = 40;

/// Drives a [`FinancialActor`] through repeated annual transitions
#[derive(Debug, Clone)]
pub struct YearlySimulation {
    actor: FinancialActor,
    income: IncomeAssumptions,
    summary: SimulationSummary,
    rows: Vec<YearRow>,
    years_run: u32,
}

impl YearlySimulation {
    /// Create a driver for `actor`, with income terms from `assumptions`
    pub fn new(actor: FinancialActor, assumptions: &Assumptions) -> Self {
        Self {
            actor,
            income: assumptions.income,
            summary: SimulationSummary::default(),
            rows: Vec::new(),
            years_run: 0,
        }
    }

    /// Create a driver under the reference parameter table
    pub fn with_defaults(actor: FinancialActor) -> Self {
        Self::new(actor, &Assumptions::default_model())
    }

    /// Create a fresh person and a driver for them
    pub fn for_literacy(literacy: Literacy, assumptions: &Assumptions) -> Self {
        Self::new(FinancialActor::new(literacy, assumptions), assumptions)
    }

    pub fn actor(&self) -> &FinancialActor {
        &self.actor
    }

    pub fn summary(&self) -> &SimulationSummary {
        &self.summary
    }

    pub fn years_in_debt(&self) -> u32 {
        self.summary.years_in_debt
    }

    pub fn years_rented(&self) -> u32 {
        self.summary.years_rented
    }

    pub fn total_debt_paid(&self) -> f64 {
        self.summary.total_debt_paid
    }

    pub fn rows(&self) -> &[YearRow] {
        &self.rows
    }

    /// Run with a signed year count, rejecting negative values
    pub fn run_checked(&mut self, years: i64) -> Result<Vec<i64>, SimulationError> {
        Ok(self.run(checked_years(years)?))
    }

    /// Simulate `years` years and return the wealth trajectory
    /// (starting wealth followed by one value per year).
    pub fn run(&mut self, years: u32) -> Vec<i64> {
        info!(
            "simulating {} for {} years",
            self.actor.literacy().label(),
            years
        );

        let mut trajectory = Vec::with_capacity(years as usize + 1);
        trajectory.push(self.actor.compute_wealth());

        let mut overdraft_reported = self.actor.checking < 0.0;
        for _ in 0..years {
            self.years_run += 1;
            let row = self.simulate_year(self.years_run);

            if !overdraft_reported && row.checking < 0.0 {
                warn!(
                    "{}: checking overdrawn by {:.2} in year {}",
                    self.actor.literacy().label(),
                    -row.checking,
                    row.year
                );
                overdraft_reported = true;
            }

            trajectory.push(row.wealth);
            self.rows.push(row);
        }

        info!(
            "{} finished: wealth {}, {} years in debt, {} years rented",
            self.actor.literacy().label(),
            trajectory.last().copied().unwrap_or_default(),
            self.summary.years_in_debt,
            self.summary.years_rented
        );

        trajectory
    }

    /// Apply one year's transitions in their fixed order
    fn simulate_year(&mut self, year: u32) -> YearRow {
        let (savings_contribution, checking_contribution) = self.income.split_contribution();
        self.actor.savings += savings_contribution;
        self.actor.checking += checking_contribution;

        self.actor.accrue_savings_interest();

        let debt_paid = self.actor.service_debt_for_year();
        self.summary.total_debt_paid += debt_paid;

        if self.actor.in_debt() {
            self.summary.years_in_debt += 1;
        }

        let mut rent_paid = 0.0;
        let mut mortgage_paid = 0.0;
        let mut bought_house = false;

        if !self.actor.has_house() {
            self.summary.years_rented += 1;
            rent_paid = self.actor.debit_annual_rent();

            // A house bought this year starts its mortgage next year
            if self.actor.can_afford_down_payment() {
                self.actor.purchase_house();
                self.summary.house_purchase_year = Some(year);
                bought_house = true;
                info!(
                    "{} bought a house in year {} with a {:.2} loan",
                    self.actor.literacy().label(),
                    year,
                    self.actor.loan
                );
            }
        } else {
            mortgage_paid = self.actor.service_mortgage_for_year();
        }

        let row = YearRow {
            year,
            savings: self.actor.savings,
            checking: self.actor.checking,
            debt: self.actor.debt,
            loan: self.actor.loan,
            has_house: self.actor.has_house(),
            savings_contribution,
            checking_contribution,
            debt_paid,
            rent_paid,
            mortgage_paid,
            bought_house,
            wealth: self.actor.compute_wealth(),
        };

        debug!(
            "year {:>2}: savings={:.2} checking={:.2} debt={:.2} loan={:.2} wealth={}",
            row.year, row.savings, row.checking, row.debt, row.loan, row.wealth
        );

        row
    }

    /// Consume the driver and package everything it recorded
    pub fn into_result(self, wealth_trajectory: Vec<i64>) -> SimulationResult {
        let actor = &self.actor;
        SimulationResult {
            literacy: actor.literacy(),
            final_balances: FinalBalances {
                savings: actor.savings,
                checking: actor.checking,
                debt: actor.debt,
                loan: actor.loan,
                has_house: actor.has_house(),
            },
            wealth_trajectory,
            summary: self.summary,
            rows: self.rows,
        }
    }
}

/// Convert a signed year count into a simulation horizon
pub fn checked_years(years: i64) -> Result<u32, SimulationError> {
    if years < 0 {
        return Err(SimulationError::NegativeYears(years));
    }
    u32::try_from(years).map_err(|_| SimulationError::TooManyYears(years))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn simulation(literate: bool) -> YearlySimulation {
        YearlySimulation::with_defaults(FinancialActor::with_defaults(literate))
    }

    #[test]
    fn test_new_driver_counters_start_at_zero() {
        let sim = simulation(true);
        assert!(sim.actor().literacy().is_literate());
        assert_eq!(sim.years_in_debt(), 0);
        assert_eq!(sim.years_rented(), 0);
        assert_eq!(sim.total_debt_paid(), 0.0);

        let sim = simulation(false);
        assert!(!sim.actor().literacy().is_literate());
    }

    #[test]
    fn test_zero_years_returns_initial_wealth() {
        let mut sim = simulation(false);
        assert_eq!(sim.run(0), vec![-25_100]);
        assert!(sim.rows().is_empty());
    }

    #[test]
    fn test_negative_years_rejected() {
        let mut sim = simulation(true);
        assert!(matches!(
            sim.run_checked(-1),
            Err(SimulationError::NegativeYears(-1))
        ));
        assert_eq!(sim.run_checked(3).unwrap().len(), 4);
        assert!(matches!(
            checked_years(i64::MAX),
            Err(SimulationError::TooManyYears(_))
        ));
    }

    #[test]
    fn test_one_year() {
        let mut sim = simulation(true);
        let history = sim.run(1);
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], -25_100);
        assert_eq!(history[1], -8_770);

        let mut sim = simulation(false);
        assert_eq!(sim.run(1), vec![-25_100, -9_807]);
    }

    #[test]
    fn test_first_year_balances() {
        let mut sim = simulation(true);
        sim.run(1);
        let row = &sim.rows()[0];

        assert_relative_eq!(row.savings, 17_976.0, epsilon = 1e-6);
        assert_relative_eq!(row.checking, -1_868.4237535395932, epsilon = 1e-6);
        assert_relative_eq!(row.debt, 24_877.89149575248, epsilon = 1e-6);
        assert_eq!(row.rent_paid, 10_200.0);
        assert_eq!(row.mortgage_paid, 0.0);
        assert!(!row.bought_house);
        assert_eq!(sim.years_in_debt(), 1);
        assert_eq!(sim.years_rented(), 1);
        assert_relative_eq!(sim.total_debt_paid(), row.debt_paid);
    }

    #[test]
    fn test_trajectory_length() {
        let mut sim = simulation(true);
        assert_eq!(sim.run(5).len(), 6);
        assert_eq!(sim.rows().len(), 5);
    }

    #[test]
    fn test_house_bought_year_pays_no_mortgage() {
        let mut sim = simulation(false);
        sim.run(DEFAULT_YEARS);

        let purchase = sim.summary().house_purchase_year.unwrap();
        let row = &sim.rows()[purchase as usize - 1];
        assert!(row.bought_house);
        assert_eq!(row.mortgage_paid, 0.0);
        assert!(sim.rows()[purchase as usize].mortgage_paid > 0.0);
        assert_eq!(sim.years_rented(), purchase);
    }

    #[test]
    fn test_forty_year_reference_run() {
        let mut fl = simulation(true);
        let fl_history = fl.run(DEFAULT_YEARS);
        let mut nfl = simulation(false);
        let nfl_history = nfl.run(DEFAULT_YEARS);

        assert_eq!(fl_history.len(), 41);
        assert_eq!(fl_history[..4], [-25_100, -8_770, 9_192, 28_730]);
        assert_eq!(nfl_history[..4], [-25_100, -9_807, 6_307, 23_125]);
        assert!(fl_history[40] > nfl_history[40]);

        assert_eq!(fl.years_rented(), 11);
        assert_eq!(nfl.years_rented(), 7);
        assert_eq!(fl.years_in_debt(), 40);
        assert_eq!(nfl.years_in_debt(), 40);
        assert_relative_eq!(fl.total_debt_paid(), 51_714.56, epsilon = 0.01);
        assert_relative_eq!(nfl.total_debt_paid(), 54_652.70, epsilon = 0.01);
    }

    #[test]
    fn test_into_result() {
        let mut sim = simulation(true);
        let history = sim.run(3);
        let result = sim.into_result(history);

        assert_eq!(result.literacy, Literacy::Literate);
        assert_eq!(result.rows.len(), 3);
        assert_eq!(result.final_wealth(), result.rows[2].wealth);
        assert_eq!(result.final_balances.debt, result.rows[2].debt);
    }
}
