//! Account state of a single simulated person and its yearly transitions

use crate::assumptions::{Assumptions, DebtAssumptions, HousingAssumptions, Literacy, LiteracyProfile};
use serde::{Deserialize, Serialize};

const MONTHS_PER_YEAR: u32 = 12;

/// One person's balances, mutated in place once per simulated year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialActor {
    literacy: Literacy,

    /// Rate table resolved from `literacy` at construction
    profile: LiteracyProfile,
    housing: HousingAssumptions,
    debt_terms: DebtAssumptions,

    /// Grows at the profile's savings rate
    pub(crate) savings: f64,

    /// No floor: rent and payments may push it negative
    pub(crate) checking: f64,

    /// Revolving consumer debt
    pub(crate) debt: f64,

    /// Mortgage principal outstanding; nonzero only once `has_house` is set
    pub(crate) loan: f64,

    pub(crate) has_house: bool,
}

impl FinancialActor {
    /// Create a person with the starting balances from `assumptions`
    pub fn new(literacy: Literacy, assumptions: &Assumptions) -> Self {
        Self {
            literacy,
            profile: *assumptions.profile(literacy),
            housing: assumptions.housing,
            debt_terms: assumptions.debt,
            savings: assumptions.initial.savings,
            checking: assumptions.initial.checking,
            debt: assumptions.initial.debt,
            loan: 0.0,
            has_house: false,
        }
    }

    /// Create a person under the reference parameter table
    pub fn with_defaults(is_literate: bool) -> Self {
        Self::new(Literacy::from_flag(is_literate), &Assumptions::default_model())
    }

    pub fn literacy(&self) -> Literacy {
        self.literacy
    }

    pub fn profile(&self) -> &LiteracyProfile {
        &self.profile
    }

    pub fn savings(&self) -> f64 {
        self.savings
    }

    pub fn checking(&self) -> f64 {
        self.checking
    }

    pub fn debt(&self) -> f64 {
        self.debt
    }

    pub fn loan(&self) -> f64 {
        self.loan
    }

    pub fn has_house(&self) -> bool {
        self.has_house
    }

    /// Apply one year of savings growth
    pub fn accrue_savings_interest(&mut self) {
        self.savings *= 1.0 + self.profile.savings_rate;
    }

    /// Make up to twelve monthly debt payments, then charge annual interest on
    /// whatever remains. Returns the total paid; the interest is not counted.
    pub fn service_debt_for_year(&mut self) -> f64 {
        let mut total_payment = 0.0;

        for _ in 0..MONTHS_PER_YEAR {
            if self.debt <= 0.0 {
                break;
            }

            let min_payment = self.debt * self.debt_terms.min_payment_pct;
            let payment = (min_payment + self.profile.extra_debt_payment).min(self.debt);

            self.debt -= payment;
            self.checking -= payment;
            total_payment += payment;
        }

        if self.debt > 0.0 {
            self.debt *= 1.0 + self.debt_terms.annual_interest_rate;
        }

        total_payment
    }

    /// Pay a full year of rent out of checking; returns the rent paid
    pub fn debit_annual_rent(&mut self) -> f64 {
        let rent = self.housing.annual_rent();
        self.checking -= rent;
        rent
    }

    pub fn down_payment(&self) -> f64 {
        self.profile.down_payment(self.housing.house_cost)
    }

    pub fn can_afford_down_payment(&self) -> bool {
        self.checking >= self.down_payment()
    }

    /// Buy the house: pay the down payment and finance the rest.
    ///
    /// Not idempotent; callers check [`has_house`](Self::has_house) first.
    pub fn purchase_house(&mut self) {
        let down_payment = self.down_payment();
        self.checking -= down_payment;
        self.loan = self.housing.house_cost - down_payment;
        self.has_house = true;
    }

    /// Level monthly payment that retires `loan` over a full mortgage term
    /// at the profile's rate.
    pub fn monthly_mortgage_payment(&self) -> f64 {
        let n = self.housing.mortgage_months() as f64;
        let i = self.monthly_mortgage_rate();
        if i == 0.0 {
            return self.loan / n;
        }
        let growth = (1.0 + i).powf(n);
        let discount_factor = (growth - 1.0) / (i * growth);
        self.loan / discount_factor
    }

    fn monthly_mortgage_rate(&self) -> f64 {
        self.profile.mortgage_rate / MONTHS_PER_YEAR as f64
    }

    /// Make twelve monthly mortgage payments out of checking.
    ///
    /// The payment is re-derived from the balance outstanding at the start of
    /// each year over a fresh full term. Returns the amount debited.
    pub fn service_mortgage_for_year(&mut self) -> f64 {
        if !self.has_house || self.loan <= 0.0 {
            return 0.0;
        }

        let i = self.monthly_mortgage_rate();
        let mut monthly_payment = self.monthly_mortgage_payment();
        let mut total_paid = 0.0;

        for _ in 0..MONTHS_PER_YEAR {
            if self.loan <= 0.0 {
                break;
            }

            let interest = self.loan * i;
            let mut principal = monthly_payment - interest;
            if principal > self.loan {
                principal = self.loan;
                monthly_payment = principal + interest;
            }

            self.loan -= principal;
            self.checking -= monthly_payment;
            total_paid += monthly_payment;
        }

        total_paid
    }

    /// Net worth rounded to whole currency units
    pub fn compute_wealth(&self) -> i64 {
        (self.savings + self.checking - self.debt - self.loan).round() as i64
    }

    pub fn in_debt(&self) -> bool {
        self.debt > 0.0 || self.loan > 0.0
    }
}
