use chrono::{Datelike, NaiveDate};
use log::info;
use serde::{Deserialize, Serialize};

use crate::challenge::{Challenge, ChallengeError, ChallengeKind};
use crate::validate::{InvalidInput, Validate};

// salaries are spread over 30-day months
const DAYS_PER_MONTH: i64 = 30;
const VACATION_DAYS: f64 = 30.0;
const MONTHS_PER_YEAR: i64 = 12;
// a month counts once more than 15 of its days are worked
const PARTIAL_MONTH_ROUNDING: i64 = 14;

/// Input to [`BenefitsChallenge`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BenefitsInput {
    /// Monthly salary.
    pub salary: f64,
    /// First day of employment.
    pub hire_date: NaiveDate,
    /// Last day of employment.
    pub resignation_date: NaiveDate,
}

/// Output of [`BenefitsChallenge`], both values rounded to cents.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BenefitsOutput {
    /// Proportional vacation pay.
    pub vacation: f64,
    /// Proportional thirteenth salary.
    pub thirteenth_salary: f64,
}

impl Validate for BenefitsInput {
    fn validate(&self) -> Result<(), InvalidInput> {
        if !(self.salary.is_finite() && self.salary > 0.0) {
            return Err(InvalidInput::NonPositiveSalary(self.salary));
        }
        if self.resignation_date < self.hire_date {
            return Err(InvalidInput::ResignationBeforeHire {
                hire: self.hire_date,
                resignation: self.resignation_date,
            });
        }

        Ok(())
    }
}

/// Proportional vacation pay and thirteenth salary owed on resignation, under CLT rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct BenefitsChallenge;

/// Rounds to two decimals from the exact binary value, ties to even, so `1.115` (stored just below) gives `1.11`.
fn round_cents(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

#[inline]
fn is_leap(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// `month`/`day` in `year`, with 29 February falling back to 28 February outside leap years.
fn anniversary_in(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).or_else(|| NaiveDate::from_ymd_opt(year, month, day - 1))
}

/// The most recent anniversary of `hire` on or before `resignation`.
fn last_anniversary(hire: NaiveDate, resignation: NaiveDate) -> Option<NaiveDate> {
    let year = if hire <= resignation { resignation.year() } else { hire.year() };
    let anniversary = anniversary_in(year, hire.month(), hire.day())?;

    if anniversary > resignation {
        anniversary_in(anniversary.year() - 1, hire.month(), hire.day())
    } else {
        Some(anniversary)
    }
}

impl BenefitsChallenge {
    fn vacation(&self, input: &BenefitsInput) -> f64 {
        let daily_salary = input.salary / DAYS_PER_MONTH as f64;
        let Some(anniversary) = last_anniversary(input.hire_date, input.resignation_date) else {
            return 0.0;
        };

        let days_worked = (input.resignation_date - anniversary).num_days();
        let year_days = if is_leap(anniversary.year()) && anniversary.month() <= 2 { 366 } else { 365 };
        let proportion = (days_worked as f64 / year_days as f64).min(1.0);

        round_cents(VACATION_DAYS * proportion * daily_salary)
    }

    fn thirteenth_salary(&self, input: &BenefitsInput) -> f64 {
        let resignation = input.resignation_date;
        let Some(year_start) = NaiveDate::from_ymd_opt(resignation.year(), 1, 1) else {
            return 0.0;
        };

        // the day of resignation counts as worked
        let days_worked = (resignation - year_start).num_days() + 1;
        let months_worked = ((days_worked + PARTIAL_MONTH_ROUNDING) / DAYS_PER_MONTH).min(MONTHS_PER_YEAR);

        round_cents(input.salary * months_worked as f64 / MONTHS_PER_YEAR as f64)
    }
}

impl Challenge for BenefitsChallenge {
    type Input = BenefitsInput;
    type Output = BenefitsOutput;

    fn kind(&self) -> ChallengeKind {
        ChallengeKind::Benefits
    }

    fn execute(&self, input: &BenefitsInput) -> Result<BenefitsOutput, ChallengeError> {
        info!(
            "benefits challenge: salary={}, hire_date={}, resignation_date={}",
            input.salary, input.hire_date, input.resignation_date,
        );

        Ok(BenefitsOutput {
            vacation: self.vacation(input),
            thirteenth_salary: self.thirteenth_salary(input),
        })
    }
}
