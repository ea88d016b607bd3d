//! Closed-form return projections and the tax schedule.
//!
//! All thresholds and rates are exact decimals; rounding to two places
//! happens only on the values handed back.

use rust_decimal::Decimal;

use crate::core::money::money;

/// Investment vehicle for return projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instrument {
    /// National Pension System: 7.11% nominal, tax-deductible.
    Nps,
    /// Index fund: 14.49% nominal, no tax benefit.
    Index,
}

impl Instrument {
    /// Nominal annual growth rate.
    #[must_use]
    pub fn annual_rate(self) -> Decimal {
        match self {
            Instrument::Nps => Decimal::new(711, 4),
            Instrument::Index => Decimal::new(1449, 4),
        }
    }
}

/// Years until the modeled investment horizon: up to age 60, with a
/// five-year floor once past it.
#[must_use]
pub fn years_to_horizon(age: u32) -> u32 {
    if age < 60 { 60 - age } else { 5 }
}

// Exact integer exponent; years stay small (<= 60) so repeated
// multiplication is fine and keeps us off the float pow path.
fn pow_years(base: Decimal, years: u32) -> Decimal {
    let mut acc = Decimal::ONE;
    for _ in 0..years {
        acc *= base;
    }
    acc
}

/// Nominal value, inflation-adjusted value, and profit of a lump investment
/// compounded over `years`. All three are two-decimal-rounded.
#[must_use]
pub fn compute_real_return(
    invested: Decimal,
    annual_rate: Decimal,
    inflation: Decimal,
    years: u32,
) -> (Decimal, Decimal, Decimal) {
    let nominal = invested * pow_years(Decimal::ONE + annual_rate, years);
    let real = nominal / pow_years(Decimal::ONE + inflation, years);
    (money(nominal), money(real), money(real - invested))
}

/// Tax due on an annual income under the five-slab schedule.
#[must_use]
pub fn compute_tax(annual_income: Decimal) -> Decimal {
    let income = annual_income.max(Decimal::ZERO);
    let slab1 = Decimal::from(700_000);
    let slab2 = Decimal::from(1_000_000);
    let slab3 = Decimal::from(1_200_000);
    let slab4 = Decimal::from(1_500_000);

    if income <= slab1 {
        return Decimal::ZERO;
    }
    if income <= slab2 {
        return money((income - slab1) * Decimal::new(10, 2));
    }
    if income <= slab3 {
        return money(Decimal::from(30_000) + (income - slab2) * Decimal::new(15, 2));
    }
    if income <= slab4 {
        return money(Decimal::from(60_000) + (income - slab3) * Decimal::new(20, 2));
    }
    money(Decimal::from(120_000) + (income - slab4) * Decimal::new(30, 2))
}

/// Tax saved by the NPS deduction for an invested amount and monthly wage.
///
/// The deduction is capped at 10% of annual income and at an absolute
/// 200000.
#[must_use]
pub fn nps_tax_benefit(invested: Decimal, monthly_wage: Decimal) -> Decimal {
    let annual_income = monthly_wage * Decimal::from(12);
    let deduction = invested
        .min(annual_income * Decimal::new(10, 2))
        .min(Decimal::from(200_000));
    money(compute_tax(annual_income) - compute_tax(annual_income - deduction))
}
