//! Return projections over k evaluation windows.
//!
//! The returns pipeline is a projection, not a validation report: invalid
//! and duplicate inputs are silently dropped (with one warning log counting
//! them) and only an entirely empty batch fails the request.

mod finance;

pub use finance::{
    Instrument, compute_real_return, compute_tax, nps_tax_benefit, years_to_horizon,
};

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::core::Error;
use crate::core::money::{decimal_from_f64, money};
use crate::engine::{self, kperiods};
use crate::periods::Period;
use crate::transactions::{self, CanonicalMode, RawTransaction, Transaction};

/// Projected savings and returns for one k window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowProjection {
    /// Window start timestamp.
    pub start: String,
    /// Window end timestamp.
    pub end: String,
    /// Adjusted savings accumulated inside the window.
    pub amount: Decimal,
    /// Inflation-adjusted profit over the horizon.
    pub profits: Decimal,
    /// NPS tax benefit (zero for the index instrument).
    pub tax_benefit: Decimal,
}

/// Full outcome of a returns run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnsProjection {
    /// Sum of canonical transaction amounts.
    pub total_amount: Decimal,
    /// Sum of canonical transaction ceilings.
    pub total_ceiling: Decimal,
    /// Per-window projections, in k input order.
    pub savings_by_dates: Vec<WindowProjection>,
}

fn normalize_inflation(inflation: f64) -> Result<Decimal, Error> {
    if inflation < 0.0 {
        return Err(Error::NegativeInflation);
    }
    let value = decimal_from_f64(inflation);
    // Accept both 5.5 (percent) and 0.055 (fraction).
    Ok(if value > Decimal::ONE {
        value / Decimal::ONE_HUNDRED
    } else {
        value
    })
}

// Only the timestamp and amount survive into canonicalization; supplied
// ceilings and remanents are re-derived.
fn prepare_transactions(raw_transactions: &[RawTransaction]) -> (Vec<Transaction>, usize, usize) {
    let mut canonical = Vec::with_capacity(raw_transactions.len());
    let mut seen = HashSet::new();
    let mut invalid_count = 0;
    let mut duplicate_count = 0;

    for raw in raw_transactions {
        let trimmed = RawTransaction {
            date: raw.date.clone(),
            timestamp: raw.timestamp.clone(),
            amount: raw.amount,
            ceiling: None,
            remanent: None,
        };
        match transactions::canonicalize(&trimmed, CanonicalMode::Synthesize) {
            Ok(tx) => {
                if seen.insert(tx.date.clone()) {
                    canonical.push(tx);
                } else {
                    duplicate_count += 1;
                }
            }
            Err(_) => invalid_count += 1,
        }
    }
    (canonical, invalid_count, duplicate_count)
}

/// Run the returns pipeline.
///
/// # Errors
///
/// Negative age, wage, or inflation, or a batch with no usable transaction.
#[allow(clippy::too_many_arguments)]
pub fn calculate_returns(
    instrument: Instrument,
    age: i32,
    wage: f64,
    inflation: f64,
    raw_transactions: &[RawTransaction],
    q_periods: &[Period],
    p_periods: &[Period],
    k_periods: &[Period],
) -> Result<ReturnsProjection, Error> {
    if age < 0 {
        return Err(Error::NegativeAge);
    }
    if wage < 0.0 {
        return Err(Error::NegativeWage);
    }
    let inflation = normalize_inflation(inflation)?;

    let (mut canonical, invalid_count, duplicate_count) = prepare_transactions(raw_transactions);
    if invalid_count > 0 || duplicate_count > 0 {
        tracing::warn!(
            invalid = invalid_count,
            duplicate = duplicate_count,
            valid = canonical.len(),
            "returns input filtered"
        );
    }
    if canonical.is_empty() {
        return Err(Error::NoTransactionsForReturns);
    }

    let order = engine::apply_temporal_rules(&mut canonical, q_periods, p_periods);
    let savings = kperiods::aggregate_savings_by_k(&canonical, &order, k_periods);

    #[allow(clippy::cast_sign_loss)]
    let years = years_to_horizon(age as u32);
    let rate = instrument.annual_rate();
    let wage_decimal = decimal_from_f64(wage);

    let savings_by_dates = savings
        .into_iter()
        .map(|window| {
            let (_, _, profits) = compute_real_return(window.amount, rate, inflation, years);
            let tax_benefit = match instrument {
                Instrument::Nps => nps_tax_benefit(window.amount, wage_decimal),
                Instrument::Index => Decimal::ZERO,
            };
            WindowProjection {
                start: window.start,
                end: window.end,
                amount: window.amount,
                profits,
                tax_benefit: money(tax_benefit),
            }
        })
        .collect();

    let total_amount = money(canonical.iter().map(|tx| tx.amount).sum());
    let total_ceiling = money(canonical.iter().map(|tx| tx.ceiling).sum());
    Ok(ReturnsProjection {
        total_amount,
        total_ceiling,
        savings_by_dates,
    })
}
