//! Temporal filtering of transactions against the q/p/k rule sets.
//!
//! Synthesize-mode canonicalization with per-record rejection, then the
//! temporal engine and a k-membership pass. Transactions whose adjusted
//! remanent ends up at or below zero are dropped without a report entry.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::core::Error;
use crate::core::money::{decimal_from_f64, money};
use crate::engine::{self, kperiods};
use crate::periods::Period;
use crate::transactions::{self, CanonicalMode, RawTransaction};

const NEGATIVE_AMOUNT: &str = "Negative amounts are not allowed";
const DUPLICATE: &str = "Duplicate transaction";
const OUTSIDE_K: &str = "Transaction is outside all k evaluation ranges.";

/// A transaction that passed temporal filtering. Its `remanent` is the
/// adjusted value.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredTransaction {
    /// Normalized timestamp.
    pub date: String,
    /// Submitted amount.
    pub amount: Decimal,
    /// Ceiling.
    pub ceiling: Decimal,
    /// Adjusted remanent.
    pub remanent: Decimal,
    /// Always true for emitted records; carried for the response shape.
    pub in_k_period: bool,
}

/// A filter input that was rejected, with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterRejection {
    /// Timestamp as submitted (normalized when canonicalization succeeded).
    pub date: String,
    /// Submitted amount.
    pub amount: Decimal,
    /// Why the record was rejected.
    pub message: String,
}

/// Filter outcome: canonicalization rejections in encounter order, then
/// membership rejections in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterReport {
    /// Transactions inside a k window with a positive adjusted remanent.
    pub valid: Vec<FilteredTransaction>,
    /// Rejected inputs with reasons.
    pub invalid: Vec<FilterRejection>,
}

fn rejection(date: String, amount: Decimal, message: &str) -> FilterRejection {
    FilterRejection {
        date,
        amount: money(amount),
        message: message.to_string(),
    }
}

/// Run the filter pipeline.
#[must_use]
pub fn filter_transactions(
    raw_transactions: &[RawTransaction],
    q_periods: &[Period],
    p_periods: &[Period],
    k_periods: &[Period],
) -> FilterReport {
    let mut canonical = Vec::with_capacity(raw_transactions.len());
    let mut invalid = Vec::new();
    let mut seen = HashSet::new();

    for raw in raw_transactions {
        match transactions::canonicalize(raw, CanonicalMode::Synthesize) {
            Ok(tx) => {
                if seen.insert(tx.date.clone()) {
                    canonical.push(tx);
                } else {
                    invalid.push(rejection(tx.date.clone(), tx.amount, DUPLICATE));
                }
            }
            Err(err) => {
                let message = match err {
                    Error::NegativeAmount => NEGATIVE_AMOUNT.to_string(),
                    other => other.to_string(),
                };
                let date = raw
                    .date
                    .clone()
                    .or_else(|| raw.timestamp.clone())
                    .unwrap_or_default();
                let amount = raw.amount.map(decimal_from_f64).unwrap_or_default();
                invalid.push(rejection(date, amount, &message));
            }
        }
    }

    let order = engine::apply_temporal_rules(&mut canonical, q_periods, p_periods);
    let membership = kperiods::membership_in_k(&canonical, k_periods, &order);

    let mut valid = Vec::new();
    for (tx, &in_k) in canonical.iter().zip(&membership) {
        let adjusted = money(tx.effective_remanent());
        if !in_k {
            invalid.push(rejection(tx.date.clone(), tx.amount, OUTSIDE_K));
            continue;
        }
        if adjusted <= Decimal::ZERO {
            continue;
        }
        valid.push(FilteredTransaction {
            date: tx.date.clone(),
            amount: tx.amount,
            ceiling: tx.ceiling,
            remanent: adjusted,
            in_k_period: true,
        });
    }

    FilterReport { valid, invalid }
}
