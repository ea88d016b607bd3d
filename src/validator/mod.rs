//! Budget and structural validation of client-supplied transactions.
//!
//! Strict-mode canonicalization followed by ceiling/remanent consistency
//! checks and a cumulative-investment cap walk. Rejections are per-record
//! data in the report, not errors; only a negative wage or limit fails the
//! whole request.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::core::Error;
use crate::core::money::{decimal_from_f64, money, next_multiple_of_100, value_limit};
use crate::transactions::{self, CanonicalMode, RawTransaction, Transaction};

const DUPLICATE_TIMESTAMP: &str = "Duplicate transaction timestamp.";
const BAD_CEILING: &str = "Invalid ceiling value for the amount. Expected next multiple of 100.";
const BAD_REMANENT: &str = "Invalid remanent value. Expected ceiling - amount.";
const REMANENT_ABOVE_LIMIT: &str = "Remanent exceeds challenge constraints (< 500000 required).";
const CAP_EXCEEDED: &str = "Cumulative remanent exceeds maximum allowed investment.";

/// A transaction the validator rejected, with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedTransaction {
    /// Timestamp as submitted (normalized when canonicalization succeeded).
    pub date: String,
    /// Submitted amount.
    pub amount: Decimal,
    /// Submitted ceiling.
    pub ceiling: Decimal,
    /// Submitted remanent.
    pub remanent: Decimal,
    /// Why the record was rejected.
    pub message: String,
}

/// Validation outcome, each list in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    /// Transactions that passed every check and fit under the cap.
    pub valid: Vec<Transaction>,
    /// Structural and cap rejections.
    pub invalid: Vec<RejectedTransaction>,
    /// Records whose timestamp was already seen (first occurrence wins).
    pub duplicates: Vec<RejectedTransaction>,
}

fn rejected_raw(raw: &RawTransaction, message: impl Into<String>) -> RejectedTransaction {
    RejectedTransaction {
        date: raw
            .date
            .clone()
            .or_else(|| raw.timestamp.clone())
            .unwrap_or_default(),
        amount: money(raw.amount.map(decimal_from_f64).unwrap_or_default()),
        ceiling: money(raw.ceiling.map(decimal_from_f64).unwrap_or_default()),
        remanent: money(raw.remanent.map(decimal_from_f64).unwrap_or_default()),
        message: message.into(),
    }
}

fn rejected(tx: &Transaction, message: &str) -> RejectedTransaction {
    RejectedTransaction {
        date: tx.date.clone(),
        amount: tx.amount,
        ceiling: tx.ceiling,
        remanent: tx.remanent,
        message: message.to_string(),
    }
}

/// Validate a batch against structural constraints and the cumulative
/// investment cap (`max_investment`, defaulting to twelve monthly wages).
///
/// # Errors
///
/// [`Error::NegativeWage`] or [`Error::NegativeMaxInvestment`]; everything
/// else is reported per record.
pub fn validate_transactions(
    wage: f64,
    max_investment: Option<f64>,
    raw_transactions: &[RawTransaction],
) -> Result<ValidationReport, Error> {
    if wage < 0.0 {
        return Err(Error::NegativeWage);
    }
    let limit = money(
        max_investment
            .map(decimal_from_f64)
            .unwrap_or_else(|| decimal_from_f64(wage) * Decimal::from(12)),
    );
    if limit < Decimal::ZERO {
        return Err(Error::NegativeMaxInvestment);
    }

    let mut candidates = Vec::new();
    let mut invalid = Vec::new();
    let mut duplicates = Vec::new();
    let mut seen = HashSet::new();
    let tolerance = Decimal::new(1, 2);

    for raw in raw_transactions {
        let tx = match transactions::canonicalize(raw, CanonicalMode::Strict) {
            Ok(tx) => tx,
            Err(err) => {
                invalid.push(rejected_raw(raw, err.to_string()));
                continue;
            }
        };

        if !seen.insert(tx.date.clone()) {
            duplicates.push(rejected(&tx, DUPLICATE_TIMESTAMP));
            continue;
        }

        let expected_ceiling = next_multiple_of_100(tx.amount);
        let expected_remanent = money(expected_ceiling - tx.amount);
        if (tx.ceiling - expected_ceiling).abs() > tolerance {
            invalid.push(rejected(&tx, BAD_CEILING));
            continue;
        }
        if (tx.remanent - expected_remanent).abs() > tolerance {
            invalid.push(rejected(&tx, BAD_REMANENT));
            continue;
        }
        if tx.remanent > value_limit() {
            invalid.push(rejected(&tx, REMANENT_ABOVE_LIMIT));
            continue;
        }
        candidates.push(tx);
    }

    let mut running = Decimal::ZERO;
    let mut valid = Vec::with_capacity(candidates.len());
    for tx in candidates {
        if running + tx.remanent > limit {
            invalid.push(rejected(&tx, CAP_EXCEEDED));
            continue;
        }
        running += tx.remanent;
        valid.push(tx);
    }

    Ok(ValidationReport {
        valid,
        invalid,
        duplicates,
    })
}
