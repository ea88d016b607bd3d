//! Transaction canonicalization and the parse pipeline.
//!
//! The canonicalizer is the only boundary between loosely typed wire records
//! and [`Transaction`]s; every pipeline goes through it. It does not detect
//! duplicates — pipelines that care keep their own seen-set keyed by the
//! normalized `date`.

mod model;

pub use model::{RawTransaction, Transaction};

use rust_decimal::Decimal;

use crate::core::Error;
use crate::core::money::{
    decimal_from_f64, money, next_multiple_of_100, remanent_from_amount, value_limit,
};
use crate::core::timestamp::parse_timestamp;

/// How the canonicalizer treats absent `ceiling`/`remanent` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanonicalMode {
    /// Derive missing ceiling/remanent from the amount (parse, filter and
    /// returns pipelines).
    Synthesize,
    /// Require both fields; the validator later checks them against the
    /// derived values.
    Strict,
}

/// Canonicalize one raw transaction.
///
/// # Errors
///
/// Fails on a missing or malformed timestamp, a missing amount, an amount
/// outside `[0, 500000)`, a ceiling below the amount, a negative remanent,
/// or (in strict mode) absent ceiling/remanent fields.
pub fn canonicalize(raw: &RawTransaction, mode: CanonicalMode) -> Result<Transaction, Error> {
    let stamp = raw
        .date
        .as_deref()
        .or(raw.timestamp.as_deref())
        .ok_or(Error::MissingTimestamp)?;
    let (date, epoch) = parse_timestamp(stamp)?;

    let amount = decimal_from_f64(raw.amount.ok_or(Error::MissingField("amount"))?);
    if amount < Decimal::ZERO {
        return Err(Error::NegativeAmount);
    }
    if amount >= value_limit() {
        return Err(Error::AmountAboveLimit);
    }

    let (ceiling, remanent) = match mode {
        CanonicalMode::Strict => (
            decimal_from_f64(raw.ceiling.ok_or(Error::MissingField("ceiling"))?),
            decimal_from_f64(raw.remanent.ok_or(Error::MissingField("remanent"))?),
        ),
        CanonicalMode::Synthesize => (
            raw.ceiling
                .map(decimal_from_f64)
                .unwrap_or_else(|| next_multiple_of_100(amount)),
            raw.remanent
                .map(decimal_from_f64)
                .unwrap_or_else(|| remanent_from_amount(amount)),
        ),
    };

    if ceiling < amount {
        return Err(Error::CeilingBelowAmount);
    }
    if remanent < Decimal::ZERO {
        return Err(Error::NegativeRemanent);
    }

    Ok(Transaction {
        date,
        epoch,
        amount: money(amount),
        ceiling: money(ceiling),
        remanent: money(remanent),
        adjusted_remanent: None,
    })
}

/// Canonical transactions plus batch totals, as produced by the parse
/// pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedBatch {
    /// Canonical transactions in input order.
    pub transactions: Vec<Transaction>,
    /// Sum of amounts.
    pub total_amount: Decimal,
    /// Sum of ceilings.
    pub total_ceiling: Decimal,
    /// Sum of remanents.
    pub total_remanent: Decimal,
}

/// Parse pipeline: canonicalize a batch of expenses, synthesizing ceilings
/// and remanents.
///
/// The whole batch fails on the first invalid expense; the parse surface is
/// all-or-nothing, unlike the per-record reporting pipelines.
///
/// # Errors
///
/// Any canonicalization failure, see [`canonicalize`].
pub fn build_transactions(expenses: &[RawTransaction]) -> Result<ParsedBatch, Error> {
    let mut transactions = Vec::with_capacity(expenses.len());
    for expense in expenses {
        transactions.push(canonicalize(expense, CanonicalMode::Synthesize)?);
    }

    let total_amount = money(transactions.iter().map(|tx| tx.amount).sum());
    let total_ceiling = money(transactions.iter().map(|tx| tx.ceiling).sum());
    let total_remanent = money(transactions.iter().map(|tx| tx.remanent).sum());
    Ok(ParsedBatch {
        transactions,
        total_amount,
        total_ceiling,
        total_remanent,
    })
}
