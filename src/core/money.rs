//! Exact-decimal money arithmetic.
//!
//! Every monetary value in the engine is a [`rust_decimal::Decimal`]; binary
//! floats exist only at the serde boundary. Rounding is half-even to two
//! places throughout, and the next-multiple-of-100 ceiling is computed on
//! exact decimals so boundary values (`250 -> 300`, `300 -> 300`) never drift.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Exclusive upper bound shared by amounts, q `fixed` and p `extra` values.
#[must_use]
pub fn value_limit() -> Decimal {
    Decimal::from(500_000)
}

/// Round to two decimal places, half-even.
#[must_use]
pub fn money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}

/// Smallest multiple of 100 that is `>= amount`.
///
/// Ceiling division on exact decimals: an amount already on a multiple of 100
/// maps to itself.
#[must_use]
pub fn next_multiple_of_100(amount: Decimal) -> Decimal {
    money((amount / Decimal::ONE_HUNDRED).ceil() * Decimal::ONE_HUNDRED)
}

/// Round-up savings for an amount: `next_multiple_of_100(amount) - amount`.
#[must_use]
pub fn remanent_from_amount(amount: Decimal) -> Decimal {
    money(next_multiple_of_100(amount) - amount)
}

/// Convert a wire f64 into an exact decimal.
///
/// Goes through a short string rendering to avoid binary-float precision
/// issues. Non-finite input maps to zero; values too large for the decimal
/// range saturate to `Decimal::MAX` so the range checks downstream reject
/// them.
#[must_use]
pub fn decimal_from_f64(value: f64) -> Decimal {
    if !value.is_finite() {
        return Decimal::ZERO;
    }
    let formatted = format!("{value:.4}");
    Decimal::from_str(&formatted).unwrap_or(if value < 0.0 {
        Decimal::MIN
    } else {
        Decimal::MAX
    })
}

/// Convert an exact decimal to the f64 emitted on the wire.
#[must_use]
pub fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}
