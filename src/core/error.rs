use thiserror::Error;

use crate::periods::PeriodKind;

/// Request-level validation failure.
///
/// Every variant's `Display` string is the message the HTTP surface returns
/// verbatim as the `detail` of a 400 response. Per-record rejections
/// (duplicates, cap overflow, out-of-range transactions) are *not* errors;
/// they are reported inside the 200 response body by the pipeline that found
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Timestamp must be a non-empty string.")]
    EmptyTimestamp,

    #[error("Invalid timestamp format. Expected 'YYYY-MM-DD HH:mm:ss' (or HH:mm).")]
    InvalidTimestamp,

    #[error("Transaction must include 'date' or 'timestamp'.")]
    MissingTimestamp,

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Amount cannot be negative.")]
    NegativeAmount,

    #[error("Amount must be < 500000 as per challenge constraints.")]
    AmountAboveLimit,

    #[error("Ceiling cannot be lower than amount.")]
    CeilingBelowAmount,

    #[error("Remanent cannot be negative.")]
    NegativeRemanent,

    #[error("{kind}[{index}] must include start and end.")]
    PeriodMissingBounds { kind: PeriodKind, index: usize },

    #[error("{kind}[{index}] start must be <= end.")]
    PeriodBoundsReversed { kind: PeriodKind, index: usize },

    #[error("{kind}[{index}] cannot span multiple years.")]
    PeriodSpansYears { kind: PeriodKind, index: usize },

    #[error("{kind}.{field} cannot be negative.")]
    PeriodValueNegative {
        kind: PeriodKind,
        field: &'static str,
    },

    #[error("{kind}.{field} must be < 500000 as per challenge constraints.")]
    PeriodValueAboveLimit {
        kind: PeriodKind,
        field: &'static str,
    },

    #[error("Wage cannot be negative.")]
    NegativeWage,

    #[error("Age cannot be negative.")]
    NegativeAge,

    #[error("Inflation cannot be negative.")]
    NegativeInflation,

    #[error("Maximum investment cannot be negative.")]
    NegativeMaxInvestment,

    #[error("No valid transactions available for returns calculation.")]
    NoTransactionsForReturns,
}
