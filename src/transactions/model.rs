use rust_decimal::Decimal;

/// A transaction as it arrives on the wire, before canonicalization.
///
/// `date` and `timestamp` are aliases; `date` wins when both are present.
#[derive(Debug, Clone, Default)]
pub struct RawTransaction {
    /// Timestamp string, preferred spelling.
    pub date: Option<String>,
    /// Timestamp string, legacy spelling.
    pub timestamp: Option<String>,
    /// Monetary value of the expense.
    pub amount: Option<f64>,
    /// Client-supplied ceiling, validated in strict mode.
    pub ceiling: Option<f64>,
    /// Client-supplied remanent, validated in strict mode.
    pub remanent: Option<f64>,
}

/// A canonical transaction.
///
/// Produced only by the canonicalizer; all money fields are two-decimal
/// exact decimals and `epoch` is derived from `date` interpreted as UTC.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Normalized timestamp string, second precision.
    pub date: String,
    /// UTC epoch seconds derived from `date`.
    pub epoch: i64,
    /// Submitted amount, `0 <= amount < 500000`.
    pub amount: Decimal,
    /// Smallest multiple of 100 at or above the amount (or the validated
    /// client-supplied value).
    pub ceiling: Decimal,
    /// `ceiling - amount`: the round-up savings contribution.
    pub remanent: Decimal,
    /// Remanent after q-override and p-extras; written by the temporal
    /// engine, absent before it runs.
    pub adjusted_remanent: Option<Decimal>,
}

impl Transaction {
    /// Savings contribution after temporal adjustment, falling back to the
    /// unadjusted remanent when the engine has not run.
    #[must_use]
    pub fn effective_remanent(&self) -> Decimal {
        self.adjusted_remanent.unwrap_or(self.remanent)
    }
}
