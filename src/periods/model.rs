use rust_decimal::Decimal;
use std::fmt;

/// Which of the three temporal rule families a period belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodKind {
    /// Override window: its `fixed` value replaces the base remanent.
    Q,
    /// Bonus window: its `extra` value is added on top.
    P,
    /// Evaluation window: aggregation range, no payload.
    K,
}

impl PeriodKind {
    /// Name of the kind-specific payload field, if the kind carries one.
    #[must_use]
    pub(crate) fn value_field(self) -> Option<&'static str> {
        match self {
            PeriodKind::Q => Some("fixed"),
            PeriodKind::P => Some("extra"),
            PeriodKind::K => None,
        }
    }
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PeriodKind::Q => "q",
            PeriodKind::P => "p",
            PeriodKind::K => "k",
        })
    }
}

/// A period as it arrives on the wire, before validation.
#[derive(Debug, Clone, Default)]
pub struct RawPeriod {
    /// Start timestamp string.
    pub start: Option<String>,
    /// End timestamp string.
    pub end: Option<String>,
    /// Q payload.
    pub fixed: Option<f64>,
    /// P payload.
    pub extra: Option<f64>,
}

/// A validated time interval with its kind-specific value.
///
/// `index` is the position in the client-supplied list; Q tie-breaking and
/// the ordering of k-windowed output both depend on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Period {
    /// Normalized start timestamp.
    pub start: String,
    /// Normalized end timestamp.
    pub end: String,
    /// Start of the interval in UTC epoch seconds.
    pub start_epoch: i64,
    /// End of the interval in UTC epoch seconds (inclusive).
    pub end_epoch: i64,
    /// Insertion order within the request.
    pub index: usize,
    /// `fixed` for Q, `extra` for P, zero for K.
    pub value: Decimal,
}
