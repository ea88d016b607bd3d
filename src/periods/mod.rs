//! Validation and materialization of q/p/k interval lists.

mod model;

pub use model::{Period, PeriodKind, RawPeriod};

use rust_decimal::Decimal;

use crate::core::Error;
use crate::core::money::{decimal_from_f64, money, value_limit};
use crate::core::timestamp::parse_timestamp;

fn payload_value(raw: &RawPeriod, kind: PeriodKind) -> Result<Decimal, Error> {
    let Some(field) = kind.value_field() else {
        return Ok(Decimal::ZERO);
    };
    let supplied = match kind {
        PeriodKind::Q => raw.fixed,
        PeriodKind::P => raw.extra,
        PeriodKind::K => None,
    };
    let value = decimal_from_f64(supplied.ok_or(Error::MissingField(field))?);
    if value < Decimal::ZERO {
        return Err(Error::PeriodValueNegative { kind, field });
    }
    if value >= value_limit() {
        return Err(Error::PeriodValueAboveLimit { kind, field });
    }
    Ok(money(value))
}

/// Validate and materialize one kind of period list, preserving insertion
/// order in `index`.
///
/// # Errors
///
/// Fails on missing or malformed bounds, `start > end`, a K interval spanning
/// two calendar years, or a Q/P payload outside `[0, 500000)`.
pub fn build_periods(raw: &[RawPeriod], kind: PeriodKind) -> Result<Vec<Period>, Error> {
    let mut built = Vec::with_capacity(raw.len());
    for (index, period) in raw.iter().enumerate() {
        let (Some(start_raw), Some(end_raw)) = (&period.start, &period.end) else {
            return Err(Error::PeriodMissingBounds { kind, index });
        };

        let (start, start_epoch) = parse_timestamp(start_raw)?;
        let (end, end_epoch) = parse_timestamp(end_raw)?;
        if start_epoch > end_epoch {
            return Err(Error::PeriodBoundsReversed { kind, index });
        }
        if kind == PeriodKind::K && start[0..4] != end[0..4] {
            return Err(Error::PeriodSpansYears { kind, index });
        }

        built.push(Period {
            start,
            end,
            start_epoch,
            end_epoch,
            index,
            value: payload_value(period, kind)?,
        });
    }
    Ok(built)
}
