//! Timestamp codec.
//!
//! Accepts `YYYY-MM-DD HH:MM` (16 chars) or `YYYY-MM-DD HH:MM:SS` (19 chars),
//! normalizes to the 19-char form, and derives integer UTC epoch seconds. The
//! codec is pure; the same input always yields the same pair.

use chrono::NaiveDate;

use crate::core::error::Error;

fn component<T: std::str::FromStr>(text: &str) -> Result<T, Error> {
    text.parse().map_err(|_| Error::InvalidTimestamp)
}

/// Parse a timestamp string into its normalized form and UTC epoch seconds.
///
/// # Errors
///
/// [`Error::EmptyTimestamp`] for blank input; [`Error::InvalidTimestamp`] for
/// a wrong length, wrong separators, non-integer components, or a
/// date-time that is not a real calendar instant (Feb 31, hour 25, ...).
pub fn parse_timestamp(value: &str) -> Result<(String, i64), Error> {
    let cleaned = value.trim();
    if cleaned.is_empty() {
        return Err(Error::EmptyTimestamp);
    }

    let bytes = cleaned.as_bytes();
    if bytes.len() != 16 && bytes.len() != 19 {
        return Err(Error::InvalidTimestamp);
    }
    if bytes[4] != b'-'
        || bytes[7] != b'-'
        || bytes[10] != b' '
        || bytes[13] != b':'
        || (bytes.len() == 19 && bytes[16] != b':')
    {
        return Err(Error::InvalidTimestamp);
    }

    // Separator positions are verified ASCII, so these slices sit on char
    // boundaries even for garbage multi-byte input.
    let year: i32 = component(&cleaned[0..4])?;
    let month: u32 = component(&cleaned[5..7])?;
    let day: u32 = component(&cleaned[8..10])?;
    let hour: u32 = component(&cleaned[11..13])?;
    let minute: u32 = component(&cleaned[14..16])?;
    let second: u32 = if cleaned.len() == 19 {
        component(&cleaned[17..19])?
    } else {
        0
    };

    let instant = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .ok_or(Error::InvalidTimestamp)?;

    let normalized = if cleaned.len() == 19 {
        cleaned.to_string()
    } else {
        format!("{cleaned}:00")
    };
    Ok((normalized, instant.and_utc().timestamp()))
}
