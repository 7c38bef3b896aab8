//! Packed `YYMMDDmmmm` timestamp decoding.

use chrono::{Local, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone};
use serde::{Deserialize, Serialize};

use crate::TimestampError;

/// Decimal width of a packed timestamp.
const PACKED_WIDTH: usize = 10;

/// What tick ingestion does with a packed timestamp that fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampPolicy {
    /// Log the failure and keep the packed value.
    #[default]
    Lenient,
    /// Reject the whole tick batch.
    Strict,
}

/// Decodes a packed `YYMMDDmmmm` timestamp into Unix epoch milliseconds.
///
/// The digit groups are a two-digit year offset from 2000, the month, the
/// day and the minute of the day. Groups past their natural range roll over
/// into the next unit, so 30 February is 1 March and minute 1500 is 01:00
/// the next day. The resulting wall-clock time is read in the local
/// timezone of the process; a time repeated by a DST change resolves to its
/// earlier instant and a time skipped by one is moved past the gap.
///
/// # Errors
///
/// Returns an error if the value is negative or is not exactly ten digits
/// wide.
///
/// # Example
///
/// ```
/// use chrono::{Local, TimeZone};
/// use histoquote_types::decode_packed_timestamp;
///
/// let millis = decode_packed_timestamp(2401011230).unwrap();
/// let expected = Local.with_ymd_and_hms(2024, 1, 1, 20, 30, 0).unwrap();
/// assert_eq!(millis, expected.timestamp_millis());
/// ```
pub fn decode_packed_timestamp(packed: i64) -> Result<i64, TimestampError> {
    if packed < 0 {
        return Err(TimestampError::Negative(packed));
    }

    let digits = packed.to_string();
    if digits.len() != PACKED_WIDTH {
        return Err(TimestampError::Width {
            value: packed,
            digits: digits.len(),
        });
    }

    // Width is fixed, so each group is a plain quotient/remainder.
    let years = packed / 100_000_000;
    let month = (packed / 1_000_000) % 100;
    let day = (packed / 10_000) % 100;
    let minute_of_day = packed % 10_000;

    // Counted from January 1970 so that month 0 stays a positive offset.
    // Ten digits keep the year within 2010..=2099.
    let months = (2000 + years - 1970) * 12 + month - 1;
    let date = NaiveDate::default() + Months::new(months as u32) + TimeDelta::days(day - 1);
    let naive = date.and_time(NaiveTime::MIN) + TimeDelta::minutes(minute_of_day);

    Ok(local_millis(naive))
}

/// Epoch milliseconds of a local wall-clock time.
///
/// A time skipped by a DST change moves forward one hour; a longer gap falls
/// back to the offset in force at the same UTC reading.
fn local_millis(naive: NaiveDateTime) -> i64 {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .or_else(|| {
            Local
                .from_local_datetime(&(naive + TimeDelta::hours(1)))
                .earliest()
        })
        .map_or_else(
            || {
                let offset = Local.offset_from_utc_datetime(&naive).local_minus_utc();
                naive.and_utc().timestamp_millis() - i64::from(offset) * 1000
            },
            |instant| instant.timestamp_millis(),
        )
}
