//! End-of-day tick feed records.

use serde::{Deserialize, Serialize};

use crate::{TimestampError, TimestampPolicy, decode_packed_timestamp};

/// A single OHLCV tick from the end-of-day feed.
///
/// `date` arrives as a packed `YYMMDDmmmm` value and holds Unix epoch
/// milliseconds once [`EodTicks::decode_timeline`] has run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tick {
    /// Packed timestamp, or epoch milliseconds after decoding.
    #[serde(rename = "d")]
    pub date: i64,
    /// Opening price.
    #[serde(rename = "o")]
    pub open: f32,
    /// Highest price.
    #[serde(rename = "h")]
    pub high: f32,
    /// Lowest price.
    #[serde(rename = "l")]
    pub low: f32,
    /// Closing price.
    #[serde(rename = "c")]
    pub close: f32,
    /// Traded volume.
    #[serde(rename = "v")]
    pub volume: u64,
}

impl Tick {
    /// Creates a new tick.
    #[must_use]
    pub const fn new(date: i64, open: f32, high: f32, low: f32, close: f32, volume: u64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Tick history of one instrument as served by the feed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EodTicks {
    /// Instrument display name.
    #[serde(rename = "Name")]
    pub name: String,
    /// Feed symbol identifier.
    #[serde(rename = "SymbolId")]
    pub symbol_id: String,
    /// Feed period code.
    #[serde(rename = "Xperiod")]
    pub period: i64,
    /// Snapshot from three sessions ago.
    #[serde(rename = "qv")]
    pub three_days_ago: Tick,
    /// Snapshot of the current session.
    #[serde(rename = "qd")]
    pub current_day: Tick,
    /// Ticks in feed order.
    #[serde(rename = "QuoteTab")]
    pub timeline: Vec<Tick>,
}

impl EodTicks {
    /// Replaces the packed date of every timeline tick by epoch milliseconds.
    ///
    /// With [`TimestampPolicy::Lenient`] a tick whose date does not decode
    /// keeps its packed value and a warning is logged. Returns the number of
    /// ticks left undecoded.
    ///
    /// # Errors
    ///
    /// With [`TimestampPolicy::Strict`], returns the first decode failure and
    /// leaves the timeline untouched.
    pub fn decode_timeline(&mut self, policy: TimestampPolicy) -> Result<usize, TimestampError> {
        match policy {
            TimestampPolicy::Strict => {
                let decoded = self
                    .timeline
                    .iter()
                    .map(|tick| decode_packed_timestamp(tick.date))
                    .collect::<Result<Vec<_>, _>>()?;
                for (tick, millis) in self.timeline.iter_mut().zip(decoded) {
                    tick.date = millis;
                }
                Ok(0)
            }
            TimestampPolicy::Lenient => {
                let mut skipped = 0;
                for tick in &mut self.timeline {
                    match decode_packed_timestamp(tick.date) {
                        Ok(millis) => tick.date = millis,
                        Err(e) => {
                            log::warn!("Couldn't parse timestamp of {}: {e}", self.symbol_id);
                            skipped += 1;
                        }
                    }
                }
                Ok(skipped)
            }
        }
    }
}

/// Envelope wrapping [`EodTicks`] in feed responses.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EodTicksEnvelope {
    /// The wrapped tick history.
    #[serde(rename = "d")]
    pub content: EodTicks,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    const FEED: &str = r#"{"d":{
        "Name":"XYZ Corp","SymbolId":"1rPXYZ","Xperiod":0,
        "qv":{"d":2312290000,"o":10.0,"h":11.0,"l":9.5,"c":10.5,"v":100},
        "qd":{"d":2401020000,"o":10.5,"h":12.0,"l":10.0,"c":11.5,"v":250},
        "QuoteTab":[
            {"d":2401011230,"o":10.5,"h":10.75,"l":10.25,"c":10.5,"v":42},
            {"d":12345,"o":11.0,"h":11.0,"l":11.0,"c":11.0,"v":1}
        ]}}"#;

    fn local_millis(y: i32, m: u32, d: u32, h: u32, min: u32) -> i64 {
        Local
            .with_ymd_and_hms(y, m, d, h, min, 0)
            .earliest()
            .unwrap()
            .timestamp_millis()
    }

    #[test]
    fn test_envelope_deserialize() {
        let envelope: EodTicksEnvelope = serde_json::from_str(FEED).unwrap();
        let ticks = envelope.content;
        assert_eq!(ticks.name, "XYZ Corp");
        assert_eq!(ticks.symbol_id, "1rPXYZ");
        assert_eq!(ticks.timeline.len(), 2);
        assert_eq!(ticks.current_day.volume, 250);
        assert_eq!(ticks.timeline[0].high, 10.75);
    }

    #[test]
    fn test_lenient_decode_keeps_bad_value() {
        let mut ticks = serde_json::from_str::<EodTicksEnvelope>(FEED).unwrap().content;
        let skipped = ticks.decode_timeline(TimestampPolicy::Lenient).unwrap();

        assert_eq!(skipped, 1);
        assert_eq!(ticks.timeline[0].date, local_millis(2024, 1, 1, 20, 30));
        assert_eq!(ticks.timeline[1].date, 12345);
        // Snapshots are never decoded.
        assert_eq!(ticks.current_day.date, 2401020000);
    }

    #[test]
    fn test_strict_decode_leaves_timeline_untouched() {
        let mut ticks = serde_json::from_str::<EodTicksEnvelope>(FEED).unwrap().content;
        let err = ticks.decode_timeline(TimestampPolicy::Strict).unwrap_err();

        assert!(matches!(err, TimestampError::Width { value: 12345, digits: 5 }));
        assert_eq!(ticks.timeline[0].date, 2401011230);
    }

    #[test]
    fn test_overflowing_day_is_decoded_not_skipped() {
        let mut ticks = EodTicks {
            timeline: vec![Tick::new(2402300930, 1.0, 1.0, 1.0, 1.0, 1)],
            ..Default::default()
        };

        let skipped = ticks.decode_timeline(TimestampPolicy::Strict).unwrap();

        assert_eq!(skipped, 0);
        assert_eq!(ticks.timeline[0].date, local_millis(2024, 3, 1, 15, 30));
    }

    #[test]
    fn test_missing_fields_default() {
        let envelope: EodTicksEnvelope =
            serde_json::from_str(r#"{"d":{"Name":"Empty","QuoteTab":[{"d":2401011230}]}}"#)
                .unwrap();
        assert_eq!(envelope.content.timeline[0].volume, 0);
        assert!(envelope.content.symbol_id.is_empty());
    }
}
