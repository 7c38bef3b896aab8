//! Aggregation request parameters and their allowed value sets.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::ValidationError;

/// `chrono` layout of the start date, day first (`02/01/2024` is 2 January).
pub const DATE_LAYOUT: &str = "%d/%m/%Y";

/// How far back from the start date the quote history reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum HistoryDuration {
    /// One month.
    #[serde(rename = "1M")]
    Month1,
    /// Two months.
    #[serde(rename = "2M")]
    Month2,
    /// Three months.
    #[default]
    #[serde(rename = "3M")]
    Month3,
    /// Four months.
    #[serde(rename = "4M")]
    Month4,
    /// Five months.
    #[serde(rename = "5M")]
    Month5,
    /// Six months.
    #[serde(rename = "6M")]
    Month6,
    /// Seven months.
    #[serde(rename = "7M")]
    Month7,
    /// Eight months.
    #[serde(rename = "8M")]
    Month8,
    /// Nine months.
    #[serde(rename = "9M")]
    Month9,
    /// Ten months.
    #[serde(rename = "10M")]
    Month10,
    /// Eleven months.
    #[serde(rename = "11M")]
    Month11,
    /// One year.
    #[serde(rename = "1Y")]
    Year1,
    /// Two years.
    #[serde(rename = "2Y")]
    Year2,
    /// Three years.
    #[serde(rename = "3Y")]
    Year3,
}

impl HistoryDuration {
    /// Every accepted wire value, in ascending length.
    pub const ALLOWED: &'static [&'static str] = &[
        "1M", "2M", "3M", "4M", "5M", "6M", "7M", "8M", "9M", "10M", "11M", "1Y", "2Y", "3Y",
    ];

    /// Returns the wire value sent to the quote source.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Month1 => "1M",
            Self::Month2 => "2M",
            Self::Month3 => "3M",
            Self::Month4 => "4M",
            Self::Month5 => "5M",
            Self::Month6 => "6M",
            Self::Month7 => "7M",
            Self::Month8 => "8M",
            Self::Month9 => "9M",
            Self::Month10 => "10M",
            Self::Month11 => "11M",
            Self::Year1 => "1Y",
            Self::Year2 => "2Y",
            Self::Year3 => "3Y",
        }
    }

    /// Returns all durations.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Month1,
            Self::Month2,
            Self::Month3,
            Self::Month4,
            Self::Month5,
            Self::Month6,
            Self::Month7,
            Self::Month8,
            Self::Month9,
            Self::Month10,
            Self::Month11,
            Self::Year1,
            Self::Year2,
            Self::Year3,
        ]
    }
}

impl std::fmt::Display for HistoryDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HistoryDuration {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ValidationError::Duration {
                value: s.to_string(),
                allowed: Self::ALLOWED.to_vec(),
            })
    }
}

/// Sampling period of the quote rows, in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Period {
    /// One row per day.
    #[default]
    #[serde(rename = "1")]
    Daily,
    /// One row per week.
    #[serde(rename = "7")]
    Weekly,
    /// One row per month.
    #[serde(rename = "30")]
    Monthly,
    /// One row per year.
    #[serde(rename = "365")]
    Yearly,
}

impl Period {
    /// Every accepted wire value.
    pub const ALLOWED: &'static [&'static str] = &["1", "7", "30", "365"];

    /// Returns the wire value sent to the quote source.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "1",
            Self::Weekly => "7",
            Self::Monthly => "30",
            Self::Yearly => "365",
        }
    }

    /// Returns all periods.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Daily, Self::Weekly, Self::Monthly, Self::Yearly]
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Period {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ValidationError::Period {
                value: s.to_string(),
                allowed: Self::ALLOWED.to_vec(),
            })
    }
}

/// Parameters of one multi-page quote download.
///
/// Duration and period are typed, so a constructed request is always valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AggregationRequest {
    symbol: String,
    start_date: NaiveDate,
    duration: HistoryDuration,
    period: Period,
}

impl AggregationRequest {
    /// Creates a request from already-typed parameters.
    #[must_use]
    pub fn new(
        symbol: impl Into<String>,
        start_date: NaiveDate,
        duration: HistoryDuration,
        period: Period,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            start_date,
            duration,
            period,
        }
    }

    /// Creates a request from raw duration and period values.
    ///
    /// # Errors
    ///
    /// Returns an error if `duration` or `period` is outside its allowed set.
    /// The duration is checked first.
    pub fn parse(
        symbol: impl Into<String>,
        start_date: NaiveDate,
        duration: &str,
        period: &str,
    ) -> Result<Self, ValidationError> {
        let duration = duration.parse()?;
        let period = period.parse()?;
        Ok(Self::new(symbol, start_date, duration, period))
    }

    /// Returns the symbol trimmed and upper-cased, as sent to the source.
    #[must_use]
    pub fn sanitized_symbol(&self) -> String {
        self.symbol.trim().to_uppercase()
    }

    /// Returns the start date.
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns the history duration.
    #[must_use]
    pub const fn duration(&self) -> HistoryDuration {
        self.duration
    }

    /// Returns the sampling period.
    #[must_use]
    pub const fn period(&self) -> Period {
        self.period
    }
}

/// Parses a `dd/mm/yyyy` start date.
///
/// # Errors
///
/// Returns an error if the text does not match [`DATE_LAYOUT`].
pub fn parse_start_date(s: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(s.trim(), DATE_LAYOUT)
        .map_err(|_| ValidationError::StartDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_duration_parse() {
        assert_eq!("3M".parse::<HistoryDuration>().unwrap(), HistoryDuration::Month3);
        assert_eq!("11M".parse::<HistoryDuration>().unwrap(), HistoryDuration::Month11);
        assert_eq!("2Y".parse::<HistoryDuration>().unwrap(), HistoryDuration::Year2);
        assert!("12M".parse::<HistoryDuration>().is_err());
        assert!("3m".parse::<HistoryDuration>().is_err());
    }

    #[test]
    fn test_allowed_sets_match_variants() {
        let durations: Vec<_> = HistoryDuration::all().iter().map(|d| d.as_str()).collect();
        assert_eq!(durations, HistoryDuration::ALLOWED);
        let periods: Vec<_> = Period::all().iter().map(|p| p.as_str()).collect();
        assert_eq!(periods, Period::ALLOWED);
    }

    #[test]
    fn test_period_parse() {
        assert_eq!("1".parse::<Period>().unwrap(), Period::Daily);
        assert_eq!("365".parse::<Period>().unwrap(), Period::Yearly);
        let err = "2".parse::<Period>().unwrap_err();
        assert!(matches!(err, ValidationError::Period { ref value, .. } if value == "2"));
    }

    #[test]
    fn test_request_parse_rejects_duration_first() {
        let err = AggregationRequest::parse("xyz", jan_first(), "5D", "9").unwrap_err();
        assert!(matches!(err, ValidationError::Duration { .. }));
        assert!(err.to_string().starts_with("Duration must be one of"));
    }

    #[test]
    fn test_request_accessors() {
        let request = AggregationRequest::parse(" xyz ", jan_first(), "3M", "7").unwrap();
        assert_eq!(request.sanitized_symbol(), "XYZ");
        assert_eq!(request.duration(), HistoryDuration::Month3);
        assert_eq!(request.period(), Period::Weekly);
        assert_eq!(request.start_date(), jan_first());
    }

    #[test]
    fn test_parse_start_date_day_first() {
        let date = parse_start_date("02/01/2024").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert!(parse_start_date("2024-01-02").is_err());
    }
}
