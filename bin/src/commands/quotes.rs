//! Quotes command implementation.
//!
//! This module downloads every page of an instrument's historical quote table.

use crate::display::Output;
use anyhow::{Context, Result};
use chrono::{Local, Months, NaiveDate};
use histoquote_lib::parse_start_date;
use histoquote_lib::prelude::*;

/// Download the quote table of an instrument.
pub(crate) async fn quotes(
    aggregator: &QuoteAggregator<HttpSource>,
    symbol: &str,
    start_str: Option<&str>,
    duration: &str,
    period: &str,
    output: &Output,
) -> Result<()> {
    // Parse start date (default to one month ago)
    let start = match start_str {
        Some(s) => parse_start_date(s)?,
        None => default_start(Local::now().date_naive()),
    };

    let quotes = aggregator
        .aggregate_quotes(symbol, start, duration, period)
        .await
        .with_context(|| format!("Failed to download quotes for {symbol}"))?;
    log::info!("Downloaded {} quotes for {symbol}", quotes.len());

    output.quotes(&quotes)
}

/// One month before `today`, clamped to the end of shorter months.
fn default_start(today: NaiveDate) -> NaiveDate {
    today.checked_sub_months(Months::new(1)).unwrap_or(today)
}
