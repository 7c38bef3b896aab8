//! Ticks command implementation.

use crate::display::Output;
use anyhow::{Context, Result};
use histoquote_lib::prelude::*;

/// Download end-of-day ticks of an instrument.
pub(crate) async fn ticks(
    feed: &TickFeed<HttpSource>,
    symbol: &str,
    days: u32,
    output: &Output,
) -> Result<()> {
    let ticks = feed
        .eod_ticks(symbol, days)
        .await
        .with_context(|| format!("Failed to download ticks for {symbol}"))?;
    log::info!(
        "Downloaded {} ticks for {} ({})",
        ticks.timeline.len(),
        ticks.name,
        ticks.symbol_id
    );

    output.ticks(&ticks)
}
