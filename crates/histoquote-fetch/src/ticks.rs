//! End-of-day tick feed ingestion.

use histoquote_types::{EodTicks, EodTicksEnvelope, Result, TimestampPolicy};
use std::sync::Arc;

use crate::{DocumentSource, url::eod_ticks_url};

/// Fetches end-of-day tick histories and decodes their packed timestamps.
#[derive(Debug)]
pub struct TickFeed<S> {
    source: Arc<S>,
    base_url: String,
    policy: TimestampPolicy,
}

impl<S: DocumentSource> TickFeed<S> {
    /// Creates a feed with the lenient timestamp policy.
    #[must_use]
    pub fn new(source: Arc<S>, base_url: impl Into<String>) -> Self {
        Self {
            source,
            base_url: base_url.into(),
            policy: TimestampPolicy::Lenient,
        }
    }

    /// Sets how undecodable timestamps are handled.
    #[must_use]
    pub const fn with_policy(mut self, policy: TimestampPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the last `days` sessions of ticks for `symbol`.
    ///
    /// Timeline dates are converted to epoch milliseconds.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails, the payload is not a tick feed
    /// envelope, or, under [`TimestampPolicy::Strict`], a timestamp does not
    /// decode.
    pub async fn eod_ticks(&self, symbol: &str, days: u32) -> Result<EodTicks> {
        let target = eod_ticks_url(&self.base_url, symbol, days);
        let document = self.source.fetch(&target).await?;
        let mut ticks = document.json::<EodTicksEnvelope>()?.content;

        let skipped = ticks.decode_timeline(self.policy)?;
        log::debug!(
            "{}: {} ticks, {skipped} left undecoded",
            ticks.symbol_id,
            ticks.timeline.len()
        );
        Ok(ticks)
    }
}
