//! Concurrent multi-page quote aggregation.

use chrono::NaiveDate;
use futures::stream::{FuturesUnordered, StreamExt};
use histoquote_types::{AggregationRequest, FetchError, HistoquoteError, Page, Quote, Result};
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::{DocumentSource, FieldExtractor, HistoryTableExtractor, url::history_page_url};

/// Downloads every page of a historical quote table and merges the rows.
///
/// Page 1 is fetched first to learn the page count; pages 2..N are then
/// fetched concurrently, each on its own task. Rows are returned in page
/// order whatever order the pages complete in, and the first failure is
/// returned as soon as it is seen. Tasks still in flight at that point are
/// left to finish on their own and their results are dropped.
#[derive(Debug)]
pub struct QuoteAggregator<S, E = HistoryTableExtractor> {
    source: Arc<S>,
    extractor: Arc<E>,
    base_url: String,
}

impl<S, E> Clone for QuoteAggregator<S, E> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            extractor: Arc::clone(&self.extractor),
            base_url: self.base_url.clone(),
        }
    }
}

impl<S> QuoteAggregator<S>
where
    S: DocumentSource + 'static,
{
    /// Creates an aggregator that reads the source's history table markup.
    #[must_use]
    pub fn new(source: Arc<S>, base_url: impl Into<String>) -> Self {
        Self::with_extractor(source, Arc::new(HistoryTableExtractor), base_url)
    }
}

impl<S, E> QuoteAggregator<S, E>
where
    S: DocumentSource + 'static,
    E: FieldExtractor + 'static,
{
    /// Creates an aggregator with a custom field extractor.
    #[must_use]
    pub fn with_extractor(source: Arc<S>, extractor: Arc<E>, base_url: impl Into<String>) -> Self {
        Self {
            source,
            extractor,
            base_url: base_url.into(),
        }
    }

    /// Validates the raw enumerated parameters, then aggregates.
    ///
    /// # Errors
    ///
    /// Returns a validation error, without contacting the source, if
    /// `duration` or `period` is outside its allowed set. Otherwise fails as
    /// [`QuoteAggregator::aggregate`] does.
    pub async fn aggregate_quotes(
        &self,
        symbol: &str,
        start_date: NaiveDate,
        duration: &str,
        period: &str,
    ) -> Result<Vec<Quote>> {
        let request = AggregationRequest::parse(symbol, start_date, duration, period)?;
        self.aggregate(&request).await
    }

    /// Returns all rows of the quote table for `request`, in page order.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns the first fetch or decode failure of any page, or a task
    /// error if a page task panicked. No partial result is ever returned.
    pub async fn aggregate(&self, request: &AggregationRequest) -> Result<Vec<Quote>> {
        let first_target = history_page_url(&self.base_url, request, 1);
        let first = self.source.fetch(&first_target).await?;

        let (page_count, first_rows) = {
            let page = first.html();
            (
                self.extractor.extract_page_count(&page),
                self.extractor.extract_rows(&page),
            )
        };
        log::debug!(
            "{}: {} rows on page 1 of {page_count}",
            request.sanitized_symbol(),
            first_rows.len()
        );

        if page_count <= 1 {
            return Ok(first_rows);
        }

        let mut slots: Vec<Option<Vec<Quote>>> = vec![None; page_count];
        slots[0] = Some(first_rows);

        let mut pending: FuturesUnordered<_> = (2..=page_count)
            .map(|index| self.spawn_page(request, index))
            .collect();

        // Dropping `pending` on early return detaches the remaining tasks.
        while let Some(joined) = pending.next().await {
            let page = joined.map_err(|e| HistoquoteError::Task(e.to_string()))??;
            log::debug!("page {} done with {} rows", page.index, page.quotes.len());
            slots[page.index - 1] = Some(page.quotes);
        }

        Ok(slots.into_iter().flatten().flatten().collect())
    }

    /// Spawns the fetch-and-extract task for one page.
    fn spawn_page(
        &self,
        request: &AggregationRequest,
        index: usize,
    ) -> JoinHandle<std::result::Result<Page, FetchError>> {
        let source = Arc::clone(&self.source);
        let extractor = Arc::clone(&self.extractor);
        let target = history_page_url(&self.base_url, request, index);

        tokio::spawn(async move {
            let document = source.fetch(&target).await?;
            let quotes = extractor.extract_rows(&document.html());
            Ok(Page::new(index, quotes))
        })
    }
}
