//! Keyword asset search.

use histoquote_types::{Asset, Result, ValidationError};
use std::sync::Arc;

use crate::{DocumentSource, extract_assets, url::search_url};

/// Looks up instruments by keyword on a single search page.
#[derive(Debug)]
pub struct AssetSearch<S> {
    source: Arc<S>,
    base_url: String,
}

impl<S: DocumentSource> AssetSearch<S> {
    /// Creates a search client.
    #[must_use]
    pub fn new(source: Arc<S>, base_url: impl Into<String>) -> Self {
        Self {
            source,
            base_url: base_url.into(),
        }
    }

    /// Returns the instruments matching `query`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank query, or the fetch failure.
    pub async fn search(&self, query: &str) -> Result<Vec<Asset>> {
        if query.trim().is_empty() {
            return Err(ValidationError::EmptyQuery.into());
        }
        let document = self.source.fetch(&search_url(&self.base_url, query)).await?;
        Ok(extract_assets(&document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Document;
    use async_trait::async_trait;
    use histoquote_types::{FetchError, HistoquoteError};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct SearchFixture {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl DocumentSource for SearchFixture {
        async fn fetch(&self, target: &str) -> std::result::Result<Document, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if !target.ends_with("/recherche/ajax?query=air+france") {
                return Err(FetchError::Status {
                    target: target.to_string(),
                    status: 404,
                });
            }
            Ok(Document::new(
                target,
                r#"<div class="search__list">
                     <a class="search__list-link" href="/cours/1rPAF/">
                       <span class="search__item-title">AIR FRANCE-KLM</span>
                       <span class="search__item-content">AF</span>
                     </a>
                   </div>"#,
            ))
        }
    }

    #[tokio::test]
    async fn test_search() {
        let search = AssetSearch::new(Arc::new(SearchFixture::default()), "http://fixture");

        let assets = search.search(" air france ").await.unwrap();

        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].symbol, "1rPAF");
        assert_eq!(assets[0].name, "AIR FRANCE-KLM\nAF");
        assert!(assets[0].last_price.is_empty());
    }

    #[tokio::test]
    async fn test_blank_query_is_rejected() {
        let source = Arc::new(SearchFixture::default());
        let search = AssetSearch::new(Arc::clone(&source), "http://fixture");

        let err = search.search("  ").await.unwrap_err();

        assert!(matches!(
            err,
            HistoquoteError::Validation(ValidationError::EmptyQuery)
        ));
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }
}
