//! Concurrent historical quote scraper with packed tick timestamp decoding.
//!
//! This is a facade crate that re-exports functionality from the histoquote
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use histoquote_lib::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::default();
//!     let source = Arc::new(HttpSource::new(&config)?);
//!     let aggregator = QuoteAggregator::new(source, config.base_url);
//!
//!     let start = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//!     let quotes = aggregator.aggregate_quotes("1rPAF", start, "3M", "1").await?;
//!     for quote in quotes {
//!         println!("{} {}", quote.date, quote.price);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc(issue_tracker_base_url = "https://github.com/histoquote/histoquote/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use histoquote_types::*;

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use histoquote_fetch::{
    AssetSearch, ClientConfig, Document, DocumentSource, FieldExtractor, HistoryTableExtractor,
    Html, HttpSource, QuoteAggregator, TickFeed, extract_assets, url,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use histoquote_format::{CsvFormatter, FormatError, Formatter, JsonFormatter, OutputFormat};

/// Prelude module for convenient imports.
///
/// ```
/// use histoquote_lib::prelude::*;
/// ```
pub mod prelude {
    pub use histoquote_types::{
        AggregationRequest, Asset, EodTicks, FetchError, HistoquoteError, HistoryDuration,
        Period, Quote, Result, Tick, TimestampPolicy, decode_packed_timestamp,
    };

    #[cfg(feature = "fetch")]
    pub use histoquote_fetch::{
        AssetSearch, ClientConfig, DocumentSource, HttpSource, QuoteAggregator, TickFeed,
    };

    #[cfg(feature = "format")]
    pub use histoquote_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};
}
