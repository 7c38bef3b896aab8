//! Document retrieval, extraction and concurrent page aggregation for histoquote.
//!
//! This crate provides the quote download pipeline:
//!
//! - [`url`] - Builds quote table, tick feed and search URLs
//! - [`DocumentSource`] / [`HttpSource`] - Single-attempt document retrieval
//! - [`FieldExtractor`] / [`HistoryTableExtractor`] - Quote rows and page count
//! - [`QuoteAggregator`] - Concurrent multi-page download with ordered merge
//! - [`TickFeed`] - End-of-day ticks with packed timestamp decoding
//! - [`AssetSearch`] - Keyword instrument search

#![doc(issue_tracker_base_url = "https://github.com/histoquote/histoquote/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod aggregate;
mod client;
mod extract;
mod search;
mod source;
mod ticks;
pub mod url;

pub use aggregate::QuoteAggregator;
pub use client::{ClientConfig, HttpSource};
pub use extract::{FieldExtractor, HistoryTableExtractor, extract_assets};
pub use search::AssetSearch;
pub use scraper::Html;
pub use source::{Document, DocumentSource};
pub use ticks::TickFeed;
