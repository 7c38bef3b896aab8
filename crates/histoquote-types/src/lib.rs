//! Core types for the histoquote historical quote scraper.
//!
//! This crate provides the fundamental data structures used throughout histoquote:
//!
//! - [`Quote`] - A single (date, price) row from a historical quote table
//! - [`Page`] - The rows of one page of a quote table
//! - [`Asset`] - A keyword search hit
//! - [`AggregationRequest`] - Validated parameters for a multi-page quote download
//! - [`Tick`] / [`EodTicks`] - End-of-day tick feed records
//! - [`decode_packed_timestamp`] - Packed `YYMMDDmmmm` timestamp decoding

#![doc(issue_tracker_base_url = "https://github.com/histoquote/histoquote/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod quote;
mod request;
mod tick;
mod timestamp;

pub use error::{FetchError, HistoquoteError, Result, TimestampError, ValidationError};
pub use quote::{Asset, Page, Quote};
pub use request::{AggregationRequest, DATE_LAYOUT, HistoryDuration, Period, parse_start_date};
pub use tick::{EodTicks, EodTicksEnvelope, Tick};
pub use timestamp::{TimestampPolicy, decode_packed_timestamp};
