//! Quote source URL construction.

use histoquote_types::{AggregationRequest, DATE_LAYOUT};
use url::form_urlencoded;

/// Base URL of the quote source.
pub const BASE_URL: &str = "https://www.boursorama.com";

/// Builds the URL of one page of a historical quote table.
///
/// URL format: `{base}/_formulaire-periode/[page-{N}]?symbol={SYMBOL}&historic_search[...]`
///
/// Page 1 has no page segment. The symbol is trimmed and upper-cased and the
/// start date is rendered day first.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use histoquote_fetch::url::{BASE_URL, history_page_url};
/// use histoquote_types::{AggregationRequest, HistoryDuration, Period};
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
/// let request = AggregationRequest::new("xyz", start, HistoryDuration::Month3, Period::Daily);
/// assert_eq!(
///     history_page_url(BASE_URL, &request, 2),
///     "https://www.boursorama.com/_formulaire-periode/page-2?symbol=XYZ\
///      &historic_search[startDate]=02/01/2024&historic_search[duration]=3M\
///      &historic_search[period]=1"
/// );
/// ```
#[must_use]
pub fn history_page_url(base_url: &str, request: &AggregationRequest, page: usize) -> String {
    let page_segment = if page <= 1 {
        String::new()
    } else {
        format!("page-{page}")
    };
    format!(
        "{}/_formulaire-periode/{}?symbol={}&historic_search[startDate]={}&historic_search[duration]={}&historic_search[period]={}",
        base_url.trim_end_matches('/'),
        page_segment,
        request.sanitized_symbol(),
        request.start_date().format(DATE_LAYOUT),
        request.duration(),
        request.period()
    )
}

/// Builds the URL of the end-of-day tick feed for `days` sessions.
#[must_use]
pub fn eod_ticks_url(base_url: &str, symbol: &str, days: u32) -> String {
    format!(
        "{}/bourse/action/graph/ws/GetTicksEOD?symbol={}&length={}&period=0&guid=",
        base_url.trim_end_matches('/'),
        symbol.trim().to_uppercase(),
        days
    )
}

/// Builds the URL of the keyword search endpoint.
#[must_use]
pub fn search_url(base_url: &str, query: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(query.trim().as_bytes()).collect();
    format!(
        "{}/recherche/ajax?query={}",
        base_url.trim_end_matches('/'),
        encoded
    )
}
