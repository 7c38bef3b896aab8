//! Field extraction from retrieved documents.

use histoquote_types::{Asset, Quote};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::Document;

static TABLE_ROW: LazyLock<Selector> = LazyLock::new(|| selector(".c-table tr"));
static TABLE_CELL: LazyLock<Selector> = LazyLock::new(|| selector(".c-table__cell"));
static PAGINATION: LazyLock<Selector> = LazyLock::new(|| selector("span.c-pagination__content"));

static SEARCH_LIST: LazyLock<Selector> = LazyLock::new(|| selector(".search__list"));
static SEARCH_LINK: LazyLock<Selector> = LazyLock::new(|| selector(".search__list-link"));
static SEARCH_TITLE: LazyLock<Selector> = LazyLock::new(|| selector(".search__item-title"));
static SEARCH_CONTENT: LazyLock<Selector> = LazyLock::new(|| selector(".search__item-content"));
static SEARCH_INSTRUMENT: LazyLock<Selector> =
    LazyLock::new(|| selector(".search__item-instrument"));
static LAST_PRICE: LazyLock<Selector> = LazyLock::new(|| selector(".last"));
static VARIATION: LazyLock<Selector> = LazyLock::new(|| selector("[class^=u-color]"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("Invalid built-in selector")
}

/// Capability to pull quote rows and pagination out of a quote table page.
///
/// Both methods read the same parsed page, so a document is parsed once.
pub trait FieldExtractor: Send + Sync {
    /// Returns the table rows of `page` in document order.
    fn extract_rows(&self, page: &Html) -> Vec<Quote>;

    /// Returns the total number of pages announced by `page`, at least 1.
    fn extract_page_count(&self, page: &Html) -> usize;
}

/// [`FieldExtractor`] for the quote source's history table markup.
///
/// The first `.c-table tr` is the header and is skipped. Each remaining row
/// yields its first `.c-table__cell` as the date and that cell's next
/// element sibling as the price. The page count is the number of
/// `span.c-pagination__content` markers.
#[derive(Debug, Clone, Copy, Default)]
pub struct HistoryTableExtractor;

impl FieldExtractor for HistoryTableExtractor {
    fn extract_rows(&self, page: &Html) -> Vec<Quote> {
        page.select(&TABLE_ROW)
            .skip(1)
            .map(|row| {
                let first_cell = row.select(&TABLE_CELL).next();
                let price_cell =
                    first_cell.and_then(|cell| cell.next_siblings().find_map(ElementRef::wrap));
                Quote::new(
                    first_cell.map(trimmed_text).unwrap_or_default(),
                    price_cell.map(trimmed_text).unwrap_or_default(),
                )
            })
            .collect()
    }

    fn extract_page_count(&self, page: &Html) -> usize {
        page.select(&PAGINATION).count().max(1)
    }
}

/// Extracts the hits of a keyword search page.
///
/// Only the first `.search__list` is read. Hits without a link target have
/// no symbol and are skipped.
#[must_use]
pub fn extract_assets(document: &Document) -> Vec<Asset> {
    let html = document.html();
    let Some(list) = html.select(&SEARCH_LIST).next() else {
        return Vec::new();
    };

    list.select(&SEARCH_LINK)
        .filter_map(|link| {
            let title = joined_text(link, &SEARCH_TITLE);
            let details = joined_text(link, &SEARCH_CONTENT);
            let name = format!("{title}\n{}", details.trim_matches(|c| c == ' ' || c == '\n'));

            let Some(href) = link.value().attr("href") else {
                log::warn!("Unable to find the quote symbol for {name}");
                return None;
            };

            let instrument = link.select(&SEARCH_INSTRUMENT).next();
            Some(Asset {
                symbol: symbol_from_href(href).to_string(),
                name,
                last_price: instrument
                    .map(|i| joined_text(i, &LAST_PRICE))
                    .unwrap_or_default(),
                price_variation: instrument
                    .map(|i| joined_text(i, &VARIATION))
                    .unwrap_or_default(),
            })
        })
        .collect()
}

/// Returns the last path segment of a link, ignoring one trailing slash.
fn symbol_from_href(href: &str) -> &str {
    let path = href.strip_suffix('/').unwrap_or(href);
    path.rsplit('/').next().unwrap_or(path)
}

fn trimmed_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Concatenated text of every descendant matching `selector`.
fn joined_text(element: ElementRef<'_>, selector: &Selector) -> String {
    element
        .select(selector)
        .flat_map(|matched| matched.text())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HISTORY_PAGE: &str = r#"
        <html><body>
        <table class="c-table">
          <tr><th class="c-table__cell">Date</th><th class="c-table__cell">Dernier</th></tr>
          <tr>
            <td class="c-table__cell"> 02/01/2024 </td>
            <td class="c-table__cell">
              1 234,50
            </td>
            <td class="c-table__cell">+0,5%</td>
          </tr>
          <tr><td class="c-table__cell">03/01/2024</td><td class="c-table__cell">1 240,00</td></tr>
        </table>
        <div class="c-pagination">
          <span class="c-pagination__content">1</span>
          <span class="c-pagination__content">2</span>
          <span class="c-pagination__content">3</span>
        </div>
        </body></html>"#;

    const SEARCH_PAGE: &str = r#"
        <div class="search__list">
          <a class="search__list-link" href="/cours/1rPAF/">
            <span class="search__item-title">AIR FRANCE-KLM</span>
            <span class="search__item-content">
              AF - Euronext Paris
            </span>
            <span class="search__item-instrument">
              <span class="last">4,12</span>
              <span class="u-color-green">+1,20%</span>
            </span>
          </a>
          <a class="search__list-link">
            <span class="search__item-title">NO LINK</span>
          </a>
          <a class="search__list-link" href="/bourse/trackers/cours/1rTCW8">
            <span class="search__item-title">AMUNDI MSCI WORLD</span>
            <span class="search__item-content">CW8</span>
            <span class="search__item-instrument">
              <span class="last">450,10</span>
              <span class="u-color-red">-0,30%</span>
            </span>
          </a>
        </div>
        <div class="search__list">
          <a class="search__list-link" href="/news/ignored"></a>
        </div>"#;

    #[test]
    fn test_extract_rows_skips_header() {
        let rows = HistoryTableExtractor.extract_rows(&Html::parse_document(HISTORY_PAGE));
        assert_eq!(
            rows,
            vec![
                Quote::new("02/01/2024", "1 234,50"),
                Quote::new("03/01/2024", "1 240,00"),
            ]
        );
    }

    #[test]
    fn test_extract_rows_without_cells() {
        let page = Html::parse_document(
            r#"<table class="c-table"><tr><th>h</th></tr><tr><td>plain</td></tr></table>"#,
        );
        let rows = HistoryTableExtractor.extract_rows(&page);
        assert_eq!(rows, vec![Quote::default()]);
    }

    #[test]
    fn test_page_count() {
        let page = Html::parse_document(HISTORY_PAGE);
        assert_eq!(HistoryTableExtractor.extract_page_count(&page), 3);
    }

    #[test]
    fn test_page_count_without_pagination() {
        let page = Html::parse_document("<html><body><p>no table</p></body></html>");
        assert_eq!(HistoryTableExtractor.extract_page_count(&page), 1);
        assert!(HistoryTableExtractor.extract_rows(&page).is_empty());
    }

    #[test]
    fn test_extract_assets() {
        let document = Document::new("search", SEARCH_PAGE);
        let assets = extract_assets(&document);

        assert_eq!(assets.len(), 2);
        assert_eq!(assets[0].symbol, "1rPAF");
        assert_eq!(assets[0].name, "AIR FRANCE-KLM\nAF - Euronext Paris");
        assert_eq!(assets[0].last_price, "4,12");
        assert_eq!(assets[0].price_variation, "+1,20%");
        assert_eq!(assets[1].symbol, "1rTCW8");
        assert_eq!(assets[1].price_variation, "-0,30%");
    }

    #[test]
    fn test_extract_assets_empty() {
        let document = Document::new("search", "<div>nothing</div>");
        assert!(extract_assets(&document).is_empty());
    }

    #[test]
    fn test_symbol_from_href() {
        assert_eq!(symbol_from_href("/cours/1rPAF/"), "1rPAF");
        assert_eq!(symbol_from_href("/cours/1rPAF"), "1rPAF");
        assert_eq!(symbol_from_href("1rPAF"), "1rPAF");
    }
}
