//! Quote table rows and search hits.

use serde::{Deserialize, Serialize};

/// A single row of a historical quote table.
///
/// Both fields keep the text exactly as extracted (trimmed); thousands
/// separators and locale formatting are left for the caller to interpret.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Quote {
    /// Date label of the row.
    pub date: String,
    /// Price label of the row.
    pub price: String,
}

impl Quote {
    /// Creates a new quote row.
    #[must_use]
    pub fn new(date: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            price: price.into(),
        }
    }
}

/// Rows extracted from one page of a paginated quote table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Page {
    /// 1-based page index.
    pub index: usize,
    /// Rows in document order.
    pub quotes: Vec<Quote>,
}

impl Page {
    /// Creates a page.
    #[must_use]
    pub const fn new(index: usize, quotes: Vec<Quote>) -> Self {
        Self { index, quotes }
    }
}

/// An instrument returned by a keyword search.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Asset {
    /// Site symbol, usable as a quote request symbol.
    pub symbol: String,
    /// Display name followed by a line of secondary information.
    pub name: String,
    /// Last traded price label.
    pub last_price: String,
    /// Price variation label.
    pub price_variation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_serializes_as_labels() {
        let quote = Quote::new("02/01/2024", "1 234,50");
        let json = serde_json::to_string(&quote).unwrap();
        assert_eq!(json, r#"{"date":"02/01/2024","price":"1 234,50"}"#);
    }

    #[test]
    fn test_asset_field_names() {
        let asset = Asset {
            symbol: "1rPAF".to_string(),
            name: "Air France-KLM\nAF".to_string(),
            last_price: "4.12".to_string(),
            price_variation: "+1.2%".to_string(),
        };
        let json = serde_json::to_value(&asset).unwrap();
        assert_eq!(json["last_price"], "4.12");
        assert_eq!(json["price_variation"], "+1.2%");
    }
}
