//! Document retrieval seam.

use async_trait::async_trait;
use histoquote_types::FetchError;
use scraper::Html;
use serde::de::DeserializeOwned;

/// A retrieved payload, decoded as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    target: String,
    body: String,
}

impl Document {
    /// Creates a document for the given target.
    #[must_use]
    pub fn new(target: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            body: body.into(),
        }
    }

    /// Returns the target this document was retrieved from.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns the raw text.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parses the text as HTML.
    ///
    /// HTML parsing recovers from any malformed markup, so this cannot fail.
    /// The returned tree is not `Send` and must not be held across an await.
    #[must_use]
    pub fn html(&self) -> Html {
        Html::parse_document(&self.body)
    }

    /// Decodes the text as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Decode`] if the text is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_str(&self.body).map_err(|e| FetchError::Decode {
            target: self.target.clone(),
            reason: e.to_string(),
        })
    }
}

/// Capability to retrieve one document per call.
///
/// Implementations make exactly one attempt per call and keep no state that
/// changes the outcome of later calls.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Retrieves the document at `target`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] if the retrieval cannot complete,
    /// [`FetchError::Status`] on a non-success response and
    /// [`FetchError::Decode`] if the payload is not text.
    async fn fetch(&self, target: &str) -> Result<Document, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use histoquote_types::EodTicksEnvelope;

    #[test]
    fn test_json_decode_error_carries_target() {
        let document = Document::new("http://feed/ticks", "<html>maintenance</html>");
        let err = document.json::<EodTicksEnvelope>().unwrap_err();
        assert!(matches!(err, FetchError::Decode { ref target, .. } if target == "http://feed/ticks"));
    }

    #[test]
    fn test_html_parse_is_lenient() {
        let document = Document::new("t", "<table><tr><td>unclosed");
        let html = document.html();
        assert!(html.root_element().text().any(|t| t.contains("unclosed")));
    }
}
