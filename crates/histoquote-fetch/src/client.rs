//! HTTP document source.

use async_trait::async_trait;
use histoquote_types::FetchError;
use reqwest::Client;
use std::time::Duration;

use crate::{Document, DocumentSource, url::BASE_URL};

/// Configuration for the HTTP client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the quote source.
    pub base_url: String,
    /// Request timeout. `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: None,
            user_agent: format!("histoquote/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// [`DocumentSource`] backed by a plain HTTP GET.
///
/// Every call is a single attempt on a fresh connection: idle connections
/// are not kept and failures are never retried.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    /// Creates a new HTTP source with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder()
            .pool_max_idle_per_host(0)
            .user_agent(&config.user_agent)
            .gzip(true);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    async fn fetch(&self, target: &str) -> Result<Document, FetchError> {
        log::debug!("GET {target}");
        let response = self
            .client
            .get(target)
            .send()
            .await
            .map_err(|e| transport_error(target, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                target: target.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| transport_error(target, &e))?;
        let body = String::from_utf8(bytes.to_vec()).map_err(|e| FetchError::Decode {
            target: target.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Document::new(target, body))
    }
}

fn transport_error(target: &str, error: &reqwest::Error) -> FetchError {
    let kind = if error.is_timeout() {
        "timed out"
    } else if error.is_connect() {
        "connection failed"
    } else {
        "request failed"
    };
    FetchError::Transport {
        target: target.to_string(),
        reason: format!("{kind}: {error}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn source() -> HttpSource {
        let config = ClientConfig {
            timeout: Some(Duration::from_secs(5)),
            ..Default::default()
        };
        HttpSource::new(&config).unwrap()
    }

    /// Serves one canned HTTP response on a loopback port and returns its URL.
    async fn serve_once(response: &'static [u8]) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await;
            socket.write_all(response).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{addr}/page")
    }

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, BASE_URL);
        assert_eq!(config.timeout, None);
        assert!(config.user_agent.starts_with("histoquote/"));
    }

    #[tokio::test]
    async fn test_client_creation() {
        assert!(HttpSource::new(&ClientConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn test_ok_body_is_returned() {
        let target = serve_once(
            b"HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: 9\r\nConnection: close\r\n\r\n<p>ok</p>",
        )
        .await;

        let document = source().fetch(&target).await.unwrap();

        assert_eq!(document.target(), target);
        assert_eq!(document.body(), "<p>ok</p>");
    }

    #[tokio::test]
    async fn test_server_error_is_status_error() {
        let target = serve_once(
            b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await;

        let err = source().fetch(&target).await.unwrap_err();

        assert_eq!(err.status(), Some(500));
        assert_eq!(err.target(), target);
    }

    #[tokio::test]
    async fn test_invalid_utf8_body_is_decode_error() {
        let target = serve_once(
            b"HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: 2\r\nConnection: close\r\n\r\n\xff\xfe",
        )
        .await;

        let err = source().fetch(&target).await.unwrap_err();

        assert!(matches!(err, FetchError::Decode { .. }));
        assert_eq!(err.target(), target);
    }

    #[tokio::test]
    async fn test_refused_connection_is_transport_error() {
        // Port 1 on loopback has no listener.
        let err = source().fetch("http://127.0.0.1:1/").await.unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }));
        assert_eq!(err.target(), "http://127.0.0.1:1/");
    }
}
