//! HTTP fetcher implementation
//!
//! This module builds the HTTP client with a proper user agent string and
//! performs the two kinds of fetch the crawl needs: index/listing pages as
//! text and archive responses as raw bytes. Network failures propagate; the
//! caller decides nothing here is recoverable.

use crate::config::UserAgentConfig;
use crate::{MillError, Result};
use reqwest::Client;
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// The user agent is formatted as `Name/Version (+ContactURL; ContactEmail)`
/// so site operators can identify and reach the crawler's owner.
///
/// # Example
///
/// ```no_run
/// use corpus_mill::config::UserAgentConfig;
/// use corpus_mill::crawler::build_http_client;
///
/// let config = UserAgentConfig {
///     crawler_name: "CorpusMill".to_string(),
///     crawler_version: "1.0".to_string(),
///     contact_url: "https://example.com/about".to_string(),
///     contact_email: "admin@example.com".to_string(),
/// };
///
/// let client = build_http_client(&config).unwrap();
/// ```
pub fn build_http_client(config: &UserAgentConfig) -> std::result::Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.header_value())
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page and returns its body as text
pub async fn fetch_text(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await.map_err(|source| MillError::Http {
        url: url.to_string(),
        source,
    })?;

    response.text().await.map_err(|source| MillError::Http {
        url: url.to_string(),
        source,
    })
}

/// Fetches a response body as raw bytes (used for archive downloads)
pub async fn fetch_bytes(client: &Client, url: &str) -> Result<Vec<u8>> {
    let response = client.get(url).send().await.map_err(|source| MillError::Http {
        url: url.to_string(),
        source,
    })?;

    let bytes = response.bytes().await.map_err(|source| MillError::Http {
        url: url.to_string(),
        source,
    })?;

    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> UserAgentConfig {
        UserAgentConfig {
            crawler_name: "TestMill".to_string(),
            crawler_version: "1.0".to_string(),
            contact_url: "https://example.com/about".to_string(),
            contact_email: "admin@example.com".to_string(),
        }
    }

    #[test]
    fn test_build_http_client() {
        let config = create_test_config();
        let client = build_http_client(&config);
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_text_error_carries_url() {
        let client = build_http_client(&create_test_config()).unwrap();
        // Nothing listens on this port
        let result = fetch_text(&client, "http://127.0.0.1:1/index.html").await;
        match result {
            Err(MillError::Http { url, .. }) => {
                assert_eq!(url, "http://127.0.0.1:1/index.html");
            }
            other => panic!("expected Http error, got {:?}", other.map(|_| ())),
        }
    }
}
