use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

use crate::providers::dynu::error::DynuProviderError;

const API_KEY_HEADER: &str = "API-Key";
const HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(60);

/// One authenticated request against the Dynu API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Returns the response body when the status is exactly 200.
    async fn call(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, DynuProviderError>;
}

pub struct HttpTransport {
    client: Client,
    api_key: String,
}

// Keeps the API key out of logs.
impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("api_key", &"<REDACTED>")
            .finish()
    }
}

impl HttpTransport {
    pub fn new(api_key: impl Into<String>) -> Result<Self, DynuProviderError> {
        // No idle connections are kept, so each request closes its connection.
        let client = Client::builder()
            .connect_timeout(HANDSHAKE_TIMEOUT)
            .pool_max_idle_per_host(0)
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn call(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, DynuProviderError> {
        debug!(%method, url, "calling Dynu API");
        let mut req = self
            .client
            .request(method.clone(), url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, &self.api_key);
        if let Some(body) = body {
            req = req.body(body);
        }

        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        match status {
            StatusCode::OK => Ok(bytes.to_vec()),
            _ => {
                let err = DynuProviderError::Status {
                    status,
                    method,
                    url: url.to_string(),
                };
                warn!("{err}");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use httpmock::prelude::*;
    use reqwest::Method;

    #[tokio::test]
    async fn test_call_sends_json_and_key_headers() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/dns/getroot/example.com")
                    .header("accept", "application/json")
                    .header("content-type", "application/json")
                    .header("api-key", "secret-key");
                then.status(200).body("{\"id\":1}");
            })
            .await;

        let transport = HttpTransport::new("secret-key").unwrap();
        let body = transport
            .call(Method::GET, &server.url("/dns/getroot/example.com"), None)
            .await
            .unwrap();

        assert_eq!(body, b"{\"id\":1}".to_vec());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_call_posts_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/dns/1/record")
                    .json_body(serde_json::json!({ "nodeName": "www" }));
                then.status(200).body("{}");
            })
            .await;

        let transport = HttpTransport::new("k").unwrap();
        let result = transport
            .call(
                Method::POST,
                &server.url("/dns/1/record"),
                Some(br#"{"nodeName":"www"}"#.to_vec()),
            )
            .await;

        assert!(result.is_ok());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_ok_status_is_classified() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/dns/1/record/9");
                then.status(204);
            })
            .await;

        let transport = HttpTransport::new("k").unwrap();
        let url = server.url("/dns/1/record/9");
        let result = transport.call(Method::DELETE, &url, None).await;

        assert_matches!(
            result,
            Err(DynuProviderError::Status { status, method, url: u })
                if status == StatusCode::NO_CONTENT && method == Method::DELETE && u == url
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_connection_failure_is_http_error() {
        let transport = HttpTransport::new("k").unwrap();
        let result = transport
            .call(Method::GET, "http://127.0.0.1:1/dns/getroot/x", None)
            .await;
        assert_matches!(result, Err(DynuProviderError::Http(_)));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let transport = HttpTransport::new("super-secret").unwrap();
        let debug = format!("{transport:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("REDACTED"));
    }
}
