use anyhow::Result;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use serde_json::Value;
use std::time::Duration;

use crate::constants::USER_AGENT;

/// HTTP client for the upstream weather API.
///
/// Every failure is collapsed into `None`: callers only ever see a document
/// or its absence. Idle connections are not kept, so each request opens and
/// releases its own connection.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
}

impl WeatherClient {
    /// Creates a client whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(timeout)
            .pool_max_idle_per_host(0)
            .build()?;

        Ok(Self { client })
    }

    /// Fetches `url` and parses the body as JSON, or returns `None`
    pub async fn fetch(&self, url: &str) -> Option<Value> {
        match self.make_request(url).await {
            Ok(document) => Some(document),
            Err(e) => {
                tracing::warn!("Weather API request failed: {:#}", e);
                None
            }
        }
    }

    // URLs carry the API key, so they are stripped from transport errors.
    async fn make_request(&self, url: &str) -> Result<Value> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        if !response.status().is_success() {
            anyhow::bail!("Request failed with status: {}", response.status());
        }

        let document = response
            .json::<Value>()
            .await
            .map_err(reqwest::Error::without_url)?;
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{http_response, serve_once, unreachable_base};
    use tokio::net::TcpListener;

    fn client() -> WeatherClient {
        WeatherClient::new(Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn returns_document_on_success() {
        let (base, request) = serve_once(http_response("200 OK", r#"{"location":{"name":"Berlin"}}"#)).await;

        let document = client().fetch(&format!("{}/forecast.json", base)).await;

        assert_eq!(document, Some(serde_json::json!({"location": {"name": "Berlin"}})));
        request.await.unwrap();
    }

    #[tokio::test]
    async fn sends_identifying_headers() {
        let (base, request) = serve_once(http_response("200 OK", "{}")).await;

        client().fetch(&format!("{}/forecast.json?q=1,2", base)).await;

        let request = request.await.unwrap().to_lowercase();
        assert!(request.starts_with("get /forecast.json?q=1,2 http/1.1"));
        assert!(request.contains("user-agent: weather-app/1.0"));
        assert!(request.contains("accept: application/json"));
    }

    #[tokio::test]
    async fn unreachable_host_is_absent() {
        let base = unreachable_base().await;

        assert_eq!(client().fetch(&format!("{}/forecast.json", base)).await, None);
    }

    #[tokio::test]
    async fn error_status_is_absent() {
        let (base, request) = serve_once(http_response(
            "401 Unauthorized",
            r#"{"error":{"code":2006,"message":"API key is invalid."}}"#,
        ))
        .await;

        assert_eq!(client().fetch(&format!("{}/forecast.json", base)).await, None);
        request.await.unwrap();
    }

    #[tokio::test]
    async fn malformed_body_is_absent() {
        let (base, request) = serve_once(http_response("200 OK", "<html>not json</html>")).await;

        assert_eq!(client().fetch(&format!("{}/forecast.json", base)).await, None);
        request.await.unwrap();
    }

    #[tokio::test]
    async fn timeout_is_absent() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let stalled = tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let client = WeatherClient::new(Duration::from_millis(200)).unwrap();
        let document = client.fetch(&format!("http://{}/forecast.json", addr)).await;

        assert_eq!(document, None);
        stalled.abort();
    }
}
