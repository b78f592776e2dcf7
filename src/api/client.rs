//! reqwest-backed implementation of [`NewsBackend`].

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::backend::{ApiError, Endpoint, NewsBackend};
use super::types::NewsItem;

/// Talks to the summarizer's HTTP API (`/api/news`, `/api/refresh`).
pub struct HttpBackend {
    base_url: String,
    timeout: Option<Duration>,
    client: reqwest::Client,
}

impl HttpBackend {
    /// `timeout` of `None` leaves requests unbounded; a hung backend then keeps
    /// the dashboard in its in-flight state until the transport gives up.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            timeout,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    async fn send(
        &self,
        endpoint: Endpoint,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        let request = match self.timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        };

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        debug!("{} response status: {}", endpoint.path(), response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            warn!("{} returned HTTP {}", endpoint.path(), status);
            return Err(ApiError::Status { endpoint, status });
        }

        Ok(response)
    }
}

#[async_trait]
impl NewsBackend for HttpBackend {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_news(&self) -> Result<Vec<NewsItem>, ApiError> {
        let url = self.url(Endpoint::News);
        info!("GET {}", url);

        let response = self.send(Endpoint::News, self.client.get(&url)).await?;
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let items: Vec<NewsItem> = serde_json::from_str(&body).map_err(|e| {
            warn!("Failed to decode news list ({} bytes): {}", body.len(), e);
            ApiError::Decode(e.to_string())
        })?;

        info!("Fetched {} news items", items.len());
        Ok(items)
    }

    async fn trigger_refresh(&self) -> Result<(), ApiError> {
        let url = self.url(Endpoint::Refresh);
        info!("POST {}", url);

        self.send(Endpoint::Refresh, self.client.post(&url)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let backend = HttpBackend::new("http://localhost:8000/", None);
        assert_eq!(backend.base_url(), "http://localhost:8000");
        assert_eq!(
            backend.url(Endpoint::News),
            "http://localhost:8000/api/news"
        );
    }

    #[test]
    fn test_refresh_url() {
        let backend = HttpBackend::new("http://10.0.0.2:9000", Some(Duration::from_secs(5)));
        assert_eq!(
            backend.url(Endpoint::Refresh),
            "http://10.0.0.2:9000/api/refresh"
        );
    }
}
