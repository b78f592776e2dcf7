use std::fmt;

use async_trait::async_trait;

use super::types::NewsItem;

/// The two backend routes the dashboard talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET /api/news`
    News,
    /// `POST /api/refresh`
    Refresh,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::News => "/api/news",
            Endpoint::Refresh => "/api/refresh",
        }
    }

    /// Fixed message surfaced when this endpoint answers with a non-2xx status.
    pub fn failure_message(self) -> &'static str {
        match self {
            Endpoint::News => "Failed to fetch news",
            Endpoint::Refresh => "Failed to refresh news",
        }
    }
}

/// Errors that can occur while talking to the news backend.
///
/// `Display` is what ends up in the dashboard's error banner, so it carries
/// no prefix: status failures render their fixed message, everything else
/// renders the underlying error text as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Backend answered with a non-2xx status. Body is not inspected.
    Status { endpoint: Endpoint, status: u16 },
    /// Network-level failure (DNS, connection refused, timeout).
    Network(String),
    /// Response body did not decode into the expected shape.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Status { endpoint, .. } => f.write_str(endpoint.failure_message()),
            ApiError::Network(msg) | ApiError::Decode(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ApiError {}

#[async_trait]
pub trait NewsBackend: Send + Sync {
    /// Returns the name of the backend, for logging.
    fn name(&self) -> &str;

    /// Fetches the current news list in server order.
    async fn fetch_news(&self) -> Result<Vec<NewsItem>, ApiError>;

    /// Asks the backend to re-source news. The response body is ignored.
    async fn trigger_refresh(&self) -> Result<(), ApiError>;
}
