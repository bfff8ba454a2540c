pub mod error;
pub mod http;

use crate::domain::DatasetEnvelope;
use std::time::Duration;

pub use error::FetchError;
pub use http::HttpInsightsFetcher;

pub const DEFAULT_ENDPOINT_URL: &str =
    "https://diet-analysis-function-app-grp7-gedbcqgtbzbehybd.westus-01.azurewebsites.net/api/process";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[async_trait::async_trait]
pub trait InsightsSource: Send + Sync {
    fn endpoint_url(&self) -> &str;

    /// One GET against the endpoint, normalized into a fresh envelope.
    async fn fetch_insights(&self) -> Result<DatasetEnvelope, FetchError>;
}

#[derive(Debug, Clone)]
pub struct FetcherConfig {
    pub endpoint_url: String,
    /// `None` waits for the endpoint indefinitely.
    pub timeout: Option<Duration>,
}

impl FetcherConfig {
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT_URL)
    }
}
