use crate::domain::{DatasetEnvelope, Record};
use crate::fetch::{FetchError, FetcherConfig, InsightsSource};
use anyhow::Context;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct HttpInsightsFetcher {
    http: reqwest::Client,
    endpoint_url: String,
}

impl HttpInsightsFetcher {
    pub fn new(config: FetcherConfig) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .context("failed to build insights http client")?;

        Ok(Self {
            http,
            endpoint_url: config.endpoint_url,
        })
    }

    fn headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    fn network_error(&self, source: reqwest::Error) -> FetchError {
        FetchError::Network {
            url: self.endpoint_url.clone(),
            source,
        }
    }
}

#[async_trait::async_trait]
impl InsightsSource for HttpInsightsFetcher {
    fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    async fn fetch_insights(&self) -> Result<DatasetEnvelope, FetchError> {
        tracing::debug!(url = %self.endpoint_url, "calling insights endpoint");

        let res = self
            .http
            .get(&self.endpoint_url)
            .headers(Self::headers())
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(url = %self.endpoint_url, error = %e, "insights request failed");
                self.network_error(e)
            })?;

        let status = res.status();
        tracing::debug!(%status, "insights endpoint responded");

        if !status.is_success() {
            // The body is diagnostic only; an unreadable one must not mask the status.
            let body = res.text().await.unwrap_or_default();
            tracing::warn!(%status, body = %body, "insights endpoint returned an error status");
            return Err(FetchError::Http {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            });
        }

        let text = res.text().await.map_err(|e| self.network_error(e))?;
        let records = parse_records(&text)?;
        tracing::info!(records = records.len(), "fetched diet insights");

        Ok(DatasetEnvelope::new(records))
    }
}

/// Pulls `result` out of an endpoint payload. Absent, null, `false`, `0` and `""`
/// all mean zero records; any other non-array value is a parse error.
pub fn parse_records(text: &str) -> Result<Vec<Record>, FetchError> {
    let payload = serde_json::from_str::<Value>(text)?;
    log_function_metadata(&payload);

    match payload.get("result") {
        None => Ok(Vec::new()),
        Some(result) if is_falsy(result) => Ok(Vec::new()),
        Some(result) => Ok(Vec::<Record>::deserialize(result)?),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn log_function_metadata(payload: &Value) {
    let message = payload.get("message").and_then(Value::as_str);
    let execution_time_sec = payload.get("execution_time_sec").and_then(Value::as_f64);
    let cached_result = payload.get("cached_result").and_then(Value::as_bool);

    if message.is_some() || execution_time_sec.is_some() || cached_result.is_some() {
        tracing::debug!(
            ?message,
            ?execution_time_sec,
            ?cached_result,
            "insights endpoint metadata"
        );
    }
}
