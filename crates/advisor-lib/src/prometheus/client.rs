//! HTTP client for the Prometheus query API

use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};

/// Request timeout for all calls to the Prometheus API
const REQUEST_TIMEOUT_SECS: u64 = 5;

/// Path of the instant-query endpoint, relative to the server base URL
const QUERY_PATH: &str = "api/v1/query";

/// Maximum response-body length echoed back in error messages
const ERROR_BODY_LIMIT: usize = 200;

/// Client for a Prometheus-compatible HTTP API
pub struct PrometheusClient {
    http: Client,
    base_url: Url,
    query_url: Url,
}

impl PrometheusClient {
    /// Create a new client
    ///
    /// Accepts either the server base URL or a URL already pointing at the
    /// `/api/v1/query` endpoint; the latter is normalized to its base.
    pub fn new(url: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(Error::ClientInit)?;

        let trimmed = url.trim_end_matches('/');
        let base = trimmed.strip_suffix("/api/v1/query").unwrap_or(trimmed);

        let invalid = |source| Error::InvalidUrl {
            url: url.to_string(),
            source,
        };
        let base_url = Url::parse(base).map_err(invalid)?;
        let query_url = base_url.join(QUERY_PATH).map_err(invalid)?;

        Ok(Self {
            http,
            base_url,
            query_url,
        })
    }

    /// The normalized server base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Probe the server for reachability
    ///
    /// Issues a plain GET against the base URL; any transport failure or
    /// non-success status is reported as an availability failure.
    pub async fn check_availability(&self) -> Result<()> {
        let response = self
            .http
            .get(self.base_url.clone())
            .send()
            .await
            .map_err(|source| Error::Connection {
                url: self.base_url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::HttpStatus {
                status,
                body: truncate_body(&body),
            });
        }

        debug!(url = %self.base_url, "Prometheus is accessible");
        Ok(())
    }

    /// Run an instant query and return the resulting vector
    pub async fn instant_query(&self, query: &str) -> Result<Vec<Series>> {
        debug!(%query, "Querying Prometheus");

        let response = self
            .http
            .get(self.query_url.clone())
            .query(&[("query", query)])
            .send()
            .await
            .map_err(|source| Error::Connection {
                url: self.query_url.to_string(),
                source,
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|source| Error::Connection {
            url: self.query_url.to_string(),
            source,
        })?;

        // Rejected queries come back as non-2xx with a JSON error envelope;
        // surface those as query failures rather than bare HTTP errors.
        let parsed: QueryResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(err) if status.is_success() => {
                return Err(Error::BadResponse(err.to_string()));
            }
            Err(_) => {
                return Err(Error::HttpStatus {
                    status,
                    body: truncate_body(&body),
                });
            }
        };

        if parsed.status != "success" {
            return Err(Error::QueryFailed {
                error_type: parsed.error_type.unwrap_or_else(|| "unknown".to_string()),
                message: parsed.error.unwrap_or_else(|| "no error detail".to_string()),
            });
        }
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status,
                body: truncate_body(&body),
            });
        }

        let data = parsed
            .data
            .ok_or_else(|| Error::BadResponse("missing data field".to_string()))?;
        if data.result_type != "vector" {
            return Err(Error::BadResponse(format!(
                "expected vector result, got {}",
                data.result_type
            )));
        }

        Ok(data.result)
    }
}

/// Top-level Prometheus query-result envelope
#[derive(Debug, Deserialize)]
struct QueryResponse {
    status: String,
    #[serde(rename = "errorType")]
    error_type: Option<String>,
    error: Option<String>,
    data: Option<QueryData>,
}

#[derive(Debug, Deserialize)]
struct QueryData {
    #[serde(rename = "resultType")]
    result_type: String,
    result: Vec<Series>,
}

/// One time series from an instant query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Series {
    pub metric: HashMap<String, String>,
    pub value: Sample,
}

/// Timestamp/value pair as returned by Prometheus
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sample(pub f64, pub String);

impl Sample {
    /// Parse the sample value into a finite float
    pub fn parse(&self) -> Result<f64> {
        let value = self
            .1
            .parse::<f64>()
            .map_err(|err| Error::BadResponse(format!("malformed sample value {:?}: {}", self.1, err)))?;

        if !value.is_finite() {
            return Err(Error::BadResponse(format!(
                "non-finite sample value {:?}",
                self.1
            )));
        }
        Ok(value)
    }
}

fn truncate_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() > ERROR_BODY_LIMIT {
        let cut: String = trimmed.chars().take(ERROR_BODY_LIMIT).collect();
        format!("{}...", cut)
    } else {
        trimmed.to_string()
    }
}
