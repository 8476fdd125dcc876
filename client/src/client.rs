//! HTTP client for the dice service's fairness endpoint.

use crate::{ClientError, RollSource};

use fairroll_types::RollRecord;
use std::time::Duration;
use tracing::{debug, info};

/// Public dice service.
pub const DEFAULT_BASE_URL: &str = "https://intus.co";

/// Default timeout for a roll request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default connection timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for the dice service.
///
/// Sends `GET {base_url}/dice/{address}/fair/{request_id}` and parses the
/// JSON roll record in the response.
pub struct RollClient {
    /// Base URL without a trailing slash.
    base_url: String,
    /// HTTP client (reusable connection pool).
    http_client: reqwest::Client,
}

impl RollClient {
    /// Create a client for the public dice service with default timeouts.
    pub fn new() -> Self {
        Self::with_timeouts(DEFAULT_BASE_URL, DEFAULT_TIMEOUT, DEFAULT_CONNECT_TIMEOUT)
    }

    /// Create a client pointing at a custom service URL.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_timeouts(base_url, DEFAULT_TIMEOUT, DEFAULT_CONNECT_TIMEOUT)
    }

    /// Create a client with a custom URL, request timeout and connect timeout.
    pub fn with_timeouts(base_url: &str, timeout: Duration, connect_timeout: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .unwrap_or_default();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The fairness URL of one roll.
    pub fn roll_url(&self, address: &str, request_id: i64) -> Result<String, ClientError> {
        if address.is_empty() {
            return Err(ClientError::InvalidRequest("address is empty".into()));
        }
        if address.contains(['/', '?', '#']) {
            return Err(ClientError::InvalidRequest(format!(
                "address {address:?} contains URL delimiters"
            )));
        }
        if request_id < 0 {
            return Err(ClientError::InvalidRequest(format!(
                "request ID {request_id} is negative"
            )));
        }
        Ok(format!(
            "{}/dice/{}/fair/{}",
            self.base_url, address, request_id
        ))
    }

    /// Fetch the disclosed record of a roll.
    pub async fn fetch(&self, address: &str, request_id: i64) -> Result<RollRecord, ClientError> {
        let url = self.roll_url(address, request_id)?;
        info!("connecting to {url}");

        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ClientError::RequestFailed(format!(
                "server response {}",
                response.status()
            )));
        }

        let record: RollRecord = response.json().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::from(e)
            } else {
                ClientError::InvalidResponse(format!("failed to parse roll record: {e}"))
            }
        })?;
        debug!(
            server_hash = %record.server_hash,
            client_rand = %record.client_rand,
            "received roll record"
        );
        Ok(record)
    }
}

impl Default for RollClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RollSource for RollClient {
    async fn fetch_roll(&self, address: &str, request_id: i64) -> Result<RollRecord, ClientError> {
        self.fetch(address, request_id).await
    }

    fn name(&self) -> &str {
        "http"
    }
}
