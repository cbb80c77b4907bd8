//! Resilient HTTP client for a pool of Overpass-style endpoints.
//!
//! One logical fetch makes up to `max_attempts` sequential attempts,
//! cycling through the endpoint pool round-robin so failures are
//! reproducible. Attempts are never raced in parallel; predictability is
//! chosen over latency here.

use std::time::Duration;

use reqwest::Client;
use tokio_util::sync::CancellationToken;

use crate::error::OverpassError;
use crate::types::{OverpassResponse, RawElement};

/// Retry and timeout knobs for [`OverpassClient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts per fetch. Clamped to at least 1.
    pub max_attempts: u32,
    /// Hard per-attempt timeout; a timed-out attempt is aborted, counted
    /// as a failure, and followed immediately by the next attempt with no
    /// backoff sleep.
    pub request_timeout: Duration,
    /// Base delay for exponential backoff after a non-timeout failure:
    /// `initial_backoff * 2^attempt`.
    pub initial_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            request_timeout: Duration::from_secs(15),
            initial_backoff: Duration::from_millis(500),
        }
    }
}

/// HTTP client executing provider queries against an endpoint pool with
/// per-attempt timeout, retry, and exponential backoff.
///
/// Invocations share nothing but the connection pool inside `reqwest`;
/// concurrent fetches do not interfere.
pub struct OverpassClient {
    client: Client,
    endpoints: Vec<String>,
    policy: RetryPolicy,
}

impl OverpassClient {
    /// Creates a client over the given endpoint pool.
    ///
    /// # Errors
    ///
    /// - [`OverpassError::NoEndpoints`] — the pool is empty.
    /// - [`OverpassError::Http`] — the underlying `reqwest::Client` cannot
    ///   be constructed.
    pub fn new(
        endpoints: Vec<String>,
        policy: RetryPolicy,
        user_agent: &str,
    ) -> Result<Self, OverpassError> {
        if endpoints.is_empty() {
            return Err(OverpassError::NoEndpoints);
        }
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            endpoints,
            policy: RetryPolicy {
                max_attempts: policy.max_attempts.max(1),
                ..policy
            },
        })
    }

    /// Creates a client from loaded discovery configuration.
    ///
    /// # Errors
    ///
    /// Same as [`OverpassClient::new`].
    pub fn from_config(config: &moodbite_core::DiscoveryConfig) -> Result<Self, OverpassError> {
        Self::new(
            config.overpass_endpoints.clone(),
            RetryPolicy {
                max_attempts: config.overpass_max_attempts,
                request_timeout: Duration::from_secs(config.overpass_request_timeout_secs),
                initial_backoff: Duration::from_millis(config.overpass_initial_backoff_ms),
            },
            &config.user_agent,
        )
    }

    /// Executes one provider query, retrying across the endpoint pool.
    ///
    /// Attempt `n` targets `endpoints[n % len]`. The first success returns
    /// immediately. A timed-out attempt falls straight through to the next
    /// endpoint; any other failure sleeps the backoff delay first, if
    /// attempts remain.
    ///
    /// # Errors
    ///
    /// - [`OverpassError::AllProvidersExhausted`] — every attempt failed;
    ///   carries the last underlying error.
    /// - [`OverpassError::Cancelled`] — `cancel` fired before or during an
    ///   attempt or backoff sleep.
    pub async fn fetch(
        &self,
        query: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<RawElement>, OverpassError> {
        let mut attempt = 0u32;
        loop {
            if cancel.is_cancelled() {
                return Err(OverpassError::Cancelled);
            }
            let endpoint = &self.endpoints[attempt as usize % self.endpoints.len()];

            let outcome = tokio::select! {
                () = cancel.cancelled() => return Err(OverpassError::Cancelled),
                result = self.attempt(endpoint, query) => result,
            };

            let err = match outcome {
                Ok(elements) => {
                    tracing::debug!(
                        attempt,
                        endpoint = %endpoint,
                        count = elements.len(),
                        "overpass fetch succeeded"
                    );
                    return Ok(elements);
                }
                Err(err) => err,
            };

            tracing::warn!(attempt, endpoint = %endpoint, error = %err, "overpass attempt failed");

            let timed_out = err.is_attempt_timeout();
            attempt += 1;
            if attempt >= self.policy.max_attempts {
                return Err(OverpassError::AllProvidersExhausted {
                    attempts: attempt,
                    source: Box::new(err),
                });
            }

            // Timeouts already spent their whole per-attempt budget; only
            // fast failures back off before the next endpoint.
            if !timed_out {
                let delay = self
                    .policy
                    .initial_backoff
                    .saturating_mul(1u32 << (attempt - 1).min(16));
                tokio::select! {
                    () = cancel.cancelled() => return Err(OverpassError::Cancelled),
                    () = tokio::time::sleep(delay) => {}
                }
            }
        }
    }

    /// One POST to one endpoint, with the hard per-attempt timeout.
    async fn attempt(&self, endpoint: &str, query: &str) -> Result<Vec<RawElement>, OverpassError> {
        let response = self
            .client
            .post(endpoint)
            .timeout(self.policy.request_timeout)
            .form(&[("data", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OverpassError::UnexpectedStatus {
                status: status.as_u16(),
                endpoint: endpoint.to_owned(),
            });
        }

        let body = response.text().await?;
        let parsed: OverpassResponse =
            serde_json::from_str(&body).map_err(|e| OverpassError::Deserialize {
                endpoint: endpoint.to_owned(),
                source: e,
            })?;

        Ok(parsed.elements)
    }
}
