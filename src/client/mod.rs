//! Remote service client with fail-open fallback
//!
//! One [`RemoteClient`] per named downstream. Every call is timeout-bounded
//! and admitted through a bulkhead; any non-success outcome (transport
//! failure, non-2xx status, undecodable body, bulkhead full) is routed to the
//! caller-supplied fallback instead of propagating an error. No automatic
//! retries: a degraded dependency is served its fallback, not a retry storm.

pub mod department;

pub use department::DepartmentClient;

use crate::config::DownstreamConfig;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;

/// Why a downstream call did not produce a typed result. Internal to the
/// client; callers only ever see the fallback value.
#[derive(Debug)]
pub enum CallError {
    /// Timeout, connection refused, DNS failure
    Transport(reqwest::Error),
    /// Remote answered with a non-success status
    Status(StatusCode),
    /// Remote answered 2xx but the body did not decode
    Decode(reqwest::Error),
    /// All bulkhead slots are taken
    BulkheadFull,
    /// The spawned call was aborted before completing
    Canceled,
}

impl std::fmt::Display for CallError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CallError::Transport(e) => write!(f, "transport failure: {}", e),
            CallError::Status(status) => write!(f, "remote failure: status {}", status),
            CallError::Decode(e) => write!(f, "undecodable response: {}", e),
            CallError::BulkheadFull => write!(f, "bulkhead full"),
            CallError::Canceled => write!(f, "call canceled"),
        }
    }
}

/// Typed, timeout-bounded HTTP client to one named downstream service.
#[derive(Clone)]
pub struct RemoteClient {
    name: &'static str,
    base_url: String,
    http: reqwest::Client,
    bulkhead: Arc<Semaphore>,
}

impl RemoteClient {
    pub fn new(name: &'static str, config: &DownstreamConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            name,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
            bulkhead: Arc::new(Semaphore::new(config.max_concurrent_calls)),
        }
    }

    /// GET `path` and decode the JSON body.
    ///
    /// The request runs in its own task that owns the bulkhead permit, so the
    /// slot is released when the call completes even if the inbound request
    /// that triggered it has been cancelled.
    pub async fn get_json<T>(&self, path: &str) -> Result<T, CallError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let permit = match self.bulkhead.clone().try_acquire_owned() {
            Ok(permit) => permit,
            Err(_) => return Err(CallError::BulkheadFull),
        };

        let url = format!("{}{}", self.base_url, path);
        let http = self.http.clone();

        let call = tokio::spawn(async move {
            let _permit = permit;

            let response = http.get(&url).send().await.map_err(CallError::Transport)?;
            if !response.status().is_success() {
                return Err(CallError::Status(response.status()));
            }
            response.json::<T>().await.map_err(CallError::Decode)
        });

        call.await.unwrap_or(Err(CallError::Canceled))
    }

    /// GET `path`, substituting `fallback()` for any failure. Fail-open: the
    /// caller never observes an error.
    pub async fn get_with_fallback<T, F>(&self, path: &str, fallback: F) -> T
    where
        T: DeserializeOwned + Send + 'static,
        F: FnOnce() -> T,
    {
        match self.get_json(path).await {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(
                    downstream = self.name,
                    path,
                    "downstream call failed, using fallback: {}",
                    err
                );
                fallback()
            }
        }
    }
}
