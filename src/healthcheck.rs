//! Probe used by `bfhl healthcheck` inside containers without a shell.

use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::config::configured_port;

const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Error)]
pub enum HealthcheckError {
    #[error("Healthcheck failed: could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Healthcheck failed: request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Healthcheck failed: health endpoint returned status {0}")]
    Status(StatusCode),

    #[error("Healthcheck failed: unreadable health payload: {0}")]
    Payload(#[source] reqwest::Error),

    #[error("Healthcheck failed: server reported is_success=false")]
    Unhealthy,
}

/// The part of the `GET /` payload the probe cares about.
#[derive(Debug, Deserialize)]
struct HealthStatus {
    is_success: bool,
}

/// Probe the server on the configured `PORT`.
pub async fn healthcheck() -> Result<(), HealthcheckError> {
    healthcheck_with_port(configured_port()).await
}

/// Probe `GET /` on `127.0.0.1:<port>` and require `is_success: true`.
pub async fn healthcheck_with_port(port: u16) -> Result<(), HealthcheckError> {
    let client = reqwest::Client::builder()
        .timeout(PROBE_TIMEOUT)
        .build()
        .map_err(HealthcheckError::Client)?;

    let url = format!("http://127.0.0.1:{port}/");
    let resp = client
        .get(&url)
        .send()
        .await
        .map_err(|source| HealthcheckError::Request { url, source })?;

    let status = resp.status();
    if !status.is_success() {
        return Err(HealthcheckError::Status(status));
    }

    let health: HealthStatus = resp.json().await.map_err(HealthcheckError::Payload)?;
    if health.is_success {
        Ok(())
    } else {
        Err(HealthcheckError::Unhealthy)
    }
}
