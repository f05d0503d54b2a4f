//! Health-check contract of the launched service
//!
//! The service answers `GET /health` with `{"status": "healthy"}`. The
//! contract belongs to the service, so anything else is reported verbatim
//! instead of being interpreted.

use std::time::Duration;

use serde::Deserialize;

use crate::{Error, Result};

pub const HEALTH_PATH: &str = "/health";
pub const HEALTHY: &str = "healthy";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Body of a `/health` response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Result of probing the health endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthReport {
    Healthy,
    /// Well-formed answer with a status other than `healthy`
    Unhealthy { status: String },
    /// Non-2xx status or a body that does not match the contract
    BadResponse { http_status: u16, body: String },
    /// Nothing answered on the port, or the answer was cut off
    Unreachable { message: String },
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy)
    }

    /// Classify a raw HTTP response.
    pub fn classify(http_status: u16, body: &str) -> Self {
        if !(200..300).contains(&http_status) {
            return Self::BadResponse {
                http_status,
                body: body.to_string(),
            };
        }
        match serde_json::from_str::<HealthResponse>(body) {
            Ok(resp) if resp.status == HEALTHY => Self::Healthy,
            Ok(resp) => Self::Unhealthy {
                status: resp.status,
            },
            Err(_) => Self::BadResponse {
                http_status,
                body: body.to_string(),
            },
        }
    }
}

impl std::fmt::Display for HealthReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Healthy => write!(f, "healthy"),
            Self::Unhealthy { status } => write!(f, "service reports status '{status}'"),
            Self::BadResponse { http_status, body } => {
                write!(f, "unexpected response (HTTP {http_status}): {}", body.trim())
            }
            Self::Unreachable { message } => write!(f, "unreachable: {message}"),
        }
    }
}

/// URL of the health endpoint for a service on `port` of this machine.
pub fn health_url(port: u16) -> String {
    format!("http://localhost:{port}{HEALTH_PATH}")
}

/// Issue `GET url` and classify the answer.
///
/// Connection failures and timeouts are a report ([`HealthReport::Unreachable`]),
/// not an error; only failing to build the client is.
pub async fn probe(url: &str, timeout: Duration) -> Result<HealthReport> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .no_proxy()
        .build()
        .map_err(|e| Error::HealthProbe {
            url: url.to_string(),
            message: e.to_string(),
        })?;

    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!(url, error = %e, "Health probe got no answer");
            return Ok(HealthReport::Unreachable {
                message: e.to_string(),
            });
        }
    };

    let http_status = response.status().as_u16();
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!(url, http_status, error = %e, "Health probe body unreadable");
            return Ok(HealthReport::Unreachable {
                message: format!("HTTP {http_status} response body could not be read: {e}"),
            });
        }
    };
    let report = HealthReport::classify(http_status, &body);
    tracing::debug!(url, http_status, healthy = report.is_healthy(), "Health probe answered");
    Ok(report)
}

/// Operator guidance printed once the service is starting.
pub fn liveness_guidance(port: u16) -> String {
    format!(
        "Service starting on http://localhost:{port}\n  \
         Verify with: curl {url}  (expects {{\"status\": \"{HEALTHY}\"}})",
        url = health_url(port)
    )
}

/// Operator guidance printed when the service exits with a failure.
///
/// The launcher never inspects the service's output; this only lists the
/// usual remedies for a port that is already taken.
pub fn port_conflict_guidance(port: u16) -> String {
    let finder = if cfg!(windows) {
        format!("netstat -ano | findstr :{port}")
    } else {
        format!("lsof -i :{port}")
    };
    format!(
        "If the output above reports that port {port} is already in use:\n  \
         - find and stop the process holding it: {finder}\n  \
         - or set PORT to a free port in the configuration file, and point the \
         frontend's agent endpoint at http://localhost:<PORT>"
    )
}
