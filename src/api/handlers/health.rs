use std::net::{IpAddr, Ipv4Addr};

use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::api::extract::{ValidatedPath, ValidatedQuery};

/// Response body for the health endpoints
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: u16,
    pub status_message: String,
    /// UTC, ISO-8601 with a trailing `Z`
    pub timestamp: String,
    pub ip_address: String,
    pub echo: Option<String>,
    pub path_echo: Option<String>,
}

/// Optional `?echo=` parameter
#[derive(Debug, Default, Deserialize)]
pub struct EchoQuery {
    pub echo: Option<String>,
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check(ValidatedQuery(query): ValidatedQuery<EchoQuery>) -> Json<HealthResponse> {
    Json(make_health(query.echo, None).await)
}

/// Health check that echoes a path segment
///
/// GET /health/:path_echo
pub async fn health_check_with_path(
    ValidatedPath(path_echo): ValidatedPath<String>,
    ValidatedQuery(query): ValidatedQuery<EchoQuery>,
) -> Json<HealthResponse> {
    Json(make_health(query.echo, Some(path_echo)).await)
}

/// Welcome message
///
/// GET /
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the Person/Address API."
    }))
}

async fn make_health(echo: Option<String>, path_echo: Option<String>) -> HealthResponse {
    HealthResponse {
        status: 200,
        status_message: "OK".to_string(),
        timestamp: Utc::now().format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
        ip_address: host_ip_address().await.to_string(),
        echo,
        path_echo,
    }
}

/// Address the local host name resolves to
///
/// Prefers IPv4. Falls back to loopback when the name does not resolve.
async fn host_ip_address() -> IpAddr {
    let hostname = local_hostname();

    let resolved = tokio::net::lookup_host((hostname.as_str(), 0)).await;
    let ip = match resolved {
        Ok(addrs) => pick_address(addrs.map(|addr| addr.ip())),
        Err(e) => {
            tracing::debug!(%hostname, error = %e, "host name did not resolve");
            None
        }
    };

    ip.unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST))
}

fn local_hostname() -> String {
    let name = gethostname::gethostname().to_string_lossy().trim().to_string();
    if name.is_empty() {
        "localhost".to_string()
    } else {
        name
    }
}

fn pick_address(addrs: impl Iterator<Item = IpAddr>) -> Option<IpAddr> {
    let addrs: Vec<IpAddr> = addrs.collect();
    addrs
        .iter()
        .find(|ip| ip.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
}
