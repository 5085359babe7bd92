use crate::security::Secret;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

/// Display fields of the authenticated user. All optional; the backend may
/// omit any of them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub preferred_organization: Option<String>,
}

impl UserIdentity {
    pub fn display_name(&self) -> String {
        let name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if name.is_empty() {
            "(unknown)".to_string()
        } else {
            name
        }
    }
}

/// What the identity endpoint said about a credential.
#[derive(Debug, Clone)]
pub enum IdentityResponse {
    Accepted(UserIdentity),
    Rejected(StatusCode),
}

/// Normalize a configured backend host into a base URL without a trailing
/// slash. Hosts without a scheme are assumed to be HTTPS.
pub fn api_base_url(host: &str) -> Result<String, url::ParseError> {
    let trimmed = host.trim();
    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };
    let parsed = url::Url::parse(&candidate)?;
    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

/// GET the identity endpoint with `token` as a bearer credential.
///
/// Transport errors are returned as-is so the caller can tell "no
/// connectivity" apart from a definitive rejection.
pub async fn fetch_identity(
    client: &Client,
    url: &str,
    token: &Secret,
    timeout: Duration,
) -> Result<IdentityResponse, reqwest::Error> {
    let resp = client
        .get(url)
        .timeout(timeout)
        .bearer_auth(token.expose())
        .send()
        .await?;

    let status = resp.status();
    if status != StatusCode::OK {
        return Ok(IdentityResponse::Rejected(status));
    }

    let identity = match resp.json::<UserIdentity>().await {
        Ok(identity) => identity,
        Err(e) => {
            tracing::debug!(error = %e, "identity body was not the expected shape");
            UserIdentity::default()
        }
    };
    Ok(IdentityResponse::Accepted(identity))
}

/// The connection could not be established at all. A request that connected
/// and then timed out is a broken exchange with a reachable backend.
pub fn is_unreachable(err: &reqwest::Error) -> bool {
    err.is_connect()
}
