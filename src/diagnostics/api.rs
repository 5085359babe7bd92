use crate::auth::{
    IdentityResponse, UserIdentity, api_base_url, fetch_identity, is_unreachable,
    refresh_session_token,
};
use crate::config::{ApiSettings, RunConfiguration};
use crate::security::Secret;
use reqwest::{Client, StatusCode};
use std::fmt;
use tracing::{error, info, warn};

/// Outcome of the authenticated API check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiCheck {
    /// Skipped: no credentials, no host, or no connection. Not an error.
    NotRun,
    Passed,
    /// A definitive rejection. Fatal.
    Failed,
}

impl ApiCheck {
    pub fn is_failure(self) -> bool {
        matches!(self, Self::Failed)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NotRun => "NOT RUN",
            Self::Passed => "PASS",
            Self::Failed => "FAIL",
        }
    }
}

impl fmt::Display for ApiCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub async fn check_authenticated_api(
    config: &RunConfiguration,
    settings: &ApiSettings,
    client: &Client,
) -> ApiCheck {
    info!("=== TEST: Authenticated API ===");

    let Some(token) = config.session_token() else {
        info!("  SKIP: no session token configured");
        return ApiCheck::NotRun;
    };
    if config.api_host.trim().is_empty() {
        info!("  SKIP: no API host configured");
        return ApiCheck::NotRun;
    }

    let base = match api_base_url(&config.api_host) {
        Ok(base) => base,
        Err(e) => {
            error!(host = %config.api_host, error = %e, "  API host is not a valid URL: {e}");
            return ApiCheck::Failed;
        }
    };
    let url = format!("{base}{}", settings.user_path);
    info!(url = %url, token = %token, "  GET {url}");

    let first = match fetch_identity(client, &url, token, settings.timeout()).await {
        Ok(response) => response,
        Err(e) if is_unreachable(&e) => {
            info!(error = %e, "  API unreachable ({e}); expected without outbound network");
            return ApiCheck::NotRun;
        }
        Err(e) => {
            error!(error = %e, "  API request failed: {e}");
            return ApiCheck::Failed;
        }
    };

    match first {
        IdentityResponse::Accepted(identity) => {
            log_identity(&identity);
            ApiCheck::Passed
        }
        IdentityResponse::Rejected(StatusCode::UNAUTHORIZED) => {
            retry_with_refresh(config, settings, client, &base, &url).await
        }
        IdentityResponse::Rejected(status) => {
            error!(status = status.as_u16(), "  API check: FAIL (status {})", status.as_u16());
            ApiCheck::Failed
        }
    }
}

async fn retry_with_refresh(
    config: &RunConfiguration,
    settings: &ApiSettings,
    client: &Client,
    base: &str,
    url: &str,
) -> ApiCheck {
    let Some(refresh_token) = config.refresh_token() else {
        error!("  API check: FAIL (401, no refresh token configured)");
        return ApiCheck::Failed;
    };

    warn!("  Session token rejected (401); refreshing");
    let Some(new_token) = refresh_session_token(client, base, refresh_token, settings).await
    else {
        error!("  API check: FAIL (401, token refresh failed)");
        return ApiCheck::Failed;
    };

    retry_identity(client, url, &new_token, settings).await
}

async fn retry_identity(
    client: &Client,
    url: &str,
    token: &Secret,
    settings: &ApiSettings,
) -> ApiCheck {
    match fetch_identity(client, url, token, settings.timeout()).await {
        Ok(IdentityResponse::Accepted(identity)) => {
            info!("  Retry with refreshed token succeeded");
            log_identity(&identity);
            ApiCheck::Passed
        }
        Ok(IdentityResponse::Rejected(status)) => {
            error!(
                status = status.as_u16(),
                "  API check: FAIL (status {} after refresh)",
                status.as_u16()
            );
            ApiCheck::Failed
        }
        Err(e) => {
            error!(error = %e, "  API check: FAIL (retry after refresh: {e})");
            ApiCheck::Failed
        }
    }
}

fn log_identity(identity: &UserIdentity) {
    let email = identity.email.as_deref().unwrap_or("(unknown)");
    let id = identity.id.as_deref().unwrap_or("(unknown)");
    let name = identity.display_name();
    info!(email, name = %name, id, "  API check: PASS (user {name} <{email}>, id {id})");
    if let Some(org) = identity.preferred_organization.as_deref() {
        info!(organization = org, "  Preferred organization: {org}");
    }
}
