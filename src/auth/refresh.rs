//! Session-token refresh against the identity provider.
//!
//! The backend publishes the provider's client id and region on a public
//! endpoint. The refresh grant is then issued directly against the provider's
//! JSON token API, without a provider SDK.

use crate::config::ApiSettings;
use crate::security::Secret;
use anyhow::{Context, Result, bail};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

const AMZ_TARGET_HEADER: &str = "X-Amz-Target";
const INITIATE_AUTH_TARGET: &str = "AWSCognitoIdentityProviderService.InitiateAuth";
const AMZ_JSON_CONTENT_TYPE: &str = "application/x-amz-json-1.1";
const REFRESH_FLOW: &str = "REFRESH_TOKEN_AUTH";

/// Public identity-provider settings as published by the backend.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityProviderConfig {
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub user_pool: Option<UserPoolConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPoolConfig {
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub app_client_id: Option<String>,
}

impl IdentityProviderConfig {
    pub fn client_id(&self) -> Option<&str> {
        self.user_pool
            .as_ref()
            .and_then(|pool| pool.app_client_id.as_deref())
            .filter(|id| !id.is_empty())
    }

    /// User-pool region, falling back to the top-level region.
    pub fn region(&self) -> Option<&str> {
        self.user_pool
            .as_ref()
            .and_then(|pool| pool.region.as_deref())
            .filter(|r| !r.is_empty())
            .or_else(|| self.region.as_deref().filter(|r| !r.is_empty()))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct InitiateAuthRequest<'a> {
    auth_flow: &'static str,
    client_id: &'a str,
    auth_parameters: RefreshParameters<'a>,
}

#[derive(Debug, Serialize)]
struct RefreshParameters<'a> {
    #[serde(rename = "REFRESH_TOKEN")]
    refresh_token: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct InitiateAuthResponse {
    #[serde(default)]
    authentication_result: Option<AuthenticationResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AuthenticationResult {
    #[serde(default)]
    access_token: Option<String>,
}

/// Regional token endpoint for `region`.
pub fn token_endpoint(region: &str) -> String {
    format!("https://cognito-idp.{region}.amazonaws.com/")
}

/// Exchange `refresh_token` for a new access token.
///
/// Every failure is logged and collapses to `None`; nothing propagates.
pub async fn refresh_session_token(
    client: &Client,
    api_base: &str,
    refresh_token: &Secret,
    settings: &ApiSettings,
) -> Option<Secret> {
    info!("  Attempting session token refresh");
    match try_refresh(client, api_base, refresh_token, settings).await {
        Ok(token) => {
            info!("  Token refresh: PASS");
            Some(token)
        }
        Err(e) => {
            let reason = format!("{e:#}");
            warn!(error = %reason, "  Token refresh: FAIL ({reason})");
            None
        }
    }
}

async fn try_refresh(
    client: &Client,
    api_base: &str,
    refresh_token: &Secret,
    settings: &ApiSettings,
) -> Result<Secret> {
    let provider = fetch_provider_config(client, api_base, settings).await?;
    let client_id = provider
        .client_id()
        .context("identity provider config has no client id")?;
    let endpoint = match (&settings.identity_endpoint, provider.region()) {
        (Some(endpoint), _) => endpoint.clone(),
        (None, Some(region)) => token_endpoint(region),
        (None, None) => bail!("identity provider config has no region"),
    };

    let body = InitiateAuthRequest {
        auth_flow: REFRESH_FLOW,
        client_id,
        auth_parameters: RefreshParameters {
            refresh_token: refresh_token.expose(),
        },
    };
    let resp = client
        .post(&endpoint)
        .timeout(settings.identity_timeout())
        .header(AMZ_TARGET_HEADER, INITIATE_AUTH_TARGET)
        .header(CONTENT_TYPE, AMZ_JSON_CONTENT_TYPE)
        .body(serde_json::to_vec(&body).context("encode refresh request")?)
        .send()
        .await
        .with_context(|| format!("token request to {endpoint}"))?;

    let status = resp.status();
    if !status.is_success() {
        bail!("token endpoint returned status {}", status.as_u16());
    }

    // The provider answers with an x-amz-json content type, so decode by hand.
    let bytes = resp.bytes().await.context("read token response")?;
    let parsed: InitiateAuthResponse =
        serde_json::from_slice(&bytes).context("decode token response")?;
    parsed
        .authentication_result
        .and_then(|result| result.access_token)
        .filter(|token| !token.is_empty())
        .map(Secret::from)
        .context("token response has no access token")
}

async fn fetch_provider_config(
    client: &Client,
    api_base: &str,
    settings: &ApiSettings,
) -> Result<IdentityProviderConfig> {
    let url = format!("{api_base}{}", settings.identity_config_path);
    let resp = client
        .get(&url)
        .timeout(settings.identity_timeout())
        .send()
        .await
        .with_context(|| format!("fetch identity provider config from {url}"))?;

    let status = resp.status();
    if !status.is_success() {
        bail!("identity provider config returned status {}", status.as_u16());
    }
    resp.json::<IdentityProviderConfig>()
        .await
        .context("decode identity provider config")
}
