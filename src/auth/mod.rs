pub mod identity;
pub mod refresh;

pub use identity::{IdentityResponse, UserIdentity, api_base_url, fetch_identity, is_unreachable};
pub use refresh::{IdentityProviderConfig, refresh_session_token, token_endpoint};
