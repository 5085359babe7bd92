use reqwest::Client;
use std::time::Duration;

/// Connect timeout shared by every outbound probe request.
pub const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Client used by every check. Per-request timeouts are set by the caller.
pub fn build_probe_client() -> Client {
    build_probe_client_with_timeout(CONNECT_TIMEOUT_SECS)
}

pub fn build_probe_client_with_timeout(connect_timeout_secs: u64) -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .user_agent(concat!("processor-probe/", env!("CARGO_PKG_VERSION")))
        .pool_max_idle_per_host(2)
        .build()
        .unwrap_or_else(|_| Client::new())
}
