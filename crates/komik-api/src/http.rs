//! Process-wide HTTP client shared by every service client.

use std::sync::LazyLock;

use reqwest::Client;

/// User agent sent with API requests.
pub const USER_AGENT: &str = concat!("komik/", env!("CARGO_PKG_VERSION"));

static SHARED: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!("HTTP client builder failed, using defaults: {e}");
            Client::new()
        })
});

/// Handle to the shared client. Cloning is cheap; the connection pool is shared.
pub fn shared_client() -> Client {
    SHARED.clone()
}
