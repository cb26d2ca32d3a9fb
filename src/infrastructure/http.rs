//! Shared HTTP client for upstream calls.

use reqwest::Client;
use tracing::debug;

/// `User-Agent` sent with every upstream request.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Builds the client shared by the identity provider and hotels API gateways.
///
/// Timeouts are left at the `reqwest` defaults.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn build_client() -> reqwest::Result<Client> {
    Client::builder().user_agent(USER_AGENT).build()
}

/// Reads an error response body for diagnostics, falling back to an empty
/// string when the body itself cannot be read.
pub(crate) async fn error_body(response: reqwest::Response) -> String {
    let url = response.url().clone();
    match response.text().await {
        Ok(body) => body,
        Err(e) => {
            debug!(%url, error = %e, "Failed to read error response body");
            String::new()
        }
    }
}
