//! Gateway trait for the identity provider.

use crate::domain::entities::TokenResponse;
use crate::error::FetchError;
use async_trait::async_trait;

/// Exchanges the configured resource-owner credentials for an access token.
///
/// Credentials are bound at construction time, so a call takes no arguments.
///
/// # Implementations
///
/// - [`crate::infrastructure::KeycloakClient`] - OAuth2 password grant over HTTP
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Requests a fresh token.
    ///
    /// # Errors
    ///
    /// Returns an identity-provider [`FetchError`] when the endpoint is
    /// unreachable, answers with a non-2xx status, or sends a body without
    /// `access_token`.
    async fn request_token(&self) -> Result<TokenResponse, FetchError>;
}
