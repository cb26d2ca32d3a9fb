//! Gateway trait for the hotels API.

use crate::domain::entities::{AccessToken, Hotel};
use crate::error::FetchError;
use async_trait::async_trait;

/// Lists hotel records on behalf of a bearer token.
///
/// # Implementations
///
/// - [`crate::infrastructure::HttpHotelDirectory`] - `GET /users` over HTTP
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HotelDirectory: Send + Sync {
    /// Returns every hotel, in the order the API sent them.
    ///
    /// # Errors
    ///
    /// Returns a hotels-API [`FetchError`] on transport failure, non-2xx
    /// status, or a body that is not an array of hotel records.
    async fn list_hotels(&self, token: &AccessToken) -> Result<Vec<Hotel>, FetchError>;
}
