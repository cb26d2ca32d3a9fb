//! Hotel list load sequence.

use std::sync::Arc;

use crate::domain::entities::Hotel;
use crate::domain::gateways::{HotelDirectory, TokenProvider};
use crate::error::FetchError;

/// Service that obtains a token and then lists hotels with it.
///
/// The two calls are strictly sequential; the hotels API is never contacted
/// when the token request fails. The token is dropped as soon as the list
/// request completes.
pub struct HotelService<T: TokenProvider, H: HotelDirectory> {
    tokens: Arc<T>,
    hotels: Arc<H>,
}

impl<T: TokenProvider, H: HotelDirectory> HotelService<T, H> {
    /// Creates a new hotel service.
    pub fn new(tokens: Arc<T>, hotels: Arc<H>) -> Self {
        Self { tokens, hotels }
    }

    /// Runs the full load sequence.
    ///
    /// # Errors
    ///
    /// Returns the first [`FetchError`] encountered, unchanged.
    pub async fn load_hotels(&self) -> Result<Vec<Hotel>, FetchError> {
        let token = self.tokens.request_token().await?;
        self.hotels.list_hotels(&token.access_token).await
    }
}
