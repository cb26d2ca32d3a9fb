//! Hotels API client.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::domain::entities::{AccessToken, Hotel};
use crate::domain::gateways::HotelDirectory;
use crate::error::FetchError;
use crate::infrastructure::http::error_body;

/// Lists hotels through `GET <base>/users`.
pub struct HttpHotelDirectory {
    http: Client,
    users_url: Url,
}

impl HttpHotelDirectory {
    /// Creates a client for the hotels API rooted at `base`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base` cannot carry a path.
    pub fn new(http: Client, base: &Url) -> Result<Self> {
        Ok(Self {
            http,
            users_url: users_endpoint(base)?,
        })
    }

    pub fn users_url(&self) -> &Url {
        &self.users_url
    }
}

/// Builds `<base>/users`, ignoring a trailing slash on `base`.
pub fn users_endpoint(base: &Url) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| anyhow!("Hotels API URL cannot be a base: '{}'", base))?
        .pop_if_empty()
        .push("users");
    Ok(url)
}

#[async_trait]
impl HotelDirectory for HttpHotelDirectory {
    async fn list_hotels(&self, token: &AccessToken) -> Result<Vec<Hotel>, FetchError> {
        debug!(url = %self.users_url, "Fetching hotel list");

        let response = self
            .http
            .get(self.users_url.clone())
            .bearer_auth(token.as_str())
            .send()
            .await
            .map_err(FetchError::HotelsTransport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HotelsRejected {
                status: status.as_u16(),
                body: error_body(response).await,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(FetchError::HotelsTransport)?;

        let hotels: Vec<Hotel> = serde_json::from_slice(&body)
            .map_err(|e| FetchError::MalformedHotels(e.to_string()))?;

        debug!(count = hotels.len(), "Hotel list received");

        Ok(hotels)
    }
}
