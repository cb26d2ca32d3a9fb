//! Shared application state injected into handlers.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::application::controller::HotelListController;
use crate::application::services::HotelService;
use crate::config::Config;
use crate::infrastructure::{HttpHotelDirectory, KeycloakClient, http};

/// Controller wired to the real identity provider and hotels API.
pub type PortalController = HotelListController<KeycloakClient, HttpHotelDirectory>;

#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<PortalController>,
}

impl AppState {
    pub fn new(controller: Arc<PortalController>) -> Self {
        Self { controller }
    }

    /// Builds the HTTP client, both gateways and the controller from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or a configured
    /// base URL cannot carry a path.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = http::build_client().context("Failed to build HTTP client")?;

        let tokens = KeycloakClient::new(client.clone(), config.credentials.clone())?;
        let hotels = HttpHotelDirectory::new(client, &config.hotels_api_url)?;
        tracing::debug!(
            token_url = %tokens.token_url(),
            users_url = %hotels.users_url(),
            "Upstream endpoints resolved"
        );

        let service = HotelService::new(Arc::new(tokens), Arc::new(hotels));

        Ok(Self::new(Arc::new(HotelListController::new(service))))
    }
}
