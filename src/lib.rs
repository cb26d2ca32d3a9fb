//! # Hotel Portal
//!
//! A small server-rendered hotel list built with Axum. Each page load logs in
//! to a Keycloak realm with the OAuth2 password grant, lists hotels from the
//! hotels API with the resulting bearer token, and renders them.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Hotel and token entities, gateway traits
//! - **Application Layer** ([`application`]) - Load sequence and view controller
//! - **Infrastructure Layer** ([`infrastructure`]) - `reqwest` clients for Keycloak and the hotels API
//! - **API Layer** ([`api`]) - Health endpoint and middleware
//! - **Web Layer** ([`web`]) - HTML hotel list page
//!
//! ## Quick Start
//!
//! ```bash
//! export KEYCLOAK_URL="http://localhost:8080"
//! export KEYCLOAK_REALM="hotels"
//! export KEYCLOAK_CLIENT_ID="hotel-portal"
//! export KEYCLOAK_USERNAME="alice"
//! export KEYCLOAK_PASSWORD="wonderland"
//!
//! # Serve the page on http://0.0.0.0:3000/
//! cargo run
//!
//! # Or print the list once in the terminal
//! cargo run --bin hotels-fetch
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`]. See [`config`]
//! for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::FetchError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::controller::{
        HotelListController, LOAD_ERROR_MESSAGE, LoadPhase, ViewState,
    };
    pub use crate::application::services::HotelService;
    pub use crate::config::{Config, Credentials};
    pub use crate::domain::entities::{AccessToken, Hotel, TokenResponse};
    pub use crate::domain::gateways::{HotelDirectory, TokenProvider};
    pub use crate::error::{FetchError, FetchStage};
    pub use crate::infrastructure::{HttpHotelDirectory, KeycloakClient};
    pub use crate::state::AppState;
}
