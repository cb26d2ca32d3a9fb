//! Infrastructure layer for external integrations.
//!
//! Implements the gateway traits defined by the domain layer on top of a
//! shared `reqwest` client.
//!
//! # Modules
//!
//! - [`http`] - Shared HTTP client construction
//! - [`keycloak`] - OAuth2 password grant against a Keycloak realm
//! - [`hotels_api`] - Hotel list retrieval with a bearer token

pub mod hotels_api;
pub mod http;
pub mod keycloak;

pub use hotels_api::HttpHotelDirectory;
pub use keycloak::KeycloakClient;
