//! Domain layer containing the hotel list data model.
//!
//! Defines the entities exchanged with the upstream services and the gateway
//! traits the application layer talks to. Nothing here knows about HTTP
//! clients or rendering.
//!
//! # Architecture
//!
//! - [`entities`] - Hotel records and token responses
//! - [`gateways`] - Identity provider and hotels API trait definitions
//!
//! # Load Flow
//!
//! 1. [`gateways::TokenProvider`] exchanges the configured credentials for a token
//! 2. [`gateways::HotelDirectory`] lists hotels with that token as bearer credential
//! 3. [`crate::application::controller::HotelListController`] turns the outcome into view state

pub mod entities;
pub mod gateways;
