//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Hotel`] - A hotel record as returned by the hotels API
//! - [`TokenResponse`] - The identity provider's answer to a password grant
//! - [`AccessToken`] - The opaque bearer credential inside it

pub mod hotel;
pub mod token;

pub use hotel::Hotel;
pub use token::{AccessToken, TokenResponse};
