//! Gateway traits for the upstream services.
//!
//! Implemented by [`crate::infrastructure`]; mocked with `mockall` in unit tests.

mod hotel_directory;
mod token_provider;

pub use hotel_directory::HotelDirectory;
pub use token_provider::TokenProvider;

#[cfg(test)]
pub use hotel_directory::MockHotelDirectory;
#[cfg(test)]
pub use token_provider::MockTokenProvider;
