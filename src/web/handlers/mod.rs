//! HTML template rendering handlers.

mod hotels;

pub use hotels::{HotelsTemplate, hotels_handler};
