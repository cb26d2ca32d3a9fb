//! Application layer orchestrating the hotel list load.
//!
//! # Components
//!
//! - [`services::hotel_service::HotelService`] - Token request followed by the hotel list request
//! - [`controller::HotelListController`] - Runs a load per mount and owns the view state

pub mod controller;
pub mod services;
