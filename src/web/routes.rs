//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::hotels_handler;
use axum::{Router, routing::get};

/// Public page routes.
///
/// # Endpoints
///
/// - `GET /` - Hotel list, loaded once per request
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/", get(hotels_handler))
}
