//! Hotel list page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::application::controller::ViewState;
use crate::domain::entities::Hotel;
use crate::state::AppState;

/// Template for the hotel list page.
///
/// Renders `templates/hotels.html` with:
/// - The error message in a red paragraph, when present
/// - One list item per hotel, `"{name} - {city}"`
#[derive(Template, WebTemplate)]
#[template(path = "hotels.html")]
pub struct HotelsTemplate {
    pub hotels: Vec<Hotel>,
    pub error: Option<String>,
}

impl From<ViewState> for HotelsTemplate {
    fn from(view: ViewState) -> Self {
        Self {
            hotels: view.hotels,
            error: view.error,
        }
    }
}

/// Renders the hotel list page.
///
/// # Endpoint
///
/// `GET /`
///
/// Each request is one mount: a token request followed by a hotel list
/// request. Upstream failures still render the page, with the generic error
/// message in place of the list.
pub async fn hotels_handler(State(state): State<AppState>) -> impl IntoResponse {
    HotelsTemplate::from(state.controller.mount().await)
}
