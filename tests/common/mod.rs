#![allow(dead_code)]

use axum::extract::Request;
use axum::{Router, ServiceExt};
use axum_test::TestServer;
use hotel_portal::config::{Config, Credentials};
use hotel_portal::routes::app_router;
use hotel_portal::state::AppState;
use hotel_portal::{api, web};
use serde_json::{Value, json};
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN_PATH: &str = "/realms/hotels/protocol/openid-connect/token";
pub const USERS_PATH: &str = "/users";

/// Fake identity provider and hotels API.
pub struct Upstreams {
    pub idp: MockServer,
    pub hotels: MockServer,
}

impl Upstreams {
    pub async fn start() -> Self {
        Self {
            idp: MockServer::start().await,
            hotels: MockServer::start().await,
        }
    }

    /// Configuration pointing at both fakes, for client `app` as `u`/`p`.
    pub fn config(&self, client_secret: Option<&str>) -> Config {
        Config {
            credentials: credentials(&self.idp.uri(), client_secret),
            hotels_api_url: Url::parse(&self.hotels.uri()).unwrap(),
            listen_addr: "127.0.0.1:0".to_string(),
            log_level: "debug".to_string(),
            log_format: "text".to_string(),
        }
    }

    pub fn state(&self, client_secret: Option<&str>) -> AppState {
        AppState::from_config(&self.config(client_secret)).unwrap()
    }
}

pub fn credentials(idp_url: &str, client_secret: Option<&str>) -> Credentials {
    Credentials {
        identity_provider_url: Url::parse(idp_url).unwrap(),
        realm: "hotels".to_string(),
        client_id: "app".to_string(),
        client_secret: client_secret.map(str::to_string),
        username: "u".to_string(),
        password: "p".to_string(),
    }
}

pub fn grand_hotel() -> Value {
    json!([{ "id": 1, "name": "Grand Hotel", "city": "Paris" }])
}

/// Token endpoint answering `{"access_token": token}`.
pub async fn mount_token(idp: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": token,
            "token_type": "Bearer",
            "expires_in": 300
        })))
        .mount(idp)
        .await;
}

/// Token endpoint answering with `status` and a Keycloak-style error body.
pub async fn mount_token_error(idp: &MockServer, status: u16) {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Invalid user credentials"
        })))
        .mount(idp)
        .await;
}

/// Hotels endpoint answering `body` with status 200.
pub async fn mount_hotels(hotels: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path(USERS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(hotels)
        .await;
}

/// Router with every route, without path normalization.
pub fn test_server(state: AppState) -> TestServer {
    let app = Router::new()
        .merge(web::routes::public_routes())
        .merge(api::routes::public_routes())
        .with_state(state);

    TestServer::new(app).unwrap()
}

/// Production router, with path normalization and request tracing.
pub fn app_server(state: AppState) -> TestServer {
    TestServer::new(ServiceExt::<Request>::into_make_service(app_router(state))).unwrap()
}
