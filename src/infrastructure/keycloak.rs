//! Keycloak token client using the OAuth2 resource-owner password grant.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::config::Credentials;
use crate::domain::entities::TokenResponse;
use crate::domain::gateways::TokenProvider;
use crate::error::FetchError;
use crate::infrastructure::http::error_body;

/// Token endpoint client bound to one set of credentials.
pub struct KeycloakClient {
    http: Client,
    credentials: Credentials,
    token_url: Url,
}

impl KeycloakClient {
    /// Creates a client for the realm named in `credentials`.
    ///
    /// # Errors
    ///
    /// Returns an error if the identity provider URL cannot carry a path
    /// (e.g. `mailto:` URLs).
    pub fn new(http: Client, credentials: Credentials) -> Result<Self> {
        let token_url = token_endpoint(&credentials.identity_provider_url, &credentials.realm)?;
        Ok(Self {
            http,
            credentials,
            token_url,
        })
    }

    /// The resolved token endpoint.
    pub fn token_url(&self) -> &Url {
        &self.token_url
    }
}

/// Builds `<base>/realms/<realm>/protocol/openid-connect/token`.
///
/// The realm is percent-encoded as a single path segment and a trailing slash
/// on `base` is ignored.
pub fn token_endpoint(base: &Url, realm: &str) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| anyhow!("Identity provider URL cannot be a base: '{}'", base))?
        .pop_if_empty()
        .extend(["realms", realm, "protocol", "openid-connect", "token"]);
    Ok(url)
}

/// Form fields of the password grant, in submission order.
///
/// `client_secret` is only present when configured.
pub fn token_form(credentials: &Credentials) -> Vec<(&'static str, &str)> {
    let mut form = vec![
        ("grant_type", "password"),
        ("client_id", credentials.client_id.as_str()),
    ];

    if let Some(secret) = &credentials.client_secret {
        form.push(("client_secret", secret.as_str()));
    }

    form.push(("username", credentials.username.as_str()));
    form.push(("password", credentials.password.as_str()));
    form
}

#[async_trait]
impl TokenProvider for KeycloakClient {
    async fn request_token(&self) -> Result<TokenResponse, FetchError> {
        debug!(
            url = %self.token_url,
            client_id = %self.credentials.client_id,
            username = %self.credentials.username,
            "Requesting access token"
        );

        let response = self
            .http
            .post(self.token_url.clone())
            .form(&token_form(&self.credentials))
            .send()
            .await
            .map_err(FetchError::IdentityTransport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::IdentityRejected {
                status: status.as_u16(),
                body: error_body(response).await,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(FetchError::IdentityTransport)?;

        let token: TokenResponse = serde_json::from_slice(&body)
            .map_err(|e| FetchError::MalformedToken(e.to_string()))?;

        debug!(
            token_type = ?token.token_type,
            expires_in = ?token.expires_in,
            "Access token acquired"
        );

        Ok(token)
    }
}
