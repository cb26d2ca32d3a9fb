//! Access token obtained through the OAuth2 password grant.

use serde::Deserialize;
use std::fmt;

/// Opaque bearer credential.
///
/// Lives only for the duration of one load sequence. `Debug` never prints
/// the value.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Successful response of the token endpoint.
///
/// `access_token` is mandatory; the remaining standard fields are parsed
/// when the identity provider sends them and only feed the logs.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: AccessToken,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub scope: Option<String>,
}

impl TokenResponse {
    /// Builds a response carrying only an access token.
    pub fn bearer(access_token: impl Into<String>) -> Self {
        Self {
            access_token: AccessToken::new(access_token),
            token_type: Some("Bearer".to_string()),
            expires_in: None,
            scope: None,
        }
    }
}
