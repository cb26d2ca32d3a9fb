//! Errors raised while loading the hotel list.
//!
//! Both upstream services fail through the same [`FetchError`] type. The
//! variant keeps the diagnostic detail for the logs; end users only ever see
//! [`crate::application::controller::LOAD_ERROR_MESSAGE`].

use std::fmt;

/// Upstream side that caused a [`FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStage {
    IdentityProvider,
    HotelsApi,
}

impl fmt::Display for FetchStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::IdentityProvider => write!(f, "identity_provider"),
            Self::HotelsApi => write!(f, "hotels_api"),
        }
    }
}

/// Failure of the token request or of the hotel list request.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Identity provider unreachable: {0}")]
    IdentityTransport(#[source] reqwest::Error),

    #[error("Identity provider rejected token request ({status}): {body}")]
    IdentityRejected { status: u16, body: String },

    #[error("Malformed token response: {0}")]
    MalformedToken(String),

    #[error("Hotels API unreachable: {0}")]
    HotelsTransport(#[source] reqwest::Error),

    #[error("Hotels API rejected request ({status}): {body}")]
    HotelsRejected { status: u16, body: String },

    #[error("Malformed hotels response: {0}")]
    MalformedHotels(String),
}

impl FetchError {
    /// Returns which upstream service failed.
    pub fn stage(&self) -> FetchStage {
        match self {
            Self::IdentityTransport(_) | Self::IdentityRejected { .. } | Self::MalformedToken(_) => {
                FetchStage::IdentityProvider
            }
            Self::HotelsTransport(_) | Self::HotelsRejected { .. } | Self::MalformedHotels(_) => {
                FetchStage::HotelsApi
            }
        }
    }

    /// HTTP status returned by the upstream service, if it answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::IdentityRejected { status, .. } | Self::HotelsRejected { status, .. } => {
                Some(*status)
            }
            Self::IdentityTransport(e) | Self::HotelsTransport(e) => {
                e.status().map(|s| s.as_u16())
            }
            Self::MalformedToken(_) | Self::MalformedHotels(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_by_variant() {
        let idp = FetchError::IdentityRejected {
            status: 401,
            body: "{\"error\":\"invalid_grant\"}".to_string(),
        };
        assert_eq!(idp.stage(), FetchStage::IdentityProvider);
        assert_eq!(idp.status(), Some(401));

        let hotels = FetchError::MalformedHotels("expected a sequence".to_string());
        assert_eq!(hotels.stage(), FetchStage::HotelsApi);
        assert_eq!(hotels.status(), None);
    }

    #[test]
    fn test_display_keeps_upstream_body() {
        let err = FetchError::HotelsRejected {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Hotels API rejected request (500): boom");
        assert_eq!(FetchStage::HotelsApi.to_string(), "hotels_api");
    }
}
