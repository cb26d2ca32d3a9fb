mod common;

use common::{TOKEN_PATH, credentials, mount_token, mount_token_error};
use hotel_portal::domain::gateways::TokenProvider;
use hotel_portal::error::{FetchError, FetchStage};
use hotel_portal::infrastructure::{KeycloakClient, http};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(idp: &MockServer, secret: Option<&str>) -> KeycloakClient {
    KeycloakClient::new(http::build_client().unwrap(), credentials(&idp.uri(), secret)).unwrap()
}

#[tokio::test]
async fn test_password_grant_form_without_secret() {
    let idp = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string(
            "grant_type=password&client_id=app&username=u&password=p",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"access_token":"T1"}"#))
        .expect(1)
        .mount(&idp)
        .await;

    let token = client(&idp, None).request_token().await.unwrap();

    assert_eq!(token.access_token.as_str(), "T1");
}

#[tokio::test]
async fn test_password_grant_form_with_secret() {
    let idp = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_string(
            "grant_type=password&client_id=app&client_secret=s3cret&username=u&password=p",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"access_token":"T2"}"#))
        .expect(1)
        .mount(&idp)
        .await;

    let token = client(&idp, Some("s3cret")).request_token().await.unwrap();

    assert_eq!(token.access_token.as_str(), "T2");
}

#[tokio::test]
async fn test_form_values_are_urlencoded() {
    let idp = MockServer::start().await;
    mount_token(&idp, "T1").await;

    let mut creds = credentials(&idp.uri(), None);
    creds.password = "p&ss word=1".to_string();
    let client = KeycloakClient::new(http::build_client().unwrap(), creds).unwrap();

    client.request_token().await.unwrap();

    let requests = idp.received_requests().await.unwrap();
    let body = String::from_utf8(requests[0].body.clone()).unwrap();
    assert!(body.ends_with("password=p%26ss+word%3D1"));
    assert!(!body.contains("client_secret"));
}

#[tokio::test]
async fn test_rejected_credentials() {
    let idp = MockServer::start().await;
    mount_token_error(&idp, 401).await;

    let err = client(&idp, None).request_token().await.unwrap_err();

    assert_eq!(err.stage(), FetchStage::IdentityProvider);
    match err {
        FetchError::IdentityRejected { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("invalid_grant"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_response_without_access_token() {
    let idp = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"token_type":"Bearer"}"#))
        .mount(&idp)
        .await;

    let err = client(&idp, None).request_token().await.unwrap_err();

    assert!(matches!(err, FetchError::MalformedToken(_)));
}

#[tokio::test]
async fn test_unreachable_identity_provider() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let closed = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    let creds = credentials(&closed, None);

    let client = KeycloakClient::new(http::build_client().unwrap(), creds).unwrap();
    let err = client.request_token().await.unwrap_err();

    assert!(matches!(err, FetchError::IdentityTransport(_)));
    assert_eq!(err.stage(), FetchStage::IdentityProvider);
}
