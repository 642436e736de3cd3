use super::*;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use session::{ErrorResponse, INVALID_CREDENTIALS_MESSAGE, TokenResponse};

async fn stub_login(Json(credential): Json<Credential>) -> Response {
    match (credential.username.as_str(), credential.password.as_str()) {
        ("user", "password123") => Json(TokenResponse { token: "mock-token-123456".to_owned() }).into_response(),
        ("boom", _) => (StatusCode::INTERNAL_SERVER_ERROR, "oops").into_response(),
        _ => {
            let body = ErrorResponse { message: INVALID_CREDENTIALS_MESSAGE.to_owned() };
            (StatusCode::UNAUTHORIZED, Json(body)).into_response()
        }
    }
}

/// Serve a stand-in validator on an ephemeral port and return its base URL.
pub(crate) async fn spawn_stub_validator() -> String {
    let app = Router::new()
        .route("/login", post(stub_login))
        .route("/healthz", get(|| async { StatusCode::OK }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[test]
fn new_rejects_relative_base_url() {
    assert!(matches!(AuthClient::new("localhost"), Err(CliError::InvalidBaseUrl(_))));
}

#[test]
fn endpoint_joins_without_double_slash() {
    let client = AuthClient::new("http://127.0.0.1:5000/").unwrap();
    assert_eq!(client.endpoint("/login"), "http://127.0.0.1:5000/login");
}

#[tokio::test]
async fn login_returns_token_on_match() {
    let client = AuthClient::new(&spawn_stub_validator().await).unwrap();
    let token = client.login(&Credential::new("user", "password123")).await.unwrap();
    assert_eq!(token, "mock-token-123456");
}

#[tokio::test]
async fn login_surfaces_unauthorized_message() {
    let client = AuthClient::new(&spawn_stub_validator().await).unwrap();
    let err = client.login(&Credential::new("user", "wrong")).await.unwrap_err();
    assert!(err.is_invalid_credentials());
    assert_eq!(err.user_message(), "Invalid username or password");
}

#[tokio::test]
async fn login_server_error_without_json_is_generic() {
    let client = AuthClient::new(&spawn_stub_validator().await).unwrap();
    let err = client.login(&Credential::new("boom", "x")).await.unwrap_err();
    assert_eq!(err, LoginError::Rejected { status: 500, message: None });
}

#[tokio::test]
async fn login_unreachable_server_is_network_error() {
    let client = AuthClient::new("http://127.0.0.1:1").unwrap();
    let err = client.login(&Credential::new("user", "password123")).await.unwrap_err();
    assert!(matches!(err, LoginError::Network(_)));
}

#[tokio::test]
async fn ping_succeeds_against_live_server() {
    let client = AuthClient::new(&spawn_stub_validator().await).unwrap();
    client.ping().await.unwrap();
}
