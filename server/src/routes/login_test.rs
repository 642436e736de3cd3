use super::*;
use axum::body::{Body, to_bytes};
use axum::http::{Request, header};
use tower::ServiceExt;

use crate::routes::api_routes;

async fn body_json(resp: Response) -> serde_json::Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_login(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

// =============================================================================
// handler
// =============================================================================

#[tokio::test]
async fn matching_pair_returns_token() {
    let resp = login(State(AppState::mock()), Ok(Json(Credential::new("user", "password123")))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, serde_json::json!({"token": "mock-token-123456"}));
}

#[tokio::test]
async fn wrong_password_returns_unauthorized_message() {
    let resp = login(State(AppState::mock()), Ok(Json(Credential::new("user", "wrong")))).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(resp).await, serde_json::json!({"message": "Invalid username or password"}));
}

#[tokio::test]
async fn wrong_username_returns_unauthorized() {
    let resp = login(State(AppState::mock()), Ok(Json(Credential::new("root", "password123")))).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

// =============================================================================
// router
// =============================================================================

#[tokio::test]
async fn router_accepts_valid_login() {
    let resp = api_routes(AppState::mock())
        .oneshot(post_login(r#"{"username":"user","password":"password123"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["token"], "mock-token-123456");
}

#[tokio::test]
async fn router_treats_missing_fields_as_mismatch() {
    let resp = api_routes(AppState::mock())
        .oneshot(post_login(r#"{"username":"user"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(resp).await["message"], "Invalid username or password");
}

#[tokio::test]
async fn router_treats_body_without_content_type_as_mismatch() {
    let req = Request::builder()
        .method("POST")
        .uri("/login")
        .body(Body::from(r#"{"username":"user","password":"password123"}"#))
        .unwrap();
    let resp = api_routes(AppState::mock()).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(resp).await["message"], "Invalid username or password");
}

#[tokio::test]
async fn router_treats_malformed_json_as_mismatch() {
    let resp = api_routes(AppState::mock()).oneshot(post_login("not json")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(resp).await["message"], "Invalid username or password");
}

#[tokio::test]
async fn router_rejects_get_on_login() {
    let req = Request::builder().uri("/login").body(Body::empty()).unwrap();
    let resp = api_routes(AppState::mock()).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn healthz_is_ok() {
    let req = Request::builder().uri("/healthz").body(Body::empty()).unwrap();
    let resp = api_routes(AppState::mock()).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
