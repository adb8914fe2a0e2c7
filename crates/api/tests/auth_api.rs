//! HTTP-level integration tests for signup, login and token enforcement.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, signup, TEST_PASSWORD};
use serde_json::json;

// ---------------------------------------------------------------------------
// Signup
// ---------------------------------------------------------------------------

#[tokio::test]
async fn signup_returns_token_and_normalized_user() {
    let app = common::build_test_app();
    let body = json!({ "email": "  Alice@Example.COM ", "password": TEST_PASSWORD });

    let response = post_json(app, "/api/auth/signup", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert!(json["token"].is_string());
    assert!(json["user"]["id"].is_number());
    assert_eq!(json["user"]["email"], "alice@example.com");
    assert!(json["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn signup_rejects_malformed_email() {
    let app = common::build_test_app();
    let body = json!({ "email": "not-an-email", "password": TEST_PASSWORD });

    let response = post_json(app, "/api/auth/signup", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn signup_rejects_short_password() {
    let app = common::build_test_app();
    let body = json!({ "email": "bob@example.com", "password": "short" });

    let response = post_json(app, "/api/auth/signup", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_email_conflicts_case_insensitively() {
    let app = common::build_test_app();
    signup(app.clone(), "carol@example.com").await;

    let body = json!({ "email": "CAROL@example.com", "password": TEST_PASSWORD });
    let response = post_json(app, "/api/auth/signup", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[tokio::test]
async fn login_with_correct_password() {
    let app = common::build_test_app();
    signup(app.clone(), "dave@example.com").await;

    let body = json!({ "email": "Dave@Example.com", "password": TEST_PASSWORD });
    let response = post_json(app, "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["token"].is_string());
    assert_eq!(json["user"]["email"], "dave@example.com");
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let app = common::build_test_app();
    signup(app.clone(), "erin@example.com").await;

    let body = json!({ "email": "erin@example.com", "password": "wrong-password" });
    let response = post_json(app, "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn login_with_unknown_email_is_unauthorized() {
    let app = common::build_test_app();
    let body = json!({ "email": "nobody@example.com", "password": TEST_PASSWORD });
    let response = post_json(app, "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Token enforcement
// ---------------------------------------------------------------------------

#[tokio::test]
async fn protected_routes_require_a_token() {
    let app = common::build_test_app();

    let response = get(app.clone(), "/api/apps").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");

    let response = get(app, "/api/apps/script").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn invalid_token_is_rejected() {
    let app = common::build_test_app();
    let response = get_auth(app, "/api/apps", "garbage.token.value").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn issued_token_grants_access() {
    let app = common::build_test_app();
    let token = signup(app.clone(), "frank@example.com").await;

    let response = get_auth(app, "/api/apps", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn null_credentials_are_validation_errors() {
    let app = common::build_test_app();
    let body = json!({ "email": null, "password": null });

    let response = post_json(app, "/api/auth/signup", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}
