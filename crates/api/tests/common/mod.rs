#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use setupforme_api::auth::jwt::JwtConfig;
use setupforme_api::config::{LogFormat, ResolverConfig, ServerConfig};
use setupforme_api::registry::AppRegistry;
use setupforme_api::router::build_app_router;
use setupforme_api::state::AppState;
use setupforme_core::resolver::{PackageResolver, ResolveError};
use setupforme_db::store::{AppStore, MemoryStore, UserStore};
use setupforme_winget::WingetClient;
use tower::ServiceExt;

/// Nothing listens here, so outbound searches fail fast.
pub const UNREACHABLE_WINGET: &str = "http://127.0.0.1:9";

/// Resolves a fixed set of names; everything else is a miss.
pub struct StubResolver;

#[async_trait]
impl PackageResolver for StubResolver {
    async fn resolve(&self, name: &str) -> Result<Option<String>, ResolveError> {
        match name.to_lowercase().as_str() {
            "git" => Ok(Some("Git.Git".into())),
            "vlc" => Ok(Some("VideoLAN.VLC".into())),
            "broken" => Err(ResolveError("upstream unavailable".into())),
            _ => Ok(None),
        }
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough".to_string(),
            expiry_hours: 24,
        },
        resolver: ResolverConfig {
            enabled: true,
            base_url: UNREACHABLE_WINGET.to_string(),
            timeout: Duration::from_secs(2),
        },
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router around an in-memory store and
/// [`StubResolver`], with the same middleware stack as `main.rs`.
pub fn build_test_app() -> Router {
    let config = test_config();
    let store = Arc::new(MemoryStore::new());
    let apps: Arc<dyn AppStore> = store.clone();
    let users: Arc<dyn UserStore> = store;

    let winget = WingetClient::new(&config.resolver.base_url, config.resolver.timeout)
        .expect("client should build");
    let registry = AppRegistry::new(apps.clone(), Arc::new(StubResolver), config.resolver.timeout);

    let state = AppState {
        config: Arc::new(config.clone()),
        apps,
        users,
        registry,
        winget,
    };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request should build");

    app.oneshot(request).await.expect("request should complete")
}

/// Send `body` verbatim, with an optional content type.
pub async fn post_raw_auth(
    app: Router,
    uri: &str,
    content_type: Option<&str>,
    body: &'static str,
    token: &str,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"));
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    let request = builder.body(Body::from(body)).expect("request should build");
    app.oneshot(request).await.expect("request should complete")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

// ---------------------------------------------------------------------------
// Account helpers
// ---------------------------------------------------------------------------

pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// Register `email` through the API and return its token.
pub async fn signup(app: Router, email: &str) -> String {
    let body = serde_json::json!({ "email": email, "password": TEST_PASSWORD });
    let response = post_json(app, "/api/auth/signup", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["token"]
        .as_str()
        .expect("token should be a string")
        .to_string()
}

/// Create an app as `token`'s owner and return the created record.
pub async fn create_app(app: Router, token: &str, body: Value) -> Value {
    let response = post_json_auth(app, "/api/apps", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}
