//! Shared setup for router-level tests
//!
//! Builds the real router with a throwaway session secret and provides
//! request/response shortcuts around `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    Router,
    body::Body,
    http::{Method, Request, Response, header},
};
use gymdesk::config::{Config, ObservabilityConfig, RootConfig, ServerConfig, SessionConfig};
use gymdesk::{AppState, router};
use gymdesk_session::{SessionCodec, SessionPayload};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const SECRET: &str = "test_secret_key_minimum_32_characters_long";
pub const ROOT_EMAIL: &str = "owner@gym.test";
pub const ROOT_PASSWORD: &str = "Password123";

/// Argon2 is slow on purpose, hash the root password once per test binary
fn root_password_hash() -> String {
    static HASH: OnceLock<String> = OnceLock::new();
    HASH.get_or_init(|| gymdesk::password::hash_password(ROOT_PASSWORD).unwrap())
        .clone()
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        session: SessionConfig {
            secret: SECRET.to_string(),
            lifetime_seconds: 3600,
            secure_cookie: false,
        },
        root: RootConfig {
            email: ROOT_EMAIL.to_string(),
            password_hash: root_password_hash(),
            role: "admin".to_string(),
        },
        observability: ObservabilityConfig::default(),
    }
}

pub fn test_state() -> AppState {
    AppState::new(test_config()).unwrap()
}

pub fn test_app() -> Router {
    router(test_state())
}

pub fn codec() -> SessionCodec {
    test_state().sessions
}

pub fn valid_token() -> String {
    codec().issue("member-42", "staff").unwrap().token
}

/// Correctly signed but expired an hour ago
pub fn expired_token() -> String {
    let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs();

    codec()
        .encode(&SessionPayload {
            sub: "member-42".to_string(),
            role: "staff".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        })
        .unwrap()
}

pub fn request(method: Method, path: &str, session: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(path);

    if let Some(token) = session {
        builder = builder.header(header::COOKIE, format!("session={token}"));
    }

    builder.body(Body::empty()).unwrap()
}

pub fn get(path: &str, session: Option<&str>) -> Request<Body> {
    request(Method::GET, path, session)
}

pub fn json_post(path: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}

pub fn set_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}
