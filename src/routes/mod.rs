use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    middleware as axum_middleware,
    response::IntoResponse,
    routing::{get, post},
};
use gymdesk_session::{SessionCodec, SessionDecoder};

use crate::config::Config;
use crate::error::AppError;
use crate::middleware::{GuardState, cors_middleware, session_guard};
use crate::template::{NotFoundTemplate, render};

mod health;
mod index;
mod login;
mod logout;
mod session;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Issues tokens at login
    pub sessions: SessionCodec,
    /// Consulted by the session guard on every protected request
    pub decoder: Arc<dyn SessionDecoder>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, AppError> {
        let sessions = SessionCodec::new(&config.session.secret, config.session.lifetime())?;

        Ok(Self {
            config,
            decoder: Arc::new(sessions.clone()),
            sessions,
        })
    }
}

pub async fn fallback() -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::NOT_FOUND, render(NotFoundTemplate)?))
}

pub fn router(app_state: AppState) -> Router {
    let guard = GuardState::new(app_state.decoder.clone());

    Router::new()
        // Public
        .route("/health", get(health::health))
        .route("/login", get(login::page))
        .route("/api/auth/login", post(login::action))
        .route("/api/auth/logout", post(logout::action))
        // Protected
        .route("/", get(index::page))
        .route("/api/session", get(session::current))
        .fallback(fallback)
        .with_state(app_state)
        // Last layer is outermost: CORS sees the request before the session guard
        .layer(axum_middleware::from_fn_with_state(guard, session_guard))
        .layer(axum_middleware::from_fn(cors_middleware))
}
