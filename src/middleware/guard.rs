use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use gymdesk_session::{SESSION_COOKIE_NAME, SessionDecoder, SessionPayload};

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

/// Path matching rule for routes that skip the session check
#[derive(Debug, Clone, Copy)]
pub enum PathRule {
    Prefix(&'static str),
    Exact(&'static str),
}

impl PathRule {
    pub fn matches(&self, path: &str) -> bool {
        match self {
            PathRule::Prefix(prefix) => path.starts_with(prefix),
            PathRule::Exact(exact) => path == *exact,
        }
    }
}

/// Paths served without a session, checked in order before any decode
pub const PUBLIC_PATHS: &[PathRule] = &[
    PathRule::Prefix("/api/auth"),
    PathRule::Prefix("/_next"),
    PathRule::Exact("/favicon.ico"),
    PathRule::Exact("/sitemap.xml"),
    PathRule::Exact("/robots.txt"),
    PathRule::Exact("/health"),
];

pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.iter().any(|rule| rule.matches(path))
}

/// Session state of a single request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    NoSession,
    InvalidSession,
    ValidSession(SessionPayload),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Continue,
    RedirectToLogin,
    RedirectToHome,
}

/// Decide what happens to a request given its session state
pub fn decide(state: &SessionState, on_login_page: bool) -> GuardDecision {
    match (state, on_login_page) {
        (SessionState::ValidSession(_), true) => GuardDecision::RedirectToHome,
        (SessionState::ValidSession(_), false) => GuardDecision::Continue,
        (SessionState::NoSession | SessionState::InvalidSession, true) => GuardDecision::Continue,
        (SessionState::NoSession | SessionState::InvalidSession, false) => {
            GuardDecision::RedirectToLogin
        }
    }
}

/// State for the session guard middleware
#[derive(Clone)]
pub struct GuardState {
    pub decoder: Arc<dyn SessionDecoder>,
}

impl GuardState {
    pub fn new(decoder: Arc<dyn SessionDecoder>) -> Self {
        Self { decoder }
    }

    pub async fn session_state(&self, jar: &CookieJar) -> SessionState {
        let Some(cookie) = jar.get(SESSION_COOKIE_NAME) else {
            return SessionState::NoSession;
        };

        match self.decoder.decode(cookie.value()).await {
            Some(payload) => SessionState::ValidSession(payload),
            None => SessionState::InvalidSession,
        }
    }
}

/// Session guard applied to every request
///
/// Public paths pass straight through. Everything else is resolved to a
/// [`SessionState`] and routed per [`decide`]; on success the
/// [`SessionPayload`] is inserted into the request extensions.
pub async fn session_guard(
    State(guard): State<GuardState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path().to_owned();

    if is_public_path(&path) {
        return next.run(req).await;
    }

    let state = guard.session_state(&jar).await;

    match decide(&state, path == LOGIN_PATH) {
        GuardDecision::Continue => {
            if let SessionState::ValidSession(payload) = state {
                tracing::debug!(
                    sub = %payload.sub,
                    role = %payload.role,
                    path = %path,
                    "session accepted"
                );
                req.extensions_mut().insert(payload);
            }
            next.run(req).await
        }
        GuardDecision::RedirectToLogin => {
            tracing::warn!(path = %path, state = ?state, "no valid session, redirecting to login");
            Redirect::to(LOGIN_PATH).into_response()
        }
        GuardDecision::RedirectToHome => {
            tracing::debug!(path = %path, "already signed in, redirecting to home");
            Redirect::to(HOME_PATH).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> SessionPayload {
        SessionPayload {
            sub: "member-1".to_string(),
            role: "staff".to_string(),
            iat: 0,
            exp: u64::MAX,
        }
    }

    #[test]
    fn test_decision_table() {
        let valid = SessionState::ValidSession(payload());

        assert_eq!(decide(&SessionState::NoSession, false), GuardDecision::RedirectToLogin);
        assert_eq!(decide(&SessionState::NoSession, true), GuardDecision::Continue);
        assert_eq!(decide(&SessionState::InvalidSession, false), GuardDecision::RedirectToLogin);
        assert_eq!(decide(&SessionState::InvalidSession, true), GuardDecision::Continue);
        assert_eq!(decide(&valid, false), GuardDecision::Continue);
        assert_eq!(decide(&valid, true), GuardDecision::RedirectToHome);
    }

    #[test]
    fn test_public_paths() {
        assert!(is_public_path("/api/auth/login"));
        assert!(is_public_path("/api/auth/logout"));
        assert!(is_public_path("/_next/static/chunk.js"));
        assert!(is_public_path("/favicon.ico"));
        assert!(is_public_path("/sitemap.xml"));
        assert!(is_public_path("/robots.txt"));
        assert!(is_public_path("/health"));

        assert!(!is_public_path("/"));
        assert!(!is_public_path("/login"));
        assert!(!is_public_path("/api/sales"));
        assert!(!is_public_path("/favicon.ico/extra"));
        assert!(!is_public_path("/static/robots.txt"));
    }
}
