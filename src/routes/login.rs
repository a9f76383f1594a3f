use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::{
    CookieJar, WithRejection,
    cookie::{Cookie, SameSite},
};
use gymdesk_session::{SESSION_COOKIE_NAME, SessionError, SessionPayload};
use serde::Deserialize;
use tracing::{info, warn};

use super::AppState;
use crate::error::AppError;
use crate::password::verify_password;
use crate::template::{LoginTemplate, render};

/// GET /login - Show login form
pub async fn page() -> Result<impl IntoResponse, AppError> {
    render(LoginTemplate)
}

#[derive(Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// POST /api/auth/login - Verify credentials and open a session
pub async fn action(
    State(state): State<AppState>,
    jar: CookieJar,
    WithRejection(Json(input), _): WithRejection<Json<LoginInput>, AppError>,
) -> Result<(CookieJar, Json<SessionPayload>), AppError> {
    let root = &state.config.root;

    // Always pay for the hash so a wrong email answers as slowly as a wrong password
    let password_matches = verify_password(&input.password, &root.password_hash);
    let email_matches = input.email.trim().eq_ignore_ascii_case(&root.email);

    if !(email_matches && password_matches) {
        warn!(email = %input.email, "Login failed");
        return Err(AppError::InvalidCredentials);
    }

    let issued = state.sessions.issue(root.email.to_owned(), root.role.to_owned())?;
    let max_age = time::Duration::try_from(state.sessions.lifetime())
        .map_err(|_| SessionError::LifetimeOverflow)?;

    let cookie = Cookie::build((SESSION_COOKIE_NAME, issued.token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.config.session.secure_cookie)
        .max_age(max_age)
        .build();

    info!(sub = %issued.payload.sub, role = %issued.payload.role, "Session opened");

    Ok((jar.add(cookie), Json(issued.payload)))
}
