use axum::{Extension, response::IntoResponse};
use gymdesk_session::SessionPayload;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::error::AppError;
use crate::template::{IndexTemplate, render};

/// GET / - Dashboard of the signed-in account
pub async fn page(
    Extension(session): Extension<SessionPayload>,
) -> Result<impl IntoResponse, AppError> {
    let expires_at = i64::try_from(session.exp)
        .ok()
        .and_then(|exp| OffsetDateTime::from_unix_timestamp(exp).ok())
        .and_then(|date| date.format(&Rfc3339).ok())
        .unwrap_or_else(|| session.exp.to_string());

    render(IndexTemplate {
        sub: session.sub,
        role: session.role,
        expires_at,
    })
}
