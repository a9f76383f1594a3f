use axum::{Extension, Json};
use gymdesk_session::SessionPayload;

/// GET /api/session - Payload of the current session
pub async fn current(Extension(session): Extension<SessionPayload>) -> Json<SessionPayload> {
    Json(session)
}
