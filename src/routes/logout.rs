use axum::response::Redirect;
use axum_extra::extract::{CookieJar, cookie::Cookie};
use gymdesk_session::SESSION_COOKIE_NAME;
use time::OffsetDateTime;

use crate::middleware::guard::LOGIN_PATH;

/// POST /api/auth/logout - Clear session cookie
///
/// Overwrites the cookie with an empty value that expired at the epoch.
pub async fn action(jar: CookieJar) -> (CookieJar, Redirect) {
    let cookie = Cookie::build((SESSION_COOKIE_NAME, ""))
        .path("/")
        .expires(OffsetDateTime::UNIX_EPOCH)
        .build();

    tracing::info!("Session cleared");

    (jar.add(cookie), Redirect::to(LOGIN_PATH))
}
