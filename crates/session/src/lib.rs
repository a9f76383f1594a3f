//! Signed session tokens carried in the `session` cookie.

mod codec;
mod error;

pub use codec::{IssuedSession, SessionCodec, SessionDecoder, SessionPayload};
pub use error::{SessionError, SessionResult};

/// Name of the cookie holding the session token
pub const SESSION_COOKIE_NAME: &str = "session";
