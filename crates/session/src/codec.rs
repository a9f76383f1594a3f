use std::time::{Duration, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};

use crate::error::{SessionError, SessionResult};

/// Payload carried by a session token
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SessionPayload {
    /// Identity the session belongs to
    pub sub: String,
    /// Role name of the identity
    pub role: String,
    /// Issued at (UTC timestamp)
    pub iat: u64,
    /// Expiration time (UTC timestamp)
    pub exp: u64,
}

/// A freshly signed token together with its payload
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub payload: SessionPayload,
}

/// Anything able to turn a raw cookie value into a session payload.
///
/// Implementations must resolve every failure (including their own
/// infrastructure failures) to `None`.
#[async_trait]
pub trait SessionDecoder: Send + Sync {
    async fn decode(&self, token: &str) -> Option<SessionPayload>;
}

/// HS256 session token codec built from the process-wide secret
#[derive(Clone)]
pub struct SessionCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    lifetime: Duration,
}

impl SessionCodec {
    pub fn new(secret: &str, lifetime: Duration) -> SessionResult<Self> {
        if secret.is_empty() {
            return Err(SessionError::MissingSecret);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            lifetime,
        })
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Sign a new session for `sub` valid for the configured lifetime
    pub fn issue(
        &self,
        sub: impl Into<String>,
        role: impl Into<String>,
    ) -> SessionResult<IssuedSession> {
        let now = unix_now()?;
        let exp = now
            .checked_add(self.lifetime.as_secs())
            .ok_or(SessionError::LifetimeOverflow)?;
        let payload = SessionPayload {
            sub: sub.into(),
            role: role.into(),
            iat: now,
            exp,
        };

        let token = self.encode(&payload)?;

        Ok(IssuedSession { token, payload })
    }

    /// Sign an arbitrary payload as-is
    pub fn encode(&self, payload: &SessionPayload) -> SessionResult<String> {
        encode(&Header::new(Algorithm::HS256), payload, &self.encoding)
            .map_err(SessionError::Encode)
    }

    /// Verify signature and expiry, keeping the reason of a rejection
    pub fn verify(&self, token: &str) -> SessionResult<SessionPayload> {
        let data = decode::<SessionPayload>(token, &self.decoding, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => SessionError::Expired,
                _ => SessionError::Invalid(e),
            })?;

        Ok(data.claims)
    }

    /// Payload of a valid, unexpired token, `None` for anything else
    pub fn decode(&self, token: &str) -> Option<SessionPayload> {
        match self.verify(token) {
            Ok(payload) => Some(payload),
            Err(e) => {
                tracing::debug!(error = %e, "session token rejected");
                None
            }
        }
    }
}

#[async_trait]
impl SessionDecoder for SessionCodec {
    async fn decode(&self, token: &str) -> Option<SessionPayload> {
        SessionCodec::decode(self, token)
    }
}

fn unix_now() -> SessionResult<u64> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs())
}
