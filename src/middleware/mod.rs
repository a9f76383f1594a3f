pub mod cors;
pub mod guard;

pub use cors::cors_middleware;
pub use guard::{GuardState, session_guard};
