pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod password;
pub mod routes;
pub mod template;

pub use config::Config;
pub use routes::{AppState, router};
