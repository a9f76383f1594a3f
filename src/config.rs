use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::{env, time::Duration};

/// Longest accepted session lifetime (one year)
pub const MAX_SESSION_LIFETIME_SECONDS: u64 = 60 * 60 * 24 * 365;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub session: SessionConfig,
    pub root: RootConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    pub secret: String,
    pub lifetime_seconds: u64,
    /// Mark the session cookie `Secure` (HTTPS only)
    #[serde(default)]
    pub secure_cookie: bool,
}

impl SessionConfig {
    pub fn lifetime(&self) -> Duration {
        Duration::from_secs(self.lifetime_seconds)
    }
}

/// Account allowed to sign in from the login page
#[derive(Debug, Deserialize, Clone)]
pub struct RootConfig {
    pub email: String,
    /// Argon2 PHC string, see `gymdesk hash-password`
    #[serde(default)]
    pub password_hash: String,
    #[serde(default = "default_root_role")]
    pub role: String,
}

fn default_root_role() -> String {
    "admin".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. `SESSION_SECRET`
    /// 2. Environment variables (GYMDESK__SESSION__SECRET, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("session.secret", "")?
            .set_default("session.lifetime_seconds", 60 * 60 * 24)?
            .set_default("session.secure_cookie", false)?
            .set_default("root.email", "admin@gymdesk.local")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional - ignore if not found
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("GYMDESK")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(secret) = env::var("SESSION_SECRET") {
            builder = builder.set_override("session.secret", secret)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.session.secret.len() < 32 {
            return Err("Session secret must be at least 32 characters long".to_string());
        }
        if self.session.lifetime_seconds == 0 {
            return Err("Session lifetime must be greater than 0".to_string());
        }
        if self.session.lifetime_seconds > MAX_SESSION_LIFETIME_SECONDS {
            return Err(format!(
                "Session lifetime must not exceed {MAX_SESSION_LIFETIME_SECONDS} seconds"
            ));
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.root.email.trim().is_empty() {
            return Err("Root account email must not be empty".to_string());
        }
        Ok(())
    }
}
