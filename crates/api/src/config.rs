//! Process configuration, loaded once at startup.

use anyhow::Context;

/// Everything the binary needs from the environment.
///
/// Every variable is required; a missing one is a startup error, never a
/// silent default.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP port the server binds on.
    pub port: u16,
    /// Postgres connection string.
    pub database_url: String,
    /// Shared secret clients must send in the `Authorization` header.
    pub auth_token: String,
}

impl AppConfig {
    /// Read configuration from the environment, loading `.env` first when
    /// one is present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        Ok(Self {
            port: require("PORT")?
                .parse()
                .context("PORT must be a valid port number")?,
            database_url: require("DATABASE_URL")?,
            auth_token: require("AUTH_TOKEN")?,
        })
    }
}

fn require(name: &str) -> anyhow::Result<String> {
    std::env::var(name).with_context(|| format!("{name} must be set"))
}
