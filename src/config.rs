//! Client configuration module

use clap::Parser;

/// Till API client configuration
#[derive(Debug, Clone, Parser)]
#[command(name = "till", about = "Till point-of-sale client", long_about = None)]
pub struct ApiConfig {
    /// Base URL of the point-of-sale API, e.g. `http://localhost:5000`.
    #[arg(long, env = "TILL_API_URL")]
    pub base_url: String,

    /// Bearer token attached to every request; usually obtained via login.
    #[arg(long, env = "TILL_API_TOKEN")]
    pub token: Option<String>,
}

impl ApiConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Build a configuration without touching environment or CLI arguments.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
        }
    }
}
