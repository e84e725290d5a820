use std::env;

use thiserror::Error;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const NOTION_API_TOKEN: &str = "NOTION_API_TOKEN";
    pub const NOTION_DATABASE_ID: &str = "NOTION_DATABASE_ID";
    pub const NOTION_API_VERSION: &str = "NOTION_API_VERSION";
    pub const NOTION_BASE_URL: &str = "NOTION_BASE_URL";
}

/// Raised when a required connection parameter is absent at startup.
/// Fatal: the adapter cannot be constructed without a complete config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

/// Connection parameters for the Notion API, loaded once at process start
/// and treated as immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct NotionConfig {
    pub base_url: String,
    pub api_token: String,
    pub database_id: String,
    pub api_version: String,
}

impl NotionConfig {
    pub fn new(
        base_url: impl Into<String>,
        api_token: impl Into<String>,
        database_id: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token: api_token.into(),
            database_id: database_id.into(),
            api_version: api_version.into(),
        }
    }

    /// Load the config from the environment. Every variable is required;
    /// a missing one is a startup failure, not a runtime default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(
            require(env_vars::NOTION_BASE_URL)?,
            require(env_vars::NOTION_API_TOKEN)?,
            require(env_vars::NOTION_DATABASE_ID)?,
            require(env_vars::NOTION_API_VERSION)?,
        ))
    }

    /// URL of the database query endpoint.
    pub fn query_url(&self) -> String {
        format!("{}/databases/{}/query", self.base_url, self.database_id)
    }

    /// URL of the page collection endpoint.
    pub fn pages_url(&self) -> String {
        format!("{}/pages", self.base_url)
    }

    /// URL of a single page.
    pub fn page_url(&self, page_id: &str) -> String {
        format!("{}/pages/{}", self.base_url, page_id)
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}
