//! Server configuration parsed from environment variables.
//!
//! Values are read through a lookup closure so tests can supply a map instead
//! of mutating the process environment.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_REDDIT_AUTH_URL: &str = "https://www.reddit.com/api/v1/access_token";
pub const DEFAULT_REDDIT_API_URL: &str = "https://oauth.reddit.com";
pub const DEFAULT_REDDIT_TIMEOUT_SECS: u64 = 10;

const REDDIT_CREDENTIAL_VARS: [&str; 3] = ["REDDIT_CLIENT_ID", "REDDIT_CLIENT_SECRET", "REDDIT_USER_AGENT"];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error("Reddit credentials not found or incomplete: missing {}", .missing.join(", "))]
    MissingRedditCredentials { missing: Vec<&'static str> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    /// Build from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { port })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedditConfig {
    pub client_id: String,
    pub client_secret: String,
    pub user_agent: String,
    pub auth_url: String,
    pub api_url: String,
    pub timeout_secs: u64,
}

impl RedditConfig {
    /// Build Reddit API config from the process environment.
    ///
    /// Required (all three, or Reddit lookups stay disabled):
    /// - `REDDIT_CLIENT_ID`
    /// - `REDDIT_CLIENT_SECRET`
    /// - `REDDIT_USER_AGENT`
    ///
    /// Optional:
    /// - `REDDIT_AUTH_URL`: token endpoint
    /// - `REDDIT_API_URL`: OAuth API base URL
    /// - `REDDIT_REQUEST_TIMEOUT_SECS`: default 10
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let present = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let missing: Vec<&'static str> = REDDIT_CREDENTIAL_VARS
            .into_iter()
            .filter(|key| present(*key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissingRedditCredentials { missing });
        }

        let [client_id, client_secret, user_agent] = REDDIT_CREDENTIAL_VARS.map(|key| present(key).unwrap_or_default());

        Ok(Self {
            client_id,
            client_secret,
            user_agent,
            auth_url: present("REDDIT_AUTH_URL").unwrap_or_else(|| DEFAULT_REDDIT_AUTH_URL.to_string()),
            api_url: present("REDDIT_API_URL")
                .unwrap_or_else(|| DEFAULT_REDDIT_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            timeout_secs: lookup_parse(&lookup, "REDDIT_REQUEST_TIMEOUT_SECS", DEFAULT_REDDIT_TIMEOUT_SECS),
        })
    }
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn lookup_parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    lookup(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
