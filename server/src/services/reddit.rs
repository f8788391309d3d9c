//! Subreddit metadata lookups against the Reddit OAuth API.
//!
//! DESIGN
//! ======
//! Uses the application-only client-credentials grant. The bearer token is
//! cached until shortly before it expires and re-requested on demand. The
//! HTTP client never follows redirects: Reddit answers unknown subreddit names
//! with a redirect to its search page, and that redirect is the not-found
//! signal.
//!
//! Route handlers depend on the [`SubredditLookup`] trait so tests can stub
//! Reddit entirely.

use std::time::{Duration, Instant};

use serde::Deserialize;
use tokio::sync::Mutex;

use crate::config::RedditConfig;

/// Tokens are refreshed this long before Reddit says they expire.
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(60);
const DEFAULT_TOKEN_LIFETIME_SECS: u64 = 3600;

// =============================================================================
// TYPES
// =============================================================================

/// Public metadata for one subreddit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubredditInfo {
    /// Name as written in the user's tag.
    pub name: String,
    pub display_name: String,
    pub public_description: String,
    pub subscribers: Option<u64>,
}

#[derive(Debug, thiserror::Error)]
pub enum RedditError {
    /// The name does not resolve to a subreddit.
    #[error("subreddit r/{0} not found")]
    NotFound(String),

    /// The subreddit exists but is private, banned, or quarantined.
    #[error("subreddit r/{0} is not accessible")]
    Inaccessible(String),

    /// The token endpoint rejected the credentials or could not be reached.
    #[error("reddit authentication failed: {0}")]
    Auth(String),

    /// Any other request, status, or decode failure.
    #[error("reddit API request failed: {0}")]
    Api(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Subreddit metadata source. Enables mocking in tests.
#[async_trait::async_trait]
pub trait SubredditLookup: Send + Sync {
    /// Fetch metadata for `r/{name}`.
    ///
    /// # Errors
    ///
    /// Returns [`RedditError::NotFound`] or [`RedditError::Inaccessible`] for
    /// names that cannot be shown, and other variants for API failures.
    async fn about(&self, name: &str) -> Result<SubredditInfo, RedditError>;
}

// =============================================================================
// CLIENT
// =============================================================================

#[derive(Debug, Clone)]
struct AccessToken {
    value: String,
    expires_at: Instant,
}

impl AccessToken {
    fn issued(response: TokenResponse, now: Instant) -> Self {
        let lifetime = Duration::from_secs(response.expires_in).saturating_sub(TOKEN_EXPIRY_MARGIN);
        Self { value: response.access_token, expires_at: now + lifetime }
    }

    fn is_fresh(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_token_lifetime")]
    expires_in: u64,
}

fn default_token_lifetime() -> u64 {
    DEFAULT_TOKEN_LIFETIME_SECS
}

#[derive(Debug, Deserialize)]
struct AboutResponse {
    kind: String,
    data: AboutData,
}

#[derive(Debug, Deserialize)]
struct AboutData {
    display_name: String,
    #[serde(default)]
    public_description: Option<String>,
    #[serde(default)]
    subscribers: Option<u64>,
}

pub struct RedditClient {
    http: reqwest::Client,
    config: RedditConfig,
    token: Mutex<Option<AccessToken>>,
}

impl RedditClient {
    /// Build a client from config. Does not contact Reddit.
    ///
    /// # Errors
    ///
    /// Returns [`RedditError::HttpClientBuild`] if the HTTP client cannot be built.
    pub fn new(config: RedditConfig) -> Result<Self, RedditError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .redirect(reqwest::redirect::Policy::none())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RedditError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config, token: Mutex::new(None) })
    }

    /// Obtain a token now to verify credentials and connectivity.
    ///
    /// # Errors
    ///
    /// Returns [`RedditError::Auth`] if the token request fails.
    pub async fn authenticate(&self) -> Result<(), RedditError> {
        self.bearer_token().await.map(|_| ())
    }

    async fn bearer_token(&self) -> Result<String, RedditError> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref().filter(|t| t.is_fresh(Instant::now())) {
            return Ok(token.value.clone());
        }

        let token = self.request_token().await?;
        let value = token.value.clone();
        *cached = Some(token);
        Ok(value)
    }

    async fn request_token(&self) -> Result<AccessToken, RedditError> {
        let resp = self
            .http
            .post(&self.config.auth_url)
            .basic_auth(&self.config.client_id, Some(&self.config.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| RedditError::Auth(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(RedditError::Auth(format!("token endpoint returned {status}")));
        }

        let body: TokenResponse = resp.json().await.map_err(|e| RedditError::Auth(e.to_string()))?;
        Ok(AccessToken::issued(body, Instant::now()))
    }

    async fn forget_token(&self) {
        *self.token.lock().await = None;
    }
}

#[async_trait::async_trait]
impl SubredditLookup for RedditClient {
    async fn about(&self, name: &str) -> Result<SubredditInfo, RedditError> {
        let token = self.bearer_token().await?;
        let url = format!("{}/r/{name}/about", self.config.api_url);

        let resp = self
            .http
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| RedditError::Api(e.to_string()))?;

        let status = resp.status().as_u16();
        if status == 401 {
            // Revoked early; the next lookup fetches a new token.
            self.forget_token().await;
        }
        if let Some(err) = classify_about_status(status, name) {
            return Err(err);
        }

        let body = resp.text().await.map_err(|e| RedditError::Api(e.to_string()))?;
        parse_about(name, &body)
    }
}

/// Map a `/r/{name}/about` status to an error, or `None` for success.
fn classify_about_status(status: u16, name: &str) -> Option<RedditError> {
    match status {
        200..=299 => None,
        300..=399 => Some(RedditError::NotFound(name.to_string())),
        403 | 404 => Some(RedditError::Inaccessible(name.to_string())),
        other => Some(RedditError::Api(format!("about r/{name} returned status {other}"))),
    }
}

/// Decode an about body. Anything other than a `t5` (subreddit) thing is
/// treated as not found.
fn parse_about(name: &str, body: &str) -> Result<SubredditInfo, RedditError> {
    let about: AboutResponse =
        serde_json::from_str(body).map_err(|e| RedditError::Api(format!("about r/{name} decode failed: {e}")))?;
    if about.kind != "t5" {
        return Err(RedditError::NotFound(name.to_string()));
    }

    Ok(SubredditInfo {
        name: name.to_string(),
        display_name: about.data.display_name,
        public_description: about.data.public_description.unwrap_or_default(),
        subscribers: about.data.subscribers,
    })
}

#[cfg(test)]
#[path = "reddit_test.rs"]
mod tests;
