//! HTTP transport for the chat endpoint.
//!
//! Client-side (hydrate): real `POST` via `gloo-net`.
//! Server-side (SSR): a stub that reports an error, since submissions only
//! happen in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure of the exchange comes back as a [`SendError`] variant so the
//! controller can pick a user-facing message without inspecting error text.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::ReplyPayload;
#[cfg(feature = "hydrate")]
use super::types::SendMessageRequest;

/// Default path of the chat endpoint.
pub const SEND_MESSAGE_ENDPOINT: &str = "/send_message";

/// What a non-success response body contained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusBody {
    /// JSON with an `error` field.
    Error(String),
    /// Valid JSON without an `error` field.
    NoError,
    /// Empty or not JSON.
    Unparseable,
}

/// Failure of a single chat exchange.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
    /// The request never reached the server.
    #[error("could not reach server: {0}")]
    Transport(String),

    /// The server answered with a non-success HTTP status.
    #[error("server responded with status {status}")]
    Status { status: u16, body: StatusBody },

    /// A success response whose body is not JSON.
    #[error("response body could not be parsed: {0}")]
    Parse(String),

    /// Anything else that went wrong on the client side.
    #[error("unexpected client error: {0}")]
    Other(String),
}

/// The network-call seam used by the chat controller.
#[allow(async_fn_in_trait)]
pub trait ChatTransport {
    /// Post `message` to the chat endpoint and decode the reply.
    ///
    /// # Errors
    ///
    /// Returns a [`SendError`] for transport failures, non-success statuses and
    /// unparseable success bodies.
    async fn send_message(&self, message: &str) -> Result<ReplyPayload, SendError>;
}

/// Classify a raw HTTP response.
///
/// Statuses outside `200..300` always produce [`SendError::Status`], even when
/// the body decodes cleanly.
///
/// # Errors
///
/// See [`SendError`].
pub fn interpret_response(status: u16, body: &str) -> Result<ReplyPayload, SendError> {
    let parsed = serde_json::from_str::<serde_json::Value>(body);

    if !(200..300).contains(&status) {
        let body = match parsed {
            Ok(value) => ReplyPayload::from_value(&value)
                .error
                .map_or(StatusBody::NoError, StatusBody::Error),
            Err(_) => StatusBody::Unparseable,
        };
        return Err(SendError::Status { status, body });
    }

    let value = parsed.map_err(|e| SendError::Parse(e.to_string()))?;
    Ok(ReplyPayload::from_value(&value))
}

/// `gloo-net` backed transport posting JSON to a fixed endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpTransport {
    endpoint: String,
}

impl HttpTransport {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    #[cfg(test)]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(SEND_MESSAGE_ENDPOINT)
    }
}

impl ChatTransport for HttpTransport {
    async fn send_message(&self, message: &str) -> Result<ReplyPayload, SendError> {
        #[cfg(feature = "hydrate")]
        {
            // `.json()` sets `Content-Type: application/json`.
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .json(&SendMessageRequest { message })
                .map_err(classify_gloo_error)?
                .send()
                .await
                .map_err(classify_gloo_error)?;
            let status = resp.status();
            let body = resp.text().await.map_err(classify_gloo_error)?;
            interpret_response(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = message;
            Err(SendError::Other("not available on server".to_owned()))
        }
    }
}

#[cfg(feature = "hydrate")]
fn classify_gloo_error(err: gloo_net::Error) -> SendError {
    match err {
        // fetch() rejects with a JS TypeError when the server is unreachable.
        gloo_net::Error::JsError(e) => SendError::Transport(e.to_string()),
        gloo_net::Error::SerdeError(e) => SendError::Parse(e.to_string()),
        gloo_net::Error::GlooError(e) => SendError::Other(e),
    }
}
