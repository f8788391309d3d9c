//! Chat message route.
//!
//! `POST /send_message` always answers with `{"reply": ..., "error": ...}`,
//! exactly one of which is non-null. Only a malformed request gets a non-200
//! status; application-level problems are 200 with `error` set.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::services::query::parse_subreddit_and_question;
use crate::services::reddit::RedditError;
use crate::services::reply::compose_reply;
use crate::state::AppState;

pub const INVALID_REQUEST_MESSAGE: &str = "Invalid request: No message provided.";
pub const EMPTY_MESSAGE_MESSAGE: &str = "Please enter a question.";

#[derive(Debug, Deserialize)]
pub struct SendMessageBody {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatReply {
    pub reply: Option<String>,
    pub error: Option<String>,
}

impl ChatReply {
    fn reply(text: String) -> Self {
        Self { reply: Some(text), error: None }
    }

    fn error(text: impl Into<String>) -> Self {
        Self { reply: None, error: Some(text.into()) }
    }
}

/// `POST /send_message`: answer one chat message.
pub async fn send_message(
    State(state): State<AppState>,
    body: Result<Json<SendMessageBody>, JsonRejection>,
) -> (StatusCode, Json<ChatReply>) {
    let Ok(Json(body)) = body else {
        tracing::warn!("/send_message: invalid request (no JSON body or 'message' key)");
        return (StatusCode::BAD_REQUEST, Json(ChatReply::error(INVALID_REQUEST_MESSAGE)));
    };

    (StatusCode::OK, Json(answer(&state, &body.message).await))
}

/// Produce the reply for one message.
pub async fn answer(state: &AppState, message: &str) -> ChatReply {
    if message.trim().is_empty() {
        tracing::info!("/send_message: received empty message");
        return ChatReply::error(EMPTY_MESSAGE_MESSAGE);
    }

    let (subreddit, question) = parse_subreddit_and_question(message);
    tracing::info!(subreddit = ?subreddit, %question, "/send_message: parsed query");

    let mut context = None;
    if let Some(name) = subreddit {
        if question.is_empty() {
            return ChatReply::error(format!("You mentioned r/{name}, but what is your question?"));
        }

        match &state.reddit {
            None => {
                tracing::warn!(subreddit = %name, "Reddit lookups disabled; answering without subreddit context");
            }
            Some(reddit) => match reddit.about(&name).await {
                Ok(info) => {
                    tracing::info!(subreddit = %name, "fetched subreddit info");
                    context = Some(info);
                }
                Err(e) => return lookup_error_reply(&name, &e),
            },
        }
    }

    let reply = compose_reply(&question, context.as_ref(), state.reddit_available());
    tracing::info!(%question, "generated reply");
    ChatReply::reply(reply)
}

fn lookup_error_reply(name: &str, err: &RedditError) -> ChatReply {
    match err {
        RedditError::NotFound(_) => {
            tracing::warn!(subreddit = %name, "subreddit not found");
            ChatReply::error(format!("Sorry, the subreddit r/{name} could not be found."))
        }
        RedditError::Inaccessible(_) => {
            tracing::warn!(subreddit = %name, "subreddit not accessible");
            ChatReply::error(format!("Sorry, r/{name} is private, banned, or quarantined."))
        }
        other => {
            tracing::error!(subreddit = %name, error = %other, "reddit lookup failed");
            ChatReply::error(format!(
                "Sorry, an error occurred with the Reddit API while trying to fetch r/{name}."
            ))
        }
    }
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
