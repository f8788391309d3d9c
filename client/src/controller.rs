//! Chat submission controller.
//!
//! DESIGN
//! ======
//! The controller owns the submit flow and nothing else. Rendering goes
//! through [`ChatView`] and networking through [`ChatTransport`], so the whole
//! round trip runs in native tests with scripted doubles. The Leptos binding
//! lives in `components::chat_panel`.
//!
//! At most one request is outstanding; a submit during that window is refused.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::net::api::{ChatTransport, SendError, StatusBody};
use crate::net::types::ReplyPayload;
use crate::state::chat::{ChatMessage, MessageKind};

pub const UNEXPECTED_STRUCTURE_MESSAGE: &str = "Error: Received an unexpected response structure from the server.";
pub const CONNECT_FAILED_MESSAGE: &str =
    "Error: Could not connect to the server. Please check your network or try again later.";
pub const UNPARSEABLE_MESSAGE: &str = "Error: Received an unparseable response from the server.";
pub const GENERIC_FAILURE_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// Display collaborator driven by the controller.
pub trait ChatView {
    /// Append one message to the end of the list.
    fn append(&self, message: ChatMessage);
    /// Empty the text input.
    fn clear_input(&self);
    /// Bring the newest message into view.
    fn scroll_to_latest(&self);
    fn set_pending(&self, pending: bool);
    fn is_pending(&self) -> bool;
}

/// Result of one call to [`ChatController::submit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was empty after trimming; nothing happened.
    Empty,
    /// A request was already in flight; nothing happened.
    Busy,
    /// The exchange finished and one response message of this kind was rendered.
    Rendered(MessageKind),
}

#[derive(Clone, Debug)]
pub struct ChatController<T, V> {
    transport: T,
    view: V,
}

impl<T: ChatTransport, V: ChatView> ChatController<T, V> {
    #[must_use]
    pub fn new(transport: T, view: V) -> Self {
        Self { transport, view }
    }

    #[cfg(test)]
    pub fn view(&self) -> &V {
        &self.view
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Echo `text`, send it, and render exactly one reply or error message.
    ///
    /// Never fails: every error path renders an error-kind message.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let text = text.trim();
        if text.is_empty() {
            return SubmitOutcome::Empty;
        }
        if self.view.is_pending() {
            return SubmitOutcome::Busy;
        }

        self.render(ChatMessage::user(text));
        self.view.clear_input();
        self.view.set_pending(true);

        let result = self.transport.send_message(text).await;
        if let Err(e) = &result {
            leptos::logging::warn!("send_message failed: {e}");
        }

        let message = response_message(result);
        let kind = message.kind;
        self.view.set_pending(false);
        self.render(message);
        SubmitOutcome::Rendered(kind)
    }

    fn render(&self, message: ChatMessage) {
        self.view.append(message);
        self.view.scroll_to_latest();
    }
}

/// Map the outcome of an exchange to the single message shown for it.
#[must_use]
pub fn response_message(result: Result<ReplyPayload, SendError>) -> ChatMessage {
    match result {
        Ok(ReplyPayload { error: Some(error), .. }) => ChatMessage::error(error),
        Ok(ReplyPayload { reply: Some(reply), .. }) => ChatMessage::bot(reply),
        Ok(_) => ChatMessage::error(UNEXPECTED_STRUCTURE_MESSAGE),
        Err(SendError::Status { status, body }) => ChatMessage::error(match body {
            StatusBody::Error(error) => error,
            StatusBody::NoError => format!("Error: Server responded with status {status}."),
            StatusBody::Unparseable => {
                format!("Error: Received an invalid response from the server (status {status}).")
            }
        }),
        Err(SendError::Transport(_)) => ChatMessage::error(CONNECT_FAILED_MESSAGE),
        Err(SendError::Parse(_)) => ChatMessage::error(UNPARSEABLE_MESSAGE),
        Err(SendError::Other(_)) => ChatMessage::error(GENERIC_FAILURE_MESSAGE),
    }
}
