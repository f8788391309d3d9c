//! Chat transcript state for the panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Holds the ordered message list, the in-flight flag and the scroll request
//! counter. Provided as `RwSignal<ChatState>` context by `app::App`.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Who produced a chat message. Only affects styling, never the text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    User,
    Bot,
    Error,
}

impl MessageKind {
    /// CSS modifier class applied to the rendered message row.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::User => "user-message",
            Self::Bot => "bot-message",
            Self::Error => "error-message",
        }
    }
}

/// A single rendered chat message. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    /// Client-generated key for keyed list rendering.
    pub id: String,
    pub kind: MessageKind,
    pub text: String,
}

impl ChatMessage {
    #[must_use]
    pub fn new(kind: MessageKind, text: impl Into<String>) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), kind, text: text.into() }
    }

    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(MessageKind::User, text)
    }

    #[must_use]
    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(MessageKind::Bot, text)
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(MessageKind::Error, text)
    }
}

/// State for the chat panel: the append-only message list plus the
/// in-flight flag for the single outstanding request.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub pending: bool,
    /// Bumped whenever the list should scroll to its newest entry.
    pub scroll_seq: u64,
}

impl ChatState {
    /// Append a message to the end of the list.
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn request_scroll(&mut self) {
        self.scroll_seq = self.scroll_seq.wrapping_add(1);
    }

    #[cfg(test)]
    pub fn latest(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}
