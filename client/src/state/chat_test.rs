use super::*;

// =============================================================
// ChatState defaults
// =============================================================

#[test]
fn chat_state_default_empty_messages() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
    assert!(!state.pending);
    assert!(state.latest().is_none());
    assert_eq!(state.scroll_seq, 0);
}

// =============================================================
// Appending
// =============================================================

#[test]
fn push_keeps_arrival_order() {
    let mut state = ChatState::default();
    state.push(ChatMessage::user("hello"));
    state.push(ChatMessage::bot("hi there"));
    state.push(ChatMessage::error("overloaded"));

    let kinds: Vec<MessageKind> = state.messages.iter().map(|m| m.kind).collect();
    assert_eq!(kinds, vec![MessageKind::User, MessageKind::Bot, MessageKind::Error]);
    assert_eq!(state.latest().map(|m| m.text.as_str()), Some("overloaded"));
}

#[test]
fn push_n_messages_yields_len_n() {
    let mut state = ChatState::default();
    for i in 0..7 {
        state.push(ChatMessage::user(format!("msg {i}")));
    }
    assert_eq!(state.messages.len(), 7);
    assert_eq!(state.messages[3].text, "msg 3");
}

// =============================================================
// ChatMessage
// =============================================================

#[test]
fn message_ids_are_unique() {
    let a = ChatMessage::user("same");
    let b = ChatMessage::user("same");
    assert_ne!(a.id, b.id);
}

#[test]
fn message_text_is_not_transformed() {
    let msg = ChatMessage::bot("<b>bold</b> **md**");
    assert_eq!(msg.text, "<b>bold</b> **md**");
    assert_eq!(msg.kind, MessageKind::Bot);
}

#[test]
fn kind_css_classes() {
    assert_eq!(MessageKind::User.css_class(), "user-message");
    assert_eq!(MessageKind::Bot.css_class(), "bot-message");
    assert_eq!(MessageKind::Error.css_class(), "error-message");
}

// =============================================================
// Scroll requests
// =============================================================

#[test]
fn request_scroll_bumps_seq() {
    let mut state = ChatState::default();
    state.request_scroll();
    state.request_scroll();
    assert_eq!(state.scroll_seq, 2);
}
