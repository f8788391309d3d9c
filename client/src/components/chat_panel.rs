//! Chat panel with the message list, a text input and a send control.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds [`ChatController`] to Leptos signals. The shared `ChatState` comes
//! from context; the input value is local to the panel. Click and Enter both
//! spawn the same `submit` call.

#[cfg(test)]
#[path = "chat_panel_test.rs"]
mod chat_panel_test;

use leptos::prelude::*;

use crate::controller::{ChatController, ChatView};
use crate::net::api::{HttpTransport, SEND_MESSAGE_ENDPOINT};
use crate::state::chat::{ChatMessage, ChatState};

/// [`ChatView`] backed by the panel's reactive signals.
#[derive(Clone, Copy, Debug)]
pub struct SignalChatView {
    chat: RwSignal<ChatState>,
    input: RwSignal<String>,
}

impl SignalChatView {
    #[must_use]
    pub fn new(chat: RwSignal<ChatState>, input: RwSignal<String>) -> Self {
        Self { chat, input }
    }
}

impl ChatView for SignalChatView {
    fn append(&self, message: ChatMessage) {
        self.chat.update(|c| c.push(message));
    }

    fn clear_input(&self) {
        self.input.set(String::new());
    }

    fn scroll_to_latest(&self) {
        // The effect in `ChatPanel` performs the DOM scroll after render.
        self.chat.update(ChatState::request_scroll);
    }

    fn set_pending(&self, pending: bool) {
        self.chat.update(|c| c.pending = pending);
    }

    fn is_pending(&self) -> bool {
        self.chat.with_untracked(|c| c.pending)
    }
}

/// Any Enter in the input submits, with or without modifiers.
fn is_submit_key(key: &str) -> bool {
    key == "Enter"
}

/// Chat panel posting to `endpoint` (default `/send_message`).
#[component]
pub fn ChatPanel(#[prop(optional, into)] endpoint: Option<String>) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let transport = HttpTransport::new(endpoint.unwrap_or_else(|| SEND_MESSAGE_ENDPOINT.to_owned()));
    let controller = StoredValue::new(ChatController::new(transport, SignalChatView::new(chat, input)));

    Effect::new(move || {
        let _ = chat.with(|c| c.scroll_seq);

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get_untracked();
        let controller = controller.get_value();
        leptos::task::spawn_local(async move {
            controller.submit(&text).await;
        });
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_submit_key(&ev.key()) {
            ev.prevent_default();
            do_send();
        }
    };

    let pending = move || chat.with(|c| c.pending);

    view! {
        <div class="chat-panel">
            <div class="chat-panel__messages" node_ref=messages_ref>
                <Show when=move || chat.with(|c| c.messages.is_empty())>
                    <div class="chat-panel__empty">"Ask anything. Prefix with @r/name to ask about a subreddit."</div>
                </Show>

                <For
                    each=move || chat.with(|c| c.messages.clone())
                    key=|msg| msg.id.clone()
                    children=move |msg: ChatMessage| {
                        let class = format!("message {}", msg.kind.css_class());
                        view! { <div class=class>{msg.text}</div> }
                    }
                />

                {move || pending().then(|| view! { <div class="chat-panel__loading">"Thinking..."</div> })}
            </div>

            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Type your message..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary chat-panel__send" on:click=on_click disabled=pending>
                    "Send"
                </button>
            </div>
        </div>
    }
}
