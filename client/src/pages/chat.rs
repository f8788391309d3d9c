//! Landing page hosting the chat panel.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;

#[component]
pub fn ChatPage() -> impl IntoView {
    view! {
        <main class="chat-page">
            <header class="chat-page__header">
                <h1>"Subreddit Chat"</h1>
            </header>
            <ChatPanel/>
        </main>
    }
}
