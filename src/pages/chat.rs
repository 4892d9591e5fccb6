//! Chat page hosting the transcript and composer.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::top_bar::TopBar;

/// Chat page — the default route.
#[component]
pub fn ChatPage() -> impl IntoView {
    view! {
        <div class="page chat-page">
            <TopBar/>
            <main class="chat-page__main">
                <ChatPanel/>
            </main>
        </div>
    }
}
