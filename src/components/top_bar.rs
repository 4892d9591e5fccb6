//! Top navigation bar shared by both pages.

use leptos::prelude::*;

/// Brand plus links between the chat and company lookup views.
#[component]
pub fn TopBar() -> impl IntoView {
    view! {
        <header class="top-bar">
            <span class="top-bar__brand">"Askboard"</span>
            <nav class="top-bar__nav">
                <a href="/" class="top-bar__link">
                    "Chat"
                </a>
                <a href="/company" class="top-bar__link">
                    "Company"
                </a>
            </nav>
        </header>
    }
}
