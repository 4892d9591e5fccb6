//! Chat transcript and message composer.

use leptos::prelude::*;

use crate::components::mode_toggle::ModeToggle;
use crate::net::answer::pretty_response;
use crate::state::chat::{ChatState, Role};
use crate::state::ui::{ResponseView, UiState};

/// Chat panel showing the transcript, a typing indicator, the dev-mode
/// toggle, and a multi-line composer.
///
/// Enter submits; Shift+Enter inserts a newline. One request may be in
/// flight at a time so every user turn gets exactly one bot turn.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let input = RwSignal::new(String::new());
    let bottom_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest turn visible whenever the transcript grows or the
    // typing indicator toggles.
    Effect::new(move || {
        let state = chat.get();
        let _ = (state.messages.len(), state.loading);

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = bottom_ref.get() {
                let options = web_sys::ScrollIntoViewOptions::new();
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                el.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    });

    let do_send = move || {
        let text = input.get();
        if text.trim().is_empty() || chat.get().loading {
            return;
        }

        input.set(String::new());
        chat.update(|c| c.push_user(text.clone()));

        leptos::task::spawn_local(async move {
            match crate::net::api::send_chat_message(&text).await {
                Ok(reply) => chat.update(|c| c.push_bot(reply.response)),
                Err(err) => chat.update(|c| c.push_error(&err)),
            }
        });
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !chat.get().loading && !input.get().trim().is_empty();

    view! {
        <div class="chat-panel">
            <div class="chat-panel__header">
                <ModeToggle/>
            </div>

            <div class="chat-panel__messages">
                {move || {
                    let messages = chat.get().messages;
                    if messages.is_empty() {
                        return view! {
                            <div class="chat-panel__empty">"Start the conversation!"</div>
                        }
                            .into_any();
                    }

                    let dev = ui.get().response_view == ResponseView::Dev;
                    messages
                        .iter()
                        .map(|msg| {
                            let is_user = msg.role == Role::User;
                            let bubble = match &msg.raw {
                                Some(raw) if dev => view! {
                                    <pre class="chat-panel__bubble chat-panel__bubble--raw">
                                        {pretty_response(raw)}
                                    </pre>
                                }
                                    .into_any(),
                                _ => view! {
                                    <span class="chat-panel__bubble">{msg.text.clone()}</span>
                                }
                                    .into_any(),
                            };
                            view! {
                                <div
                                    class="chat-panel__message"
                                    class:chat-panel__message--user=is_user
                                >
                                    {bubble}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
                {move || {
                    chat.get()
                        .loading
                        .then(|| view! { <div class="chat-panel__typing">"Bot is typing..."</div> })
                }}
                <div class="chat-panel__bottom" node_ref=bottom_ref></div>
            </div>

            <div class="chat-panel__input-row">
                <textarea
                    class="chat-panel__input"
                    placeholder="Type your message..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                ></textarea>
                <button
                    class="btn btn--primary chat-panel__send"
                    on:click=on_click
                    disabled=move || !can_send()
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}
