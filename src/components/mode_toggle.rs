//! Normal / dev-mode rendering toggle for the chat transcript.

use leptos::prelude::*;

use crate::state::ui::{ResponseView, UiState};

/// Two mutually exclusive buttons selecting how bot replies render.
///
/// Display-only: switching issues no request and leaves the transcript
/// untouched; bot turns re-render from their stored payloads.
#[component]
pub fn ModeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let select = move |mode: ResponseView| {
        ui.update(|u| u.response_view = mode);
    };

    view! {
        <div class="mode-toggle">
            <button
                class="mode-toggle__button"
                class:mode-toggle__button--active=move || {
                    ui.get().response_view == ResponseView::Normal
                }
                on:click=move |_| select(ResponseView::Normal)
            >
                "Normal"
            </button>
            <button
                class="mode-toggle__button"
                class:mode-toggle__button--active=move || {
                    ui.get().response_view == ResponseView::Dev
                }
                on:click=move |_| select(ResponseView::Dev)
            >
                "Dev Mode"
            </button>
        </div>
    }
}
