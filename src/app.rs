//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{chat::ChatPage, company::CompanyPage};
use crate::state::{chat::ChatState, company::CompanyState, ui::UiState};

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
/// State signals live here, above the router, so in-flight requests
/// resolve into live state even after the user navigates away.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let chat = RwSignal::new(ChatState::default());
    let company = RwSignal::new(CompanyState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(chat);
    provide_context(company);
    provide_context(ui);

    view! {
        <Title text="Askboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ChatPage/>
                <Route path=StaticSegment("company") view=CompanyPage/>
            </Routes>
        </Router>
    }
}
