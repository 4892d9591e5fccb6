//! Company lookup page.

use leptos::prelude::*;

use crate::components::company_form::CompanyLookup;
use crate::components::top_bar::TopBar;

/// Company information page.
#[component]
pub fn CompanyPage() -> impl IntoView {
    view! {
        <div class="page company-page">
            <TopBar/>
            <main class="company-page__main">
                <div class="company-page__intro">
                    <h1>"Company Information"</h1>
                    <p>"Enter a company name to view its description"</p>
                </div>
                <CompanyLookup/>
            </main>
        </div>
    }
}
