//! Company lookup form and description card.

use leptos::prelude::*;

use crate::state::company::CompanyState;

/// Name form plus result card.
///
/// Submitting an empty name does nothing. Overlapping submits are not
/// cancelled; the last response to arrive wins, as in the original form.
#[component]
pub fn CompanyLookup() -> impl IntoView {
    let company = expect_context::<RwSignal<CompanyState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let name = company.get().company_name;
        if name.trim().is_empty() {
            return;
        }

        company.update(|c| c.begin());

        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_company_description(&name).await {
                Ok(reply) => company.update(|c| c.apply(reply)),
                Err(_) => {
                    company.update(|c| c.finish_err(CompanyState::FETCH_FAILED.to_owned()));
                }
            }
        });
    };

    let heading = move || {
        let name = company.get().company_name;
        if name.is_empty() {
            "Company Description".to_owned()
        } else {
            format!("About {name}")
        }
    };

    view! {
        <div class="company-lookup">
            <form class="company-lookup__form" on:submit=on_submit>
                <label class="company-lookup__label" for="company-name">
                    "Company Name"
                </label>
                <div class="company-lookup__row">
                    <input
                        id="company-name"
                        class="company-lookup__input"
                        type="text"
                        placeholder="Enter company name"
                        prop:value=move || company.get().company_name
                        on:input=move |ev| {
                            company.update(|c| c.company_name = event_target_value(&ev));
                        }
                    />
                    <button
                        class="btn btn--primary company-lookup__submit"
                        type="submit"
                        disabled=move || company.get().loading
                    >
                        {move || if company.get().loading { "Loading..." } else { "Get Description" }}
                    </button>
                </div>
            </form>

            <div class="company-lookup__card">
                <h3 class="company-lookup__title">{heading}</h3>
                <div class="company-lookup__body">
                    {move || {
                        let state = company.get();
                        if !state.error.is_empty() {
                            view! { <p class="company-lookup__error">{state.error}</p> }
                                .into_any()
                        } else if !state.description.is_empty() {
                            view! {
                                <p class="company-lookup__description">{state.description}</p>
                            }
                                .into_any()
                        } else {
                            view! {
                                <p class="company-lookup__placeholder">
                                    "Enter a company name and click \"Get Description\" to see information"
                                </p>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
