//! "Back to ..." link rendered above detail views.

use leptos::prelude::*;

#[component]
pub fn BackButton(#[prop(into)] href: String, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <a class="back-button" href=href>
            <span class="back-button__arrow" aria-hidden="true">"←"</span>
            {format!("Back to {label}")}
        </a>
    }
}
