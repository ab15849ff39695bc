//! Loading and error placeholders shared by every page.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::state::fetch::{FetchState, PageData};

/// Spinner shown while a page resource is outstanding.
#[component]
pub fn LoadingView(#[prop(into, default = "Loading...".to_owned())] label: String) -> impl IntoView {
    view! {
        <div class="page-status page-status--loading" role="status" aria-live="polite">
            <span class="page-status__spinner" aria-hidden="true"></span>
            <span class="page-status__label">{label}</span>
        </div>
    }
}

/// Terminal failure for the current view. `message` is shown unchanged.
#[component]
pub fn ErrorView(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="page-status page-status--error" role="alert">
            <span class="page-status__prefix">"Error: "</span>
            <span class="page-status__message">{message}</span>
        </div>
    }
}

/// Render a page resource: loading, error, nothing while redirecting, or `ready(data)`.
pub fn fetch_view<T, F>(data: RwSignal<PageData<T>>, ready: F) -> impl IntoView
where
    T: Send + Sync + 'static,
    F: Fn(&T) -> AnyView + Send + Sync + 'static,
{
    move || {
        data.with(|page| match page.state() {
            FetchState::Loading => view! { <LoadingView/> }.into_any(),
            FetchState::Ready(body) => ready(body),
            FetchState::Failed(message) => view! { <ErrorView message=message.clone()/> }.into_any(),
            FetchState::Redirecting => ().into_any(),
        })
    }
}
