//! Reactive glue for the page data-fetch lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route follows the same contract: fetch on mount and whenever a
//! declared input changes, render loading until the answer arrives, replace
//! state on success, show the message on failure, and go to `/login` on a
//! `401`. `use_page_fetch` is that contract once; pages only supply the
//! input and the request.
//!
//! TRADE-OFFS
//! ==========
//! In-flight requests are not aborted; their results are discarded by ticket
//! (see `state::fetch`). This keeps the transport simple and still prevents a
//! stale response from overwriting newer state.

use std::future::Future;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::error::ApiError;
use crate::state::fetch::{PageData, Settle};
use crate::state::session::SessionState;
use crate::util::debounce::DebouncedInput;
use crate::util::paths;

/// A page resource plus a way to ask for a refetch after a write.
pub struct PageResource<T: Send + Sync + 'static> {
    pub data: RwSignal<PageData<T>>,
    reload: RwSignal<u64>,
}

impl<T: Send + Sync + 'static> Clone for PageResource<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for PageResource<T> {}

impl<T: Send + Sync + 'static> PageResource<T> {
    /// Re-run the fetch with the current inputs.
    pub fn refetch(&self) {
        self.reload.try_update(|n| *n += 1);
    }

    /// Record a failure that did not come from the fetch itself.
    pub fn fail(&self, message: impl Into<String>) {
        let message = message.into();
        self.data.try_update(|page| page.fail(message));
    }
}

/// Fetch `fetcher(source())` now and again whenever `source` changes.
pub fn use_page_fetch<K, T, S, F, Fut>(source: S, fetcher: F) -> PageResource<T>
where
    K: 'static,
    T: Send + Sync + 'static,
    S: Fn() -> K + 'static,
    F: Fn(K) -> Fut + Clone + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let data = RwSignal::new(PageData::<T>::new());
    let reload = RwSignal::new(0_u64);
    let navigate = use_navigate();
    let session = use_context::<RwSignal<SessionState>>();

    Effect::new(move || {
        reload.track();
        let key = source();
        let Some(ticket) = data.try_update(PageData::begin) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let fetcher = fetcher.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = fetcher(key).await;
                if let Err(err) = &result {
                    leptos::logging::warn!("page fetch failed: {err}");
                }
                match data.try_update(|page| page.settle(ticket, result)) {
                    Some(Settle::RedirectToLogin) => {
                        end_session_for(session, paths::LOGIN);
                        navigate(paths::LOGIN, NavigateOptions::default());
                    }
                    Some(Settle::Stale) => leptos::logging::log!("discarded stale page response"),
                    Some(Settle::Applied) | None => {}
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, ticket, &fetcher, &navigate, session);
        }
    });

    on_cleanup(move || {
        data.try_update(PageData::retire);
    });

    PageResource { data, reload }
}

/// Route change requested from outside the render pass.
///
/// Async tasks set the signal; an effect performs the navigation. Setting it
/// after the page is gone is a no-op because the signal is disposed with it,
/// so use `try_set` from tasks that may outlive the page. A trip to `/login`
/// also ends the session so the navbar stops offering signed-in links.
pub fn use_navigation_request() -> RwSignal<Option<String>> {
    let target = RwSignal::new(None::<String>);
    let navigate = use_navigate();
    let session = use_context::<RwSignal<SessionState>>();
    Effect::new(move || {
        if let Some(path) = target.get() {
            target.set(None);
            end_session_for(session, &path);
            navigate(&path, NavigateOptions::default());
        }
    });
    target
}

fn end_session_for(session: Option<RwSignal<SessionState>>, path: &str) {
    let Some(session) = session else {
        return;
    };
    if session.with_untracked(|state| state.ends_on_route(path)) {
        session.set(SessionState::Anonymous);
    }
}

/// Text input whose settled value lags keystrokes by the debounce delay.
///
/// `raw` and `settled` are memos over one [`DebouncedInput`], so a fetch that
/// tracks `settled` does not rerun on every keystroke.
#[derive(Clone, Copy)]
pub struct DebouncedText {
    state: RwSignal<DebouncedInput>,
    pub raw: Memo<String>,
    pub settled: Memo<String>,
}

impl DebouncedText {
    #[must_use]
    pub fn new(initial: &str) -> Self {
        let state = RwSignal::new(DebouncedInput::new(initial));
        Self {
            state,
            raw: Memo::new(move |_| state.with(|field| field.raw().to_owned())),
            settled: Memo::new(move |_| state.with(|field| field.settled().to_owned())),
        }
    }

    /// A keystroke: show it now, settle it once typing pauses.
    pub fn input(&self, value: String) {
        let Some(ticket) = self.state.try_update(|field| field.input(value)) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let state = self.state;
            let delay = state.with_untracked(DebouncedInput::delay);
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(delay).await;
                state.try_update(|field| field.elapse(ticket));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            self.state.try_update(|field| field.elapse(ticket));
        }
    }

    /// Replace the value immediately, dropping any pending keystroke.
    pub fn set_now(&self, value: String) {
        self.state.update(|field| field.set_now(value));
    }
}
