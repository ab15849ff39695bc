//! Top navigation bar shared by every store page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the process-wide session to decide which links to show and owns the
//! logout flow. On the catalog it also renders the search box and genre
//! select; the games page passes those controls in and fetches from them.

use leptos::prelude::*;

use crate::state::catalog::CatalogQuery;
use crate::state::session::SessionState;
use crate::util::fetch::{DebouncedText, use_navigation_request};
use crate::util::paths;

/// Catalog inputs rendered by the navbar and consumed by the games page.
#[derive(Clone, Copy)]
pub struct CatalogControls {
    pub search: DebouncedText,
    pub genre: RwSignal<String>,
    pub genres: RwSignal<Vec<String>>,
}

impl CatalogControls {
    #[must_use]
    pub fn new() -> Self {
        Self {
            search: DebouncedText::new(""),
            genre: RwSignal::new(String::new()),
            genres: RwSignal::new(Vec::new()),
        }
    }

    /// The settled query; tracks both inputs.
    #[must_use]
    pub fn query(&self) -> CatalogQuery {
        CatalogQuery { search: self.search.settled.get(), genre: self.genre.get() }
    }

    /// Select a genre, which also clears the search box.
    pub fn choose_genre(&self, genre: String) {
        let current = CatalogQuery { search: self.search.settled.get_untracked(), genre: self.genre.get_untracked() };
        let next = current.with_genre(genre);
        self.search.set_now(next.search);
        self.genre.set(next.genre);
    }
}

impl Default for CatalogControls {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn Navbar(#[prop(optional)] catalog: Option<CatalogControls>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let menu_open = RwSignal::new(false);

    let logged_in = move || session.with(SessionState::is_logged_in);
    let is_admin = move || session.with(SessionState::is_admin);
    let username = move || session.with(|s| s.user().map(|user| user.username.clone()).unwrap_or_default());

    let redirect = use_navigation_request();

    let on_logout = move || {
        menu_open.set(false);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(err) = crate::net::api::logout().await {
                leptos::logging::warn!("logout failed: {err}");
                return;
            }
            session.update(SessionState::sign_out);
            redirect.try_set(Some(paths::LOGIN.to_owned()));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = redirect;
    };

    let search_controls = catalog.map(|controls| {
        view! {
            <div class="navbar__search">
                <span class="navbar__search-icon" aria-hidden="true">"⌕"</span>
                <input
                    class="navbar__search-input"
                    type="text"
                    placeholder="Search games..."
                    prop:value=move || controls.search.raw.get()
                    on:input=move |ev| controls.search.input(event_target_value(&ev))
                />
            </div>
            <select
                class="navbar__genre"
                prop:value=move || controls.genre.get()
                on:change=move |ev| controls.choose_genre(event_target_value(&ev))
            >
                <option value="">"All Genres"</option>
                <For each=move || controls.genres.get() key=|genre| genre.clone() let:genre>
                    <option value=genre.clone()>{genre.clone()}</option>
                </For>
            </select>
        }
    });

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a class="navbar__brand" href=paths::GAMES>
                    <span class="navbar__logo" aria-hidden="true">"🎮"</span>
                    <span class="navbar__titles">
                        <span class="navbar__title">"Game Haven"</span>
                        <span class="navbar__tagline">"Your Gaming Paradise"</span>
                    </span>
                </a>

                {search_controls}

                <div class="navbar__links">
                    <Show when=logged_in>
                        <a class="navbar__link" href=paths::CART>"Cart"</a>
                        <a class="navbar__link" href=paths::ORDERS>"Orders"</a>
                    </Show>
                    <Show when=is_admin>
                        <a class="navbar__link" href=paths::ADMIN>"Admin"</a>
                    </Show>
                    <Show
                        when=logged_in
                        fallback=|| view! { <a class="navbar__login" href=paths::LOGIN>"Login"</a> }
                    >
                        <span class="navbar__user">{username}</span>
                        <button class="navbar__logout" on:click=move |_| on_logout()>
                            "Logout"
                        </button>
                    </Show>
                </div>

                <button
                    class="navbar__toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="navbar__mobile">
                    <a class="navbar__mobile-link" href=paths::GAMES>"Games"</a>
                    <Show
                        when=logged_in
                        fallback=|| view! { <a class="navbar__mobile-link" href=paths::LOGIN>"Login"</a> }
                    >
                        <a class="navbar__mobile-link" href=paths::CART>"Cart"</a>
                        <a class="navbar__mobile-link" href=paths::ORDERS>"Orders"</a>
                        <Show when=is_admin>
                            <a class="navbar__mobile-link" href=paths::ADMIN>"Admin"</a>
                        </Show>
                        <button class="navbar__mobile-link" on:click=move |_| on_logout()>
                            "Logout"
                        </button>
                    </Show>
                </div>
            </Show>
        </nav>
    }
}
