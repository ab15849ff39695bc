//! Catalog listing with search and genre filtering.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar owns the inputs; this page fetches whenever the settled search
//! or the genre changes. Search is debounced at the input, genre changes
//! apply at once.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::game_card::GameCard;
use crate::components::navbar::{CatalogControls, Navbar};
use crate::components::status::fetch_view;
use crate::net::api;
use crate::net::types::Game;
use crate::state::catalog::{CatalogQuery, empty_listing_message};
use crate::util::fetch::use_page_fetch;

#[component]
pub fn GamesPage() -> impl IntoView {
    let controls = CatalogControls::new();

    // Genres load once; a failure leaves the select with "All Genres" only.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::fetch_genres().await {
                Ok(genres) => {
                    controls.genres.try_set(genres);
                }
                Err(err) => leptos::logging::warn!("genre fetch failed: {err}"),
            }
        });
    });

    let games = use_page_fetch(
        move || controls.query(),
        |query: CatalogQuery| async move { api::fetch_games(&query.endpoint()).await },
    );

    view! {
        <div class="page page--games">
            <Navbar catalog=controls/>
            <main class="page__main">
                <h1 class="page__title">{move || controls.query().heading()}</h1>
                {fetch_view(games.data, move |list: &Vec<Game>| render_grid(list, &controls.query()))}
            </main>
        </div>
    }
}

fn render_grid(games: &[Game], query: &CatalogQuery) -> leptos::tachys::view::any_view::AnyView {
    if games.is_empty() {
        return view! { <p class="page__empty">{empty_listing_message(query)}</p> }.into_any();
    }
    let cards = games.iter().cloned().map(|game| view! { <GameCard game/> }).collect_view();
    view! { <div class="games-grid">{cards}</div> }.into_any()
}
