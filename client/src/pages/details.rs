//! Single game view with add-to-cart.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};
use leptos_router::hooks::use_params_map;

use crate::components::back_button::BackButton;
use crate::components::game_card::GameImage;
use crate::components::navbar::Navbar;
use crate::components::status::fetch_view;
use crate::net::api;
use crate::net::types::Game;
use crate::state::cart::{AddToCartGate, prepare_add_to_cart};
use crate::state::fetch::ActionState;
use crate::util::fetch::{use_navigation_request, use_page_fetch};
use crate::util::format::format_timestamp;
use crate::util::paths;

const OUT_OF_STOCK_MESSAGE: &str = "This game is currently out of stock.";

#[component]
pub fn DetailsPage() -> impl IntoView {
    let params = use_params_map();
    let game_id = move || params.with(|p| p.get("id").unwrap_or_default());

    let game = use_page_fetch(game_id, |id: String| async move { api::fetch_game(&id).await });
    let action = RwSignal::new(ActionState::Idle);
    let redirect = use_navigation_request();

    let on_add = move || {
        let Some(current) = game.data.with_untracked(|page| page.data().cloned()) else {
            return;
        };
        match prepare_add_to_cart(&current, &action.get_untracked()) {
            AddToCartGate::Ready(request) => {
                action.set(ActionState::Pending);
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    use crate::state::cart::{AddToCartOutcome, OUT_OF_STOCK_REDIRECT_MS, classify_add_to_cart};

                    let outcome = classify_add_to_cart(api::add_to_cart(&request).await);
                    let follow_up = match &outcome {
                        AddToCartOutcome::RedirectToLogin => Some((0, paths::LOGIN)),
                        AddToCartOutcome::OutOfStock(_) => Some((OUT_OF_STOCK_REDIRECT_MS, paths::GAMES)),
                        AddToCartOutcome::Added(_) | AddToCartOutcome::Failed(_) => None,
                    };
                    action.try_set(outcome.into_action_state());
                    if let Some((delay_ms, path)) = follow_up {
                        if delay_ms > 0 {
                            gloo_timers::future::sleep(std::time::Duration::from_millis(delay_ms)).await;
                        }
                        redirect.try_set(Some(path.to_owned()));
                    }
                });
                #[cfg(not(feature = "hydrate"))]
                let _ = (request, redirect);
            }
            AddToCartGate::OutOfStock => action.set(ActionState::Failed(OUT_OF_STOCK_MESSAGE.to_owned())),
            AddToCartGate::Busy => {}
        }
    };

    view! {
        <div class="page page--details">
            <Navbar/>
            <main class="page__main">
                <BackButton href=paths::GAMES label="Games"/>
                {fetch_view(game.data, move |current: &Game| render_game(current, action, on_add))}
            </main>
        </div>
    }
}

fn render_game<F>(game: &Game, action: RwSignal<ActionState>, on_add: F) -> AnyView
where
    F: Fn() + Copy + Send + Sync + 'static,
{
    let in_stock = game.in_stock();
    let stock_label = if in_stock { format!("{} in stock", game.stock_quantity) } else { "Out of stock".to_owned() };
    let release = game.release_date.as_deref().map(format_timestamp);

    view! {
        <article class="game-details">
            <div class="game-details__media">
                <GameImage image_url=game.image_url.clone() alt=game.title.clone() class="game-details__image"/>
            </div>
            <div class="game-details__body">
                <h1 class="game-details__title">{game.title.clone()}</h1>
                <p class="game-details__description">{game.description.clone()}</p>
                <dl class="game-details__facts">
                    <div class="game-details__fact">
                        <dt>"Genre"</dt>
                        <dd>{game.genre.clone()}</dd>
                    </div>
                    <div class="game-details__fact">
                        <dt>"Platform"</dt>
                        <dd>{game.platform.clone()}</dd>
                    </div>
                    {release.map(|date| view! {
                        <div class="game-details__fact">
                            <dt>"Release Date"</dt>
                            <dd>{date}</dd>
                        </div>
                    })}
                    <div class="game-details__fact">
                        <dt>"Availability"</dt>
                        <dd class:game-details__stock--out=!in_stock>{stock_label}</dd>
                    </div>
                </dl>
                <div class="game-details__purchase">
                    <span class="game-details__price">{game.price.to_string()}</span>
                    <button
                        class="btn btn--primary"
                        disabled=move || !in_stock || action.get().is_pending()
                        on:click=move |_| on_add()
                    >
                        {move || match (in_stock, action.get().is_pending()) {
                            (false, _) => "Out of Stock",
                            (true, true) => "Adding...",
                            (true, false) => "Add to Cart",
                        }}
                    </button>
                </div>
                {move || action.get().message().map(|message| {
                    let failed = action.get().is_failed();
                    view! {
                        <p class="action-message" class:action-message--error=failed>{message.to_owned()}</p>
                    }
                })}
            </div>
        </article>
    }
    .into_any()
}
