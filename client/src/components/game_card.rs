//! Catalog card and the image-with-placeholder used wherever a game appears.
//!
//! DESIGN
//! ======
//! Images come from arbitrary store paths and often 404. A missing reference
//! or a failed load both fall back to the same placeholder tile, so broken
//! images never leave an empty box in the grid.

use leptos::prelude::*;

use crate::net::types::Game;
use crate::util::format::resolve_image_url;
use crate::util::paths;

/// Game artwork, or a placeholder when absent or unloadable.
#[component]
pub fn GameImage(
    image_url: Option<String>,
    #[prop(into)] alt: String,
    #[prop(into, default = "game-image".to_owned())] class: String,
) -> impl IntoView {
    let src = resolve_image_url(image_url.as_deref());
    let broken = RwSignal::new(false);
    let placeholder_class = format!("{class} {class}--placeholder");

    view! {
        {move || match src.clone().filter(|_| !broken.get()) {
            Some(src) => view! {
                <img class=class.clone() src=src alt=alt.clone() loading="lazy" on:error=move |_| broken.set(true)/>
            }
            .into_any(),
            None => view! {
                <div class=placeholder_class.clone() aria-hidden="true">
                    <span class="game-image__icon">"🎮"</span>
                </div>
            }
            .into_any(),
        }}
    }
}

/// Clickable catalog card linking to the details route.
#[component]
pub fn GameCard(game: Game) -> impl IntoView {
    let href = paths::details(&game.id);
    let in_stock = game.in_stock();

    view! {
        <a class="game-card" href=href>
            <div class="game-card__media">
                <GameImage image_url=game.image_url.clone() alt=game.title.clone() class="game-card__image"/>
            </div>
            <div class="game-card__body">
                <h2 class="game-card__title">{game.title.clone()}</h2>
                <p class="game-card__description">{game.description.clone()}</p>
                <div class="game-card__footer">
                    <span class="game-card__price">{game.price.to_string()}</span>
                    <span class="game-card__tags">
                        <span class="tag">{game.genre.clone()}</span>
                        <span class="tag tag--platform">{game.platform.clone()}</span>
                    </span>
                </div>
                <Show when=move || !in_stock>
                    <span class="game-card__stock game-card__stock--out">"Out of stock"</span>
                </Show>
            </div>
        </a>
    }
}
