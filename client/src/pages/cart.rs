//! Shopping cart with checkout.
//!
//! The displayed total is always the server's `total`. A disagreement with
//! the summed lines is logged, never papered over.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::components::game_card::GameImage;
use crate::components::navbar::Navbar;
use crate::components::status::fetch_view;
use crate::net::api;
use crate::net::types::{Cart, CartItem};
use crate::state::cart::can_checkout;
use crate::state::fetch::ActionState;
use crate::util::fetch::{use_navigation_request, use_page_fetch};
use crate::util::format::format_timestamp;
use crate::util::paths;

#[component]
pub fn CartPage() -> impl IntoView {
    let cart = use_page_fetch(|| (), |()| api::fetch_cart());
    let checkout = RwSignal::new(ActionState::Idle);
    let redirect = use_navigation_request();

    let on_checkout = move || {
        let ready = cart.data.with_untracked(|page| {
            page.data().is_some_and(|current| can_checkout(current, &checkout.get_untracked()))
        });
        if !ready {
            return;
        }
        checkout.set(ActionState::Pending);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::cart::{CheckoutOutcome, classify_checkout};

            match classify_checkout(api::checkout().await) {
                CheckoutOutcome::Navigate(path) => {
                    checkout.try_set(ActionState::Idle);
                    redirect.try_set(Some(path));
                }
                CheckoutOutcome::RedirectToLogin => {
                    redirect.try_set(Some(paths::LOGIN.to_owned()));
                }
                CheckoutOutcome::Failed(message) => {
                    checkout.try_set(ActionState::Failed(message));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = redirect;
    };

    view! {
        <div class="page page--cart">
            <Navbar/>
            <main class="page__main">
                {fetch_view(cart.data, move |current: &Cart| render_cart(current, checkout, on_checkout))}
            </main>
        </div>
    }
}

fn render_cart<F>(cart: &Cart, checkout: RwSignal<ActionState>, on_checkout: F) -> AnyView
where
    F: Fn() + Copy + Send + Sync + 'static,
{
    if !cart.total_matches() {
        leptos::logging::warn!("cart total {} differs from line sum {}", cart.total, cart.items_total());
    }
    let updated = cart.timestamp.as_deref().map(format_timestamp);
    let header = view! {
        <header class="page__header">
            <h1 class="page__title">"Shopping Cart"</h1>
            {updated.map(|stamp| view! { <p class="page__meta">{format!("Last updated: {stamp}")}</p> })}
        </header>
    };

    if cart.is_empty() {
        return view! {
            {header}
            <div class="empty-state">
                <span class="empty-state__icon" aria-hidden="true">"🎮"</span>
                <h3 class="empty-state__title">"No items in cart"</h3>
                <p class="empty-state__text">"Start shopping to add items to your cart."</p>
                <a class="btn btn--primary" href=paths::GAMES>"Browse Games"</a>
            </div>
        }
        .into_any();
    }

    let rows = cart.items.iter().map(render_line).collect_view();
    let total = cart.total.to_string();
    // Non-empty here, so only an in-flight checkout disables the button.
    let enabled = move || !checkout.get().is_pending();

    view! {
        {header}
        <section class="cart">
            <ul class="cart__lines">{rows}</ul>
            <footer class="cart__summary">
                <div class="cart__total">
                    <span>"Total"</span>
                    <span class="cart__total-amount">{total}</span>
                </div>
                <button class="btn btn--primary cart__checkout" disabled=move || !enabled() on:click=move |_| on_checkout()>
                    {move || if checkout.get().is_pending() { "Placing order..." } else { "Proceed to Checkout" }}
                </button>
                {move || checkout.get().message().map(|message| {
                    view! { <p class="action-message action-message--error">{message.to_owned()}</p> }
                })}
            </footer>
        </section>
    }
    .into_any()
}

fn render_line(item: &CartItem) -> impl IntoView {
    view! {
        <li class="cart-line">
            <GameImage image_url=item.image_url.clone() alt=item.title.clone() class="cart-line__image"/>
            <div class="cart-line__info">
                <h3 class="cart-line__title">{item.title.clone()}</h3>
                <p class="cart-line__meta">{format!("Quantity: {} × {}", item.quantity, item.price)}</p>
            </div>
            <span class="cart-line__total">{item.total_price.to_string()}</span>
        </li>
    }
}
