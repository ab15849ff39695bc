//! Single order view with payment information and line items.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};
use leptos_router::hooks::use_params_map;

use crate::components::back_button::BackButton;
use crate::components::game_card::GameImage;
use crate::components::navbar::Navbar;
use crate::components::status::fetch_view;
use crate::components::status_badge::StatusBadge;
use crate::net::api;
use crate::net::types::{Order, OrderItem};
use crate::util::fetch::use_page_fetch;
use crate::util::format::format_timestamp;
use crate::util::paths;

#[component]
pub fn OrderDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let order_id = move || params.with(|p| p.get("orderId").unwrap_or_default());

    let order = use_page_fetch(order_id, |id: String| async move { api::fetch_order(&id).await });

    view! {
        <div class="page page--order-details">
            <Navbar/>
            <main class="page__main">
                <BackButton href=paths::ORDERS label="Orders"/>
                {fetch_view(order.data, |current: &Order| render_order(current))}
            </main>
        </div>
    }
}

fn render_order(order: &Order) -> AnyView {
    let placed = order.placed_at.as_deref().map(format_timestamp);
    let payment = order.payment_summary();
    let (method, payment_status) = (payment.method.to_owned(), payment.status.to_owned());
    let items = order.items.iter().map(render_item).collect_view();

    view! {
        <article class="order-details">
            <header class="order-details__header">
                <div>
                    <h1 class="order-details__title">{format!("Order #{}", order.id)}</h1>
                    {placed.map(|stamp| view! { <p class="order-details__meta">{format!("Placed on {stamp}")}</p> })}
                </div>
                <div class="order-details__summary">
                    <span class="order-details__total">{order.total.to_string()}</span>
                    <StatusBadge status=order.status.clone()/>
                </div>
            </header>
            <section class="order-details__section">
                <h2>"Payment Information"</h2>
                <dl class="order-details__payment">
                    <div>
                        <dt>"Payment Method"</dt>
                        <dd>{method}</dd>
                    </div>
                    <div>
                        <dt>"Payment Status"</dt>
                        <dd>{payment_status}</dd>
                    </div>
                </dl>
            </section>
            <section class="order-details__section">
                <h2>"Order Items"</h2>
                <ul class="order-details__items">{items}</ul>
            </section>
        </article>
    }
    .into_any()
}

fn render_item(item: &OrderItem) -> impl IntoView {
    view! {
        <li class="order-item">
            <GameImage image_url=item.image_url.clone() alt=item.title.clone() class="order-item__image"/>
            <div class="order-item__info">
                <h3>{item.title.clone()}</h3>
                <p class="order-item__meta">{format!("Quantity: {} × {}", item.quantity, item.price)}</p>
            </div>
            <span class="order-item__total">{item.line_total().to_string()}</span>
        </li>
    }
}
