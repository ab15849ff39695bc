//! Order history for the signed-in user.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::components::back_button::BackButton;
use crate::components::navbar::Navbar;
use crate::components::status::fetch_view;
use crate::components::status_badge::StatusBadge;
use crate::net::api;
use crate::net::types::Order;
use crate::util::fetch::use_page_fetch;
use crate::util::format::{format_timestamp, item_count_label};
use crate::util::paths;

#[component]
pub fn OrdersPage() -> impl IntoView {
    let orders = use_page_fetch(|| (), |()| api::fetch_my_orders());

    view! {
        <div class="page page--orders">
            <Navbar/>
            <main class="page__main">
                <BackButton href=paths::GAMES label="Games"/>
                <h1 class="page__title">"My Orders"</h1>
                {fetch_view(orders.data, |list: &Vec<Order>| render_orders(list))}
            </main>
        </div>
    }
}

fn render_orders(orders: &[Order]) -> AnyView {
    if orders.is_empty() {
        return view! {
            <div class="empty-state">
                <span class="empty-state__icon" aria-hidden="true">"📦"</span>
                <h3 class="empty-state__title">"No orders yet"</h3>
                <p class="empty-state__text">"Start shopping to see your orders here."</p>
                <a class="btn btn--primary" href=paths::GAMES>"Browse Games"</a>
            </div>
        }
        .into_any();
    }

    let rows = orders
        .iter()
        .map(|order| {
            let placed = order.placed_at.as_deref().map(format_timestamp).unwrap_or_default();
            view! {
                <li>
                    <a class="order-row" href=paths::order(&order.id)>
                        <div class="order-row__info">
                            <h3 class="order-row__title">{format!("Order #{}", order.id)}</h3>
                            <p class="order-row__meta">{placed}</p>
                            <p class="order-row__meta">{item_count_label(order.item_count())}</p>
                        </div>
                        <div class="order-row__summary">
                            <span class="order-row__total">{order.total.to_string()}</span>
                            <StatusBadge status=order.status.clone()/>
                        </div>
                    </a>
                </li>
            }
        })
        .collect_view();

    view! { <ul class="order-list">{rows}</ul> }.into_any()
}
