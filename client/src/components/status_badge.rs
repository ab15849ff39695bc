//! Order status pill.

use leptos::prelude::*;

use crate::net::types::OrderStatus;
use crate::state::orders::status_badge_class;

#[component]
pub fn StatusBadge(status: OrderStatus) -> impl IntoView {
    let class = status_badge_class(&status);
    view! { <span class=class>{status.as_str().to_owned()}</span> }
}
