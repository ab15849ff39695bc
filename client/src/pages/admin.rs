//! Admin dashboard: orders, inventory and users.
//!
//! SYSTEM CONTEXT
//! ==============
//! Access comes from the session context. Signed-out visitors go to `/login`,
//! signed-in non-admins go back to the catalog, and the panel (and its
//! fetches) only mounts once the session says admin.
//!
//! Writes are sent on `change`, not per keystroke, and each successful write
//! refetches the active tab.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::components::back_button::BackButton;
use crate::components::navbar::Navbar;
use crate::components::status::{LoadingView, fetch_view};
use crate::components::status_badge::StatusBadge;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{AdminUser, Game, Order, OrderStatus};
use crate::state::admin::{AdminData, AdminTab, status_change, stock_change};
use crate::state::session::{AdminAccess, SessionState};
use crate::util::fetch::{PageResource, use_navigation_request, use_page_fetch};
use crate::util::format::format_timestamp;
use crate::util::paths;

#[component]
pub fn AdminPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let redirect = use_navigation_request();
    let access = move || session.with(SessionState::admin_access);

    Effect::new(move || match access() {
        AdminAccess::SignedOut => redirect.set(Some(paths::LOGIN.to_owned())),
        AdminAccess::Denied => redirect.set(Some(paths::GAMES.to_owned())),
        AdminAccess::Pending | AdminAccess::Granted => {}
    });

    view! {
        <div class="page page--admin">
            <Navbar/>
            <main class="page__main">
                <header class="page__header">
                    <h1 class="page__title">"Admin Dashboard"</h1>
                    <BackButton href=paths::GAMES label="Store"/>
                </header>
                <Show
                    when=move || access() == AdminAccess::Granted
                    fallback=move || match access() {
                        AdminAccess::Pending => view! { <LoadingView/> }.into_any(),
                        AdminAccess::SignedOut | AdminAccess::Denied | AdminAccess::Granted => ().into_any(),
                    }
                >
                    <AdminPanel/>
                </Show>
            </main>
        </div>
    }
}

#[component]
fn AdminPanel() -> impl IntoView {
    let tab = RwSignal::new(AdminTab::default());
    let redirect = use_navigation_request();
    let data = use_page_fetch(move || tab.get(), fetch_tab);

    let tabs = AdminTab::ALL
        .into_iter()
        .map(|entry| {
            view! {
                <button
                    class="admin-tabs__tab"
                    class:admin-tabs__tab--active=move || tab.get() == entry
                    on:click=move |_| tab.set(entry)
                >
                    {entry.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class="admin-tabs">{tabs}</nav>
        <section class="admin-panel">
            <h2 class="admin-panel__heading">{move || tab.get().heading()}</h2>
            {fetch_view(data.data, move |content: &AdminData| render_tab(content, data, redirect))}
        </section>
    }
}

async fn fetch_tab(tab: AdminTab) -> Result<AdminData, ApiError> {
    match tab {
        AdminTab::Orders => api::fetch_admin_orders().await.map(AdminData::Orders),
        AdminTab::Inventory => api::fetch_inventory().await.map(AdminData::Inventory),
        AdminTab::Users => api::fetch_users().await.map(AdminData::Users),
    }
}

fn render_tab(content: &AdminData, data: PageResource<AdminData>, redirect: RwSignal<Option<String>>) -> AnyView {
    if content.is_empty() {
        return view! { <p class="page__empty">"Nothing to show yet."</p> }.into_any();
    }
    match content {
        AdminData::Orders(orders) => orders
            .iter()
            .map(|order| render_order_row(order, data, redirect))
            .collect_view()
            .into_any(),
        AdminData::Inventory(games) => games
            .iter()
            .map(|game| render_inventory_row(game, data, redirect))
            .collect_view()
            .into_any(),
        AdminData::Users(users) => users.iter().map(render_user_row).collect_view().into_any(),
    }
}

/// Finish an admin write: refetch on success, route 401s to login, show anything else.
#[cfg(feature = "hydrate")]
fn apply_write_result(result: Result<(), ApiError>, data: PageResource<AdminData>, redirect: RwSignal<Option<String>>) {
    match result {
        Ok(()) => data.refetch(),
        Err(ApiError::Unauthorized) => {
            redirect.try_set(Some(paths::LOGIN.to_owned()));
        }
        Err(err) => {
            leptos::logging::warn!("admin update failed: {err}");
            data.fail(err.to_string());
        }
    }
}

fn render_order_row(order: &Order, data: PageResource<AdminData>, redirect: RwSignal<Option<String>>) -> impl IntoView {
    let id = order.id.clone();
    let current = order.status.clone();
    let title = match order.user_name.as_deref() {
        Some(name) => format!("Order #{} - {name}", order.id),
        None => format!("Order #{}", order.id),
    };
    let placed = order.placed_at.as_deref().map(format_timestamp).unwrap_or_default();
    let selected = current.as_str().to_owned();

    let on_change = move |ev: leptos::ev::Event| {
        let Some(next) = status_change(&current, &event_target_value(&ev)) else {
            return;
        };
        let id = id.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = api::update_order_status(&id, next).await.map(|_| ());
            apply_write_result(result, data, redirect);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, next, data, redirect);
    };

    let options = OrderStatus::ASSIGNABLE
        .into_iter()
        .map(|status| {
            let value = status.as_str().to_owned();
            view! { <option value=value.clone() selected=value == selected>{value.clone()}</option> }
        })
        .collect_view();

    view! {
        <div class="admin-row">
            <div class="admin-row__info">
                <h3 class="admin-row__title">{title}</h3>
                <p class="admin-row__meta">{placed}</p>
            </div>
            <div class="admin-row__controls">
                <span class="admin-row__amount">{order.total.to_string()}</span>
                <StatusBadge status=order.status.clone()/>
                <select class="admin-row__select" on:change=on_change>{options}</select>
            </div>
        </div>
    }
}

fn render_inventory_row(game: &Game, data: PageResource<AdminData>, redirect: RwSignal<Option<String>>) -> impl IntoView {
    let id = game.id.clone();
    let current = game.stock_quantity;

    let on_change = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        let Some(next) = stock_change(current, &raw) else {
            leptos::logging::log!("ignoring stock input {raw:?}");
            return;
        };
        let id = id.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = api::update_inventory(&id, next).await.map(|_| ());
            apply_write_result(result, data, redirect);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, next, data, redirect);
    };

    view! {
        <div class="admin-row">
            <div class="admin-row__info">
                <h3 class="admin-row__title">{game.title.clone()}</h3>
                <p class="admin-row__meta">{format!("{} • {}", game.genre, game.platform)}</p>
            </div>
            <div class="admin-row__controls">
                <input class="admin-row__stock" type="number" min="0" step="1" value=current.to_string() on:change=on_change/>
                <span class="admin-row__meta">"in stock"</span>
            </div>
        </div>
    }
}

fn render_user_row(user: &AdminUser) -> impl IntoView {
    let role_class = if user.role.is_admin() { "role-badge role-badge--admin" } else { "role-badge" };
    view! {
        <div class="admin-row">
            <div class="admin-row__info">
                <h3 class="admin-row__title">{user.name.clone()}</h3>
                <p class="admin-row__meta">{user.email.clone()}</p>
            </div>
            <span class=role_class>{user.role.as_str().to_owned()}</span>
        </div>
    }
}
