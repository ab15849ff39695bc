//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::pages::{
    admin::AdminPage, cart::CartPage, details::DetailsPage, games::GamesPage, login::LoginPage,
    order_details::OrderDetailsPage, orders::OrdersPage, signup::SignupPage,
};
use crate::state::session::SessionState;
use crate::util::paths;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the one session context. The session is resolved once here from
/// `/api/auth/check`; pages and the navbar read it, login sets it and
/// logout clears it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let checked = crate::net::api::check_session().await;
            if let Err(err) = &checked {
                leptos::logging::log!("session check: {err}");
            }
            session.set(SessionState::from_check(checked));
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/game-haven.css"/>
        <Title text="Game Haven"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=paths::LOGIN/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("games") view=GamesPage/>
                <Route path=(StaticSegment("details"), ParamSegment("id")) view=DetailsPage/>
                <Route path=StaticSegment("cart") view=CartPage/>
                <Route path=StaticSegment("orders") view=OrdersPage/>
                <Route path=(StaticSegment("orders"), ParamSegment("orderId")) view=OrderDetailsPage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
            </Routes>
        </Router>
    }
}
