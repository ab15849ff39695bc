//! Email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::types::LoginRequest;
use crate::state::session::SessionState;
use crate::util::fetch::use_navigation_request;
use crate::util::paths;

const MISSING_FIELDS: &str = "Please enter your email and password.";

/// Trim the form and require both fields.
fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let redirect = use_navigation_request();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_login_input(&email.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&request).await {
                Ok(reply) => {
                    // Some deployments omit the user from the login reply; ask again.
                    let next = match reply.user {
                        Some(user) => SessionState::Authenticated(user),
                        None => SessionState::from_check(crate::net::api::check_session().await),
                    };
                    session.try_set(next);
                    redirect.try_set(Some(paths::GAMES.to_owned()));
                }
                Err(err) => {
                    info.try_set(err.to_string());
                    busy.try_set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, session, redirect);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Game Haven"</h1>
                <p class="auth-card__subtitle">"Sign in to your account"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__switch">
                    "New here? "
                    <a href=paths::SIGNUP>"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
