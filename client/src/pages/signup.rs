//! Account creation.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::net::types::SignupRequest;
use crate::util::fetch::use_navigation_request;
use crate::util::paths;

const MISSING_FIELDS: &str = "Please fill in every field.";
const PASSWORD_MISMATCH: &str = "Passwords do not match.";
const MIN_PASSWORD_LEN: usize = 6;
const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters.";

/// Raw signup form fields as typed.
struct SignupForm<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
    confirm: &'a str,
}

fn validate_signup_input(form: &SignupForm<'_>) -> Result<SignupRequest, &'static str> {
    let username = form.username.trim();
    let email = form.email.trim();
    if username.is_empty() || email.is_empty() || form.password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PASSWORD_TOO_SHORT);
    }
    if form.password != form.confirm {
        return Err(PASSWORD_MISMATCH);
    }
    Ok(SignupRequest { username: username.to_owned(), email: email.to_owned(), password: form.password.to_owned() })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let redirect = use_navigation_request();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (u, e, p, c) = (username.get(), email.get(), password.get(), confirm.get());
        let form = SignupForm { username: &u, email: &e, password: &p, confirm: &c };
        let request = match validate_signup_input(&form) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::signup(&request).await {
                Ok(_) => {
                    redirect.try_set(Some(paths::LOGIN.to_owned()));
                }
                Err(err) => {
                    info.try_set(err.to_string());
                    busy.try_set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, redirect);
    };

    let field = move |kind: &'static str, placeholder: &'static str, autocomplete: &'static str, value: RwSignal<String>| {
        view! {
            <input
                class="auth-input"
                type=kind
                placeholder=placeholder
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Game Haven"</h1>
                <p class="auth-card__subtitle">"Create your account"</p>
                <form class="auth-form" on:submit=on_submit>
                    {field("text", "Username", "username", username)}
                    {field("email", "you@example.com", "email", email)}
                    {field("password", "Password", "new-password", password)}
                    {field("password", "Confirm password", "new-password", confirm)}
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        "Sign Up"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <a href=paths::LOGIN>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
