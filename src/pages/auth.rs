//! Login and Register Pages
//!
//! Plain form posts; the client only adds the password toggle, the busy
//! submit button and the phone number filter.

use leptos::prelude::*;
use serde::Deserialize;

use crate::config::endpoints;
use crate::context::use_app_context;
use crate::validation::sanitize_phone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    fn submit_label(&self, busy: bool) -> &'static str {
        match (self, busy) {
            (AuthMode::Login, false) => "Sign In",
            (AuthMode::Login, true) => "Signing in...",
            (AuthMode::Register, false) => "Create Account",
            (AuthMode::Register, true) => "Creating Account...",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthData {
    #[serde(default)]
    mode: AuthMode,
    #[serde(default)]
    error: Option<String>,
    /// Values to put back after a rejected register
    #[serde(default)]
    email: String,
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    #[serde(default)]
    phone_number: String,
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let ctx = use_app_context();
    let data: AuthData = ctx.page_data();
    let mode = data.mode;

    let submitting = RwSignal::new(false);

    let fields = match mode {
        AuthMode::Login => view! {
            <input id="email" name="email" type="email" placeholder="Email" required value=data.email />
        }
        .into_any(),
        AuthMode::Register => view! {
            <input id="emailAddress" name="emailAddress" type="email" placeholder="Email" required value=data.email />
            <input id="firstName" name="firstName" type="text" placeholder="First name" maxlength="20" required value=data.first_name />
            <input id="lastName" name="lastName" type="text" placeholder="Last name" maxlength="20" required value=data.last_name />
            <PhoneInput initial=data.phone_number />
        }
        .into_any(),
    };

    let (form_id, button_id, action) = match mode {
        AuthMode::Login => ("loginForm", "loginBtn", endpoints::LOGIN),
        AuthMode::Register => ("registerForm", "registerBtn", endpoints::REGISTER),
    };

    view! {
        <div class="auth-page">
            {data.error.map(|e| view! { <div class="auth-error">{e}</div> })}
            // Native submit; the flag only changes the button
            <form id=form_id method="post" action=action on:submit=move |_| submitting.set(true)>
                {fields}
                <PasswordInput />
                <button
                    id=button_id
                    type="submit"
                    class="btn btn-primary"
                    class:loading=move || submitting.get()
                    disabled=move || submitting.get()
                >
                    {move || mode.submit_label(submitting.get())}
                </button>
            </form>
        </div>
    }
}

#[component]
fn PasswordInput() -> impl IntoView {
    let (visible, set_visible) = signal(false);

    view! {
        <div class="password-field">
            <input
                id="password"
                name="password"
                type=move || if visible.get() { "text" } else { "password" }
                placeholder="Password"
                required
            />
            <button
                id="passwordToggle"
                type="button"
                class="password-toggle"
                aria-label=move || if visible.get() { "Hide password" } else { "Show password" }
                on:click=move |_| set_visible.update(|v| *v = !*v)
            >
                {move || if visible.get() { "HIDE" } else { "SHOW" }}
            </button>
        </div>
    }
}

/// Phone field that only ever holds up to ten digits
#[component]
fn PhoneInput(initial: String) -> impl IntoView {
    let (phone, set_phone) = signal(sanitize_phone(&initial));

    view! {
        <input
            id="phoneNumber"
            name="phoneNumber"
            type="tel"
            inputmode="numeric"
            placeholder="Phone number"
            required
            prop:value=move || phone.get()
            on:input=move |ev| {
                let input = event_target::<web_sys::HtmlInputElement>(&ev);
                let cleaned = sanitize_phone(&input.value());
                // Write back directly so a rejected keystroke never shows
                input.set_value(&cleaned);
                set_phone.set(cleaned);
            }
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_label_shows_progress() {
        assert_eq!(AuthMode::Login.submit_label(false), "Sign In");
        assert_eq!(AuthMode::Login.submit_label(true), "Signing in...");
        assert_eq!(AuthMode::Register.submit_label(true), "Creating Account...");
    }

    #[test]
    fn test_mode_parses_lowercase() {
        let data: AuthData = serde_json::from_str(r#"{"mode":"register","firstName":"Ada"}"#).unwrap();
        assert_eq!(data.mode, AuthMode::Register);
        assert_eq!(data.first_name, "Ada");
    }
}
