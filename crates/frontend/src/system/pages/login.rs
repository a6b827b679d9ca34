use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::context::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();

    let (signup_mode, set_signup_mode) = signal(false);
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let name_val = name.get();
        let email_val = email.get();
        let password_val = password.get();
        let is_signup = signup_mode.get();

        set_is_submitting.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            let outcome = if is_signup {
                session.signup(name_val, email_val, password_val).await
            } else {
                session.login(email_val, password_val).await
            };

            // The store carries the typed reason; the form shows a generic one.
            if let Err(e) = outcome {
                log::warn!("Authentication attempt failed: {}", e);
                set_error_message.set(Some(if is_signup {
                    "Sign up failed. Please check your details and try again.".to_string()
                } else {
                    "Invalid email or password.".to_string()
                }));
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"ShelfIQ"</h1>
                <h2>{move || if signup_mode.get() { "Create account" } else { "Sign in" }}</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <Show when=move || signup_mode.get()>
                        <div class="form-group">
                            <label for="name">"Full name"</label>
                            <input
                                type="text"
                                id="name"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                disabled=move || is_submitting.get()
                            />
                        </div>
                    </Show>

                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_submitting.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_submitting.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_submitting.get()
                    >
                        {move || match (is_submitting.get(), signup_mode.get()) {
                            (true, _) => "Please wait...",
                            (false, true) => "Sign up",
                            (false, false) => "Sign in",
                        }}
                    </button>
                </form>

                <button
                    class="btn-link"
                    on:click=move |_| {
                        set_error_message.set(None);
                        set_signup_mode.update(|v| *v = !*v);
                    }
                >
                    {move || if signup_mode.get() {
                        "Already have an account? Sign in"
                    } else {
                        "New here? Create an account"
                    }}
                </button>
            </div>
        </div>
    }
}
