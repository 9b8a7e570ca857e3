use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let auth_state = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get();
        let password_val = password.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            // При успехе auth_state переключит экран на дашборд
            if let Err(e) = do_login(auth_state, username_val, password_val).await {
                set_error_message.set(Some(e));
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <form class="login-box" on:submit=on_submit aria-label="Login form">
                <h2>"Product Dashboard"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message" role="alert">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <div class="form-group">
                    <input
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| {
                            set_username.set(event_target_value(&ev));
                            set_error_message.set(None);
                        }
                        required
                        disabled=move || is_loading.get()
                    />
                </div>

                <div class="form-group">
                    <input
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            set_password.set(event_target_value(&ev));
                            set_error_message.set(None);
                        }
                        required
                        disabled=move || is_loading.get()
                    />
                </div>

                <button
                    type="submit"
                    class="btn-primary"
                    disabled=move || is_loading.get()
                >
                    {move || if is_loading.get() { "Logging in..." } else { "Login" }}
                </button>
            </form>
        </div>
    }
}
