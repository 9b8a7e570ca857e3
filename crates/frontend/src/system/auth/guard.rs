use leptos::prelude::*;

use super::context::use_auth;
use crate::system::pages::login::LoginPage;

/// Component that requires an admin session.
/// Shows the login page otherwise.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let auth_state = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.is_authorized())
            fallback=|| view! { <LoginPage /> }
        >
            {children()}
        </Show>
    }
}
