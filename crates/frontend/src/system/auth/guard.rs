use leptos::prelude::*;

use super::context::use_session;
use crate::system::pages::login::LoginPage;

/// Renders its children only for an authenticated session; anonymous
/// visitors get the login page instead.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.user.get().is_some()
            fallback=|| view! { <LoginPage /> }
        >
            {children()}
        </Show>
    }
}
