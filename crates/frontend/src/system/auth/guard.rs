use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_session;
use crate::routes::routes::AppRoute;

/// Renders children only for an authenticated session, otherwise redirects
/// to the login screen
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <Redirect path=AppRoute::Login.path() /> }
        >
            {children()}
        </Show>
    }
}
