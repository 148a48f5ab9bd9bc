use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::shared::api_utils::ApiClient;
use crate::shared::config::load_config_or_default;
use crate::system::auth::context::SessionProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config_or_default();

    // Provide the API client to every screen via context.
    provide_context(ApiClient::new(&config.api));

    view! {
        <SessionProvider>
            <AppRoutes />
        </SessionProvider>
    }
}
