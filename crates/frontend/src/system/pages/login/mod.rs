pub mod model;
pub mod state;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::routes::routes::AppRoute;
use crate::shared::api_utils::ApiClient;
use crate::shared::components::notice_bar::NoticeBar;
use crate::system::auth::context::use_session;
use crate::system::auth::storage::LocalTokenStore;
use state::AuthFormState;

/// Combined login/register screen
#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(AuthFormState::default());
    let api = StoredValue::new(use_context::<ApiClient>().expect("ApiClient not provided"));
    let session = use_session();
    let navigate = use_navigate();

    let is_loading = move || form.with(|f| f.is_loading);

    let on_login = move || {
        let navigate = navigate.clone();
        spawn_local(async move {
            let api = api.get_value();
            model::submit_login(&api, &LocalTokenStore, &form, |token, route: AppRoute| {
                session.authenticate(token);
                navigate(route.path(), Default::default());
            })
            .await;
        });
    };

    let on_signup = move |_| {
        spawn_local(async move {
            let api = api.get_value();
            model::submit_signup(&api, &form).await;
        });
    };

    // Enter in either field submits the form, which logs in
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_login();
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Cloud Image Recognition"</h1>
                <p class="login-box__subtitle">"Sign up or login to get started"</p>

                <NoticeBar notice=Signal::derive(move || form.with(|f| f.notice.clone())) />

                <form on:submit=on_submit>
                    <div class="form-group">
                        <input
                            type="text"
                            id="username"
                            placeholder="Username"
                            autocomplete="username"
                            prop:value=move || form.with(|f| f.username.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.username = value);
                            }
                            disabled=is_loading
                        />
                    </div>

                    <div class="form-group">
                        <input
                            type="password"
                            id="password"
                            placeholder="Password"
                            autocomplete="current-password"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.password = value);
                            }
                            disabled=is_loading
                        />
                    </div>

                    <div class="login-box__actions">
                        <button
                            type="button"
                            class="btn-secondary"
                            on:click=on_signup
                            disabled=is_loading
                        >
                            "Sign up"
                        </button>
                        <button
                            type="submit"
                            class="btn-primary"
                            disabled=is_loading
                        >
                            {move || if is_loading() { "Please wait..." } else { "Login" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
