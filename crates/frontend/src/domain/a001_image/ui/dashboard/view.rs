use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::*;

use super::state::{ListView, EMPTY_LIST_MESSAGE};
use super::view_model::DashboardVm;
use crate::domain::a001_image::ui::list::ImageList;
use crate::domain::a001_image::ui::uploader::ImageUploader;
use crate::routes::routes::AppRoute;
use crate::shared::api_utils::ApiClient;
use crate::shared::components::notice_bar::NoticeBar;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::RequireSession;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RequireSession>
            <Dashboard />
        </RequireSession>
    }
}

#[component]
fn Dashboard() -> impl IntoView {
    let session = use_session();
    let api = use_context::<ApiClient>().expect("ApiClient not provided");
    let vm = DashboardVm::new(api, session);
    let navigate = use_navigate();

    // Re-fetch whenever the session token changes
    Effect::new(move |_| {
        if session.token().is_some() {
            spawn_local(vm.refresh());
        }
    });

    let on_logout = move |_| {
        session.sign_out();
        navigate(AppRoute::Login.path(), Default::default());
    };

    let is_loading = Signal::derive(move || vm.is_loading());
    // Notice changes must not rebuild the rows
    let listing = Memo::new(move |_| vm.state.with(|s| s.loaded().map(<[_]>::to_vec)));

    view! {
        <div class="dashboard">
            <PageHeader
                title="Cloud Image Recognition"
                subtitle="Analyze your images with AI-powered labels"
            >
                <button type="button" class="btn-secondary" on:click=on_logout>
                    {icon("log-out")}
                    " Logout"
                </button>
            </PageHeader>

            <main class="dashboard__content">
                <NoticeBar notice=Signal::derive(move || vm.state.with(|s| s.notice.clone())) />

                <div class="dashboard__grid">
                    <section class="card dashboard__upload">
                        <div class="card__header">
                            <h2 class="card__title">{icon("upload")}" Upload Image"</h2>
                            <p class="card__description">"Select an image to analyze"</p>
                        </div>
                        <div class="card__body">
                            <ImageUploader vm=vm is_loading=is_loading />
                        </div>
                    </section>

                    <section class="card dashboard__images">
                        <div class="card__header">
                            <h2 class="card__title">"My Images"</h2>
                            <p class="card__description">
                                "Your uploaded images and their AI-generated labels"
                            </p>
                        </div>
                        <div class="card__body">
                            {move || listing.with(|loaded| match ListView::of(loaded.as_deref()) {
                                ListView::Loading => view! {
                                    <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-xl);">
                                        <Spinner />
                                        <span>"Loading images..."</span>
                                    </Flex>
                                }.into_any(),
                                ListView::Empty => view! {
                                    <p class="dashboard__empty">{EMPTY_LIST_MESSAGE}</p>
                                }.into_any(),
                                ListView::Images(images) => view! {
                                    <ImageList vm=vm images=images.to_vec() />
                                }.into_any(),
                            })}
                        </div>
                    </section>
                </div>
            </main>
        </div>
    }
}
