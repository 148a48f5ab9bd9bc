use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes, A};
use leptos_router::path;

use crate::domain::a001_image::ui::dashboard::DashboardPage;
use crate::system::auth::context::use_session;
use crate::system::pages::login::LoginPage;

/// Client-side screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Landing,
    Login,
    Dashboard,
}

impl AppRoute {
    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Landing => "/",
            AppRoute::Login => "/login",
            AppRoute::Dashboard => "/dashboard",
        }
    }
}

/// `/` only decides where to go from the restored session
#[component]
fn LandingRedirect() -> impl IntoView {
    let session = use_session();
    let target = session.session.with_untracked(|s| s.landing_route());
    log::debug!("landing redirect to {}", target.path());

    view! { <Redirect path=target.path() /> }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <A href=AppRoute::Landing.path()>"Back to start"</A>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=LandingRedirect />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/dashboard") view=DashboardPage />
            </Routes>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(AppRoute::Landing.path(), "/");
        assert_eq!(AppRoute::Login.path(), "/login");
        assert_eq!(AppRoute::Dashboard.path(), "/dashboard");
    }
}
