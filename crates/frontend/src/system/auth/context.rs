use contracts::system::auth::AuthToken;
use leptos::prelude::*;

use super::flow;
use super::storage::{LocalTokenStore, TokenStore};
use crate::routes::routes::AppRoute;

/// Who is using the app right now
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(AuthToken),
}

impl Session {
    /// Session implied by the persisted token; never touches the network
    pub fn restore(store: &impl TokenStore) -> Self {
        match store.get() {
            Some(token) => Session::Authenticated(token),
            None => Session::Anonymous,
        }
    }

    pub fn token(&self) -> Option<&AuthToken> {
        match self {
            Session::Authenticated(token) => Some(token),
            Session::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    /// Where the landing route sends this session
    pub fn landing_route(&self) -> AppRoute {
        match self {
            Session::Authenticated(_) => AppRoute::Dashboard,
            Session::Anonymous => AppRoute::Login,
        }
    }
}

/// Session owned by the root component and shared through context
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub session: RwSignal<Session>,
}

impl SessionContext {
    pub fn restore() -> Self {
        let session = Session::restore(&LocalTokenStore);
        log::info!(
            "session restored: {}",
            if session.is_authenticated() { "authenticated" } else { "anonymous" }
        );
        Self {
            session: RwSignal::new(session),
        }
    }

    /// Reactive token read
    pub fn token(&self) -> Option<AuthToken> {
        self.session.with(|s| s.token().cloned())
    }

    pub fn token_untracked(&self) -> Option<AuthToken> {
        self.session.with_untracked(|s| s.token().cloned())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_authenticated)
    }

    /// Token is already persisted by the login flow
    pub fn authenticate(&self, token: AuthToken) {
        log::info!("session authenticated");
        self.session.set(Session::Authenticated(token));
    }

    pub fn sign_out(&self) {
        flow::logout(&LocalTokenStore);
        self.session.set(Session::Anonymous);
        log::info!("session closed");
    }
}

/// Session provider component
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    provide_context(SessionContext::restore());
    children()
}

/// Hook to access the session
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionProvider not found in component tree")
}
