//! Login screen - Model
//!
//! Button handlers over [`AuthFormState`]; the network and storage work is
//! delegated to `system::auth::flow`.

use contracts::system::auth::{AuthToken, Credentials};

use super::state::AuthFormState;
use crate::routes::routes::AppRoute;
use crate::shared::api_utils::RecognitionApi;
use crate::shared::state::StateCell;
use crate::system::auth::flow;
use crate::system::auth::storage::TokenStore;

fn start<F: StateCell<AuthFormState>>(form: &F) -> Option<Credentials> {
    let mut credentials = None;
    form.update_state(|f| credentials = f.begin_submit());
    credentials
}

/// Signup button handler
pub async fn submit_signup<A, F>(api: &A, form: &F)
where
    A: RecognitionApi + ?Sized,
    F: StateCell<AuthFormState>,
{
    let Some(credentials) = start(form) else {
        return;
    };
    let result = flow::signup(api, &credentials).await;
    form.update_state(|f| f.finish_signup(result));
}

/// Login button handler.
///
/// `enter` runs once, with the new token and the screen to open, only when the
/// login succeeded.
pub async fn submit_login<A, S, F>(api: &A, store: &S, form: &F, enter: impl FnOnce(AuthToken, AppRoute))
where
    A: RecognitionApi + ?Sized,
    S: TokenStore + ?Sized,
    F: StateCell<AuthFormState>,
{
    let Some(credentials) = start(form) else {
        return;
    };
    let result = flow::login(api, store, &credentials).await;
    form.update_state(|f| f.finish_login(&result));
    if let Ok(token) = result {
        enter(token, AppRoute::Dashboard);
    }
}
