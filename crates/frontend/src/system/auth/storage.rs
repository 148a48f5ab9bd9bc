use contracts::system::auth::AuthToken;
use web_sys::window;

/// localStorage key holding the bearer token verbatim
pub const TOKEN_KEY: &str = "CIR_TOKEN";

/// Persistent home of the session token.
///
/// Implementations swallow storage failures: a failed write or clear is a
/// no-op and a failed read reports no token.
pub trait TokenStore {
    fn get(&self) -> Option<AuthToken>;
    fn set(&self, token: &AuthToken);
    fn clear(&self);
}

/// Token store backed by `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStore;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

impl TokenStore for LocalTokenStore {
    fn get(&self) -> Option<AuthToken> {
        let value = get_local_storage()?.get_item(TOKEN_KEY).ok()??;
        AuthToken::new(value)
    }

    fn set(&self, token: &AuthToken) {
        match get_local_storage() {
            Some(storage) => {
                if storage.set_item(TOKEN_KEY, token.as_str()).is_err() {
                    log::warn!("localStorage rejected the session token");
                }
            }
            None => log::warn!("localStorage unavailable, session will not persist"),
        }
    }

    fn clear(&self) {
        match get_local_storage() {
            Some(storage) => {
                if storage.remove_item(TOKEN_KEY).is_err() {
                    log::warn!("localStorage refused to drop the session token");
                }
            }
            None => log::warn!("localStorage unavailable, nothing to clear"),
        }
    }
}
