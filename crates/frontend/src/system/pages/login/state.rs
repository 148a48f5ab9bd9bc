use contracts::system::auth::{AuthToken, Credentials};

use crate::shared::error::ApiError;
use crate::shared::notice::Notice;

pub const SIGNUP_SUCCESS_MESSAGE: &str = "Account created successfully! You can now login.";

/// Login/register form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthFormState {
    pub username: String,
    pub password: String,
    pub is_loading: bool,
    pub notice: Option<Notice>,
}

impl AuthFormState {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username.clone(), self.password.clone())
    }

    /// Validates and enters the submitting state.
    ///
    /// Returns `None` (with an error notice) when a field is empty or a
    /// submission is already running; nothing may be sent in that case.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.is_loading {
            return None;
        }
        let credentials = self.credentials();
        if let Err(message) = credentials.validate() {
            self.notice = Some(Notice::error(message));
            return None;
        }
        self.is_loading = true;
        Some(credentials)
    }

    /// Signup never logs in; on success the form is emptied
    pub fn finish_signup(&mut self, result: Result<(), ApiError>) {
        self.is_loading = false;
        match result {
            Ok(()) => {
                self.notice = Some(Notice::success(SIGNUP_SUCCESS_MESSAGE));
                self.username.clear();
                self.password.clear();
            }
            Err(e) => self.notice = Some(e.into()),
        }
    }

    pub fn finish_login(&mut self, result: &Result<AuthToken, ApiError>) {
        self.is_loading = false;
        match result {
            Ok(_) => self.notice = None,
            Err(e) => self.notice = Some(e.clone().into()),
        }
    }
}
