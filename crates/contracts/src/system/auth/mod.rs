use serde::{Deserialize, Serialize};
use std::fmt;

/// Message shown when either credential field is left empty
pub const EMPTY_CREDENTIALS_MESSAGE: &str = "Please enter username and password";

/// Username/password pair sent as query parameters to `/signup` and `/login`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Both fields must be non-empty. Whitespace is not trimmed.
    pub fn validate(&self) -> Result<(), String> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(EMPTY_CREDENTIALS_MESSAGE.to_string());
        }
        Ok(())
    }
}

/// Opaque bearer credential returned by `/login`
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    /// Returns `None` for an empty string
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// The token is a credential; keep it out of logs.
impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

/// Body of a 2xx `/login` response.
///
/// The backend has shipped both `token` and `access_token` over time, so
/// both are accepted with `token` taking precedence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}

impl LoginResponse {
    pub fn into_token(self) -> Option<AuthToken> {
        self.token
            .and_then(AuthToken::new)
            .or_else(|| self.access_token.and_then(AuthToken::new))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_both_fields() {
        assert!(Credentials::new("alice", "secret").validate().is_ok());
        assert_eq!(
            Credentials::new("alice", "").validate(),
            Err(EMPTY_CREDENTIALS_MESSAGE.to_string())
        );
        assert_eq!(
            Credentials::new("", "secret").validate(),
            Err(EMPTY_CREDENTIALS_MESSAGE.to_string())
        );
        // whitespace counts as input
        assert!(Credentials::new(" ", " ").validate().is_ok());
    }

    #[test]
    fn test_token_field_takes_precedence() {
        let resp: LoginResponse =
            serde_json::from_str(r#"{"token":"abc","access_token":"xyz"}"#).unwrap();
        assert_eq!(resp.into_token().unwrap().as_str(), "abc");
    }

    #[test]
    fn test_access_token_fallback() {
        let resp: LoginResponse =
            serde_json::from_str(r#"{"access_token":"xyz","token_type":"bearer"}"#).unwrap();
        assert_eq!(resp.into_token().unwrap().as_str(), "xyz");

        let resp: LoginResponse =
            serde_json::from_str(r#"{"token":"","access_token":"xyz"}"#).unwrap();
        assert_eq!(resp.into_token().unwrap().as_str(), "xyz");
    }

    #[test]
    fn test_missing_token() {
        let resp: LoginResponse = serde_json::from_str(r#"{"error":"invalid"}"#).unwrap();
        assert!(resp.into_token().is_none());
    }

    #[test]
    fn test_bearer_header_and_debug() {
        let token = AuthToken::new("abc").unwrap();
        assert_eq!(token.bearer_header(), "Bearer abc");
        assert_eq!(format!("{:?}", token), "AuthToken(***)");
        assert!(AuthToken::new("").is_none());
    }
}
