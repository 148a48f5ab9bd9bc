use contracts::shared::api_error::ApiErrorBody;
use thiserror::Error;

/// Backend call a failure belongs to; selects the generic fallback text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiAction {
    Signup,
    Login,
    ListImages,
    Upload,
    DeleteImage,
}

impl ApiAction {
    pub fn fallback_message(&self) -> &'static str {
        match self {
            ApiAction::Signup => "Signup failed",
            ApiAction::Login => "Login failed",
            ApiAction::ListImages => "Failed to load images",
            ApiAction::Upload => "Upload failed",
            ApiAction::DeleteImage => "Failed to delete image",
        }
    }
}

/// Failure of a single user action. `Display` is the text shown inline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Rejected client-side, nothing was sent
    #[error("{0}")]
    Validation(String),

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("{0}")]
    Network(String),

    /// 2xx whose body could not be decoded
    #[error("{0}")]
    Decode(String),

    /// Login answered 2xx without `token` or `access_token`
    #[error("No token received")]
    MissingToken,
}

impl ApiError {
    /// Non-2xx response: message from the JSON body, else the action fallback
    pub fn from_response(action: ApiAction, status: u16, body: &str) -> Self {
        let message = ApiErrorBody::parse_message(body)
            .unwrap_or_else(|| action.fallback_message().to_string());
        ApiError::Http { status, message }
    }

    /// Non-2xx response whose body is never surfaced
    pub fn generic_http(action: ApiAction, status: u16) -> Self {
        ApiError::Http {
            status,
            message: action.fallback_message().to_string(),
        }
    }

    pub fn network(action: ApiAction, cause: impl std::fmt::Display) -> Self {
        let text = cause.to_string();
        if text.trim().is_empty() {
            ApiError::Network(action.fallback_message().to_string())
        } else {
            ApiError::Network(text)
        }
    }

    pub fn decode(action: ApiAction, cause: impl std::fmt::Display) -> Self {
        log::warn!("{:?}: undecodable response body: {}", action, cause);
        ApiError::Decode(action.fallback_message().to_string())
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
