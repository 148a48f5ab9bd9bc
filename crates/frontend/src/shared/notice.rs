use crate::shared::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Inline message a screen shows after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }

    /// CSS modifier for the alert box
    pub fn css_class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "alert alert--success",
            NoticeKind::Error => "alert alert--error",
        }
    }
}

impl From<ApiError> for Notice {
    fn from(err: ApiError) -> Self {
        Notice::error(err.to_string())
    }
}
