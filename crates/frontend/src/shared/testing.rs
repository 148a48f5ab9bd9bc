//! In-memory stand-ins for the backend and the token store.

use async_trait::async_trait;
use contracts::domain::a001_image::aggregate::{ImageId, ImageRecord, UploadResponse};
use contracts::system::auth::{AuthToken, Credentials, LoginResponse};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::shared::api_utils::RecognitionApi;
use crate::shared::error::{ApiAction, ApiError};
use crate::system::auth::storage::TokenStore;

#[derive(Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<AuthToken>>,
    writes: Cell<usize>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(AuthToken::new(token)),
            writes: Cell::new(0),
        }
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<AuthToken> {
        self.token.borrow().clone()
    }

    fn set(&self, token: &AuthToken) {
        self.writes.set(self.writes.get() + 1);
        *self.token.borrow_mut() = Some(token.clone());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

/// File handed to the fake backend; `labels` is what recognition will return
#[derive(Clone, Debug)]
pub struct FakeFile {
    pub name: String,
    pub labels: Vec<String>,
}

impl FakeFile {
    pub fn new(name: &str, labels: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            labels: labels.iter().map(|l| l.to_string()).collect(),
        }
    }
}

/// Backend double keeping users and images in memory
pub struct FakeApi {
    users: RefCell<HashMap<String, String>>,
    images: RefCell<Vec<ImageRecord>>,
    next_id: Cell<i64>,
    calls: RefCell<Vec<&'static str>>,
    /// Error returned by the next call, whatever it is
    fail_next: RefCell<Option<ApiError>>,
    /// Replaces the login body for every successful login
    login_body: RefCell<Option<LoginResponse>>,
}

pub const FAKE_TOKEN: &str = "fake-jwt";

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            users: RefCell::new(HashMap::new()),
            images: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
            calls: RefCell::new(Vec::new()),
            fail_next: RefCell::new(None),
            login_body: RefCell::new(None),
        }
    }
}

impl FakeApi {
    pub fn with_user(username: &str, password: &str) -> Self {
        let api = Self::default();
        api.users
            .borrow_mut()
            .insert(username.to_string(), password.to_string());
        api
    }

    pub fn with_images(images: Vec<ImageRecord>) -> Self {
        let next = images.iter().map(|i| i.id.0).max().unwrap_or(0) + 1;
        let api = Self::default();
        *api.images.borrow_mut() = images;
        api.next_id.set(next);
        api
    }

    pub fn fail_next(&self, err: ApiError) {
        *self.fail_next.borrow_mut() = Some(err);
    }

    pub fn set_login_body(&self, body: LoginResponse) {
        *self.login_body.borrow_mut() = Some(body);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    pub fn images(&self) -> Vec<ImageRecord> {
        self.images.borrow().clone()
    }

    fn enter(&self, call: &'static str) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        match self.fail_next.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn check_token(token: &AuthToken, action: ApiAction) -> Result<(), ApiError> {
        if token.as_str() == FAKE_TOKEN {
            Ok(())
        } else {
            Err(ApiError::from_response(action, 401, r#"{"detail":"Invalid token"}"#))
        }
    }
}

#[async_trait(?Send)]
impl RecognitionApi for FakeApi {
    type Upload = FakeFile;

    async fn signup(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.enter("signup")?;
        let mut users = self.users.borrow_mut();
        if users.contains_key(&credentials.username) {
            return Err(ApiError::from_response(
                ApiAction::Signup,
                400,
                r#"{"detail":"Username already registered"}"#,
            ));
        }
        users.insert(credentials.username.clone(), credentials.password.clone());
        Ok(())
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.enter("login")?;
        let known = self.users.borrow().get(&credentials.username) == Some(&credentials.password);
        if !known {
            // the real backend answers 200 here
            return Ok(LoginResponse::default());
        }
        Ok(self.login_body.borrow().clone().unwrap_or(LoginResponse {
            token: Some(FAKE_TOKEN.to_string()),
            ..Default::default()
        }))
    }

    async fn list_images(&self, token: &AuthToken) -> Result<Vec<ImageRecord>, ApiError> {
        self.enter("list_images")?;
        Self::check_token(token, ApiAction::ListImages)?;
        Ok(self.images.borrow().clone())
    }

    async fn upload_image(
        &self,
        token: &AuthToken,
        file: &FakeFile,
    ) -> Result<UploadResponse, ApiError> {
        self.enter("upload_image")?;
        Self::check_token(token, ApiAction::Upload)?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.images.borrow_mut().push(ImageRecord {
            id: ImageId(id),
            filename: file.name.clone(),
            labels: file.labels.clone(),
        });
        Ok(UploadResponse {
            filename: Some(file.name.clone()),
            labels: Some(file.labels.clone()),
        })
    }

    async fn delete_image(&self, token: &AuthToken, id: ImageId) -> Result<(), ApiError> {
        self.enter("delete_image")?;
        Self::check_token(token, ApiAction::DeleteImage)?;
        let mut images = self.images.borrow_mut();
        let before = images.len();
        images.retain(|i| i.id != id);
        if images.len() == before {
            return Err(ApiError::generic_http(ApiAction::DeleteImage, 404));
        }
        Ok(())
    }
}

pub fn token() -> AuthToken {
    AuthToken::new(FAKE_TOKEN).expect("non-empty token")
}

pub fn image(id: i64, filename: &str, labels: &[&str]) -> ImageRecord {
    ImageRecord {
        id: ImageId(id),
        filename: filename.to_string(),
        labels: labels.iter().map(|l| l.to_string()).collect(),
    }
}
