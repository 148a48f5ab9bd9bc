//! API client for frontend-backend communication
//!
//! All backend calls go through [`ApiClient`]. Views receive it from context
//! and talk to it through the [`RecognitionApi`] trait so the flows built on
//! top can be exercised without a browser.

use async_trait::async_trait;
use contracts::domain::a001_image::aggregate::{ImageId, ImageRecord, UploadResponse};
use contracts::system::auth::{AuthToken, Credentials, LoginResponse};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::shared::config::ApiConfig;
use crate::shared::error::{ApiAction, ApiError};

/// Typed surface of the image recognition backend
#[async_trait(?Send)]
pub trait RecognitionApi {
    /// File handle accepted by `upload_image`
    type Upload;

    async fn signup(&self, credentials: &Credentials) -> Result<(), ApiError>;

    /// Raw login body; token extraction is up to the caller
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;

    async fn list_images(&self, token: &AuthToken) -> Result<Vec<ImageRecord>, ApiError>;

    async fn upload_image(
        &self,
        token: &AuthToken,
        file: &Self::Upload,
    ) -> Result<UploadResponse, ApiError>;

    async fn delete_image(&self, token: &AuthToken, id: ImageId) -> Result<(), ApiError>;
}

/// HTTP implementation over `fetch`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
        }
    }

    /// Build a full API URL from a path
    ///
    /// # Example
    /// ```ignore
    /// let url = client.url("/images");
    /// ```
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Credentials travel as query parameters, not as a body
    pub fn credentials_url(&self, path: &str, credentials: &Credentials) -> String {
        format!(
            "{}?username={}&password={}",
            self.url(path),
            urlencoding::encode(&credentials.username),
            urlencoding::encode(&credentials.password)
        )
    }

    pub fn image_url(&self, id: ImageId) -> String {
        self.url(&format!("/images/{}", id))
    }
}

/// Decode a 2xx body or turn a non-2xx into an error carrying the server message
async fn read_json<T: DeserializeOwned>(action: ApiAction, response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(read_error(action, response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::decode(action, e))
}

async fn read_error(action: ApiAction, response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let err = ApiError::from_response(action, status, &body);
    log::warn!("{:?} failed with HTTP {}: {}", action, status, err);
    err
}

fn send_failed(action: ApiAction, e: gloo_net::Error) -> ApiError {
    log::error!("{:?}: request not sent: {}", action, e);
    ApiError::network(action, e)
}

#[async_trait(?Send)]
impl RecognitionApi for ApiClient {
    type Upload = web_sys::File;

    async fn signup(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let action = ApiAction::Signup;
        log::debug!("POST /signup for {}", credentials.username);

        let response = Request::post(&self.credentials_url("/signup", credentials))
            .send()
            .await
            .map_err(|e| send_failed(action, e))?;

        if !response.ok() {
            return Err(read_error(action, response).await);
        }
        Ok(())
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let action = ApiAction::Login;
        log::debug!("POST /login for {}", credentials.username);

        let response = Request::post(&self.credentials_url("/login", credentials))
            .send()
            .await
            .map_err(|e| send_failed(action, e))?;

        read_json(action, response).await
    }

    async fn list_images(&self, token: &AuthToken) -> Result<Vec<ImageRecord>, ApiError> {
        let action = ApiAction::ListImages;
        log::debug!("GET /images");

        let response = Request::get(&self.url("/images"))
            .header("Authorization", &token.bearer_header())
            .send()
            .await
            .map_err(|e| send_failed(action, e))?;

        if !response.ok() {
            log::warn!("GET /images failed: HTTP {}", response.status());
            return Err(ApiError::generic_http(action, response.status()));
        }
        response
            .json::<Vec<ImageRecord>>()
            .await
            .map_err(|e| ApiError::decode(action, e))
    }

    async fn upload_image(
        &self,
        token: &AuthToken,
        file: &web_sys::File,
    ) -> Result<UploadResponse, ApiError> {
        let action = ApiAction::Upload;
        log::debug!("POST /upload {} ({} bytes)", file.name(), file.size());

        let form_data = web_sys::FormData::new()
            .map_err(|e| ApiError::network(action, format!("{:?}", e)))?;
        form_data
            .append_with_blob("file", file)
            .map_err(|e| ApiError::network(action, format!("{:?}", e)))?;

        let response = Request::post(&self.url("/upload"))
            .header("Authorization", &token.bearer_header())
            .body(form_data)
            .map_err(|e| send_failed(action, e))?
            .send()
            .await
            .map_err(|e| send_failed(action, e))?;

        read_json(action, response).await
    }

    async fn delete_image(&self, token: &AuthToken, id: ImageId) -> Result<(), ApiError> {
        let action = ApiAction::DeleteImage;
        log::debug!("DELETE /images/{}", id);

        let response = Request::delete(&self.image_url(id))
            .header("Authorization", &token.bearer_header())
            .send()
            .await
            .map_err(|e| send_failed(action, e))?;

        if !response.ok() {
            log::warn!("DELETE /images/{} failed: HTTP {}", id, response.status());
            return Err(ApiError::generic_http(action, response.status()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: "http://localhost:8000/api".to_string(),
        })
    }

    #[test]
    fn test_url() {
        assert_eq!(client().url("/images"), "http://localhost:8000/api/images");
        assert_eq!(
            client().image_url(ImageId(7)),
            "http://localhost:8000/api/images/7"
        );
    }

    #[test]
    fn test_credentials_are_url_encoded() {
        let creds = Credentials::new("alice smith", "p&ss=word?");
        assert_eq!(
            client().credentials_url("/login", &creds),
            "http://localhost:8000/api/login?username=alice%20smith&password=p%26ss%3Dword%3F"
        );
    }
}
