//! Dashboard actions: fetch, upload, delete.
//!
//! Every write is followed by a full re-fetch on success.

use contracts::domain::a001_image::aggregate::ImageId;
use contracts::system::auth::AuthToken;

use super::state::DashboardState;
use crate::shared::api_utils::RecognitionApi;
use crate::shared::state::StateCell;

/// Reload the list; loading is raised before the request and cleared after it
pub async fn refresh<A, S>(api: &A, token: &AuthToken, state: &S)
where
    A: RecognitionApi + ?Sized,
    S: StateCell<DashboardState>,
{
    state.update_state(|s| s.begin_fetch());
    let result = api.list_images(token).await;
    if let Ok(images) = &result {
        log::debug!("loaded {} images", images.len());
    }
    state.update_state(|s| s.finish_fetch(result));
}

/// Upload one file; returns the detected label count on success
pub async fn upload<A, S>(api: &A, token: &AuthToken, file: &A::Upload, state: &S) -> Option<usize>
where
    A: RecognitionApi + ?Sized,
    S: StateCell<DashboardState>,
{
    match api.upload_image(token, file).await {
        Ok(response) => {
            let count = response.label_count();
            log::info!(
                "uploaded {}: {} labels",
                response.filename.as_deref().unwrap_or("image"),
                count
            );
            state.update_state(|s| s.upload_succeeded(count));
            refresh(api, token, state).await;
            Some(count)
        }
        Err(e) => {
            state.update_state(|s| s.upload_failed(e));
            None
        }
    }
}

pub async fn delete<A, S>(api: &A, token: &AuthToken, id: ImageId, state: &S) -> bool
where
    A: RecognitionApi + ?Sized,
    S: StateCell<DashboardState>,
{
    match api.delete_image(token, id).await {
        Ok(()) => {
            log::info!("deleted image {}", id);
            state.update_state(|s| s.delete_succeeded());
            refresh(api, token, state).await;
            true
        }
        Err(e) => {
            state.update_state(|s| s.delete_failed(&e));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_image::ui::dashboard::state::ListView;
    use crate::shared::error::{ApiAction, ApiError};
    use crate::shared::notice::Notice;
    use crate::shared::testing::{image, token, FakeApi, FakeFile};
    use std::cell::RefCell;

    #[tokio::test]
    async fn test_refresh_empty_list() {
        let api = FakeApi::default();
        let state = RefCell::new(DashboardState::default());

        refresh(&api, &token(), &state).await;

        let s = state.borrow();
        assert!(!s.is_loading);
        assert_eq!(s.list_view(), ListView::Empty);
        assert_eq!(s.notice, None);
    }

    #[tokio::test]
    async fn test_refresh_failure_clears_loading() {
        let api = FakeApi::default();
        api.fail_next(ApiError::Network("Failed to fetch".to_string()));
        let state = RefCell::new(DashboardState::default());

        refresh(&api, &token(), &state).await;

        let s = state.borrow();
        assert!(!s.is_loading);
        assert_eq!(s.notice, Some(Notice::error("Failed to fetch")));
    }

    #[tokio::test]
    async fn test_upload_reports_labels_and_refetches() {
        let api = FakeApi::with_images(vec![image(1, "old.png", &[])]);
        let state = RefCell::new(DashboardState::default());
        refresh(&api, &token(), &state).await;

        let file = FakeFile::new("dog.jpg", &["Dog", "Animal"]);
        let count = upload(&api, &token(), &file, &state).await;

        assert_eq!(count, Some(2));
        assert_eq!(api.calls(), vec!["list_images", "upload_image", "list_images"]);
        let s = state.borrow();
        assert_eq!(
            s.notice,
            Some(Notice::success("Image uploaded successfully! Found 2 labels."))
        );
        let uploaded = s.images.iter().find(|i| i.filename == "dog.jpg").unwrap();
        assert_eq!(uploaded.labels.len(), 2);
        assert_eq!(s.images.len(), 2);
    }

    #[tokio::test]
    async fn test_upload_without_labels_reports_zero() {
        let api = FakeApi::default();
        let state = RefCell::new(DashboardState::default());

        let count = upload(&api, &token(), &FakeFile::new("blank.png", &[]), &state).await;

        assert_eq!(count, Some(0));
        let s = state.borrow();
        assert_eq!(
            s.notice,
            Some(Notice::success("Image uploaded successfully! Found 0 labels."))
        );
        assert_eq!(s.images[0].labels.len(), 0);
    }

    #[tokio::test]
    async fn test_upload_failure_does_not_refetch() {
        let api = FakeApi::default();
        api.fail_next(ApiError::from_response(
            ApiAction::Upload,
            502,
            r#"{"detail":"AWS error: throttled"}"#,
        ));
        let state = RefCell::new(DashboardState::default());

        let count = upload(&api, &token(), &FakeFile::new("cat.jpg", &["Cat"]), &state).await;

        assert_eq!(count, None);
        assert_eq!(api.calls(), vec!["upload_image"]);
        assert_eq!(
            state.borrow().notice,
            Some(Notice::error("AWS error: throttled"))
        );
    }

    #[tokio::test]
    async fn test_delete_removes_record_after_refetch() {
        let api = FakeApi::with_images(vec![
            image(1, "cat.jpg", &["Cat"]),
            image(2, "dog.jpg", &["Dog"]),
        ]);
        let state = RefCell::new(DashboardState::default());
        refresh(&api, &token(), &state).await;

        assert!(delete(&api, &token(), ImageId(1), &state).await);

        assert!(api.images().iter().all(|i| i.id != ImageId(1)));
        let s = state.borrow();
        assert_eq!(s.images, api.images());
        assert_eq!(s.images.len(), 1);
        assert_eq!(s.notice, Some(Notice::success("Image deleted successfully")));
    }

    #[tokio::test]
    async fn test_delete_failure_keeps_list() {
        let api = FakeApi::with_images(vec![image(1, "cat.jpg", &["Cat"])]);
        let state = RefCell::new(DashboardState::default());
        refresh(&api, &token(), &state).await;

        assert!(!delete(&api, &token(), ImageId(99), &state).await);

        let s = state.borrow();
        assert_eq!(s.images.len(), 1);
        assert_eq!(s.notice, Some(Notice::error("Failed to delete image")));
        assert_eq!(api.calls(), vec!["list_images", "delete_image"]);
    }
}
