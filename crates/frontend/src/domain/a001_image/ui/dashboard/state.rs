use contracts::domain::a001_image::aggregate::ImageRecord;

use crate::shared::error::{ApiAction, ApiError};
use crate::shared::notice::Notice;

pub const EMPTY_LIST_MESSAGE: &str = "No images yet. Upload one to get started!";
pub const DELETE_SUCCESS_MESSAGE: &str = "Image deleted successfully";

pub fn upload_success_message(label_count: usize) -> String {
    format!("Image uploaded successfully! Found {} labels.", label_count)
}

/// What the "My Images" card shows; exactly one at a time
#[derive(Debug, PartialEq, Eq)]
pub enum ListView<'a> {
    Loading,
    Empty,
    Images(&'a [ImageRecord]),
}

impl<'a> ListView<'a> {
    /// `None` while a fetch is in flight
    pub fn of(loaded: Option<&'a [ImageRecord]>) -> Self {
        match loaded {
            None => ListView::Loading,
            Some([]) => ListView::Empty,
            Some(images) => ListView::Images(images),
        }
    }
}

/// Dashboard screen state.
///
/// `images` only ever changes through [`finish_fetch`](Self::finish_fetch);
/// writes are confirmed by a full re-fetch, never patched locally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardState {
    pub images: Vec<ImageRecord>,
    pub is_loading: bool,
    pub notice: Option<Notice>,
}

impl Default for DashboardState {
    // loading until the first fetch completes
    fn default() -> Self {
        Self {
            images: Vec::new(),
            is_loading: true,
            notice: None,
        }
    }
}

impl DashboardState {
    pub fn begin_fetch(&mut self) {
        self.is_loading = true;
    }

    /// A failed fetch keeps the last successful list
    pub fn finish_fetch(&mut self, result: Result<Vec<ImageRecord>, ApiError>) {
        self.is_loading = false;
        match result {
            Ok(images) => self.images = images,
            Err(e) => self.notice = Some(e.into()),
        }
    }

    pub fn upload_succeeded(&mut self, label_count: usize) {
        self.notice = Some(Notice::success(upload_success_message(label_count)));
    }

    pub fn upload_failed(&mut self, err: ApiError) {
        self.notice = Some(err.into());
    }

    pub fn delete_succeeded(&mut self) {
        self.notice = Some(Notice::success(DELETE_SUCCESS_MESSAGE));
    }

    /// The server's text is not surfaced for deletes
    pub fn delete_failed(&mut self, err: &ApiError) {
        match err.status() {
            Some(status) => log::warn!("delete failed with HTTP {}: {}", status, err),
            None => log::warn!("delete failed: {}", err),
        }
        self.notice = Some(Notice::error(ApiAction::DeleteImage.fallback_message()));
    }

    /// Last fetched list, or `None` while loading
    pub fn loaded(&self) -> Option<&[ImageRecord]> {
        (!self.is_loading).then_some(self.images.as_slice())
    }

    pub fn list_view(&self) -> ListView<'_> {
        ListView::of(self.loaded())
    }
}
