/// Where the uploader is in its cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStage {
    Empty,
    FileSelected,
    Previewing,
    Uploading,
}

pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// Staged file and its preview. One file at a time.
///
/// Each accepted selection gets a ticket; a preview is only applied if its
/// ticket is still current, so a slow read for a replaced file is dropped.
#[derive(Debug, Clone)]
pub struct UploaderState<F> {
    file: Option<F>,
    preview: Option<String>,
    uploading: bool,
    ticket: u64,
}

impl<F> Default for UploaderState<F> {
    fn default() -> Self {
        Self {
            file: None,
            preview: None,
            uploading: false,
            ticket: 0,
        }
    }
}

impl<F: Clone> UploaderState<F> {
    pub fn stage(&self) -> UploadStage {
        match (&self.file, &self.preview, self.uploading) {
            (_, _, true) => UploadStage::Uploading,
            (None, _, false) => UploadStage::Empty,
            (Some(_), None, false) => UploadStage::FileSelected,
            (Some(_), Some(_), false) => UploadStage::Previewing,
        }
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    /// Stage `file`. Non-image files are ignored, as is any selection made
    /// while an upload is running. Returns the ticket for the preview read.
    pub fn select(&mut self, file: F, mime: &str) -> Option<u64> {
        if self.uploading || !is_image_mime(mime) {
            return None;
        }
        self.ticket += 1;
        self.file = Some(file);
        self.preview = None;
        Some(self.ticket)
    }

    /// Returns whether the preview was applied
    pub fn preview_ready(&mut self, ticket: u64, data_uri: String) -> bool {
        if ticket != self.ticket || self.file.is_none() || self.uploading {
            return false;
        }
        self.preview = Some(data_uri);
        true
    }

    pub fn can_upload(&self, external_loading: bool) -> bool {
        self.file.is_some() && !self.uploading && !external_loading
    }

    /// Enter the uploading stage and hand out the file to send
    pub fn begin_upload(&mut self) -> Option<F> {
        if self.uploading {
            return None;
        }
        let file = self.file.clone()?;
        self.uploading = true;
        Some(file)
    }

    /// Back to empty regardless of the outcome
    pub fn finish_upload(&mut self) {
        self.uploading = false;
        self.file = None;
        self.preview = None;
        self.ticket += 1;
    }
}
