use contracts::domain::a001_image::aggregate::ImageId;

pub const NO_LABELS_MESSAGE: &str = "No labels detected";

/// At most one row is being deleted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageListState {
    deleting: Option<ImageId>,
}

impl ImageListState {
    pub fn is_deleting(&self, id: ImageId) -> bool {
        self.deleting == Some(id)
    }

    /// Returns `false` when this row is already being deleted
    pub fn begin_delete(&mut self, id: ImageId) -> bool {
        if self.is_deleting(id) {
            return false;
        }
        self.deleting = Some(id);
        true
    }

    pub fn finish_delete(&mut self, id: ImageId) {
        if self.is_deleting(id) {
            self.deleting = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_deleting_row() {
        let mut state = ImageListState::default();
        assert!(state.begin_delete(ImageId(1)));
        assert!(state.is_deleting(ImageId(1)));
        assert!(!state.begin_delete(ImageId(1)));

        // another row takes over the marker
        assert!(state.begin_delete(ImageId(2)));
        assert!(!state.is_deleting(ImageId(1)));

        // a late completion for row 1 leaves row 2 marked
        state.finish_delete(ImageId(1));
        assert!(state.is_deleting(ImageId(2)));

        state.finish_delete(ImageId(2));
        assert_eq!(state, ImageListState::default());
    }
}
