use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Server-assigned image identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(pub i64);

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Records
// ============================================================================

/// One entry of `GET /images`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: ImageId,
    pub filename: String,
    #[serde(default, deserialize_with = "deserialize_labels")]
    pub labels: Vec<String>,
}

impl ImageRecord {
    pub fn has_labels(&self) -> bool {
        !self.labels.is_empty()
    }
}

/// Body of a 2xx `POST /upload`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub labels: Option<Vec<String>>,
}

impl UploadResponse {
    /// Number of detected labels, 0 when the field is absent
    pub fn label_count(&self) -> usize {
        self.labels.as_ref().map(Vec::len).unwrap_or(0)
    }
}

/// Accepts `null` and drops blank entries.
///
/// Labels are stored comma-joined server side, so an image without labels
/// comes back as `[""]`.
fn deserialize_labels<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter(|label| !label.trim().is_empty())
        .collect())
}
