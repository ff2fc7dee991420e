use super::ArtifactName;

/// What a successful extraction left on disk.
///
/// `web` is the canonical reference handed back to callers; `lossless` is a
/// byproduct that stays on disk but is not referenced further.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedArtifact {
    pub web: ArtifactName,
    pub lossless: ArtifactName,
    pub width: u32,
    pub height: u32,
    pub original_size_bytes: usize,
    pub web_size_bytes: usize,
    pub lossless_size_bytes: usize,
}

impl SavedArtifact {
    pub fn filename(&self) -> &str {
        self.web.as_str()
    }
}
