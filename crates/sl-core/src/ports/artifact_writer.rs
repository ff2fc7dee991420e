use anyhow::Result;
use std::path::{Path, PathBuf};

/// Persists encoded artifact bytes.
///
/// `filename` is bare; the returned path is where the bytes landed.
/// Writers never overwrite an existing file.
pub trait ArtifactWriterPort: Send + Sync {
    fn write(&self, output_dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf>;
}
