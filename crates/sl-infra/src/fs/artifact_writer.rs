use anyhow::{bail, Context, Result};
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use sl_core::ports::ArtifactWriterPort;

/// Writes artifacts as plain files under the caller's output directory.
///
/// Files are opened with `create_new`, so an existing artifact is never
/// overwritten. The handle is flushed and synced before returning and closed
/// on every exit path.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsArtifactWriter;

impl FsArtifactWriter {
    pub fn new() -> Self {
        Self
    }
}

fn validate_filename(filename: &str) -> Result<()> {
    if filename.is_empty()
        || filename == "."
        || filename == ".."
        || filename.contains(|c: char| c == '/' || c == '\\')
    {
        bail!("invalid artifact filename: {filename:?}");
    }
    Ok(())
}

impl ArtifactWriterPort for FsArtifactWriter {
    fn write(&self, output_dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
        validate_filename(filename)?;
        fs::create_dir_all(output_dir)
            .with_context(|| format!("create output dir {}", output_dir.display()))?;

        let path = output_dir.join(filename);
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .with_context(|| format!("open artifact {}", path.display()))?;

        let mut writer = BufWriter::new(file);
        writer
            .write_all(bytes)
            .with_context(|| format!("write artifact {}", path.display()))?;
        writer.flush()?;
        writer.get_ref().sync_all()?;

        Ok(path)
    }
}
