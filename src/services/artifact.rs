use crate::domain::models::ArtifactReport;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Destination for the written file outside the local output tree.
///
/// Injected by the command layer when configured; when no sink is supplied,
/// upload is skipped entirely. This replaces the original design's
/// process-wide lazily-initialized upload client.
pub trait ArtifactSink {
    fn upload(
        &self,
        name: &str,
        file: &Path,
        retention_days: Option<u32>,
    ) -> Result<ArtifactReport>;
}

/// Sink that copies the file into a target directory, one subdirectory per
/// artifact name.
pub struct DirectorySink {
    target: PathBuf,
}

impl DirectorySink {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

impl ArtifactSink for DirectorySink {
    fn upload(
        &self,
        name: &str,
        file: &Path,
        retention_days: Option<u32>,
    ) -> Result<ArtifactReport> {
        let dir = self.target.join(name);
        std::fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
        let file_name = file
            .file_name()
            .with_context(|| format!("artifact source has no file name: {}", file.display()))?;
        let dest = dir.join(file_name);
        std::fs::copy(file, &dest)
            .with_context(|| format!("copy {} to {}", file.display(), dest.display()))?;
        Ok(ArtifactReport {
            name: name.to_string(),
            path: dest.to_string_lossy().to_string(),
            retention_days,
        })
    }
}
