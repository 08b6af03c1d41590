use crate::domain::constants::{SECURITY_TXT_FILE, WELL_KNOWN_DIR};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Write the document as UTF-8 under `<base>/.well-known/security.txt`,
/// creating the directory if needed. Returns the written path.
pub fn write_security_txt(base_dir: &Path, content: &str) -> Result<PathBuf> {
    let well_known = base_dir.join(WELL_KNOWN_DIR);
    std::fs::create_dir_all(&well_known)
        .with_context(|| format!("create {}", well_known.display()))?;
    let path = well_known.join(SECURITY_TXT_FILE);
    std::fs::write(&path, content).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}
