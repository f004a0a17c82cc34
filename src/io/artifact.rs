//! Writing generated artifacts to disk.

use crate::core::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Replace the file at `path` with `contents` (truncate-and-replace).
///
/// The handle is flushed explicitly so a write error surfaces here instead
/// of being swallowed on drop.
pub fn write_artifact<P: AsRef<Path>>(path: P, contents: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(contents)?;
    writer.flush()?;
    log::info!("wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}

/// Create `dir` and its parents when missing.
pub fn ensure_output_dir<P: AsRef<Path>>(dir: P) -> Result<()> {
    let dir = dir.as_ref();
    if !dir.as_os_str().is_empty() && !dir.exists() {
        std::fs::create_dir_all(dir)?;
        log::debug!("created output directory {}", dir.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_replaces_previous_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("classifier.h");

        std::fs::write(&path, b"stale content that is much longer than the new one").unwrap();
        write_artifact(&path, b"fresh").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"fresh");
    }

    #[test]
    fn test_ensure_output_dir_creates_nested() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("gen").join("cc");

        ensure_output_dir(&nested).unwrap();
        assert!(nested.is_dir());
        // second call is a no-op
        ensure_output_dir(&nested).unwrap();
    }

    #[test]
    fn test_write_into_missing_dir_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("classifier.cc");
        let err = write_artifact(&path, b"x").unwrap_err();
        assert_eq!(err.category(), "io");
    }
}
