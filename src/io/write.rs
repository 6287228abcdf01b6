use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::info;

use crate::error::{Result, RiskMapError};

/// Reject `-` as an output path for formats that must go to a file.
pub fn assert_not_stdout(path: &Path, format: &'static str) -> Result<()> {
    if is_stdout(path) { return Err(RiskMapError::StdoutUnsupported(format)) }
    Ok(())
}

#[inline]
pub fn is_stdout(path: &Path) -> bool { path == Path::new("-") }

/// Write-then-rename wrapper so a failed render never leaves a partial file behind.
pub struct PendingWrite {
    target: PathBuf,
    tmp: NamedTempFile,
}

/// Open a temp file next to `target`. Refuses to replace an existing file unless `force`.
pub fn open_for_write(target: &Path, force: bool) -> Result<PendingWrite> {
    let parent = match target.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| RiskMapError::io(parent, e))?;

    if !force && target.exists() {
        return Err(RiskMapError::OutputExists(target.to_path_buf()));
    }

    let tmp = NamedTempFile::new_in(parent).map_err(|e| RiskMapError::io(parent, e))?;
    Ok(PendingWrite { target: target.to_path_buf(), tmp })
}

impl Write for PendingWrite {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> { self.tmp.write(buf) }

    fn flush(&mut self) -> io::Result<()> { self.tmp.flush() }
}

impl PendingWrite {
    /// Flush, sync and move the temp file into place.
    pub fn finalize(mut self) -> Result<()> {
        self.tmp.flush().map_err(|e| RiskMapError::io(&self.target, e))?;
        self.tmp.as_file().sync_all().ok(); // best-effort fsync file
        let PendingWrite { target, tmp } = self;
        tmp.persist(&target).map_err(|e| RiskMapError::io(&target, e.error))?;
        if let Some(dir) = target.parent() {
            let _ = File::open(dir).and_then(|f| f.sync_all());
        }
        info!(path = %target.display(), "[io] wrote");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("map.html");
        fs::write(&target, "old").unwrap();

        assert!(matches!(open_for_write(&target, false), Err(RiskMapError::OutputExists(_))));

        let mut pending = open_for_write(&target, true).unwrap();
        pending.write_all(b"new").unwrap();
        pending.finalize().unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out/maps/gbt.html");
        let mut pending = open_for_write(&target, false).unwrap();
        pending.write_all(b"<html></html>").unwrap();
        pending.finalize().unwrap();
        assert!(target.exists());
    }

    #[test]
    fn nothing_is_written_until_finalize() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("map.html");
        let mut pending = open_for_write(&target, false).unwrap();
        pending.write_all(b"partial").unwrap();
        drop(pending);
        assert!(!target.exists());
    }

    #[test]
    fn stdout_is_rejected() {
        assert!(assert_not_stdout(Path::new("-"), "html").is_err());
        assert!(assert_not_stdout(Path::new("map.html"), "html").is_ok());
    }
}
