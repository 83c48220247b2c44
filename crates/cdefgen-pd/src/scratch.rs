//! Scratch header lifetime
//!
//! The patched header lives on disk only while the translator needs it.
//! [`ScratchHeader`] owns the file and deletes it when dropped, so it is
//! gone after success, a translator failure or a rewrite failure alike.

use cdefgen_api::{GenError, GenResult};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct ScratchHeader {
    path: PathBuf,
}

impl ScratchHeader {
    /// Write `contents` to `path`, overwriting any stale copy
    pub fn create(path: impl AsRef<Path>, contents: &str) -> GenResult<Self> {
        let path = path.as_ref().to_path_buf();
        fs::write(&path, contents).map_err(|e| GenError::ScratchWrite(path.clone(), e))?;
        debug!("Wrote scratch header {}", path.display());
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchHeader {
    fn drop(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => debug!("Removed scratch header {}", self.path.display()),
            Err(e) => warn!(
                "Failed to remove scratch header {}: {e}",
                self.path.display()
            ),
        }
    }
}
