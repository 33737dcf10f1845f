use std::fs;
use std::path::{Path, PathBuf};

/// Owned handle to a temporary audio file created for exactly one consumer.
///
/// Release happens once on every exit path: `remove` is explicit and
/// idempotent, and `Drop` covers any path where it was not called. A failed
/// deletion is logged and never escalated to the job.
#[derive(Debug)]
pub struct ScopedArtifact {
    path: PathBuf,
    released: bool,
}

impl ScopedArtifact {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            released: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the backing file. Calling this more than once is a no-op.
    pub fn remove(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "Removed segment artifact");
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    path = %self.path.display(),
                    "Failed to remove segment artifact"
                );
            }
        }
    }
}

impl Drop for ScopedArtifact {
    fn drop(&mut self) {
        self.remove();
    }
}
