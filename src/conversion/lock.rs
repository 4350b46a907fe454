use crate::error::{ExportError, ExportErrorKind, ExportResult};
use std::fs::{File, OpenOptions, TryLockError};
use std::io::Write;
use std::path::{Path, PathBuf};

pub const LOCK_FILE_NAME: &str = ".graphexport.lock";

/// Exclusive claim on an output directory.
///
/// Held as an OS lock on `.graphexport.lock` for as long as the guard lives.
/// The operating system drops the lock when the owning process exits, so a
/// lock file left behind by a killed run does not block later exports. The
/// file itself stays in place between runs.
#[derive(Debug)]
pub struct OutputLock {
    path: PathBuf,
    file: File,
}

impl OutputLock {
    pub fn acquire(dir: &Path) -> ExportResult<Self> {
        let path = dir.join(LOCK_FILE_NAME);
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(|e| ExportError::output_write(&path, e))?;

        match file.try_lock() {
            Ok(()) => {}
            Err(TryLockError::WouldBlock) => {
                return Err(ExportErrorKind::OutputLocked { path }.into());
            }
            Err(TryLockError::Error(e)) => return Err(ExportError::output_write(&path, e)),
        }

        // Owner pid, for whoever is waiting on the lock.
        let owner = file
            .set_len(0)
            .and_then(|()| writeln!(file, "{}", std::process::id()));
        if let Err(e) = owner {
            tracing::warn!(path = %path.display(), error = %e, "could not record lock owner");
        }

        tracing::debug!(path = %path.display(), "acquired output lock");
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for OutputLock {
    fn drop(&mut self) {
        match self.file.unlock() {
            Ok(()) => tracing::debug!(path = %self.path.display(), "released output lock"),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to release output lock")
            }
        }
    }
}
