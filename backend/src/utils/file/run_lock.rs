use fs2::FileExt;
use log::debug;
use shared::error::{config_err, io_err, PluginError};
use shared::utils::RUN_LOCK_FILE;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

/// Exclusive advisory lock on an output root, held for the duration of one run.
/// Released when dropped.
#[derive(Debug)]
pub struct RunLock {
    file: File,
    path: PathBuf,
}

impl RunLock {
    /// Fails fast when another run holds the lock on the same root.
    pub fn acquire(root: &Path) -> Result<Self, PluginError> {
        let path = root.join(RUN_LOCK_FILE);
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)
            .map_err(|err| io_err!("Failed to open lock file {}: {err}", path.display()))?;
        if file.try_lock_exclusive().is_err() {
            return Err(config_err!("Another run is already in progress for {}", root.display()));
        }
        debug!("Acquired run lock {}", path.display());
        Ok(Self { file, path })
    }
}

impl Drop for RunLock {
    fn drop(&mut self) {
        if FileExt::unlock(&self.file).is_ok() {
            debug!("Released run lock {}", self.path.display());
        }
    }
}
