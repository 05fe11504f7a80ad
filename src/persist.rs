//! Durable writes of rendered documents.
//!
//! A document is first written to a temporary file next to its destination, then
//! moved into place. When the destination cannot be replaced (a viewer holding the
//! file open, a directory in the way) the file is moved to a timestamped sibling
//! instead, and as a last resort the temporary file itself is kept.

use furips_render_core::RenderedDocument;
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use std::thread::{self, JoinHandle};
use tempfile::{NamedTempFile, PersistError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("could not create directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("could not write temporary file in {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("could not keep temporary file {}: {source}", .path.display())]
    Keep { path: PathBuf, source: io::Error },

    #[error("refusing to save an empty document to {}", .path.display())]
    EmptyDocument { path: PathBuf },
}

/// Where a saved document ended up, in the order they are attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStrategy {
    Primary,
    Alternate,
    KeepTemporary,
}

impl SaveStrategy {
    pub const ORDER: [SaveStrategy; 3] = [
        SaveStrategy::Primary,
        SaveStrategy::Alternate,
        SaveStrategy::KeepTemporary,
    ];
}

impl fmt::Display for SaveStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SaveStrategy::Primary => "primary",
            SaveStrategy::Alternate => "alternate",
            SaveStrategy::KeepTemporary => "keep-temporary",
        })
    }
}

type SuffixFn = dyn Fn() -> String + Send + Sync;

/// Saves documents with the primary/alternate/temporary fallback chain.
pub struct PersistenceManager {
    alternate_suffix: Box<SuffixFn>,
}

impl Default for PersistenceManager {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PersistenceManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistenceManager").finish_non_exhaustive()
    }
}

impl PersistenceManager {
    /// Alternate names carry a local timestamp with millisecond precision.
    pub fn new() -> Self {
        Self {
            alternate_suffix: Box::new(|| chrono::Local::now().format("_%Y%m%d_%H%M%S_%3f").to_string()),
        }
    }

    /// Overrides how the alternate file name suffix is produced.
    pub fn with_alternate_suffix<F>(mut self, suffix: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.alternate_suffix = Box::new(suffix);
        self
    }

    /// Writes `document` and returns the path that actually holds it.
    ///
    /// Missing parent directories are created. Fails only when nothing could be
    /// written at all, or when every fallback failed to keep the written bytes.
    pub fn save(&self, document: RenderedDocument, destination: &Path) -> Result<PathBuf, PersistenceError> {
        if document.is_empty() {
            return Err(PersistenceError::EmptyDocument {
                path: destination.to_path_buf(),
            });
        }
        let dir = parent_dir(destination);
        std::fs::create_dir_all(&dir).map_err(|source| PersistenceError::CreateDir {
            path: dir.clone(),
            source,
        })?;

        let mut pending = self.write_temporary(&dir, destination, &document)?;
        let mut last_error = None;
        for strategy in SaveStrategy::ORDER {
            match self.attempt(strategy, pending, destination) {
                Ok(path) => {
                    log::info!("Saved {} bytes to {} ({})", document.len(), path.display(), strategy);
                    return Ok(path);
                }
                Err(PersistError { error, file }) => {
                    log::warn!("{} save of {} failed: {}", strategy, destination.display(), error);
                    last_error = Some(error);
                    pending = file;
                }
            }
        }

        Err(PersistenceError::Keep {
            path: pending.path().to_path_buf(),
            source: last_error.unwrap_or_else(|| io::Error::other("no save strategy was attempted")),
        })
    }

    /// The timestamped sibling used when the destination cannot be replaced.
    pub fn alternate_path(&self, destination: &Path) -> PathBuf {
        let stem = file_stem(destination);
        let suffix = (self.alternate_suffix)();
        let name = match destination.extension() {
            Some(ext) => format!("{}{}.{}", stem, suffix, ext.to_string_lossy()),
            None => format!("{}{}", stem, suffix),
        };
        parent_dir(destination).join(name)
    }

    fn write_temporary(
        &self,
        dir: &Path,
        destination: &Path,
        document: &RenderedDocument,
    ) -> Result<NamedTempFile, PersistenceError> {
        let write_err = |source| PersistenceError::Write {
            path: dir.to_path_buf(),
            source,
        };
        let prefix = format!(".{}-", file_stem(destination));
        let mut temp = tempfile::Builder::new()
            .prefix(&prefix)
            .suffix(".tmp")
            .tempfile_in(dir)
            .map_err(write_err)?;
        temp.write_all(document.as_bytes()).map_err(write_err)?;
        temp.flush().map_err(write_err)?;
        temp.as_file().sync_all().map_err(write_err)?;
        log::debug!("Wrote {} bytes to {}", document.len(), temp.path().display());
        Ok(temp)
    }

    fn attempt(
        &self,
        strategy: SaveStrategy,
        temp: NamedTempFile,
        destination: &Path,
    ) -> Result<PathBuf, PersistError> {
        match strategy {
            SaveStrategy::Primary => temp.persist(destination).map(|_| destination.to_path_buf()),
            SaveStrategy::Alternate => {
                let alternate = self.alternate_path(destination);
                temp.persist_noclobber(&alternate).map(|_| alternate)
            }
            SaveStrategy::KeepTemporary => temp.keep().map(|(_, path)| path),
        }
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string())
}

/// Asks the platform's default viewer to open `path`. Failures are logged and
/// otherwise ignored.
pub fn open_in_viewer(path: &Path) {
    match spawn_reaped(viewer_command(path)) {
        Ok(_) => log::debug!("Opened {} in the default viewer", path.display()),
        Err(e) => log::debug!("Could not open {} in a viewer: {}", path.display(), e),
    }
}

/// Spawns `command` and waits for it on a detached thread so the child is reaped.
fn spawn_reaped(mut command: Command) -> io::Result<JoinHandle<io::Result<ExitStatus>>> {
    let mut child = command.spawn()?;
    Ok(thread::spawn(move || child.wait()))
}

#[cfg(target_os = "windows")]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(path);
    cmd
}

#[cfg(target_os = "macos")]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    cmd
}
