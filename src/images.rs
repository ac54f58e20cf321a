//! Image acquisition for the admin upload form.
//!
//! The catalog stores only a URI string per record. Turning an
//! admin-selected file into that URI goes through the [`ImageSource`]
//! trait so the storage backend stays swappable; the shipped
//! [`MediaLibrary`] copies files into a managed media directory and hands
//! back `file://` URIs pointing at the copies.

use crate::errors::{Error, Result};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Collaborator that turns a user-selected image file into a display URI.
pub trait ImageSource {
    /// Ingests the file at `path` and returns the URI to store on the
    /// record.
    ///
    /// # Errors
    /// Returns [`Error::Image`] when `path` does not name a readable file
    /// and [`Error::Io`] when ingestion itself fails.
    fn acquire(&self, path: &Path) -> Result<String>;
}

/// Filesystem-backed image source.
///
/// Selected files are copied into the media root under a unique
/// timestamp-derived name, so the returned URI stays valid even when the
/// original file later moves or disappears.
#[derive(Debug, Clone)]
pub struct MediaLibrary {
    root: PathBuf,
}

impl MediaLibrary {
    /// Opens a media library rooted at `root`, creating the directory if
    /// it does not exist yet.
    ///
    /// # Errors
    /// Returns [`Error::Io`] when the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// The directory acquired images are copied into.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Picks a destination name that does not collide with an earlier
    /// acquisition, keeping the source file's extension.
    fn destination_for(&self, source: &Path) -> PathBuf {
        let stamp = Utc::now().timestamp_millis();
        let extension = source
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext.to_lowercase()))
            .unwrap_or_default();

        let mut attempt = 0u32;
        loop {
            let file_name = if attempt == 0 {
                format!("wallpaper-{stamp}{extension}")
            } else {
                format!("wallpaper-{stamp}-{attempt}{extension}")
            };
            let candidate = self.root.join(file_name);
            if !candidate.exists() {
                return candidate;
            }
            attempt += 1;
        }
    }
}

impl ImageSource for MediaLibrary {
    fn acquire(&self, path: &Path) -> Result<String> {
        if !path.is_file() {
            return Err(Error::Image {
                path: path.to_path_buf(),
                message: "not a readable file".to_string(),
            });
        }

        let destination = self.destination_for(path);
        fs::copy(path, &destination)?;
        let absolute = destination.canonicalize()?;
        info!(
            "Stored image {} as {}",
            path.display(),
            absolute.display()
        );
        Ok(format!("file://{}", absolute.display()))
    }
}
