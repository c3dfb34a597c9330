//! On-disk font storage
//!
//! Fonts live as regular files directly under a single root directory. The
//! directory is created on the first write.

use super::name::is_font_file;
use super::{FontName, FontStorage, StorageError};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Font storage backed by a directory
#[derive(Debug, Clone)]
pub struct DiskStorage {
    root: PathBuf,
}

impl DiskStorage {
    /// Create a store rooted at `root`; the directory need not exist yet
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory of the store
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &FontName) -> PathBuf {
        self.root.join(name.as_str())
    }

    /// Follow symlinks for `name` and check the result is still under the root
    ///
    /// # Returns
    /// * `Ok(PathBuf)` - Canonical path of the existing entry
    /// * `Err(StorageError::NotFound)` - Root or entry does not exist
    /// * `Err(StorageError::OutsideRoot)` - Entry resolves outside the root
    async fn resolve_within_root(&self, name: &FontName) -> Result<PathBuf, StorageError> {
        let root = fs::canonicalize(&self.root)
            .await
            .map_err(|e| not_found_or_io(e, name))?;
        let resolved = fs::canonicalize(self.path_for(name))
            .await
            .map_err(|e| not_found_or_io(e, name))?;

        if !resolved.starts_with(&root) {
            return Err(StorageError::OutsideRoot(name.to_string()));
        }
        Ok(resolved)
    }
}

/// Errors meaning "nothing stored under this name": a missing entry, a path
/// component that is not a directory, or a name the filesystem cannot hold
fn is_missing(err: &std::io::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::NotFound | ErrorKind::NotADirectory | ErrorKind::InvalidFilename
    )
}

fn not_found_or_io(err: std::io::Error, name: &FontName) -> StorageError {
    if is_missing(&err) {
        StorageError::NotFound(name.to_string())
    } else {
        StorageError::Io(err)
    }
}

#[async_trait]
impl FontStorage for DiskStorage {
    async fn list(&self) -> Result<Vec<String>, StorageError> {
        let mut entries = match fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::DirectoryNotFound)
            }
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            // Symlinks, directories and special files are not fonts
            if !entry.file_type().await?.is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                debug!(entry = ?entry.file_name(), "Skipping non UTF-8 entry");
                continue;
            };
            if is_font_file(&name) {
                names.push(name);
            }
        }

        names.sort();
        Ok(names)
    }

    async fn get(&self, name: &FontName) -> Result<Vec<u8>, StorageError> {
        let path = self.resolve_within_root(name).await?;

        let metadata = fs::metadata(&path)
            .await
            .map_err(|e| not_found_or_io(e, name))?;
        if !metadata.is_file() {
            return Err(StorageError::NotFound(name.to_string()));
        }

        fs::read(&path).await.map_err(|e| not_found_or_io(e, name))
    }

    async fn put(&self, name: &FontName, bytes: Vec<u8>) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root).await?;

        let path = self.path_for(name);
        match fs::symlink_metadata(&path).await {
            Ok(meta) if meta.file_type().is_symlink() => {
                // Writing follows the link, so its target must stay inside the root.
                // A dangling link has no target to check.
                match self.resolve_within_root(name).await {
                    Ok(_) => {}
                    Err(StorageError::NotFound(_)) => {
                        return Err(StorageError::OutsideRoot(name.to_string()))
                    }
                    Err(e) => return Err(e),
                }
            }
            Ok(meta) if meta.is_dir() => {
                return Err(StorageError::InvalidName(name.to_string()));
            }
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        fs::write(&path, bytes).await?;
        Ok(())
    }

    async fn delete(&self, name: &FontName) -> Result<(), StorageError> {
        fs::remove_file(self.path_for(name))
            .await
            .map_err(|e| not_found_or_io(e, name))
    }
}
