//! Per-request temporary workspace.
//!
//! A [`Workspace`] owns one uniquely named directory under the temp root:
//!
//! ```text
//! <temp root>/umlforge-<uuid>/
//!     project/        generated tree, archived without this prefix
//!     project.zip     finished archive
//! ```
//!
//! Releasing the workspace removes the whole directory, archive included.
//! Release happens explicitly via [`Workspace::release`] or, on any other exit
//! path, when the value is dropped.

use crate::error::FilesystemError;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const DIR_PREFIX: &str = "umlforge-";
const PROJECT_DIR: &str = "project";
const ARCHIVE_FILE: &str = "project.zip";

#[derive(Debug)]
pub struct Workspace {
    root: PathBuf,
    released: bool,
}

impl Workspace {
    /// Create a fresh workspace under `temp_root`, creating the root if needed
    pub async fn create(temp_root: &Path) -> Result<Self, FilesystemError> {
        let creation_error = |source| FilesystemError::CreateWorkspace {
            path: temp_root.to_path_buf(),
            source,
        };

        tokio::fs::create_dir_all(temp_root).await.map_err(creation_error)?;

        let root = temp_root.join(format!("{}{}", DIR_PREFIX, Uuid::new_v4()));
        // create_dir (not _all) so an existing directory is never reused
        tokio::fs::create_dir(&root).await.map_err(creation_error)?;

        let workspace = Self {
            root,
            released: false,
        };

        tokio::fs::create_dir(workspace.project_dir())
            .await
            .map_err(creation_error)?;

        tracing::debug!("Created workspace {}", workspace.root.display());
        Ok(workspace)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory the scaffolder populates
    pub fn project_dir(&self) -> PathBuf {
        self.root.join(PROJECT_DIR)
    }

    /// Where the packager writes the archive
    pub fn archive_path(&self) -> PathBuf {
        self.root.join(ARCHIVE_FILE)
    }

    /// Remove the workspace directory and everything in it
    pub async fn release(mut self) {
        self.released = true;
        match tokio::fs::remove_dir_all(&self.root).await {
            Ok(()) => tracing::debug!("Removed workspace {}", self.root.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("Failed to remove workspace {}: {}", self.root.display(), e),
        }
    }

    fn release_blocking(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        match std::fs::remove_dir_all(&self.root) {
            Ok(()) => tracing::debug!("Removed workspace {}", self.root.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("Failed to remove workspace {}: {}", self.root.display(), e),
        }
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        self.release_blocking();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_release() {
        let temp_root = tempfile::tempdir().unwrap();
        let workspace = Workspace::create(temp_root.path()).await.unwrap();
        let root = workspace.root().to_path_buf();

        assert!(root.starts_with(temp_root.path()));
        assert!(workspace.project_dir().is_dir());
        assert_eq!(workspace.archive_path().parent(), Some(root.as_path()));

        workspace.release().await;
        assert!(!root.exists());
    }

    #[tokio::test]
    async fn test_drop_removes_directory() {
        let temp_root = tempfile::tempdir().unwrap();
        let root = {
            let workspace = Workspace::create(temp_root.path()).await.unwrap();
            std::fs::write(workspace.archive_path(), b"partial").unwrap();
            workspace.root().to_path_buf()
        };
        assert!(!root.exists());
    }

    #[tokio::test]
    async fn test_workspaces_are_unique() {
        let temp_root = tempfile::tempdir().unwrap();
        let a = Workspace::create(temp_root.path()).await.unwrap();
        let b = Workspace::create(temp_root.path()).await.unwrap();
        assert_ne!(a.root(), b.root());
    }

    #[tokio::test]
    async fn test_create_fails_when_root_is_a_file() {
        let temp_root = tempfile::tempdir().unwrap();
        let blocker = temp_root.path().join("not-a-dir");
        std::fs::write(&blocker, b"x").unwrap();

        let err = Workspace::create(&blocker).await.unwrap_err();
        assert!(matches!(err, FilesystemError::CreateWorkspace { .. }));
    }
}
