//! Filesystem utilities for code generation

use crate::error::FilesystemError;
use std::path::{Component, Path, PathBuf};

/// Create a directory and all of its parents
pub async fn create_dir_all<P: AsRef<Path>>(path: P) -> Result<(), FilesystemError> {
    let path = path.as_ref();
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|source| FilesystemError::CreateDir {
            path: path.to_path_buf(),
            source,
        })
}

/// Write content to a file, creating parent directories if needed
pub async fn write_file<P: AsRef<Path>, C: AsRef<[u8]>>(
    path: P,
    contents: C,
) -> Result<(), FilesystemError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        create_dir_all(parent).await?;
    }

    tokio::fs::write(path, contents)
        .await
        .map_err(|source| FilesystemError::WriteFile {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!("Wrote {}", path.display());
    Ok(())
}

/// Join a request-derived name onto `base`, refusing anything but one plain component
pub fn join_segment(
    base: &Path,
    segment: &str,
    context: &'static str,
) -> Result<PathBuf, FilesystemError> {
    let invalid = || FilesystemError::InvalidPathSegment {
        context,
        segment: segment.to_string(),
    };

    let trimmed = segment.trim();
    if trimmed.is_empty() || trimmed.contains('\0') {
        return Err(invalid());
    }

    let mut components = Path::new(trimmed).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(base.join(trimmed)),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_segment_accepts_plain_names() {
        let base = Path::new("/tmp/ws");
        assert_eq!(
            join_segment(base, "order", "class name").unwrap(),
            PathBuf::from("/tmp/ws/order")
        );
    }

    #[test]
    fn test_join_segment_rejects_traversal() {
        let base = Path::new("/tmp/ws");
        for bad in ["", "  ", "..", ".", "a/b", "/etc", "../x", "nul\0byte"] {
            assert!(
                matches!(
                    join_segment(base, bad, "class name"),
                    Err(FilesystemError::InvalidPathSegment { .. })
                ),
                "segment {:?} should be rejected",
                bad
            );
        }
    }

    #[tokio::test]
    async fn test_write_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/c.txt");

        write_file(&path, "hello").await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello");
    }
}
