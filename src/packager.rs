//! Zip packaging of a populated workspace.

use crate::error::ArchiveError;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Archive `source_dir` into `archive_path`.
///
/// Entry names are relative to `source_dir` (its own name is not a prefix).
/// Directories get their own entries so empty ones survive. Resolves only
/// after the archive has been finalized and flushed to disk.
pub async fn pack(source_dir: &Path, archive_path: &Path) -> Result<PathBuf, ArchiveError> {
    let source_dir = source_dir.to_path_buf();
    let archive_path = archive_path.to_path_buf();

    let (count, archive_path) = tokio::task::spawn_blocking(move || {
        write_archive(&source_dir, &archive_path).map(|count| (count, archive_path))
    })
    .await
    .map_err(|e| ArchiveError::Task(e.to_string()))??;

    tracing::info!("Packed {} entries into {}", count, archive_path.display());
    Ok(archive_path)
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> ArchiveError + '_ {
    move |source| ArchiveError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Zip entry name for a path relative to the archive root
fn entry_name(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn write_archive(source_dir: &Path, archive_path: &Path) -> Result<usize, ArchiveError> {
    let file = File::create(archive_path).map_err(io_error(archive_path))?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        // maximum deflate level
        .compression_level(Some(9))
        .unix_permissions(0o644);
    let dir_options = options.unix_permissions(0o755);

    let mut count = 0;
    for entry in WalkDir::new(source_dir).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        let relative = match entry.path().strip_prefix(source_dir) {
            Ok(relative) => relative,
            Err(_) => continue,
        };
        let name = entry_name(relative);

        if entry.file_type().is_dir() {
            zip.add_directory(format!("{}/", name), dir_options)?;
        } else {
            zip.start_file(name, options)?;
            let mut input = File::open(entry.path()).map_err(io_error(entry.path()))?;
            io::copy(&mut input, &mut zip).map_err(io_error(entry.path()))?;
        }
        count += 1;
    }

    let writer = zip.finish()?;
    let file = writer
        .into_inner()
        .map_err(|e| ArchiveError::Io {
            path: archive_path.to_path_buf(),
            source: e.into_error(),
        })?;
    file.sync_all().map_err(io_error(archive_path))?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[tokio::test]
    async fn test_pack_preserves_relative_paths() {
        let source = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(source.path().join("src/main/java")).unwrap();
        std::fs::create_dir_all(source.path().join("src/test/resources")).unwrap();
        std::fs::write(source.path().join("pom.xml"), "<project/>").unwrap();
        std::fs::write(source.path().join("src/main/java/App.java"), "class App {}").unwrap();

        let archive_path = pack(source.path(), &out.path().join("out.zip")).await.unwrap();

        let mut archive = zip::ZipArchive::new(File::open(&archive_path).unwrap()).unwrap();
        let names: Vec<String> = archive.file_names().map(String::from).collect();
        assert!(names.contains(&"pom.xml".to_string()));
        assert!(names.contains(&"src/main/java/App.java".to_string()));
        assert!(names.contains(&"src/test/resources/".to_string()));
        assert!(names.iter().all(|n| !n.starts_with('/')));

        let mut content = String::new();
        archive
            .by_name("src/main/java/App.java")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "class App {}");
    }

    #[tokio::test]
    async fn test_pack_missing_source_fails() {
        let out = tempfile::tempdir().unwrap();
        let result = pack(&out.path().join("missing"), &out.path().join("out.zip")).await;
        assert!(matches!(result, Err(ArchiveError::Walk(_))));
    }

    #[tokio::test]
    async fn test_pack_unwritable_destination_fails() {
        let source = tempfile::tempdir().unwrap();
        let result = pack(source.path(), &source.path().join("no/such/dir/out.zip")).await;
        assert!(matches!(result, Err(ArchiveError::Io { .. })));
    }

    #[test]
    fn test_entry_name_uses_forward_slashes() {
        assert_eq!(entry_name(Path::new("src/main/App.java")), "src/main/App.java");
    }
}
