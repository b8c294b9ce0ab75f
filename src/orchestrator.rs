//! Request orchestration: workspace → scaffold → package → stream → cleanup.
//!
//! Every request gets its own [`Workspace`]; nothing is shared between
//! concurrent calls to [`Generator::generate`]. The workspace is released on
//! every exit path: immediately when a phase fails, and when the returned
//! [`ArchiveStream`] reaches end-of-stream or is dropped.

use crate::codegen::project::DatabaseType;
use crate::codegen::scaffold;
use crate::codegen::types::ProjectRequest;
use crate::codegen::utils::sanitize_file_name;
use crate::error::{ArchiveError, GenerationError, Phase};
use crate::packager;
use crate::workspace::Workspace;
use std::fmt;
use std::future::Future;
use std::io;
use std::path::PathBuf;
use std::pin::Pin;
use std::task::{ready, Context, Poll};
use tokio::fs::File;
use tokio::io::{AsyncRead, ReadBuf};

/// Content type of the produced artifact
pub const ARCHIVE_CONTENT_TYPE: &str = "application/zip";

/// Generator configuration
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory under which per-request workspaces are created
    pub temp_root: PathBuf,
    pub database: DatabaseType,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            temp_root: std::env::var("UMLFORGE_TEMP_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| std::env::temp_dir().join("umlforge")),
            database: std::env::var("UMLFORGE_DATABASE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
        }
    }
}

/// Stateless project generator; cheap to clone and share across tasks
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the project archive for `request`.
    ///
    /// On success the archive is returned as a stream that owns the workspace.
    /// On failure the workspace is already gone when the error is returned.
    pub async fn generate(&self, request: &ProjectRequest) -> Result<ArchiveStream, GenerationError> {
        let workspace = Workspace::create(&self.config.temp_root)
            .await
            .map_err(|e| GenerationError::new(Phase::CreateWorkspace, e))?;

        self.generate_in(workspace, request).await
    }

    /// Run the remaining phases in an already acquired workspace
    async fn generate_in(
        &self,
        workspace: Workspace,
        request: &ProjectRequest,
    ) -> Result<ArchiveStream, GenerationError> {
        tracing::info!(
            "Generating project '{}' ({} classes) in {}",
            request.project_name(),
            request.classes.len(),
            workspace.root().display()
        );

        match self.build(&workspace, request).await {
            Ok((file, len)) => Ok(ArchiveStream {
                file: Some(file),
                len,
                file_name: format!("{}.zip", sanitize_file_name(request.project_name())),
                workspace: Some(workspace),
                cleanup: None,
                read_error: None,
            }),
            Err(e) => {
                tracing::warn!("Generation of '{}' failed: {}", request.project_name(), e);
                workspace.release().await;
                Err(e)
            }
        }
    }

    /// Scaffold and package into `workspace`, then open the finished archive
    async fn build(
        &self,
        workspace: &Workspace,
        request: &ProjectRequest,
    ) -> Result<(File, u64), GenerationError> {
        let project_dir = workspace.project_dir();

        scaffold::scaffold(&project_dir, request, self.config.database)
            .await
            .map_err(|e| GenerationError::new(Phase::Scaffold, e))?;

        let archive_path = packager::pack(&project_dir, &workspace.archive_path())
            .await
            .map_err(|e| GenerationError::new(Phase::Package, e))?;

        let open_error = |source| {
            GenerationError::new(
                Phase::Stream,
                ArchiveError::Io {
                    path: archive_path.clone(),
                    source,
                },
            )
        };
        let file = File::open(&archive_path).await.map_err(open_error)?;
        let len = file.metadata().await.map_err(open_error)?.len();

        Ok((file, len))
    }
}

type Cleanup = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Finished archive, readable once.
///
/// Owns the request's workspace. Reaching end-of-stream or hitting a read
/// error closes the archive and removes the workspace before the read
/// completes. Dropping the stream early removes it synchronously.
pub struct ArchiveStream {
    file: Option<File>,
    workspace: Option<Workspace>,
    cleanup: Option<Cleanup>,
    read_error: Option<io::Error>,
    file_name: String,
    len: u64,
}

impl fmt::Debug for ArchiveStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArchiveStream")
            .field("file_name", &self.file_name)
            .field("len", &self.len)
            .field("workspace", &self.workspace)
            .field("cleaning_up", &self.cleanup.is_some())
            .finish()
    }
}

impl ArchiveStream {
    /// `<projectName>.zip`, restricted to header-safe characters
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Archive size in bytes
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Value for a `Content-Disposition` response header
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.file_name)
    }

    /// Workspace directory while the stream is still open
    pub fn workspace_root(&self) -> Option<PathBuf> {
        self.workspace.as_ref().map(|w| w.root().to_path_buf())
    }

    /// Close the archive and start removing the workspace
    fn finish(&mut self, read_error: Option<io::Error>) {
        self.file = None;
        self.read_error = read_error;
        if let Some(workspace) = self.workspace.take() {
            tracing::debug!("Archive {} streamed, cleaning up", self.file_name);
            self.cleanup = Some(Box::pin(workspace.release()));
        }
    }

    /// Drive the workspace removal, then report the end of the stream
    fn poll_cleanup(&mut self, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        if let Some(cleanup) = self.cleanup.as_mut() {
            ready!(cleanup.as_mut().poll(cx));
            self.cleanup = None;
        }
        Poll::Ready(match self.read_error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        })
    }
}

impl AsyncRead for ArchiveStream {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let this = self.get_mut();
        let Some(file) = this.file.as_mut() else {
            return this.poll_cleanup(cx);
        };

        let had_room = buf.remaining() > 0;
        let before = buf.filled().len();
        match ready!(Pin::new(file).poll_read(cx, buf)) {
            Ok(()) if had_room && buf.filled().len() == before => {
                this.finish(None);
                this.poll_cleanup(cx)
            }
            Ok(()) => Poll::Ready(Ok(())),
            Err(e) => {
                this.finish(Some(e));
                this.poll_cleanup(cx)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::types::ClassModel;
    use tokio::io::AsyncReadExt;

    fn generator(temp_root: &std::path::Path) -> Generator {
        Generator::new(GeneratorConfig {
            temp_root: temp_root.to_path_buf(),
            database: DatabaseType::PostgreSQL,
        })
    }

    #[tokio::test]
    async fn test_stream_end_removes_workspace() {
        let temp_root = tempfile::tempdir().unwrap();
        let request = ProjectRequest {
            classes: vec![ClassModel::new("order").with_attributes(["- total:number"])],
            ..Default::default()
        };

        let mut stream = generator(temp_root.path()).generate(&request).await.unwrap();
        let root = stream.workspace_root().unwrap();
        assert!(root.join("project.zip").exists());
        assert_eq!(stream.file_name(), "demo.zip");

        let mut bytes = Vec::new();
        stream.read_to_end(&mut bytes).await.unwrap();

        assert_eq!(bytes.len() as u64, stream.len());
        assert!(bytes.starts_with(b"PK"));
        assert!(stream.workspace_root().is_none());
        assert!(!root.exists());
    }

    #[tokio::test]
    async fn test_dropped_stream_removes_workspace() {
        let temp_root = tempfile::tempdir().unwrap();
        let stream = generator(temp_root.path())
            .generate(&ProjectRequest::default())
            .await
            .unwrap();
        let root = stream.workspace_root().unwrap();

        drop(stream);
        assert!(!root.exists());
    }

    #[test]
    fn test_content_disposition_is_sanitized() {
        let stream = ArchiveStream {
            file: None,
            workspace: None,
            cleanup: None,
            read_error: None,
            file_name: format!("{}.zip", sanitize_file_name("my \"shop\"")),
            len: 0,
        };
        assert_eq!(stream.content_disposition(), "attachment; filename=\"my__shop_.zip\"");
        assert!(stream.is_empty());
    }

    #[tokio::test]
    async fn test_package_failure_removes_workspace() {
        let temp_root = tempfile::tempdir().unwrap();
        let workspace = Workspace::create(temp_root.path()).await.unwrap();
        let root = workspace.root().to_path_buf();
        // A directory where the archive should go makes packaging fail after scaffolding
        std::fs::create_dir(workspace.archive_path()).unwrap();

        let request = ProjectRequest {
            classes: vec![ClassModel::new("order")],
            ..Default::default()
        };
        let err = generator(temp_root.path())
            .generate_in(workspace, &request)
            .await
            .unwrap_err();

        assert_eq!(err.phase, Phase::Package);
        assert!(!root.exists());
        assert!(std::fs::read_dir(temp_root.path()).unwrap().next().is_none());
    }
}
