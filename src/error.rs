//! Error types for the generation pipeline.
//!
//! Parsing anomalies never show up here: they are absorbed by the leniency
//! policy in [`crate::codegen::signature`]. Everything below is fatal to the
//! request that raised it.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Directory or file creation failure while building a workspace
#[derive(Debug, Error)]
pub enum FilesystemError {
    #[error("failed to create workspace under {path}: {source}")]
    CreateWorkspace {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A name taken from the request cannot be used as a single directory name
    #[error("invalid {context} '{segment}': must be a single non-empty path component")]
    InvalidPathSegment {
        context: &'static str,
        segment: String,
    },
}

/// Compression or archive stream failure
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("archive I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to walk workspace: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("archive task did not complete: {0}")]
    Task(String),
}

/// Pipeline phase in which a request failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    CreateWorkspace,
    Scaffold,
    Package,
    Stream,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::CreateWorkspace => "create-workspace",
            Phase::Scaffold => "scaffold",
            Phase::Package => "package",
            Phase::Stream => "stream",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First fatal cause of a failed request
#[derive(Debug, Error)]
pub enum GenerationCause {
    #[error(transparent)]
    Filesystem(#[from] FilesystemError),

    #[error(transparent)]
    Archive(#[from] ArchiveError),
}

/// Error surfaced to the caller of [`crate::Generator::generate`]
#[derive(Debug, Error)]
#[error("generation failed during {phase}: {cause}")]
pub struct GenerationError {
    pub phase: Phase,
    #[source]
    pub cause: GenerationCause,
}

impl GenerationError {
    pub fn new(phase: Phase, cause: impl Into<GenerationCause>) -> Self {
        Self {
            phase,
            cause: cause.into(),
        }
    }
}
