//! # umlforge: class models to Spring Boot projects
//!
//! umlforge takes a list of class models and produces a ready-to-build Maven
//! project (model, repository, service and controller per class, plus a build
//! descriptor, properties and an entry point), delivered as one zip archive.
//!
//! ## Features
//!
//! - **Lenient signature parsing**: compact `"- name:type"` attribute and
//!   `"- name(params):type"` method tokens, with a fixed default/omit policy
//!   for malformed input instead of errors
//! - **Type mapping**: abstract names (`number`, `boolean`, `date`, ...) to Java
//!   types, unknown names passed through verbatim
//! - **Per-request workspaces**: every request builds in its own temporary
//!   directory which is removed on success and on failure
//! - **Streaming**: the archive is read from disk and the workspace is cleaned
//!   up once the stream is finished
//!
//! ## Example request
//!
//! ```json
//! {
//!   "projectName": "demo",
//!   "packageName": "com.example.demo",
//!   "classes": [
//!     {
//!       "name": ["order"],
//!       "attributes": ["- id:number", "- total:number"],
//!       "methods": ["- place(qty:int):boolean"]
//!     }
//!   ]
//! }
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use tokio::io::AsyncReadExt;
//! use umlforge::{Generator, GeneratorConfig};
//!
//! let request = umlforge::codegen::load_request("request.json")?;
//! let mut archive = Generator::new(GeneratorConfig::default()).generate(&request).await?;
//! let mut bytes = Vec::new();
//! archive.read_to_end(&mut bytes).await?;
//! ```

pub mod error;

// Code generation framework
pub mod codegen;

// Per-request lifecycle
pub mod workspace;
pub mod packager;
pub mod orchestrator;

// Re-export key types
pub use error::{ArchiveError, FilesystemError, GenerationCause, GenerationError, Phase};
pub use codegen::{ClassModel, DatabaseType, ProjectRequest};
pub use orchestrator::{ArchiveStream, Generator, GeneratorConfig, ARCHIVE_CONTENT_TYPE};
pub use workspace::Workspace;
