//! Code generation framework for class models.
//!
//! This module turns class models (names, attribute tokens, method tokens)
//! into the files of a Maven / Spring Boot project.

pub mod types;
pub mod signature;
pub mod type_map;
pub mod template;
pub mod layers;
pub mod project;
pub mod scaffold;
pub mod loader;
pub mod utils;
pub mod fs_utils;

// Re-export key types
pub use types::{
    ClassModel, ClassNames, FieldDescriptor, MethodDescriptor, ParameterDescriptor, ProjectRequest,
    DEFAULT_PACKAGE_NAME, DEFAULT_PROJECT_NAME,
};
pub use signature::{parse_attribute, parse_method, Anomaly, Resolution};
pub use type_map::map_type;
pub use template::{Template, TemplateContext};
pub use layers::{render_class, ClassContext, Layer, RenderedClass};
pub use project::{render_project, DatabaseType, ProjectContext, RenderedProject};
pub use scaffold::{scaffold, ProjectLayout};
pub use loader::load_request;
