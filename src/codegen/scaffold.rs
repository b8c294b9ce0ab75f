//! Project scaffolding: lays out the Maven tree inside a workspace and writes
//! every generated file.
//!
//! Output for a request with N classes is the four once-per-project files plus
//! N×4 layer files. The function returns only after every write has finished,
//! which is the barrier the packager relies on.

use crate::codegen::fs_utils::{self, join_segment};
use crate::codegen::layers::{self, ClassContext, Layer};
use crate::codegen::project::{self, DatabaseType, ProjectContext};
use crate::codegen::types::{ClassNames, ProjectRequest};
use crate::codegen::utils::package_segments;
use crate::error::FilesystemError;
use std::path::{Path, PathBuf};

pub const SOURCE_ROOT: &str = "src/main/java";
pub const RESOURCE_ROOT: &str = "src/main/resources";
pub const TEST_SOURCE_ROOT: &str = "src/test/java";
pub const TEST_RESOURCE_ROOT: &str = "src/test/resources";

pub const BUILD_DESCRIPTOR: &str = "pom.xml";
pub const PROPERTIES_FILE: &str = "application.properties";

/// Number of files written once per project regardless of the class count
pub const PROJECT_FILE_COUNT: usize = 4;

/// Directory layout derived from the workspace root and the package name
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    pub root: PathBuf,
    /// Package name with empty segments removed
    pub package_name: String,
    pub package_dir: PathBuf,
    pub test_package_dir: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: &Path, package_name: &str) -> Result<Self, FilesystemError> {
        let segments = package_segments(package_name);
        if segments.is_empty() {
            return Err(FilesystemError::InvalidPathSegment {
                context: "package name",
                segment: package_name.to_string(),
            });
        }

        let mut package_dir = root.join(SOURCE_ROOT);
        let mut test_package_dir = root.join(TEST_SOURCE_ROOT);
        for segment in &segments {
            package_dir = join_segment(&package_dir, segment, "package segment")?;
            test_package_dir = join_segment(&test_package_dir, segment, "package segment")?;
        }

        Ok(Self {
            root: root.to_path_buf(),
            package_name: segments.join("."),
            package_dir,
            test_package_dir,
        })
    }

    pub fn resource_dir(&self) -> PathBuf {
        self.root.join(RESOURCE_ROOT)
    }

    pub fn test_resource_dir(&self) -> PathBuf {
        self.root.join(TEST_RESOURCE_ROOT)
    }

    /// `<package dir>/<group>`
    pub fn class_dir(&self, names: &ClassNames) -> Result<PathBuf, FilesystemError> {
        join_segment(&self.package_dir, &names.group, "class name")
    }

    /// Entry point and its test, named after the project
    pub fn entry_paths(&self, context: &ProjectContext) -> Result<(PathBuf, PathBuf), FilesystemError> {
        Ok((
            join_segment(&self.package_dir, &context.entry_file_name(), "project name")?,
            join_segment(&self.test_package_dir, &context.entry_test_file_name(), "project name")?,
        ))
    }

    pub fn layer_path(class_dir: &Path, names: &ClassNames, layer: Layer) -> PathBuf {
        class_dir
            .join(layer.as_str())
            .join(layer.file_name(&names.type_name))
    }
}

/// Populate `workspace` with the project described by `request`.
///
/// All request-derived directory names are checked before the first write.
/// Returns the paths of every file written.
pub async fn scaffold(
    workspace: &Path,
    request: &ProjectRequest,
    database: DatabaseType,
) -> Result<Vec<PathBuf>, FilesystemError> {
    let layout = ProjectLayout::new(workspace, request.package_name())?;
    let project = ProjectContext::new(request.project_name(), &layout.package_name, database);
    let entry_paths = layout.entry_paths(&project)?;

    let names = ClassNames::assign_all(&request.classes);
    let class_dirs = names
        .iter()
        .map(|n| layout.class_dir(n))
        .collect::<Result<Vec<_>, _>>()?;

    for dir in [
        &layout.package_dir,
        &layout.test_package_dir,
        &layout.resource_dir(),
        &layout.test_resource_dir(),
    ] {
        fs_utils::create_dir_all(dir).await?;
    }

    let mut written = write_project_files(&layout, &project, entry_paths).await?;

    for ((class, names), class_dir) in request.classes.iter().zip(&names).zip(&class_dirs) {
        let context = ClassContext::new(class, names.clone(), &layout.package_name);
        written.extend(write_class_files(&context, class_dir).await?);
        tracing::debug!("Scaffolded class {} in {}", names.type_name, class_dir.display());
    }

    tracing::info!(
        "Scaffolded project '{}' ({} classes, {} files)",
        request.project_name(),
        request.classes.len(),
        written.len()
    );

    Ok(written)
}

async fn write_project_files(
    layout: &ProjectLayout,
    context: &ProjectContext,
    (entry_path, entry_test_path): (PathBuf, PathBuf),
) -> Result<Vec<PathBuf>, FilesystemError> {
    let rendered = project::render_project(context);

    let pom_path = layout.root.join(BUILD_DESCRIPTOR);
    let properties_path = layout.resource_dir().join(PROPERTIES_FILE);

    tokio::try_join!(
        fs_utils::write_file(&pom_path, &rendered.pom_xml),
        fs_utils::write_file(&properties_path, &rendered.application_properties),
        fs_utils::write_file(&entry_path, &rendered.application_java),
        fs_utils::write_file(&entry_test_path, &rendered.application_tests_java),
    )?;

    Ok(vec![pom_path, properties_path, entry_path, entry_test_path])
}

async fn write_class_files(
    context: &ClassContext,
    class_dir: &Path,
) -> Result<Vec<PathBuf>, FilesystemError> {
    let rendered = layers::render_context(context);
    let paths: Vec<PathBuf> = Layer::ALL
        .iter()
        .map(|layer| ProjectLayout::layer_path(class_dir, &context.names, *layer))
        .collect();

    tokio::try_join!(
        fs_utils::write_file(&paths[0], rendered.get(Layer::ALL[0])),
        fs_utils::write_file(&paths[1], rendered.get(Layer::ALL[1])),
        fs_utils::write_file(&paths[2], rendered.get(Layer::ALL[2])),
        fs_utils::write_file(&paths[3], rendered.get(Layer::ALL[3])),
    )?;

    Ok(paths)
}
