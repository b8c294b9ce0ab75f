/// Per-class layer rendering (model, repository, service, controller).
///
/// Every name a layer needs is derived once in [`ClassContext`] and shared by
/// all four renders, so the files of one class always agree on identifiers,
/// packages and the key type.

use crate::codegen::signature;
use crate::codegen::template::TemplateContext;
use crate::codegen::type_map;
use crate::codegen::types::{ClassModel, ClassNames, FieldDescriptor, MethodDescriptor};

mod model_java;
mod repository_java;
mod service_java;
mod controller_java;

pub use model_java::render_model;
pub use repository_java::render_repository;
pub use service_java::render_service;
pub use controller_java::render_controller;

/// Name of the identifier field every entity is keyed by
pub const KEY_FIELD: &str = "id";

/// Key type used when the class declares no `id` attribute
pub const DEFAULT_KEY_TYPE: &str = "Long";

/// One of the four generated files of a class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Model,
    Repository,
    Service,
    Controller,
}

impl Layer {
    pub const ALL: [Layer; 4] = [Layer::Model, Layer::Repository, Layer::Service, Layer::Controller];

    /// Sub-package and directory name
    pub fn as_str(&self) -> &'static str {
        match self {
            Layer::Model => "model",
            Layer::Repository => "repository",
            Layer::Service => "service",
            Layer::Controller => "controller",
        }
    }

    /// Prefix of the generated Java type (`Model`, `Repository`, ...)
    pub fn type_prefix(&self) -> &'static str {
        match self {
            Layer::Model => "Model",
            Layer::Repository => "Repository",
            Layer::Service => "Service",
            Layer::Controller => "Controller",
        }
    }

    pub fn type_name(&self, class_type: &str) -> String {
        format!("{}{}", self.type_prefix(), class_type)
    }

    pub fn file_name(&self, class_type: &str) -> String {
        format!("{}.java", self.type_name(class_type))
    }
}

/// Key field of an entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyField {
    pub java_type: String,
    /// `false` when the key was synthesized because no `id` attribute exists
    pub declared: bool,
}

impl KeyField {
    /// Only integral keys can be generated by the database
    pub fn is_generated(&self) -> bool {
        matches!(self.java_type.as_str(), "Long" | "Integer")
    }
}

/// Parsed and named view of one class, shared by all layer renders
#[derive(Debug, Clone)]
pub struct ClassContext {
    pub names: ClassNames,
    pub package_name: String,
    pub fields: Vec<FieldDescriptor>,
    pub methods: Vec<MethodDescriptor>,
    pub key: KeyField,
}

impl ClassContext {
    pub fn new(class: &ClassModel, names: ClassNames, package_name: &str) -> Self {
        let fields: Vec<FieldDescriptor> = class
            .attributes
            .iter()
            .map(|token| signature::parse_attribute(token))
            .collect();
        let methods: Vec<MethodDescriptor> = class
            .methods
            .iter()
            .filter_map(|token| signature::parse_method(token))
            .collect();

        let key = match fields.iter().find(|f| f.identifier == KEY_FIELD) {
            Some(field) => KeyField {
                java_type: type_map::map_type(&field.declared_type),
                declared: true,
            },
            None => KeyField {
                java_type: DEFAULT_KEY_TYPE.to_string(),
                declared: false,
            },
        };

        Self {
            names,
            package_name: package_name.to_string(),
            fields,
            methods,
            key,
        }
    }

    /// `<package>.<group>`
    pub fn base_package(&self) -> String {
        format!("{}.{}", self.package_name, self.names.group)
    }

    pub fn layer_type(&self, layer: Layer) -> String {
        layer.type_name(&self.names.type_name)
    }

    /// Import line for the key type, or an empty string
    fn key_import(&self) -> String {
        match type_map::java_import(&self.key.java_type) {
            Some(import) => format!("import {};\n", import),
            None => String::new(),
        }
    }

    /// Values every layer template can use
    pub fn template_context(&self) -> TemplateContext {
        TemplateContext::new()
            .with("base_package", self.base_package())
            .with("type_name", self.names.type_name.clone())
            .with("group", self.names.group.clone())
            .with("variable", self.names.group.clone())
            .with("entity", self.layer_type(Layer::Model))
            .with("repository", self.layer_type(Layer::Repository))
            .with("service", self.layer_type(Layer::Service))
            .with("controller", self.layer_type(Layer::Controller))
            .with("key_type", self.key.java_type.clone())
            .with("key_import", self.key_import())
    }
}

/// Text of the four layer files of one class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedClass {
    pub model: String,
    pub repository: String,
    pub service: String,
    pub controller: String,
}

impl RenderedClass {
    pub fn get(&self, layer: Layer) -> &str {
        match layer {
            Layer::Model => &self.model,
            Layer::Repository => &self.repository,
            Layer::Service => &self.service,
            Layer::Controller => &self.controller,
        }
    }
}

/// Render every layer of a class
pub fn render_class(class: &ClassModel, names: &ClassNames, package_name: &str) -> RenderedClass {
    let context = ClassContext::new(class, names.clone(), package_name);
    render_context(&context)
}

/// Render every layer from an already derived context
pub fn render_context(context: &ClassContext) -> RenderedClass {
    RenderedClass {
        model: render_model(context),
        repository: render_repository(context),
        service: render_service(context),
        controller: render_controller(context),
    }
}
