//! Type definitions for generation requests.
//!
//! These types represent the inbound request payload (`ProjectRequest`,
//! `ClassModel`) and the descriptors derived from it during code generation.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Project name used when the request omits one
pub const DEFAULT_PROJECT_NAME: &str = "demo";

/// Package name used when the request omits one
pub const DEFAULT_PACKAGE_NAME: &str = "com.example.demo";

/// One generation request, consumed once and never persisted
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub package_name: Option<String>,
    #[serde(default)]
    pub classes: Vec<ClassModel>,
}

impl ProjectRequest {
    /// Project name, falling back to [`DEFAULT_PROJECT_NAME`] when absent or blank
    pub fn project_name(&self) -> &str {
        non_blank(self.project_name.as_deref()).unwrap_or(DEFAULT_PROJECT_NAME)
    }

    /// Dotted package name, falling back to [`DEFAULT_PACKAGE_NAME`] when absent or blank
    pub fn package_name(&self) -> &str {
        non_blank(self.package_name.as_deref()).unwrap_or(DEFAULT_PACKAGE_NAME)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Input description of one generated type
///
/// `name` is an ordered list of fragments; only the first one is used.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClassModel {
    pub name: Vec<String>,
    #[serde(default)]
    pub attributes: Vec<String>,
    #[serde(default)]
    pub methods: Vec<String>,
}

impl ClassModel {
    pub fn new(name: &str) -> Self {
        Self {
            name: vec![name.to_string()],
            ..Default::default()
        }
    }

    pub fn with_attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes = attributes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = methods.into_iter().map(Into::into).collect();
        self
    }

    /// Canonical identifier (`name[0]`, trimmed)
    pub fn canonical_name(&self) -> &str {
        self.name.first().map(|n| n.trim()).unwrap_or("")
    }
}

/// Parsed attribute token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub identifier: String,
    /// Raw type, before mapping
    pub declared_type: String,
}

/// Parsed method token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub identifier: String,
    pub parameter_list: String,
    pub return_type: String,
}

/// One `name:type` entry of a method parameter list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDescriptor {
    pub identifier: String,
    /// `None` when the entry carried no `:` and is emitted verbatim
    pub declared_type: Option<String>,
}

/// Names derived once per class and shared by every layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNames {
    /// Capitalized type identifier (`Order`)
    pub type_name: String,
    /// Lower-cased sub-package and directory name (`order`)
    pub group: String,
}

impl ClassNames {
    /// Derive names from a canonical class name without collision handling
    pub fn derive(canonical: &str) -> Self {
        Self {
            type_name: crate::codegen::utils::capitalize_first(canonical),
            group: canonical.to_lowercase(),
        }
    }

    /// Assign names to every class of a request, in order.
    ///
    /// A class whose group is already taken gets the smallest numeric suffix
    /// (starting at 2) that makes it unique, on both the type name and the group.
    pub fn assign_all(classes: &[ClassModel]) -> Vec<ClassNames> {
        let mut taken: HashSet<String> = HashSet::new();
        let mut assigned = Vec::with_capacity(classes.len());

        for class in classes {
            let base = ClassNames::derive(class.canonical_name());
            let mut names = base.clone();
            let mut suffix = 2;
            while taken.contains(&names.group) {
                names = ClassNames {
                    type_name: format!("{}{}", base.type_name, suffix),
                    group: format!("{}{}", base.group, suffix),
                };
                suffix += 1;
            }
            taken.insert(names.group.clone());
            assigned.push(names);
        }

        assigned
    }
}
