/// Once-per-project files: build descriptor, properties and entry point.

use crate::codegen::template::TemplateContext;
use crate::codegen::utils::{escape_xml, to_kebab_case, to_pascal_case};
use std::fmt;
use std::str::FromStr;

mod pom_xml;
mod application_properties;
mod application_java;

pub use pom_xml::render_pom_xml;
pub use application_properties::render_application_properties;
pub use application_java::{render_application_java, render_application_tests_java};

/// Suffix appended to the entry-point class name
pub const ENTRY_SUFFIX: &str = "Application";

/// Database flavour of the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DatabaseType {
    #[default]
    PostgreSQL,
    MySQL,
}

impl DatabaseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseType::PostgreSQL => "postgresql",
            DatabaseType::MySQL => "mysql",
        }
    }

    /// Maven coordinates of the JDBC driver
    pub fn driver_dependency(&self) -> (&'static str, &'static str) {
        match self {
            DatabaseType::PostgreSQL => ("org.postgresql", "postgresql"),
            DatabaseType::MySQL => ("com.mysql", "mysql-connector-j"),
        }
    }

    /// Placeholder JDBC URL for a database named after the project
    pub fn jdbc_url(&self, database: &str) -> String {
        match self {
            DatabaseType::PostgreSQL => format!("jdbc:postgresql://localhost:5432/{}", database),
            DatabaseType::MySQL => format!("jdbc:mysql://localhost:3306/{}", database),
        }
    }

    pub fn default_username(&self) -> &'static str {
        match self {
            DatabaseType::PostgreSQL => "postgres",
            DatabaseType::MySQL => "root",
        }
    }
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatabaseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgresql" | "postgres" | "pg" => Ok(DatabaseType::PostgreSQL),
            "mysql" => Ok(DatabaseType::MySQL),
            other => Err(format!(
                "Unsupported database type: '{}'. Supported types: postgresql, mysql",
                other
            )),
        }
    }
}

/// Names derived once per project
#[derive(Debug, Clone)]
pub struct ProjectContext {
    pub project_name: String,
    pub package_name: String,
    pub database: DatabaseType,
}

impl ProjectContext {
    pub fn new(project_name: &str, package_name: &str, database: DatabaseType) -> Self {
        Self {
            project_name: project_name.to_string(),
            package_name: package_name.to_string(),
            database,
        }
    }

    /// Maven artifactId and database name (`my-shop`)
    pub fn artifact_id(&self) -> String {
        to_kebab_case(&self.project_name)
    }

    /// Entry-point class name (`MyShopApplication`)
    pub fn entry_class(&self) -> String {
        format!("{}{}", to_pascal_case(&self.project_name), ENTRY_SUFFIX)
    }

    pub fn entry_file_name(&self) -> String {
        format!("{}.java", self.entry_class())
    }

    pub fn entry_test_file_name(&self) -> String {
        format!("{}Tests.java", self.entry_class())
    }

    pub fn template_context(&self) -> TemplateContext {
        let (driver_group, driver_artifact) = self.database.driver_dependency();
        let artifact_id = self.artifact_id();
        TemplateContext::new()
            .with("project_name", escape_xml(&self.project_name))
            .with("artifact_id", escape_xml(&artifact_id))
            .with("group_id", escape_xml(&self.package_name))
            .with("package_name", self.package_name.clone())
            .with("entry_class", self.entry_class())
            .with("driver_group", driver_group)
            .with("driver_artifact", driver_artifact)
            .with("jdbc_url", self.database.jdbc_url(&artifact_id))
            .with("db_username", self.database.default_username())
    }
}

/// Text of the once-per-project files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedProject {
    pub pom_xml: String,
    pub application_properties: String,
    pub application_java: String,
    pub application_tests_java: String,
}

pub fn render_project(context: &ProjectContext) -> RenderedProject {
    RenderedProject {
        pom_xml: render_pom_xml(context),
        application_properties: render_application_properties(context),
        application_java: render_application_java(context),
        application_tests_java: render_application_tests_java(context),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_type_parse() {
        assert_eq!("postgres".parse::<DatabaseType>().unwrap(), DatabaseType::PostgreSQL);
        assert_eq!("PG".parse::<DatabaseType>().unwrap(), DatabaseType::PostgreSQL);
        assert_eq!("MySQL".parse::<DatabaseType>().unwrap(), DatabaseType::MySQL);
        assert!("oracle".parse::<DatabaseType>().is_err());
        assert_eq!(DatabaseType::default(), DatabaseType::PostgreSQL);
    }

    #[test]
    fn test_project_names() {
        let context = ProjectContext::new("my shop", "com.acme.shop", DatabaseType::MySQL);
        assert_eq!(context.artifact_id(), "my-shop");
        assert_eq!(context.entry_class(), "MyShopApplication");
        assert_eq!(context.entry_file_name(), "MyShopApplication.java");
        assert_eq!(context.entry_test_file_name(), "MyShopApplicationTests.java");
    }

    #[test]
    fn test_render_project_is_deterministic() {
        let context = ProjectContext::new("demo", "com.example.demo", DatabaseType::PostgreSQL);
        assert_eq!(render_project(&context), render_project(&context));
    }
}
