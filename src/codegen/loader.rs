//! Generation request loader.
//!
//! Loads a `ProjectRequest` from a JSON or YAML file. The format is picked
//! from the file extension: `.yaml`/`.yml` are YAML, anything else is JSON.

use crate::codegen::types::ProjectRequest;
use std::fs;
use std::path::Path;

/// Load a request from a file
///
/// # Example
///
/// ```ignore
/// use umlforge::codegen::load_request;
///
/// let request = load_request("config/examples/order-demo.json").unwrap();
/// ```
pub fn load_request<P: AsRef<Path>>(path: P) -> Result<ProjectRequest, String> {
    let path = path.as_ref();

    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );

    if is_yaml {
        parse_yaml(&content).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
    } else {
        parse_json(&content).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
    }
}

pub fn parse_json(content: &str) -> Result<ProjectRequest, String> {
    serde_json::from_str(content).map_err(|e| format!("Invalid JSON request: {}", e))
}

pub fn parse_yaml(content: &str) -> Result<ProjectRequest, String> {
    serde_yaml::from_str(content).map_err(|e| format!("Invalid YAML request: {}", e))
}
