//! Parser for the compact attribute and method syntax of class models.
//!
//! Tokens look like `"- total:number"` and `"- place(qty:int):boolean"`. The
//! leading two characters are a bullet marker and are always discarded.
//!
//! Malformed input is never an error. Each anomaly the parser can meet has one
//! fixed resolution, listed in [`Anomaly::resolution`]:
//!
//! | anomaly                 | resolution             |
//! |-------------------------|------------------------|
//! | missing attribute type  | default to `string`    |
//! | empty method signature  | omit the method        |
//! | missing return type     | default to `void`      |
//! | unknown type name       | pass through unchanged |
//!
//! No other validation happens: identifiers are not checked for legal
//! characters and duplicates are kept.

use crate::codegen::type_map;
use crate::codegen::types::{FieldDescriptor, MethodDescriptor, ParameterDescriptor};

/// Number of characters stripped from the front of every token
pub const MARKER_LEN: usize = 2;

/// A recoverable oddity in an attribute or method token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anomaly {
    MissingAttributeType,
    EmptyMethodSignature,
    MissingReturnType,
    UnknownType,
}

/// What the parser does about an [`Anomaly`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Substitute this abstract type name
    Default(&'static str),
    /// Drop the token from the output
    Omit,
    /// Keep the value exactly as written
    PassThrough,
}

impl Anomaly {
    pub const ALL: [Anomaly; 4] = [
        Anomaly::MissingAttributeType,
        Anomaly::EmptyMethodSignature,
        Anomaly::MissingReturnType,
        Anomaly::UnknownType,
    ];

    pub const fn resolution(self) -> Resolution {
        match self {
            Anomaly::MissingAttributeType => Resolution::Default("string"),
            Anomaly::EmptyMethodSignature => Resolution::Omit,
            Anomaly::MissingReturnType => Resolution::Default("void"),
            Anomaly::UnknownType => Resolution::PassThrough,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Anomaly::MissingAttributeType => "attribute has no type",
            Anomaly::EmptyMethodSignature => "method signature is empty",
            Anomaly::MissingReturnType => "method has no return type",
            Anomaly::UnknownType => "type is not in the mapping table",
        }
    }
}

fn default_for(anomaly: Anomaly) -> &'static str {
    match anomaly.resolution() {
        Resolution::Default(name) => name,
        Resolution::Omit | Resolution::PassThrough => "",
    }
}

/// Remove the bullet marker
pub fn strip_marker(token: &str) -> &str {
    match token.char_indices().nth(MARKER_LEN) {
        Some((idx, _)) => &token[idx..],
        None => "",
    }
}

/// Parse one attribute token into a field descriptor
pub fn parse_attribute(token: &str) -> FieldDescriptor {
    let body = strip_marker(token);
    let (identifier, declared_type) = match body.split_once(':') {
        Some((name, ty)) => (name.trim(), ty.trim()),
        None => (body.trim(), ""),
    };

    let declared_type = if declared_type.is_empty() {
        tracing::debug!("Attribute '{}' has no type, defaulting", identifier);
        default_for(Anomaly::MissingAttributeType)
    } else {
        declared_type
    };

    FieldDescriptor {
        identifier: identifier.to_string(),
        declared_type: declared_type.to_string(),
    }
}

/// Split a method body into its signature and (possibly empty) return type
fn split_method(body: &str) -> (&str, &str) {
    if let Some(close) = body.rfind(')') {
        let (signature, rest) = body.split_at(close + 1);
        let rest = rest.trim_start();
        let return_type = rest.strip_prefix(':').unwrap_or(rest);
        (signature, return_type.trim())
    } else {
        match body.split_once(':') {
            Some((signature, return_type)) => (signature, return_type.trim()),
            None => (body, ""),
        }
    }
}

/// Parse one method token; `None` when the signature carries no identifier
pub fn parse_method(token: &str) -> Option<MethodDescriptor> {
    let (signature, return_type) = split_method(strip_marker(token));

    let (identifier, parameter_list) = match signature.split_once('(') {
        Some((name, params)) => {
            let params = match params.rfind(')') {
                Some(close) => &params[..close],
                None => params,
            };
            (name.trim(), params.trim())
        }
        None => (signature.trim(), ""),
    };

    if identifier.is_empty() {
        tracing::debug!("Dropping method token with empty signature: {:?}", token);
        return None;
    }

    let return_type = if return_type.is_empty() {
        default_for(Anomaly::MissingReturnType)
    } else {
        return_type
    };

    Some(MethodDescriptor {
        identifier: identifier.to_string(),
        parameter_list: parameter_list.to_string(),
        return_type: return_type.to_string(),
    })
}

/// Split a parameter list such as `"qty:int, note"` into descriptors
pub fn parse_parameters(parameter_list: &str) -> Vec<ParameterDescriptor> {
    parameter_list
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| match p.split_once(':') {
            Some((name, ty)) => ParameterDescriptor {
                identifier: name.trim().to_string(),
                declared_type: Some(ty.trim().to_string()),
            },
            None => ParameterDescriptor {
                identifier: p.to_string(),
                declared_type: None,
            },
        })
        .collect()
}

/// Anomalies an attribute token triggers, in the order they are resolved
pub fn attribute_anomalies(token: &str) -> Vec<Anomaly> {
    let body = strip_marker(token);
    let mut anomalies = Vec::new();
    match body.split_once(':') {
        Some((_, ty)) if !ty.trim().is_empty() => {
            if !type_map::is_known(ty) {
                anomalies.push(Anomaly::UnknownType);
            }
        }
        _ => anomalies.push(Anomaly::MissingAttributeType),
    }
    anomalies
}

/// Anomalies a method token triggers, in the order they are resolved
pub fn method_anomalies(token: &str) -> Vec<Anomaly> {
    let (_, return_type) = split_method(strip_marker(token));
    let Some(method) = parse_method(token) else {
        return vec![Anomaly::EmptyMethodSignature];
    };

    let mut anomalies = Vec::new();
    if return_type.is_empty() {
        anomalies.push(Anomaly::MissingReturnType);
    } else if !type_map::is_known(&method.return_type) {
        anomalies.push(Anomaly::UnknownType);
    }

    let unknown_param = parse_parameters(&method.parameter_list)
        .iter()
        .filter_map(|p| p.declared_type.as_deref())
        .any(|ty| !type_map::is_known(ty));
    if unknown_param && !anomalies.contains(&Anomaly::UnknownType) {
        anomalies.push(Anomaly::UnknownType);
    }

    anomalies
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_table() {
        assert_eq!(
            Anomaly::MissingAttributeType.resolution(),
            Resolution::Default("string")
        );
        assert_eq!(Anomaly::EmptyMethodSignature.resolution(), Resolution::Omit);
        assert_eq!(
            Anomaly::MissingReturnType.resolution(),
            Resolution::Default("void")
        );
        assert_eq!(Anomaly::UnknownType.resolution(), Resolution::PassThrough);
    }

    #[test]
    fn test_strip_marker() {
        assert_eq!(strip_marker("- id:number"), "id:number");
        assert_eq!(strip_marker("+ id"), "id");
        assert_eq!(strip_marker("-"), "");
        assert_eq!(strip_marker(""), "");
        assert_eq!(strip_marker("••name"), "name");
    }

    #[test]
    fn test_parse_attribute() {
        let field = parse_attribute("- total : number ");
        assert_eq!(field.identifier, "total");
        assert_eq!(field.declared_type, "number");
    }

    #[test]
    fn test_parse_attribute_missing_type_defaults_to_string() {
        for token in ["- name", "- name:", "- name:   ", "-", ""] {
            let field = parse_attribute(token);
            assert_eq!(field.declared_type, "string", "token {:?}", token);
        }
        assert_eq!(parse_attribute("- name").identifier, "name");
    }

    #[test]
    fn test_parse_attribute_is_not_strict() {
        // Identifiers are not validated; the text is carried as-is
        let field = parse_attribute("- 9 lives!:Cat");
        assert_eq!(field.identifier, "9 lives!");
        assert_eq!(field.declared_type, "Cat");

        // Only the first colon splits
        let field = parse_attribute("- when:date:time");
        assert_eq!(field.identifier, "when");
        assert_eq!(field.declared_type, "date:time");
    }

    #[test]
    fn test_parse_method() {
        let method = parse_method("- place(qty:int, note:string):boolean").unwrap();
        assert_eq!(method.identifier, "place");
        assert_eq!(method.parameter_list, "qty:int, note:string");
        assert_eq!(method.return_type, "boolean");
    }

    #[test]
    fn test_parse_method_without_parens() {
        let method = parse_method("- total:number").unwrap();
        assert_eq!(method.identifier, "total");
        assert_eq!(method.parameter_list, "");
        assert_eq!(method.return_type, "number");
    }

    #[test]
    fn test_parse_method_missing_return_type() {
        let method = parse_method("- refresh()").unwrap();
        assert_eq!(method.return_type, "void");

        let method = parse_method("- refresh() :").unwrap();
        assert_eq!(method.return_type, "void");
    }

    #[test]
    fn test_parse_method_empty_signature_is_dropped() {
        for token in ["- ()", "- () :undefined", "- ():void", "- ", "-", "", "-    :number"] {
            assert!(parse_method(token).is_none(), "token {:?}", token);
        }
    }

    #[test]
    fn test_parse_parameters() {
        let params = parse_parameters("qty:int,  note , ");
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].identifier, "qty");
        assert_eq!(params[0].declared_type.as_deref(), Some("int"));
        assert_eq!(params[1].identifier, "note");
        assert_eq!(params[1].declared_type, None);
        assert!(parse_parameters("").is_empty());
    }

    #[test]
    fn test_anomaly_reports() {
        assert!(attribute_anomalies("- id:number").is_empty());
        assert_eq!(
            attribute_anomalies("- id"),
            vec![Anomaly::MissingAttributeType]
        );
        assert_eq!(attribute_anomalies("- owner:Customer"), vec![Anomaly::UnknownType]);

        assert_eq!(method_anomalies("- () :undefined"), vec![Anomaly::EmptyMethodSignature]);
        assert_eq!(method_anomalies("- go()"), vec![Anomaly::MissingReturnType]);
        assert_eq!(method_anomalies("- go(c:Customer):void"), vec![Anomaly::UnknownType]);
        assert!(method_anomalies("- go():void").is_empty());
    }
}
