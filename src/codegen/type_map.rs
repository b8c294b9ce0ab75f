//! Abstract type names to Java type names.

/// Java type used for empty or missing type names
pub const DEFAULT_TYPE: &str = "String";

/// Recognized abstract names (lower-case) and their Java counterparts
const TYPE_TABLE: &[(&str, &str)] = &[
    ("number", "Double"),
    ("double", "Double"),
    ("float", "Float"),
    ("integer", "Integer"),
    ("int", "Integer"),
    ("long", "Long"),
    ("string", "String"),
    ("text", "String"),
    ("char", "Character"),
    ("character", "Character"),
    ("boolean", "Boolean"),
    ("bool", "Boolean"),
    ("date", "LocalDate"),
    ("datetime", "LocalDateTime"),
    ("timestamp", "LocalDateTime"),
    ("time", "LocalTime"),
    ("decimal", "BigDecimal"),
    ("bigdecimal", "BigDecimal"),
    ("undefined", "void"),
    ("void", "void"),
];

fn lookup(name: &str) -> Option<&'static str> {
    let key = name.trim().to_lowercase();
    TYPE_TABLE
        .iter()
        .find(|(abstract_name, _)| *abstract_name == key)
        .map(|(_, java)| *java)
}

/// Map an abstract type name to a Java type.
///
/// Total: empty input maps to [`DEFAULT_TYPE`], unknown names come back
/// unchanged so custom types reach the generated source verbatim.
pub fn map_type(name: &str) -> String {
    if name.trim().is_empty() {
        return DEFAULT_TYPE.to_string();
    }
    match lookup(name) {
        Some(java) => java.to_string(),
        None => name.to_string(),
    }
}

/// Whether the name is in the mapping table (empty counts as known)
pub fn is_known(name: &str) -> bool {
    name.trim().is_empty() || lookup(name).is_some()
}

/// Fully qualified import a mapped Java type needs, if any
pub fn java_import(java_type: &str) -> Option<&'static str> {
    match java_type {
        "LocalDate" => Some("java.time.LocalDate"),
        "LocalDateTime" => Some("java.time.LocalDateTime"),
        "LocalTime" => Some("java.time.LocalTime"),
        "BigDecimal" => Some("java.math.BigDecimal"),
        _ => None,
    }
}
