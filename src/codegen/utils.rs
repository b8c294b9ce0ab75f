//! Utility functions for code generation.

use convert_case::{Case, Casing};

/// Upper-case the first character and leave the rest untouched
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert a string to PascalCase
pub fn to_pascal_case(s: &str) -> String {
    s.to_case(Case::Pascal)
}

/// Convert a string to kebab-case
pub fn to_kebab_case(s: &str) -> String {
    s.to_case(Case::Kebab)
}

/// Split a dotted package name into its non-empty segments
pub fn package_segments(package_name: &str) -> Vec<&str> {
    package_name
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Escape text for use inside XML element content
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Replace everything outside `[A-Za-z0-9._-]` so the name is safe in a header
pub fn sanitize_file_name(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("order"), "Order");
        assert_eq!(capitalize_first("orderItem"), "OrderItem");
        assert_eq!(capitalize_first("éclair"), "Éclair");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_case_conversions() {
        assert_eq!(to_pascal_case("demo"), "Demo");
        assert_eq!(to_pascal_case("order_service"), "OrderService");
        assert_eq!(to_kebab_case("My Shop"), "my-shop");
    }

    #[test]
    fn test_package_segments() {
        assert_eq!(package_segments("com.example.demo"), vec!["com", "example", "demo"]);
        assert_eq!(package_segments("com..example."), vec!["com", "example"]);
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("demo"), "demo");
        assert_eq!(sanitize_file_name("my shop/\"x\""), "my_shop__x_");
    }
}
