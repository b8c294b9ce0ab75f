//! Named-placeholder templates for generated source files.
//!
//! A template is plain target-language text with `{{name}}` placeholders.
//! Rendering is a pure function of the template and a [`TemplateContext`];
//! placeholders without a value are left in place so a missing key shows up
//! in the output instead of silently vanishing.

use indexmap::IndexMap;
use regex::{Captures, Regex};
use std::sync::OnceLock;

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| {
        Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("placeholder pattern is valid")
    })
}

/// Values substituted into a [`Template`]
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    values: IndexMap<&'static str, String>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &'static str, value: impl Into<String>) {
        self.values.insert(key, value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

/// Static template text
#[derive(Debug, Clone, Copy)]
pub struct Template {
    source: &'static str,
}

impl Template {
    pub const fn new(source: &'static str) -> Self {
        Self { source }
    }

    /// Substitute every placeholder that has a value in `context`
    pub fn render(&self, context: &TemplateContext) -> String {
        placeholder_regex()
            .replace_all(self.source, |caps: &Captures<'_>| match context.get(&caps[1]) {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }

    /// Placeholder names in order of first appearance
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Vec::new();
        for caps in placeholder_regex().captures_iter(self.source) {
            if let Some(m) = caps.get(1) {
                let name = m.as_str();
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_named_values() {
        let template = Template::new("package {{package}};\n\npublic class {{ name }} {}\n");
        let context = TemplateContext::new()
            .with("package", "com.example")
            .with("name", "Order");

        assert_eq!(
            template.render(&context),
            "package com.example;\n\npublic class Order {}\n"
        );
    }

    #[test]
    fn test_render_repeats_placeholder() {
        let template = Template::new("{{a}}-{{a}}");
        let context = TemplateContext::new().with("a", "x");
        assert_eq!(template.render(&context), "x-x");
    }

    #[test]
    fn test_missing_value_left_in_place() {
        let template = Template::new("Hello {{who}}");
        assert_eq!(template.render(&TemplateContext::new()), "Hello {{who}}");
    }

    #[test]
    fn test_java_braces_untouched() {
        let template = Template::new("class A {\n    void f() {}\n}}");
        assert_eq!(template.render(&TemplateContext::new()), "class A {\n    void f() {}\n}}");
    }

    #[test]
    fn test_values_are_not_reexpanded() {
        let template = Template::new("{{a}}");
        let context = TemplateContext::new().with("a", "{{b}}").with("b", "nope");
        assert_eq!(template.render(&context), "{{b}}");
    }

    #[test]
    fn test_placeholders() {
        let template = Template::new("{{x}} {{y}} {{x}}");
        assert_eq!(template.placeholders(), vec!["x", "y"]);
    }
}
