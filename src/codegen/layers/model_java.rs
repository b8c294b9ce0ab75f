/// Generate the JPA entity (model layer) of a class

use super::{ClassContext, KEY_FIELD};
use crate::codegen::signature;
use crate::codegen::template::Template;
use crate::codegen::type_map;
use crate::codegen::types::{FieldDescriptor, MethodDescriptor};
use crate::codegen::utils::capitalize_first;
use std::collections::BTreeSet;

const MODEL_TEMPLATE: Template = Template::new(
    r#"package {{base_package}}.model;

{{imports}}
@Entity
@Table(name = "{{group}}")
public class {{entity}} {

{{fields}}

{{methods}}    // Getters and Setters

{{accessors}}
}
"#,
);

/// Body marker of generated method stubs
pub const STUB_MARKER: &str = "// TODO: implement";

pub fn render_model(context: &ClassContext) -> String {
    let mut template_context = context.template_context();
    template_context.insert("imports", imports(context));
    template_context.insert("fields", fields_block(context));
    template_context.insert("methods", methods_block(&context.methods));
    template_context.insert("accessors", accessors_block(context));
    MODEL_TEMPLATE.render(&template_context)
}

fn imports(context: &ClassContext) -> String {
    let mut extra = BTreeSet::new();
    for field in &context.fields {
        if let Some(import) = type_map::java_import(&type_map::map_type(&field.declared_type)) {
            extra.insert(import);
        }
    }
    for method in &context.methods {
        if let Some(import) = type_map::java_import(&type_map::map_type(&method.return_type)) {
            extra.insert(import);
        }
        for param in signature::parse_parameters(&method.parameter_list) {
            if let Some(ty) = param.declared_type {
                if let Some(import) = type_map::java_import(&type_map::map_type(&ty)) {
                    extra.insert(import);
                }
            }
        }
    }

    let mut out = String::from("import javax.persistence.*;\n");
    if !extra.is_empty() {
        out.push('\n');
        for import in extra {
            out.push_str(&format!("import {};\n", import));
        }
    }
    out
}

fn key_annotations(context: &ClassContext) -> String {
    let mut out = String::from("    @Id\n");
    if context.key.is_generated() {
        out.push_str("    @GeneratedValue(strategy = GenerationType.IDENTITY)\n");
    }
    out
}

/// All `(identifier, java type)` pairs the entity stores, key first when synthesized
fn stored_fields(context: &ClassContext) -> Vec<(String, String)> {
    let mut stored = Vec::with_capacity(context.fields.len() + 1);
    if !context.key.declared {
        stored.push((KEY_FIELD.to_string(), context.key.java_type.clone()));
    }
    stored.extend(
        context
            .fields
            .iter()
            .map(|f: &FieldDescriptor| (f.identifier.clone(), type_map::map_type(&f.declared_type))),
    );
    stored
}

fn fields_block(context: &ClassContext) -> String {
    let mut lines = Vec::new();
    let mut key_done = false;

    for (identifier, java_type) in stored_fields(context) {
        let mut line = String::new();
        if identifier == KEY_FIELD && !key_done {
            line.push_str(&key_annotations(context));
            key_done = true;
        }
        line.push_str(&format!("    private {} {};", java_type, identifier));
        lines.push(line);
    }

    lines.join("\n")
}

fn parameter_signature(parameter_list: &str) -> String {
    signature::parse_parameters(parameter_list)
        .into_iter()
        .map(|p| match p.declared_type {
            Some(ty) => format!("{} {}", type_map::map_type(&ty), p.identifier),
            None => p.identifier,
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn methods_block(methods: &[MethodDescriptor]) -> String {
    if methods.is_empty() {
        return String::new();
    }

    let stubs: Vec<String> = methods
        .iter()
        .map(|m| {
            format!(
                "    public {} {}({}) {{\n        {} {}\n    }}",
                type_map::map_type(&m.return_type),
                m.identifier,
                parameter_signature(&m.parameter_list),
                STUB_MARKER,
                m.identifier
            )
        })
        .collect();

    format!("{}\n\n", stubs.join("\n\n"))
}

fn accessors_block(context: &ClassContext) -> String {
    stored_fields(context)
        .iter()
        .map(|(identifier, java_type)| {
            let suffix = capitalize_first(identifier);
            format!(
                "    public {ty} get{suffix}() {{\n        return {name};\n    }}\n\n    public void set{suffix}({ty} {name}) {{\n        this.{name} = {name};\n    }}",
                ty = java_type,
                suffix = suffix,
                name = identifier
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::types::{ClassModel, ClassNames};

    fn render(class: &ClassModel) -> String {
        let names = ClassNames::derive(class.canonical_name());
        render_model(&ClassContext::new(class, names, "com.example.demo"))
    }

    #[test]
    fn test_model_fields_and_accessors() {
        let class = ClassModel::new("order").with_attributes(["- id:number", "- total:number"]);
        let model = render(&class);

        assert!(model.contains("package com.example.demo.order.model;"));
        assert!(model.contains("@Table(name = \"order\")"));
        assert!(model.contains("public class ModelOrder {"));
        assert!(model.contains("    @Id\n    private Double id;"));
        assert!(!model.contains("@GeneratedValue"));
        assert!(model.contains("    private Double total;"));
        assert!(model.contains("public Double getTotal()"));
        assert!(model.contains("public void setTotal(Double total)"));
        assert_eq!(model.matches("private Double").count(), 2);
        assert!(!model.contains(STUB_MARKER));
    }

    #[test]
    fn test_model_synthesizes_generated_key() {
        let class = ClassModel::new("customer").with_attributes(["- name"]);
        let model = render(&class);

        assert!(model.contains(
            "    @Id\n    @GeneratedValue(strategy = GenerationType.IDENTITY)\n    private Long id;\n    private String name;"
        ));
        assert!(model.contains("public Long getId()"));
        assert!(model.contains("public String getName()"));
    }

    #[test]
    fn test_model_method_stubs() {
        let class = ClassModel::new("order").with_methods([
            "- place(qty:int, note):boolean",
            "- ()",
            "- refresh()",
        ]);
        let model = render(&class);

        assert!(model.contains("    public Boolean place(Integer qty, note) {\n        // TODO: implement place\n    }"));
        assert!(model.contains("    public void refresh() {"));
        assert_eq!(model.matches(STUB_MARKER).count(), 2);
    }

    #[test]
    fn test_model_imports_for_mapped_types() {
        let class = ClassModel::new("invoice")
            .with_attributes(["- issued:date", "- amount:decimal"])
            .with_methods(["- dueAt():datetime"]);
        let model = render(&class);

        assert!(model.contains(
            "import javax.persistence.*;\n\nimport java.math.BigDecimal;\nimport java.time.LocalDate;\nimport java.time.LocalDateTime;\n"
        ));
        assert!(model.contains("private LocalDate issued;"));
    }

    #[test]
    fn test_model_custom_type_passes_through() {
        let class = ClassModel::new("order").with_attributes(["- owner:Customer"]);
        let model = render(&class);
        assert!(model.contains("private Customer owner;"));
        assert!(model.contains("public Customer getOwner()"));
    }
}
