/// Generate the Spring Data repository of a class

use super::ClassContext;
use crate::codegen::template::Template;

// CRUD operations come from JpaRepository; the interface stays empty.
const REPOSITORY_TEMPLATE: Template = Template::new(
    r#"package {{base_package}}.repository;

import {{base_package}}.model.{{entity}};
import org.springframework.data.jpa.repository.JpaRepository;
import org.springframework.stereotype.Repository;
{{key_import}}
@Repository
public interface {{repository}} extends JpaRepository<{{entity}}, {{key_type}}> {
}
"#,
);

pub fn render_repository(context: &ClassContext) -> String {
    REPOSITORY_TEMPLATE.render(&context.template_context())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::types::{ClassModel, ClassNames};

    #[test]
    fn test_repository_binds_entity_and_key() {
        let class = ClassModel::new("order");
        let context = ClassContext::new(&class, ClassNames::derive("order"), "com.example.demo");
        let text = render_repository(&context);

        assert_eq!(
            text,
            "package com.example.demo.order.repository;\n\n\
             import com.example.demo.order.model.ModelOrder;\n\
             import org.springframework.data.jpa.repository.JpaRepository;\n\
             import org.springframework.stereotype.Repository;\n\n\
             @Repository\n\
             public interface RepositoryOrder extends JpaRepository<ModelOrder, Long> {\n\
             }\n"
        );
    }

    #[test]
    fn test_repository_imports_key_type() {
        let class = ClassModel::new("ledger").with_attributes(["- id:decimal"]);
        let context = ClassContext::new(&class, ClassNames::derive("ledger"), "com.acme");
        let text = render_repository(&context);

        assert!(text.contains("import java.math.BigDecimal;\n\n@Repository"));
        assert!(text.contains("JpaRepository<ModelLedger, BigDecimal>"));
    }
}
