/// Generate the Spring Boot entry point and its smoke test

use super::ProjectContext;
use crate::codegen::template::Template;

const APPLICATION_TEMPLATE: Template = Template::new(
    r#"package {{package_name}};

import org.springframework.boot.SpringApplication;
import org.springframework.boot.autoconfigure.SpringBootApplication;

@SpringBootApplication
public class {{entry_class}} {

    public static void main(String[] args) {
        SpringApplication.run({{entry_class}}.class, args);
    }
}
"#,
);

const APPLICATION_TESTS_TEMPLATE: Template = Template::new(
    r#"package {{package_name}};

import org.junit.jupiter.api.Test;
import org.springframework.boot.test.context.SpringBootTest;

@SpringBootTest
class {{entry_class}}Tests {

    @Test
    void contextLoads() {
    }
}
"#,
);

pub fn render_application_java(context: &ProjectContext) -> String {
    APPLICATION_TEMPLATE.render(&context.template_context())
}

pub fn render_application_tests_java(context: &ProjectContext) -> String {
    APPLICATION_TESTS_TEMPLATE.render(&context.template_context())
}
