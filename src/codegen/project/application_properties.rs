/// Generate application.properties with placeholder connection settings

use super::ProjectContext;
use crate::codegen::template::Template;

const PROPERTIES_TEMPLATE: Template = Template::new(
    r#"spring.application.name={{artifact_id}}
server.port=8080

spring.datasource.url={{jdbc_url}}
spring.datasource.username={{db_username}}
spring.datasource.password=changeme

spring.jpa.hibernate.ddl-auto=update
spring.jpa.show-sql=true
"#,
);

pub fn render_application_properties(context: &ProjectContext) -> String {
    PROPERTIES_TEMPLATE.render(&context.template_context())
}
