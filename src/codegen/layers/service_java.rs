/// Generate the service layer of a class
///
/// Always four operations delegating to the repository: list-all,
/// find-by-id, save and delete-by-id.

use super::ClassContext;
use crate::codegen::template::Template;

const SERVICE_TEMPLATE: Template = Template::new(
    r#"package {{base_package}}.service;

import {{base_package}}.model.{{entity}};
import {{base_package}}.repository.{{repository}};
import org.springframework.beans.factory.annotation.Autowired;
import org.springframework.stereotype.Service;
{{key_import}}
import java.util.List;
import java.util.Optional;

@Service
public class {{service}} {

    @Autowired
    private {{repository}} repository;

    public List<{{entity}}> findAll() {
        return repository.findAll();
    }

    public Optional<{{entity}}> findById({{key_type}} id) {
        return repository.findById(id);
    }

    public {{entity}} save({{entity}} {{variable}}) {
        return repository.save({{variable}});
    }

    public void deleteById({{key_type}} id) {
        repository.deleteById(id);
    }
}
"#,
);

pub fn render_service(context: &ClassContext) -> String {
    SERVICE_TEMPLATE.render(&context.template_context())
}
