/// Generate the REST controller of a class

use super::ClassContext;
use crate::codegen::template::Template;

// PUT only emits the lookup-then-save call pattern; copying request fields onto
// the stored entity is left to the generated project.
const CONTROLLER_TEMPLATE: Template = Template::new(
    r#"package {{base_package}}.controller;

import {{base_package}}.model.{{entity}};
import {{base_package}}.service.{{service}};
import org.springframework.beans.factory.annotation.Autowired;
import org.springframework.http.ResponseEntity;
import org.springframework.web.bind.annotation.*;
{{key_import}}
import java.util.List;

@RestController
@RequestMapping("/api/{{group}}")
public class {{controller}} {

    @Autowired
    private {{service}} service;

    @GetMapping
    public List<{{entity}}> getAll{{type_name}}s() {
        return service.findAll();
    }

    @GetMapping("/{id}")
    public ResponseEntity<{{entity}}> get{{type_name}}ById(@PathVariable {{key_type}} id) {
        return service.findById(id)
                .map(ResponseEntity::ok)
                .orElse(ResponseEntity.notFound().build());
    }

    @PostMapping
    public {{entity}} create{{type_name}}(@RequestBody {{entity}} {{variable}}) {
        return service.save({{variable}});
    }

    @PutMapping("/{id}")
    public ResponseEntity<{{entity}}> update{{type_name}}(@PathVariable {{key_type}} id, @RequestBody {{entity}} {{variable}}) {
        return service.findById(id)
                .map(existing{{type_name}} -> {
                    // TODO: copy fields from {{variable}} onto existing{{type_name}}
                    return ResponseEntity.ok(service.save(existing{{type_name}}));
                })
                .orElse(ResponseEntity.notFound().build());
    }

    @DeleteMapping("/{id}")
    public ResponseEntity<?> delete{{type_name}}(@PathVariable {{key_type}} id) {
        return service.findById(id)
                .map({{variable}} -> {
                    service.deleteById(id);
                    return ResponseEntity.ok().build();
                })
                .orElse(ResponseEntity.notFound().build());
    }
}
"#,
);

pub fn render_controller(context: &ClassContext) -> String {
    CONTROLLER_TEMPLATE.render(&context.template_context())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::types::{ClassModel, ClassNames};

    fn render(name: &str) -> String {
        let class = ClassModel::new(name);
        render_controller(&ClassContext::new(&class, ClassNames::derive(name), "com.example.demo"))
    }

    #[test]
    fn test_controller_rest_mapping() {
        let text = render("order");

        assert!(text.contains("@RequestMapping(\"/api/order\")"));
        assert!(text.contains("public class ControllerOrder {"));
        assert!(text.contains("@GetMapping\n    public List<ModelOrder> getAllOrders()"));
        assert!(text.contains("@GetMapping(\"/{id}\")"));
        assert!(text.contains("@PostMapping"));
        assert!(text.contains("@PutMapping(\"/{id}\")"));
        assert!(text.contains("@DeleteMapping(\"/{id}\")"));
        assert_eq!(text.matches("ResponseEntity.notFound().build()").count(), 3);
        assert!(!text.contains("{{"));
    }

    #[test]
    fn test_controller_path_variable_braces_survive() {
        // `{id}` is Spring syntax, not a template placeholder
        let text = render("invoice");
        assert_eq!(text.matches("\"/{id}\"").count(), 3);
    }
}
