//! JavaScript module generation.
//!
//! Every string embedded in generated source goes through JSON
//! serialization, so template text and error messages can never break out
//! of their literals.

use vellum_core::{EngineOptions, Filter};

use crate::VIRTUAL_MODULE_ID;

/// Marker prefixing the default export of a failure fallback module.
pub const ERROR_MARKER: &str = "Error processing template: ";

/// npm package the generated code imports the runtime engine from.
pub const ENGINE_PACKAGE: &str = "minijinja-js";

fn json_string(text: &str) -> String {
    serde_json::to_string(text).expect("string serialization cannot fail")
}

/// Module exporting an eagerly rendered string. The original template text
/// is gone; callers cannot re-render with different data.
pub fn static_module(rendered: &str) -> String {
    format!("export default {};\n", json_string(rendered))
}

/// Fallback module for a failed eager render.
pub fn error_module(message: &str) -> String {
    format!(
        "export default {};\n",
        json_string(&format!("{ERROR_MARKER}{message}"))
    )
}

/// Module deferring rendering to the virtual engine module. Exports a
/// default async render function plus the raw template text.
pub fn deferred_module(template: &str) -> String {
    format!(
        r#"import {{ renderTemplate }} from {virtual_id};

const templateContent = {content};

export default async function render(context = {{}}) {{
  return await renderTemplate(templateContent, context);
}}

export const template = templateContent;
"#,
        virtual_id = json_string(VIRTUAL_MODULE_ID),
        content = json_string(template),
    )
}

/// Source of the virtual engine module: a brand-new engine instance built
/// from the serialized options, one registration statement per filter, the
/// shared render function, and the engine itself for direct use.
///
/// Pure in the options: unchanged options produce byte-identical source.
pub fn virtual_module(options: &EngineOptions) -> String {
    let options_literal =
        serde_json::to_string(options).expect("engine options are plain booleans");

    let mut source = format!(
        r#"import {{ Environment }} from {package};

const engine = new Environment({options_literal});
"#,
        package = json_string(ENGINE_PACKAGE),
    );

    for (name, filter) in options.filters.iter() {
        let statement = match filter {
            Filter::Function(func) => format!(
                "engine.addFilter({}, {});\n",
                json_string(name),
                func.runtime_source()
            ),
            Filter::Constant(value) => format!(
                "engine.addFilter({}, () => {});\n",
                json_string(name),
                serde_json::to_string(value).expect("JSON value serialization cannot fail")
            ),
        };
        source.push_str(&statement);
    }

    source.push_str(
        r#"
export async function renderTemplate(templateContent, context = {}) {
  return await engine.renderStr(templateContent, context);
}

export { engine };
"#,
    );

    source
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::Value;
    use vellum_core::FilterSet;

    #[test]
    fn test_static_module_escapes_content() {
        let module = static_module("a \"quoted\"\nline");
        assert_eq!(module, "export default \"a \\\"quoted\\\"\\nline\";\n");
    }

    #[test]
    fn test_error_module_carries_marker() {
        let module = error_module("boom");
        assert!(module.starts_with("export default \"Error processing template: boom"));
    }

    #[test]
    fn test_deferred_module_shape() {
        let module = deferred_module("Hello {{ name }}");
        assert!(module.contains("import { renderTemplate } from \"virtual:vellum-engine\";"));
        assert!(module.contains("const templateContent = \"Hello {{ name }}\";"));
        assert!(module.contains("export default async function render(context = {}) {"));
        assert!(module.contains("export const template = templateContent;"));
    }

    #[test]
    fn test_virtual_module_registers_filters() {
        let options = EngineOptions::new().with_filters(
            FilterSet::new()
                .with(
                    "upper",
                    vellum_core::Filter::function(
                        |value: Value, _args: &[Value]| Ok(value),
                        "(value) => String(value).toUpperCase()",
                    ),
                )
                .with("version", vellum_core::Filter::constant(serde_json::json!("1.2.3"))),
        );

        let module = virtual_module(&options);
        assert!(module.contains("import { Environment } from \"minijinja-js\";"));
        assert!(module.contains("const engine = new Environment({\"autoescape\":false"));
        assert!(module.contains(
            "engine.addFilter(\"upper\", (value) => String(value).toUpperCase());"
        ));
        assert!(module.contains("engine.addFilter(\"version\", () => \"1.2.3\");"));
        assert!(module.contains("export { engine };"));
    }

    #[test]
    fn test_virtual_module_is_deterministic() {
        let options = EngineOptions::new().with_trim_blocks(true);
        assert_eq!(virtual_module(&options), virtual_module(&options));
    }
}
