//! MiniJinja environment construction.

use minijinja::value::Rest;
use minijinja::{AutoEscape, Environment, UndefinedBehavior, Value};
use vellum_core::{EngineOptions, Filter};

/// Builds a MiniJinja environment from engine options and registers every
/// configured filter onto it.
///
/// Construction is infallible: every option maps to a setter and filter
/// registration cannot fail.
pub fn build_environment(options: &EngineOptions) -> Environment<'static> {
    let mut env = Environment::new();

    if options.autoescape {
        env.set_auto_escape_callback(|_name| AutoEscape::Html);
    }
    env.set_trim_blocks(options.trim_blocks);
    env.set_lstrip_blocks(options.lstrip_blocks);
    env.set_keep_trailing_newline(options.keep_trailing_newline);
    env.set_undefined_behavior(if options.strict_variables {
        UndefinedBehavior::Strict
    } else {
        UndefinedBehavior::Lenient
    });

    for (name, filter) in options.filters.iter() {
        match filter {
            Filter::Function(func) => {
                let apply = func.callable();
                env.add_filter(name.to_string(), move |value: Value, args: Rest<Value>| {
                    apply(value, args.as_slice())
                });
            }
            Filter::Constant(constant) => {
                let constant = Value::from_serialize(constant);
                env.add_filter(name.to_string(), move |_value: Value| constant.clone());
            }
        }
    }

    env
}

#[cfg(test)]
mod tests {
    use super::*;
    use vellum_core::FilterSet;

    #[test]
    fn test_lenient_by_default() {
        let env = build_environment(&EngineOptions::default());
        let rendered = env.render_str("Hello {{ missing }}!", ()).unwrap();
        assert_eq!(rendered, "Hello !");
    }

    #[test]
    fn test_strict_variables_error_on_undefined() {
        let options = EngineOptions::new().with_strict_variables(true);
        let env = build_environment(&options);
        assert!(env.render_str("{{ missing }}", ()).is_err());
    }

    #[test]
    fn test_autoescape_html() {
        let options = EngineOptions::new().with_autoescape(true);
        let env = build_environment(&options);
        let rendered = env
            .render_str("{{ v }}", minijinja::context! { v => "<b>" })
            .unwrap();
        assert_eq!(rendered, "&lt;b&gt;");
    }

    #[test]
    fn test_function_filter_registration() {
        let options = EngineOptions::new().with_filter(
            "upper",
            Filter::function(
                |value, _args| Ok(Value::from(value.as_str().unwrap_or_default().to_uppercase())),
                "(value) => String(value).toUpperCase()",
            ),
        );
        let env = build_environment(&options);
        let rendered = env
            .render_str("{{ name | upper }}", minijinja::context! { name => "bob" })
            .unwrap();
        assert_eq!(rendered, "BOB");
    }

    #[test]
    fn test_constant_filter_registration() {
        let options = EngineOptions::new().with_filters(
            FilterSet::new().with("version", Filter::constant(serde_json::json!("1.2.3"))),
        );
        let env = build_environment(&options);
        let rendered = env
            .render_str("{{ anything | version }}", minijinja::context! { anything => 0 })
            .unwrap();
        assert_eq!(rendered, "1.2.3");
    }

    #[test]
    fn test_trim_blocks() {
        let options = EngineOptions::new().with_trim_blocks(true);
        let env = build_environment(&options);
        let rendered = env
            .render_str("{% if true %}\nyes{% endif %}", ())
            .unwrap();
        assert_eq!(rendered, "yes");
    }
}
