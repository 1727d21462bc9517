//! CLI command implementations.

pub mod engine_module;
pub mod render;
pub mod transform;

use miette::{IntoDiagnostic, Result, WrapErr};
use vellum_core::StaticData;

/// Parses a `--data` argument into render variables.
pub(crate) fn parse_static_data(raw: &str) -> Result<StaticData> {
    serde_json::from_str(raw)
        .into_diagnostic()
        .wrap_err("--data must be a JSON object mapping names to values")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static_data_object() {
        let data = parse_static_data(r#"{"name": "World", "count": 3}"#).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data["name"], serde_json::json!("World"));
    }

    #[test]
    fn test_parse_static_data_rejects_non_objects() {
        assert!(parse_static_data("[1, 2]").is_err());
        assert!(parse_static_data("not json").is_err());
    }
}
