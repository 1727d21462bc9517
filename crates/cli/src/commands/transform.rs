//! Transform command implementation.

use std::path::Path;

use miette::{IntoDiagnostic, Result, WrapErr};
use vellum_core::{EngineOptions, PluginConfig};
use vellum_plugin::{BundlerPlugin, TemplatePlugin};

use crate::commands::parse_static_data;
use crate::output;

/// Prints the module the plugin would generate for a template file.
pub async fn execute(file: &Path, data: Option<&str>, options: EngineOptions) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read {}", file.display()))?;

    let mut config = PluginConfig::new().with_engine_options(options);
    if let Some(raw) = data {
        config = config.with_static_data(parse_static_data(raw)?);
    }

    let plugin = TemplatePlugin::new(config);
    let id = file.to_string_lossy();

    match plugin.transform(&content, &id).await {
        Some(result) => {
            if let Some(diagnostic) = &result.diagnostic {
                output::warning(&format!("degraded output: {diagnostic}"));
            }
            print!("{}", result.code);
            Ok(())
        }
        None => {
            output::warning(&format!(
                "{} is not a recognized template file; no transform applied",
                file.display()
            ));
            Ok(())
        }
    }
}
