//! Render command implementation.

use std::path::Path;

use miette::{IntoDiagnostic, Result, WrapErr};
use vellum_core::{EngineOptions, StaticData};
use vellum_engine::SharedEngine;

use crate::commands::parse_static_data;

/// Renders a template file eagerly and prints the result.
pub fn execute(file: &Path, data: Option<&str>, options: EngineOptions) -> Result<()> {
    let template = std::fs::read_to_string(file)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read {}", file.display()))?;

    let context = match data {
        Some(raw) => parse_static_data(raw)?,
        None => StaticData::new(),
    };

    let engine = SharedEngine::new(options);
    let rendered = engine
        .render(&template, &context)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to render {}", file.display()))?;

    print!("{rendered}");
    Ok(())
}
