//! Engine-module command implementation.

use miette::Result;
use vellum_core::EngineOptions;
use vellum_plugin::codegen;

/// Prints the virtual engine module generated for the given options.
pub fn execute(options: EngineOptions) -> Result<()> {
    print!("{}", codegen::virtual_module(&options));
    Ok(())
}
