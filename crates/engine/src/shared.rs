//! The shared build-time engine handle.

use minijinja::Environment;
use once_cell::sync::OnceCell;
use serde::Serialize;
use vellum_core::EngineOptions;

use crate::environment::build_environment;
use crate::error::Result;

/// Lazily-initialized handle to the single build-time engine shared across
/// all transformed files.
///
/// The handle is an owned value injected into its consumers, not a hidden
/// module-level global. `ensure` is idempotent: the first call constructs
/// the environment from the options and registers every filter exactly
/// once; every later call returns the same instance untouched.
#[derive(Debug)]
pub struct SharedEngine {
    options: EngineOptions,
    cell: OnceCell<Environment<'static>>,
}

impl SharedEngine {
    /// Creates an uninitialized handle.
    pub fn new(options: EngineOptions) -> Self {
        Self {
            options,
            cell: OnceCell::new(),
        }
    }

    /// Returns the engine, constructing it on first use.
    pub fn ensure(&self) -> &Environment<'static> {
        self.cell.get_or_init(|| {
            tracing::debug!(filters = self.options.filters.len(), "initializing shared engine");
            build_environment(&self.options)
        })
    }

    /// Whether the engine has been constructed yet.
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Returns the options the engine is (or will be) built from.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Renders a template string against the shared engine.
    ///
    /// Initializes the engine first if no other entry point has done so;
    /// filter registration therefore always precedes the render.
    pub fn render<S: Serialize>(&self, template: &str, context: S) -> Result<String> {
        Ok(self.ensure().render_str(template, context)?)
    }
}
