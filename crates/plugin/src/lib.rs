//! Vellum Plugin - Bundler plugin that compiles `.jinja` template files
//! into executable JavaScript modules.
//!
//! Files with static data configured are rendered eagerly at build time;
//! without static data the generated module defers rendering to a shared
//! virtual engine module executed by the host at runtime.

pub mod codegen;
mod host;
mod plugin;

pub use host::{BundlerPlugin, Enforce, TransformDiagnostic, TransformOutput};
pub use plugin::{TemplatePlugin, should_handle};

/// Recognized template file extension; matched case-insensitively.
pub const TEMPLATE_EXTENSION: &str = ".jinja";

/// Public identifier of the synthetic engine module.
pub const VIRTUAL_MODULE_ID: &str = "virtual:vellum-engine";

/// Resolved internal identifier. The NUL prefix is the bundler convention
/// for ids that must never resolve to a real file.
pub const RESOLVED_VIRTUAL_MODULE_ID: &str = "\0virtual:vellum-engine";
