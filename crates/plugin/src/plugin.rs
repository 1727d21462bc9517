//! The template plugin: transform routing and the virtual module provider.

use async_trait::async_trait;
use vellum_core::PluginConfig;
use vellum_engine::SharedEngine;

use crate::codegen;
use crate::host::{BundlerPlugin, Enforce, TransformDiagnostic, TransformOutput};
use crate::{RESOLVED_VIRTUAL_MODULE_ID, TEMPLATE_EXTENSION, VIRTUAL_MODULE_ID};

/// Whether a file identifier names a template this plugin handles.
///
/// Case-insensitive suffix match on the raw identifier.
pub fn should_handle(id: &str) -> bool {
    let bytes = id.as_bytes();
    let ext = TEMPLATE_EXTENSION.as_bytes();
    bytes.len() >= ext.len() && bytes[bytes.len() - ext.len()..].eq_ignore_ascii_case(ext)
}

/// Bundler plugin compiling template files into executable modules.
///
/// Owns the shared build-time engine handle; the engine is constructed at
/// most once, on the server-configured hook or the first transform,
/// whichever comes first.
pub struct TemplatePlugin {
    /// Immutable configuration supplied at construction.
    config: PluginConfig,

    /// Shared engine for eager rendering.
    engine: SharedEngine,
}

impl TemplatePlugin {
    /// Creates the plugin from its configuration.
    pub fn new(config: PluginConfig) -> Self {
        let engine = SharedEngine::new(config.engine_options().clone());
        Self { config, engine }
    }

    /// Returns the plugin configuration.
    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    /// Returns the shared engine handle.
    pub fn engine(&self) -> &SharedEngine {
        &self.engine
    }
}

#[async_trait]
impl BundlerPlugin for TemplatePlugin {
    fn name(&self) -> &'static str {
        "vellum"
    }

    fn enforce(&self) -> Enforce {
        Enforce::Pre
    }

    fn configure_server(&self) {
        // Eager initialization; later transforms reuse the instance.
        self.engine.ensure();
    }

    fn resolve_id(&self, id: &str) -> Option<String> {
        (id == VIRTUAL_MODULE_ID).then(|| RESOLVED_VIRTUAL_MODULE_ID.to_string())
    }

    fn load(&self, resolved_id: &str) -> Option<String> {
        (resolved_id == RESOLVED_VIRTUAL_MODULE_ID)
            .then(|| codegen::virtual_module(self.config.engine_options()))
    }

    async fn transform(&self, content: &str, id: &str) -> Option<TransformOutput> {
        if !should_handle(id) {
            return None;
        }

        // Initialization and filter registration precede any render.
        self.engine.ensure();

        match self.config.static_data() {
            Some(data) => Some(match self.engine.render(content, data) {
                Ok(rendered) => TransformOutput::code(codegen::static_module(&rendered)),
                Err(err) => {
                    let message = err.detail();
                    tracing::error!(id, error = %message, "template render failed");
                    let diagnostic = TransformDiagnostic::new(id, message.clone());
                    TransformOutput::degraded(codegen::error_module(&message), diagnostic)
                }
            }),
            // No render happens here; failures surface at runtime inside
            // the host-executed module.
            None => Some(TransformOutput::code(codegen::deferred_module(content))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_handle_matches_extension() {
        assert!(should_handle("page.jinja"));
        assert!(should_handle("src/deep/path/page.jinja"));
        assert!(should_handle("PAGE.JINJA"));
        assert!(should_handle("page.Jinja"));
    }

    #[test]
    fn test_should_handle_declines_everything_else() {
        assert!(!should_handle("page.html"));
        assert!(!should_handle("page.jinja.bak"));
        assert!(!should_handle("jinja"));
        assert!(!should_handle(""));
    }

    #[test]
    fn test_resolve_id_only_matches_public_id() {
        let plugin = TemplatePlugin::new(PluginConfig::new());
        assert_eq!(
            plugin.resolve_id(VIRTUAL_MODULE_ID).as_deref(),
            Some(RESOLVED_VIRTUAL_MODULE_ID)
        );
        assert_eq!(plugin.resolve_id("virtual:other"), None);
        assert_eq!(plugin.resolve_id(RESOLVED_VIRTUAL_MODULE_ID), None);
    }

    #[test]
    fn test_load_only_matches_resolved_id() {
        let plugin = TemplatePlugin::new(PluginConfig::new());
        assert!(plugin.load(RESOLVED_VIRTUAL_MODULE_ID).is_some());
        assert_eq!(plugin.load(VIRTUAL_MODULE_ID), None);
        assert_eq!(plugin.load("src/page.jinja"), None);
    }

    #[test]
    fn test_load_is_referentially_transparent() {
        let plugin = TemplatePlugin::new(PluginConfig::new());
        assert_eq!(
            plugin.load(RESOLVED_VIRTUAL_MODULE_ID),
            plugin.load(RESOLVED_VIRTUAL_MODULE_ID)
        );
    }

    #[test]
    fn test_configure_server_initializes_engine() {
        let plugin = TemplatePlugin::new(PluginConfig::new());
        assert!(!plugin.engine().is_initialized());
        plugin.configure_server();
        assert!(plugin.engine().is_initialized());
        // Idempotent on repeat.
        plugin.configure_server();
        assert!(plugin.engine().is_initialized());
    }
}
