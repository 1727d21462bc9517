//! Host plugin protocol.
//!
//! Mirrors the hook surface of a bundler's plugin container. `None` means
//! "no opinion": the host moves on to the next plugin. Hooks run on the
//! host's event loop; only `transform` suspends.

use async_trait::async_trait;
use miette::Diagnostic;
use thiserror::Error;

/// Hook ordering relative to other plugins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Enforce {
    /// Run before normal plugins. Template files must be intercepted
    /// before any other content-type transform claims them.
    Pre,

    /// Default ordering.
    #[default]
    Normal,

    /// Run after normal plugins.
    Post,
}

/// Structured diagnostic for a recovered render failure.
///
/// Carried alongside the fallback code so the host can distinguish
/// degraded output from a successful transform without inspecting the
/// generated text.
#[derive(Debug, Clone, Error, Diagnostic)]
#[error("{id}: {message}")]
#[diagnostic(code(vellum::render_failed))]
pub struct TransformDiagnostic {
    /// Identifier of the file that failed to render.
    pub id: String,

    /// Render error message, including nested causes.
    pub message: String,
}

impl TransformDiagnostic {
    /// Creates a diagnostic for a file identifier and error message.
    pub fn new(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
        }
    }
}

/// Result of a claimed transform.
#[derive(Debug, Clone)]
pub struct TransformOutput {
    /// Generated module source handed back to the host.
    pub code: String,

    /// Present when `code` is fallback output for a failed render.
    pub diagnostic: Option<TransformDiagnostic>,
}

impl TransformOutput {
    /// Successful transform output.
    pub fn code(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            diagnostic: None,
        }
    }

    /// Degraded output: fallback code plus the diagnostic describing why.
    pub fn degraded(code: impl Into<String>, diagnostic: TransformDiagnostic) -> Self {
        Self {
            code: code.into(),
            diagnostic: Some(diagnostic),
        }
    }

    /// Whether this output is a render-failure fallback.
    pub fn is_degraded(&self) -> bool {
        self.diagnostic.is_some()
    }
}

/// Hook implementations a plugin registers with the host.
#[async_trait]
pub trait BundlerPlugin: Send + Sync {
    /// Plugin name, for host-side reporting.
    fn name(&self) -> &'static str;

    /// Hook ordering.
    fn enforce(&self) -> Enforce {
        Enforce::Normal
    }

    /// Called once when the dev server is configured.
    fn configure_server(&self) {}

    /// Maps a public module identifier to its resolved form.
    fn resolve_id(&self, id: &str) -> Option<String> {
        let _ = id;
        None
    }

    /// Produces source text for a resolved identifier.
    fn load(&self, resolved_id: &str) -> Option<String> {
        let _ = resolved_id;
        None
    }

    /// Transforms file content into module source.
    async fn transform(&self, content: &str, id: &str) -> Option<TransformOutput> {
        let _ = (content, id);
        None
    }
}
