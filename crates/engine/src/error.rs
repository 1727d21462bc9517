//! Engine error types.

use thiserror::Error;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Error type for engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Template parse or render failure.
    #[error("Template render failed: {0}")]
    Render(#[from] minijinja::Error),
}

impl EngineError {
    /// Full error message including nested causes.
    ///
    /// MiniJinja keeps the interesting detail (line numbers, the failing
    /// expression) in the error source chain; fallback module output wants
    /// the whole chain on one line.
    pub fn detail(&self) -> String {
        let EngineError::Render(err) = self;
        let mut message = err.to_string();
        let mut source = std::error::Error::source(err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}
