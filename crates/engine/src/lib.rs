//! Vellum Engine - Shared template engine lifecycle.
//!
//! Owns the single build-time MiniJinja environment shared across all
//! transformed files, with lazy, idempotent initialization and one-time
//! filter registration.

mod environment;
mod error;
mod shared;

pub use environment::build_environment;
pub use error::{EngineError, Result};
pub use shared::SharedEngine;
