//! Vellum Core - Configuration and filter model for the Vellum template plugin.

mod config;
mod filter;

pub use config::{EngineOptions, PluginConfig, StaticData};
pub use filter::{Filter, FilterFunction, FilterResult, FilterSet};
