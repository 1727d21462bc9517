//! Plugin configuration.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::filter::{Filter, FilterSet};

/// Variables for eager (build-time) rendering.
///
/// Presence selects the static strategy: `Some(StaticData::new())` renders
/// eagerly with zero variables, while `None` defers rendering to runtime.
/// The two are never interchangeable.
pub type StaticData = BTreeMap<String, serde_json::Value>;

/// Engine tuning options, forwarded to both the shared build-time engine
/// and the virtual engine constructed inside generated runtime code.
///
/// The boolean knobs serialize into the virtual module's constructor
/// literal; filters are emitted as registration statements instead.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineOptions {
    /// HTML auto-escaping. Defaults to off.
    pub autoescape: bool,

    /// Remove the newline after a block tag. Defaults to off.
    pub trim_blocks: bool,

    /// Strip leading whitespace before a block tag. Defaults to off.
    pub lstrip_blocks: bool,

    /// Keep the trailing newline of a template. Defaults to off.
    pub keep_trailing_newline: bool,

    /// Error on undefined variables instead of rendering them empty.
    /// Defaults to off.
    pub strict_variables: bool,

    /// Custom rendering filters. Defaults to none.
    #[serde(skip)]
    pub filters: FilterSet,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            autoescape: false,
            trim_blocks: false,
            lstrip_blocks: false,
            keep_trailing_newline: false,
            strict_variables: false,
            filters: FilterSet::new(),
        }
    }
}

impl EngineOptions {
    /// Creates options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables HTML auto-escaping.
    pub fn with_autoescape(mut self, enabled: bool) -> Self {
        self.autoescape = enabled;
        self
    }

    /// Enables or disables block-tag newline trimming.
    pub fn with_trim_blocks(mut self, enabled: bool) -> Self {
        self.trim_blocks = enabled;
        self
    }

    /// Enables or disables leading-whitespace stripping before block tags.
    pub fn with_lstrip_blocks(mut self, enabled: bool) -> Self {
        self.lstrip_blocks = enabled;
        self
    }

    /// Enables or disables keeping the trailing newline.
    pub fn with_keep_trailing_newline(mut self, enabled: bool) -> Self {
        self.keep_trailing_newline = enabled;
        self
    }

    /// Enables or disables strict undefined-variable handling.
    pub fn with_strict_variables(mut self, enabled: bool) -> Self {
        self.strict_variables = enabled;
        self
    }

    /// Adds a single filter.
    pub fn with_filter(mut self, name: impl Into<String>, filter: Filter) -> Self {
        self.filters.insert(name, filter);
        self
    }

    /// Replaces the filter set.
    pub fn with_filters(mut self, filters: FilterSet) -> Self {
        self.filters = filters;
        self
    }
}

/// Immutable plugin configuration, supplied once at construction.
#[derive(Clone, Debug, Default)]
pub struct PluginConfig {
    /// Options for both engine instances.
    engine_options: EngineOptions,

    /// Variables for eager rendering; absence selects the deferred
    /// strategy.
    static_data: Option<StaticData>,
}

impl PluginConfig {
    /// Creates a configuration with default options and no static data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the engine options.
    pub fn with_engine_options(mut self, options: EngineOptions) -> Self {
        self.engine_options = options;
        self
    }

    /// Supplies static data, selecting the eager rendering strategy.
    ///
    /// An empty map still selects eager rendering; only a configuration
    /// that never calls this method defers rendering to runtime.
    pub fn with_static_data(mut self, data: StaticData) -> Self {
        self.static_data = Some(data);
        self
    }

    /// Returns the engine options.
    pub fn engine_options(&self) -> &EngineOptions {
        &self.engine_options
    }

    /// Returns the static data, if the eager strategy was selected.
    pub fn static_data(&self) -> Option<&StaticData> {
        self.static_data.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_serialize_camel_case() {
        let json = serde_json::to_string(&EngineOptions::default()).unwrap();
        assert!(json.contains("\"autoescape\":false"));
        assert!(json.contains("\"trimBlocks\":false"));
        assert!(json.contains("\"strictVariables\":false"));
        assert!(!json.contains("filters"));
    }

    #[test]
    fn test_empty_static_data_is_not_absent() {
        let eager = PluginConfig::new().with_static_data(StaticData::new());
        let deferred = PluginConfig::new();

        assert!(eager.static_data().is_some());
        assert!(eager.static_data().unwrap().is_empty());
        assert!(deferred.static_data().is_none());
    }

    #[test]
    fn test_builder_chain() {
        let config = PluginConfig::new().with_engine_options(
            EngineOptions::new()
                .with_strict_variables(true)
                .with_filter("upper", Filter::constant(serde_json::json!(null))),
        );

        assert!(config.engine_options().strict_variables);
        assert_eq!(config.engine_options().filters.len(), 1);
    }
}
