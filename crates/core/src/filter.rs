//! Custom rendering filters.
//!
//! A filter is applied to two independent engine instances: the shared
//! build-time engine (by direct registration) and the virtual engine that
//! lives inside generated runtime code (by emitting a registration
//! statement). A function filter therefore carries both a build-time
//! callable and a self-contained JavaScript source fragment; the fragment
//! must not close over external state, since nothing outside its own text
//! crosses the build/runtime boundary.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use minijinja::Value;

/// Result of applying a filter callable.
pub type FilterResult = Result<Value, minijinja::Error>;

type FilterCallable = Arc<dyn Fn(Value, &[Value]) -> FilterResult + Send + Sync>;

/// A named custom rendering filter.
#[derive(Clone)]
pub enum Filter {
    /// A callable filter: build-time callable plus runtime source fragment.
    Function(FilterFunction),

    /// A constant value; renders as itself regardless of input.
    Constant(serde_json::Value),
}

/// A callable filter with both of its representations.
#[derive(Clone)]
pub struct FilterFunction {
    /// Build-time callable, registered on the shared engine.
    apply: FilterCallable,

    /// Self-contained JavaScript function source, emitted into the
    /// virtual engine module.
    source: String,
}

impl Filter {
    /// Creates a function filter from a build-time callable and its
    /// runtime source fragment.
    pub fn function<F>(apply: F, source: impl Into<String>) -> Self
    where
        F: Fn(Value, &[Value]) -> FilterResult + Send + Sync + 'static,
    {
        Self::Function(FilterFunction {
            apply: Arc::new(apply),
            source: source.into(),
        })
    }

    /// Creates a constant filter from a JSON value.
    pub fn constant(value: serde_json::Value) -> Self {
        Self::Constant(value)
    }
}

impl FilterFunction {
    /// Applies the build-time callable.
    pub fn call(&self, value: Value, args: &[Value]) -> FilterResult {
        (self.apply)(value, args)
    }

    /// Returns a clone of the build-time callable for registration.
    pub fn callable(&self) -> impl Fn(Value, &[Value]) -> FilterResult + Send + Sync + use<> {
        let apply = Arc::clone(&self.apply);
        move |value, args| apply(value, args)
    }

    /// Returns the runtime source fragment.
    pub fn runtime_source(&self) -> &str {
        &self.source
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Function(func) => f
                .debug_struct("Function")
                .field("source", &func.source)
                .finish_non_exhaustive(),
            Filter::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
        }
    }
}

/// An ordered set of named filters.
///
/// Ordering is by name, so registration order (and the generated
/// registration statements) is deterministic for a given configuration.
#[derive(Clone, Debug, Default)]
pub struct FilterSet {
    filters: BTreeMap<String, Filter>,
}

impl FilterSet {
    /// Creates an empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a filter, replacing any existing filter with the same name.
    pub fn insert(&mut self, name: impl Into<String>, filter: Filter) {
        self.filters.insert(name.into(), filter);
    }

    /// Adds a filter, builder style.
    pub fn with(mut self, name: impl Into<String>, filter: Filter) -> Self {
        self.insert(name, filter);
        self
    }

    /// Looks up a filter by name.
    pub fn get(&self, name: &str) -> Option<&Filter> {
        self.filters.get(name)
    }

    /// Iterates over filters in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Filter)> {
        self.filters.iter().map(|(name, filter)| (name.as_str(), filter))
    }

    /// Number of filters in the set.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}
