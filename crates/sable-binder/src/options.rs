//! Binder configuration.

use rustc_hash::FxHashSet;
use sable_registry::WellKnownType;

/// Names and switches the await binder works against.
///
/// ```
/// use sable_binder::BinderOptions;
///
/// let options = BinderOptions::default()
///     .with_awaiter_method("awaiter")
///     .with_defined_symbol("DEBUG");
///
/// assert_eq!(options.awaiter_method, "awaiter");
/// assert!(options.is_defined("DEBUG"));
/// ```
#[derive(Debug, Clone)]
pub struct BinderOptions {
    /// Method on the operand that produces the awaiter.
    pub awaiter_method: String,
    /// Boolean property on the awaiter reporting completion.
    pub completion_property: String,
    /// Method on the awaiter that yields the awaited value.
    pub result_method: String,
    /// Capability every awaiter must convert to.
    pub notify_capability: WellKnownType,
    pub allow_await_in_catch: bool,
    pub allow_await_in_finally: bool,
    /// Conditional-compilation symbols defined for this build.
    pub defined_symbols: FxHashSet<String>,
}

impl Default for BinderOptions {
    fn default() -> Self {
        Self {
            awaiter_method: "get_awaiter".to_string(),
            completion_property: "is_completed".to_string(),
            result_method: "get_result".to_string(),
            notify_capability: WellKnownType::NotifyCompletion,
            allow_await_in_catch: true,
            allow_await_in_finally: true,
            defined_symbols: FxHashSet::default(),
        }
    }
}

impl BinderOptions {
    pub fn with_awaiter_method(mut self, name: impl Into<String>) -> Self {
        self.awaiter_method = name.into();
        self
    }

    pub fn with_completion_property(mut self, name: impl Into<String>) -> Self {
        self.completion_property = name.into();
        self
    }

    pub fn with_result_method(mut self, name: impl Into<String>) -> Self {
        self.result_method = name.into();
        self
    }

    pub fn with_notify_capability(mut self, capability: WellKnownType) -> Self {
        self.notify_capability = capability;
        self
    }

    pub fn with_await_in_catch(mut self, allow: bool) -> Self {
        self.allow_await_in_catch = allow;
        self
    }

    pub fn with_await_in_finally(mut self, allow: bool) -> Self {
        self.allow_await_in_finally = allow;
        self
    }

    pub fn with_defined_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.defined_symbols.insert(symbol.into());
        self
    }

    pub fn is_defined(&self, symbol: &str) -> bool {
        self.defined_symbols.contains(symbol)
    }
}
