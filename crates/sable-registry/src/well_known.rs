//! Types addressed by fixed identity rather than lexical lookup.

use std::fmt;

use sable_core::TypeHash;

/// A type the binder resolves by a stable identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WellKnownType {
    /// Capability an awaiter implements to accept a continuation callback.
    NotifyCompletion,
    /// Variant of [`WellKnownType::NotifyCompletion`] that does not flow
    /// execution context.
    CriticalNotifyCompletion,
}

impl WellKnownType {
    /// Fully qualified name used for lookup.
    pub const fn qualified_name(self) -> &'static str {
        match self {
            WellKnownType::NotifyCompletion => "Sable::Async::NotifyCompletion",
            WellKnownType::CriticalNotifyCompletion => "Sable::Async::CriticalNotifyCompletion",
        }
    }

    pub fn type_hash(self) -> TypeHash {
        TypeHash::from_name(self.qualified_name())
    }
}

impl fmt::Display for WellKnownType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.qualified_name())
    }
}
