//! Binding context for await expressions.
//!
//! The enclosing binder builds one [`BindingContext`] per scope and passes it
//! down explicitly. Contexts are `Copy`; entering a nested region derives a
//! new context instead of mutating the current one, so independent subtrees
//! can be bound on different threads.

use bitflags::bitflags;
use sable_core::DataType;

bitflags! {
    /// Positional restrictions in effect at the current binding position.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct BinderFlags: u8 {
        /// Inside an unsafe block or unsafe member.
        const UNSAFE_REGION = 1 << 0;
        /// Unsafe region explicitly permits suspension.
        const ALLOW_AWAIT_IN_UNSAFE = 1 << 1;
        /// Inside the body of a lock statement.
        const IN_LOCK_BODY = 1 << 2;
        /// Inside the filter expression of a catch clause.
        const IN_CATCH_FILTER = 1 << 3;
        const IN_CATCH_BLOCK = 1 << 4;
        const IN_FINALLY_BLOCK = 1 << 5;
    }
}

/// Syntactic form of an anonymous function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnonymousFunctionKind {
    Lambda,
    AnonymousMethod,
}

impl AnonymousFunctionKind {
    /// Display form used in diagnostics.
    pub fn display(self) -> &'static str {
        match self {
            AnonymousFunctionKind::Lambda => "lambda expression",
            AnonymousFunctionKind::AnonymousMethod => "anonymous method",
        }
    }
}

/// The construct whose body contains the await.
#[derive(Debug, Clone, PartialEq)]
pub enum EnclosingUnit {
    /// Field initializer, attribute argument, top-level statement and so on.
    NotMethod { description: String },
    Method {
        name: String,
        is_async: bool,
        /// `void` when the method declares no return value.
        return_type: DataType,
    },
    AnonymousFunction {
        kind: AnonymousFunctionKind,
        is_async: bool,
        /// Synthesized by the compiler, e.g. for a query clause.
        implicitly_generated: bool,
    },
}

impl EnclosingUnit {
    pub fn not_method(description: impl Into<String>) -> Self {
        EnclosingUnit::NotMethod {
            description: description.into(),
        }
    }

    pub fn async_method(name: impl Into<String>, return_type: DataType) -> Self {
        EnclosingUnit::Method {
            name: name.into(),
            is_async: true,
            return_type,
        }
    }

    pub fn sync_method(name: impl Into<String>, return_type: DataType) -> Self {
        EnclosingUnit::Method {
            name: name.into(),
            is_async: false,
            return_type,
        }
    }

    pub fn lambda(is_async: bool) -> Self {
        EnclosingUnit::AnonymousFunction {
            kind: AnonymousFunctionKind::Lambda,
            is_async,
            implicitly_generated: false,
        }
    }

    /// Lambda synthesized for a query clause.
    pub fn query_lambda() -> Self {
        EnclosingUnit::AnonymousFunction {
            kind: AnonymousFunctionKind::Lambda,
            is_async: false,
            implicitly_generated: true,
        }
    }

    pub fn is_async(&self) -> bool {
        match self {
            EnclosingUnit::NotMethod { .. } => false,
            EnclosingUnit::Method { is_async, .. }
            | EnclosingUnit::AnonymousFunction { is_async, .. } => *is_async,
        }
    }
}

/// Immutable snapshot of where an await is being bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BindingContext<'u> {
    pub unit: &'u EnclosingUnit,
    pub flags: BinderFlags,
}

impl<'u> BindingContext<'u> {
    pub fn new(unit: &'u EnclosingUnit) -> Self {
        Self {
            unit,
            flags: BinderFlags::empty(),
        }
    }

    /// Derive a context with additional flags set.
    pub fn with_flags(self, flags: BinderFlags) -> Self {
        Self {
            flags: self.flags | flags,
            ..self
        }
    }

    pub fn enter_unsafe(self) -> Self {
        self.with_flags(BinderFlags::UNSAFE_REGION)
    }

    /// Unsafe region whose declaration opts in to suspension.
    pub fn enter_unsafe_allowing_await(self) -> Self {
        let flags = BinderFlags::UNSAFE_REGION | BinderFlags::ALLOW_AWAIT_IN_UNSAFE;
        self.with_flags(flags)
    }

    pub fn enter_lock(self) -> Self {
        self.with_flags(BinderFlags::IN_LOCK_BODY)
    }

    pub fn enter_catch_filter(self) -> Self {
        self.with_flags(BinderFlags::IN_CATCH_FILTER)
    }

    pub fn enter_catch(self) -> Self {
        self.with_flags(BinderFlags::IN_CATCH_BLOCK)
    }

    pub fn enter_finally(self) -> Self {
        self.with_flags(BinderFlags::IN_FINALLY_BLOCK)
    }

    /// Move into a nested function body. Region flags do not carry over.
    pub fn enter_unit(self, unit: &EnclosingUnit) -> BindingContext<'_> {
        BindingContext::new(unit)
    }

    pub fn has(&self, flag: BinderFlags) -> bool {
        self.flags.contains(flag)
    }

    pub fn is_async(&self) -> bool {
        self.unit.is_async()
    }
}
