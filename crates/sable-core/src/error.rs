//! Error taxonomy for symbol setup and await binding.
//!
//! ## Hierarchy
//!
//! ```text
//! RegistrationError     - symbol table setup faults (returned as Result)
//! AwaitError            - binding failures (reported as diagnostics, never returned)
//! ├── ContextError      - await at an illegal position
//! ├── ArgumentError     - operand cannot be awaited at all
//! ├── PatternError      - awaiter pattern missing or malformed
//! └── ProbeError        - reported by member lookup / conversion collaborators
//! ```
//!
//! Binding failures carry the display strings of the offending type, member
//! or construct; the location is attached when they are turned into a
//! [`Diagnostic`](crate::Diagnostic).

use thiserror::Error;

// ============================================================================
// Registration Errors
// ============================================================================

/// Errors raised while populating a symbol registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A type with this qualified name already exists.
    #[error("duplicate type: {0}")]
    DuplicateType(String),

    /// A function with the same signature already exists.
    #[error("duplicate function: {0}")]
    DuplicateFunction(String),

    /// A method names an owner type that is not registered.
    #[error("method '{function}' belongs to unknown type {owner}")]
    UnknownOwner {
        /// The method name.
        function: String,
        /// Display form of the owner hash.
        owner: String,
    },
}

// ============================================================================
// Binding Errors
// ============================================================================

/// The await appears at a position where suspension is not allowed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("'await' can only be used inside an async method or async anonymous function")]
    WithoutAsync,

    #[error(
        "'await' can only be used in a query expression within the first collection of the initial 'from' clause or the collection of a 'join' clause"
    )]
    InQuery,

    #[error("'await' can only be used within an async {construct}; mark this {construct} 'async'")]
    WithoutAsyncAnonymous {
        /// Display form of the construct, e.g. "lambda expression".
        construct: String,
    },

    #[error(
        "'await' can only be used within an async method; mark '{method}' 'async' and make it return 'Task'"
    )]
    WithoutAsyncVoidMethod { method: String },

    #[error(
        "'await' can only be used within an async method; mark '{method}' 'async' and change its return type to 'Task<{return_type}>'"
    )]
    WithoutAsyncMethod { method: String, return_type: String },

    #[error("cannot await in an unsafe context")]
    InUnsafe,

    #[error("cannot await in the body of a lock statement")]
    InLock,

    #[error("cannot await in the filter expression of a catch clause")]
    InCatchFilter,

    #[error("cannot await in the body of a catch clause")]
    InCatch,

    #[error("cannot await in the body of a finally clause")]
    InFinally,
}

/// The operand can never be awaited, whatever its members.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("cannot await 'void'")]
    VoidOperand,

    #[error("cannot await '{operand}'")]
    Intrinsic {
        /// Display form of the operand, e.g. "null" or "method group".
        operand: String,
    },
}

/// The operand's type does not satisfy the awaiter pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("'await' requires that the type '{type_name}' have a suitable '{method}' method")]
    BadAwaitArgument { type_name: String, method: String },

    #[error("'{type_name}' does not contain a definition for '{member}'")]
    MissingMember { type_name: String, member: String },

    #[error(
        "property '{type_name}.{member}' cannot be used in this context because it lacks a getter"
    )]
    PropertyLacksGetter { type_name: String, member: String },

    #[error(
        "'await' requires that the awaiter type '{awaiter_type}' of '{operand_type}' have a suitable '{member}' member"
    )]
    MalformedPattern {
        awaiter_type: String,
        operand_type: String,
        member: String,
    },

    #[error("'{type_name}' does not implement '{capability}'")]
    DoesNotImplement {
        type_name: String,
        capability: String,
    },

    #[error("'{type_name}' does not contain a definition for '{member}'")]
    MissingResultAccessor { type_name: String, member: String },
}

/// Failures detected and reported by the lookup and conversion collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    #[error("the call to '{type_name}.{member}' is ambiguous between {candidates} candidates")]
    AmbiguousCall {
        type_name: String,
        member: String,
        candidates: usize,
    },

    #[error("no overload of '{type_name}.{member}' takes {args} argument(s)")]
    NoApplicableOverload {
        type_name: String,
        member: String,
        args: usize,
    },

    #[error("predefined type '{name}' is not defined or imported")]
    PredefinedTypeMissing { name: String },

    #[error("type '{type_name}' cannot be used here: {message}")]
    UseSite { type_name: String, message: String },
}

/// Any failure produced while binding an await expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AwaitError {
    #[error(transparent)]
    Context(#[from] ContextError),

    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    Probe(#[from] ProbeError),
}

impl AwaitError {
    pub fn is_context(&self) -> bool {
        matches!(self, AwaitError::Context(_))
    }

    pub fn is_argument(&self) -> bool {
        matches!(self, AwaitError::Argument(_))
    }

    pub fn is_pattern(&self) -> bool {
        matches!(self, AwaitError::Pattern(_))
    }
}
