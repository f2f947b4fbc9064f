//! Diagnostics produced during binding.
//!
//! A [`Diagnostic`] is a stable [`DiagnosticCode`], a location, and a small
//! set of fixed argument slots. Binders append them to a [`DiagnosticSink`];
//! rendering beyond the one-line `Display` form is left to the caller.
//!
//! ```
//! use sable_core::{
//!     Diagnostic, DiagnosticArgs, DiagnosticBag, DiagnosticCode, DiagnosticSink, Span,
//! };
//!
//! let mut bag = DiagnosticBag::new();
//! bag.report(Diagnostic::error(
//!     DiagnosticCode::AwaitInLock,
//!     Span::new(3, 9, 5),
//!     DiagnosticArgs::default(),
//!     "cannot await in the body of a lock statement",
//! ));
//!
//! assert!(bag.has_errors());
//! assert_eq!(bag.codes(), vec![DiagnosticCode::AwaitInLock]);
//! ```

use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::Span;

/// Stable identifiers for every diagnostic the binder can emit.
///
/// The numeric value is part of the public contract; new codes are only
/// ever appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u16)]
pub enum DiagnosticCode {
    // Context
    AwaitWithoutAsync = 4001,
    AwaitInQuery = 4002,
    AwaitWithoutAsyncAnonymous = 4003,
    AwaitWithoutAsyncVoidMethod = 4004,
    AwaitWithoutAsyncMethod = 4005,
    AwaitInUnsafe = 4006,
    AwaitInLock = 4007,
    AwaitInCatchFilter = 4008,
    AwaitInCatch = 4009,
    AwaitInFinally = 4010,

    // Argument
    AwaitVoid = 4101,
    AwaitIntrinsic = 4102,

    // Pattern
    BadAwaitArgument = 4201,
    MissingMember = 4202,
    PropertyLacksGetter = 4203,
    BadAwaiterPattern = 4204,
    DoesNotImplementCapability = 4205,

    // Collaborators
    AmbiguousCall = 4301,
    NoApplicableOverload = 4302,
    PredefinedTypeMissing = 4303,
    UseSiteError = 4304,
}

impl DiagnosticCode {
    /// Rendered identifier, e.g. `SB4007`.
    pub fn id(self) -> String {
        format!("SB{:04}", u16::from(self))
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SB{:04}", u16::from(*self))
    }
}

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

/// Fixed argument slots carried by a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiagnosticArgs {
    /// The offending type.
    pub type_name: Option<String>,
    /// A second type, when the message relates two types.
    pub other_type: Option<String>,
    /// The offending member name.
    pub member: Option<String>,
    /// Display form of the enclosing construct.
    pub construct: Option<String>,
}

impl DiagnosticArgs {
    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    pub fn with_other_type(mut self, type_name: impl Into<String>) -> Self {
        self.other_type = Some(type_name.into());
        self
    }

    pub fn with_member(mut self, member: impl Into<String>) -> Self {
        self.member = Some(member.into());
        self
    }

    pub fn with_construct(mut self, construct: impl Into<String>) -> Self {
        self.construct = Some(construct.into());
        self
    }
}

/// A single diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub severity: Severity,
    pub span: Span,
    pub args: DiagnosticArgs,
    /// Rendered one-line message.
    pub message: String,
}

impl Diagnostic {
    pub fn error(
        code: DiagnosticCode,
        span: Span,
        args: DiagnosticArgs,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code,
            severity: Severity::Error,
            span,
            args,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        let Self {
            code,
            span,
            message,
            ..
        } = self;
        write!(f, "{severity} {code} at {span}: {message}")
    }
}

/// Append-only destination for diagnostics.
///
/// Sinks are confined to one binding worker or synchronized by their
/// owner; binders never lock.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// A sink that keeps every diagnostic in order.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticBag {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    /// Codes of all diagnostics, in report order.
    pub fn codes(&self) -> Vec<DiagnosticCode> {
        self.diagnostics.iter().map(|d| d.code).collect()
    }

    pub fn contains(&self, code: DiagnosticCode) -> bool {
        self.diagnostics.iter().any(|d| d.code == code)
    }
}

impl DiagnosticSink for DiagnosticBag {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

impl<'a> IntoIterator for &'a DiagnosticBag {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

impl IntoIterator for DiagnosticBag {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}

/// A sink that drops everything, for speculative binding.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardSink;

impl DiagnosticSink for DiscardSink {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}
