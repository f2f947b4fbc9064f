//! Sable Core
//!
//! Shared semantic types for the Sable front end:
//!
//! - [`Span`]: source locations
//! - [`TypeHash`] and [`primitives`]: deterministic symbol identity
//! - [`DataType`]: type references with qualifiers
//! - [`entries`]: registered types, functions, properties and fields
//! - [`error`]: registration and binding error taxonomy
//! - [`diagnostics`]: diagnostic codes, arguments and sinks

pub mod data_type;
pub mod diagnostics;
pub mod entries;
pub mod error;
pub mod span;
pub mod type_hash;

pub use data_type::DataType;
pub use diagnostics::{
    Diagnostic, DiagnosticArgs, DiagnosticBag, DiagnosticCode, DiagnosticSink, DiscardSink,
    Severity,
};
pub use entries::{
    ClassEntry, FieldEntry, FunctionEntry, FunctionTraits, InterfaceEntry, Param,
    PrimitiveEntry, PropertyEntry, TypeEntry,
};
pub use error::{
    ArgumentError, AwaitError, ContextError, PatternError, ProbeError, RegistrationError,
};
pub use span::Span;
pub use type_hash::{TypeHash, primitives};
