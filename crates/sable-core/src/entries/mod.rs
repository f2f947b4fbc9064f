//! Symbol entries stored in the registry.
//!
//! Types are stored as [`TypeEntry`]; functions (including methods and
//! extension methods) as [`FunctionEntry`], referenced from their owning
//! type by hash.

mod class;
mod common;
mod function;
mod type_entry;

pub use class::{ClassEntry, InterfaceEntry};
pub use common::{FieldEntry, PropertyEntry};
pub use function::{FunctionEntry, FunctionTraits, Param};
pub use type_entry::{PrimitiveEntry, TypeEntry};
