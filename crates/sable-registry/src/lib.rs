//! Sable Registry
//!
//! Symbol storage consulted while binding: registered types, their members,
//! extension methods, and the supertype graph.

mod registry;
mod well_known;

pub use registry::{MemberLookup, SymbolRegistry};
pub use well_known::WellKnownType;
