//! SymbolRegistry - type and function storage for binding.
//!
//! # Storage Model
//!
//! - **Types**: `TypeEntry` by `TypeHash`, with a name index for qualified lookup.
//! - **Functions**: every function (methods and extension methods alike) by
//!   `TypeHash`. Types reference their methods by hash.
//! - **Extension methods**: indexed by simple name for receiver-based lookup.
//! - **Hierarchy**: a `petgraph` directed graph with an edge from each type to
//!   each of its direct supertypes, used for subtype queries.
//!
//! # Thread Safety
//!
//! The registry is populated single-threaded, then shared by reference.
//! Binding only takes `&SymbolRegistry`, so any number of workers may bind
//! independent subtrees concurrently as long as nobody registers meanwhile.
//!
//! # Example
//!
//! ```
//! use sable_core::{ClassEntry, DataType, FunctionEntry, TypeHash};
//! use sable_registry::SymbolRegistry;
//!
//! let mut registry = SymbolRegistry::with_primitives();
//! let task = registry.register_type(ClassEntry::new("Task")).unwrap();
//! registry
//!     .register_function(FunctionEntry::method(task, "get_awaiter", DataType::int32()))
//!     .unwrap();
//!
//! assert_eq!(registry.lookup_methods(task, "get_awaiter").len(), 1);
//! ```

use petgraph::algo::{astar, has_path_connecting};
use petgraph::graphmap::DiGraphMap;
use petgraph::visit::Dfs;
use rustc_hash::{FxHashMap, FxHashSet};

use sable_core::{
    FieldEntry, FunctionEntry, PrimitiveEntry, PropertyEntry, RegistrationError, TypeEntry,
    TypeHash, primitives,
};

use crate::WellKnownType;

/// Result of looking a member name up on a type.
///
/// The nearest type in the hierarchy that declares the name wins; members
/// with the same name further up are hidden.
#[derive(Debug, Clone, PartialEq)]
pub enum MemberLookup<'r> {
    Property(&'r PropertyEntry),
    Field(&'r FieldEntry),
    Methods(Vec<&'r FunctionEntry>),
    None,
}

/// Unified type and function registry.
#[derive(Default)]
pub struct SymbolRegistry {
    types: FxHashMap<TypeHash, TypeEntry>,
    type_names: FxHashMap<String, TypeHash>,
    functions: FxHashMap<TypeHash, FunctionEntry>,
    extensions: FxHashMap<String, Vec<TypeHash>>,
    hierarchy: DiGraphMap<TypeHash, ()>,
}

impl SymbolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with every built-in type registered.
    pub fn with_primitives() -> Self {
        let mut registry = Self::new();
        registry.register_all_primitives();
        registry
    }

    pub fn register_all_primitives(&mut self) {
        for primitive in PrimitiveEntry::all() {
            // Already-present primitives are fine to skip.
            let _ = self.register_type(primitive);
        }
    }

    // ==========================================================================
    // Registration
    // ==========================================================================

    /// Register a type and record its supertype edges.
    pub fn register_type(
        &mut self,
        entry: impl Into<TypeEntry>,
    ) -> Result<TypeHash, RegistrationError> {
        let entry = entry.into();
        let hash = entry.type_hash();
        let name = entry.qualified_name().to_string();

        if self.types.contains_key(&hash) || self.type_names.contains_key(&name) {
            return Err(RegistrationError::DuplicateType(name));
        }

        self.hierarchy.add_node(hash);
        for supertype in entry.supertypes() {
            self.hierarchy.add_edge(hash, supertype, ());
        }

        self.type_names.insert(name, hash);
        self.types.insert(hash, entry);
        Ok(hash)
    }

    /// Register a function.
    ///
    /// Methods are appended to their owner's method list if the owner does
    /// not list them yet; extension methods are indexed by name.
    pub fn register_function(
        &mut self,
        entry: FunctionEntry,
    ) -> Result<TypeHash, RegistrationError> {
        let hash = entry.func_hash;
        if self.functions.contains_key(&hash) {
            return Err(RegistrationError::DuplicateFunction(entry.name));
        }

        if let Some(owner) = entry.object_type {
            let methods = match self.types.get_mut(&owner) {
                Some(TypeEntry::Class(class)) => &mut class.methods,
                Some(TypeEntry::Interface(interface)) => &mut interface.methods,
                _ => {
                    return Err(RegistrationError::UnknownOwner {
                        function: entry.name,
                        owner: self.type_name(owner),
                    });
                }
            };
            if !methods.contains(&hash) {
                methods.push(hash);
            }
        }

        if entry.is_extension() {
            self.extensions
                .entry(entry.name.clone())
                .or_default()
                .push(hash);
        }

        self.functions.insert(hash, entry);
        Ok(hash)
    }

    // ==========================================================================
    // Lookup
    // ==========================================================================

    pub fn get_type(&self, hash: TypeHash) -> Option<&TypeEntry> {
        self.types.get(&hash)
    }

    pub fn get_type_by_name(&self, name: &str) -> Option<&TypeEntry> {
        self.type_names.get(name).and_then(|h| self.types.get(h))
    }

    pub fn get_function(&self, hash: TypeHash) -> Option<&FunctionEntry> {
        self.functions.get(&hash)
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    pub fn function_count(&self) -> usize {
        self.functions.len()
    }

    /// Display name for a type hash, falling back to the hash itself.
    pub fn type_name(&self, hash: TypeHash) -> String {
        if let Some(entry) = self.types.get(&hash) {
            return entry.qualified_name().to_string();
        }
        primitives::name_of(hash)
            .map(str::to_string)
            .unwrap_or_else(|| hash.to_string())
    }

    /// Look a well-known type up by its fixed identity.
    pub fn well_known(&self, id: WellKnownType) -> Option<&TypeEntry> {
        self.get_type_by_name(id.qualified_name())
    }

    /// Extension methods with the given simple name.
    pub fn extension_methods<'r>(&'r self, name: &str) -> impl Iterator<Item = &'r FunctionEntry> {
        self.extensions
            .get(name)
            .into_iter()
            .flatten()
            .filter_map(|hash| self.functions.get(hash))
    }

    /// The type followed by its supertypes, nearest first (base class
    /// before interfaces at each level).
    pub fn supertype_chain(&self, hash: TypeHash) -> Vec<TypeHash> {
        let mut order = vec![hash];
        let mut seen = FxHashSet::default();
        seen.insert(hash);
        let mut i = 0;
        while let Some(&current) = order.get(i) {
            if let Some(entry) = self.types.get(&current) {
                for supertype in entry.supertypes() {
                    if seen.insert(supertype) {
                        order.push(supertype);
                    }
                }
            }
            i += 1;
        }
        order
    }

    /// All types reachable from `hash` through supertype edges, `hash` included.
    pub fn ancestors(&self, hash: TypeHash) -> Vec<TypeHash> {
        if !self.hierarchy.contains_node(hash) {
            return vec![hash];
        }
        let mut dfs = Dfs::new(&self.hierarchy, hash);
        let mut found = Vec::new();
        while let Some(node) = dfs.next(&self.hierarchy) {
            found.push(node);
        }
        found
    }

    /// `derived` is `base` or inherits from / implements it.
    pub fn is_subtype(&self, derived: TypeHash, base: TypeHash) -> bool {
        if derived == base {
            return true;
        }
        self.hierarchy.contains_node(derived)
            && self.hierarchy.contains_node(base)
            && has_path_connecting(&self.hierarchy, derived, base, None)
    }

    /// Shortest supertype path from `derived` up to `base`, both ends included.
    pub fn supertype_path(&self, derived: TypeHash, base: TypeHash) -> Option<Vec<TypeHash>> {
        if derived == base {
            return Some(vec![derived]);
        }
        if !self.hierarchy.contains_node(derived) || !self.hierarchy.contains_node(base) {
            return None;
        }
        astar(&self.hierarchy, derived, |n| n == base, |_| 1u32, |_| 0).map(|(_, path)| path)
    }

    /// Find the nearest declaration of `name` on `owner` or its supertypes.
    pub fn lookup_member(&self, owner: TypeHash, name: &str) -> MemberLookup<'_> {
        for hash in self.supertype_chain(owner) {
            let Some(entry) = self.types.get(&hash) else {
                continue;
            };

            if let Some(property) = entry.properties().iter().find(|p| p.name == name) {
                return MemberLookup::Property(property);
            }
            if let Some(field) = entry.fields().iter().find(|f| f.name == name) {
                return MemberLookup::Field(field);
            }
            let methods: Vec<&FunctionEntry> = entry
                .methods()
                .iter()
                .filter_map(|h| self.functions.get(h))
                .filter(|f| f.name == name)
                .collect();
            if !methods.is_empty() {
                return MemberLookup::Methods(methods);
            }
        }
        MemberLookup::None
    }

    /// Methods named `name` at the nearest declaring level, or none.
    pub fn lookup_methods(&self, owner: TypeHash, name: &str) -> Vec<&FunctionEntry> {
        match self.lookup_member(owner, name) {
            MemberLookup::Methods(methods) => methods,
            _ => Vec::new(),
        }
    }
}
