//! TypeEntry - a registered type of any kind.

use crate::{TypeHash, primitives};

use super::{ClassEntry, FieldEntry, InterfaceEntry, PropertyEntry};

/// A built-in type such as `int` or `dynamic`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimitiveEntry {
    pub name: &'static str,
    pub type_hash: TypeHash,
}

impl PrimitiveEntry {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            type_hash: TypeHash::from_name(name),
        }
    }

    /// Every built-in type except the error marker.
    pub fn all() -> Vec<PrimitiveEntry> {
        [
            "void", "bool", "int", "int64", "float", "double", "string", "null", "dynamic",
        ]
        .into_iter()
        .map(PrimitiveEntry::new)
        .collect()
    }
}

/// A registered type.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeEntry {
    Primitive(PrimitiveEntry),
    Class(ClassEntry),
    Interface(InterfaceEntry),
}

impl TypeEntry {
    pub fn type_hash(&self) -> TypeHash {
        match self {
            TypeEntry::Primitive(p) => p.type_hash,
            TypeEntry::Class(c) => c.type_hash,
            TypeEntry::Interface(i) => i.type_hash,
        }
    }

    pub fn qualified_name(&self) -> &str {
        match self {
            TypeEntry::Primitive(p) => p.name,
            TypeEntry::Class(c) => &c.qualified_name,
            TypeEntry::Interface(i) => &i.qualified_name,
        }
    }

    pub fn is_interface(&self) -> bool {
        matches!(self, TypeEntry::Interface(_))
    }

    pub fn methods(&self) -> &[TypeHash] {
        match self {
            TypeEntry::Primitive(_) => &[],
            TypeEntry::Class(c) => &c.methods,
            TypeEntry::Interface(i) => &i.methods,
        }
    }

    pub fn properties(&self) -> &[PropertyEntry] {
        match self {
            TypeEntry::Primitive(_) => &[],
            TypeEntry::Class(c) => &c.properties,
            TypeEntry::Interface(i) => &i.properties,
        }
    }

    pub fn fields(&self) -> &[FieldEntry] {
        match self {
            TypeEntry::Class(c) => &c.fields,
            _ => &[],
        }
    }

    /// Direct supertypes: base class first, then interfaces.
    pub fn supertypes(&self) -> Vec<TypeHash> {
        match self {
            TypeEntry::Primitive(_) => Vec::new(),
            TypeEntry::Class(c) => c.base_class.iter().chain(&c.interfaces).copied().collect(),
            TypeEntry::Interface(i) => i.bases.clone(),
        }
    }

    pub fn use_site_error(&self) -> Option<&str> {
        match self {
            TypeEntry::Primitive(_) => None,
            TypeEntry::Class(c) => c.use_site_error.as_deref(),
            TypeEntry::Interface(i) => i.use_site_error.as_deref(),
        }
    }

    /// `true` for the `dynamic` marker.
    pub fn is_dynamic(&self) -> bool {
        self.type_hash() == primitives::DYNAMIC
    }
}

impl From<ClassEntry> for TypeEntry {
    fn from(entry: ClassEntry) -> Self {
        TypeEntry::Class(entry)
    }
}

impl From<InterfaceEntry> for TypeEntry {
    fn from(entry: InterfaceEntry) -> Self {
        TypeEntry::Interface(entry)
    }
}

impl From<PrimitiveEntry> for TypeEntry {
    fn from(entry: PrimitiveEntry) -> Self {
        TypeEntry::Primitive(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_hash_like_their_names() {
        let all = PrimitiveEntry::all();
        assert!(all.iter().any(|p| p.type_hash == primitives::DYNAMIC));
        assert!(all.iter().all(|p| p.type_hash != primitives::ERROR));
    }

    #[test]
    fn class_supertypes_put_base_first() {
        let base = TypeHash::from_name("Base");
        let iface = TypeHash::from_name("INotify");
        let entry: TypeEntry = ClassEntry::new("Derived")
            .with_interface(iface)
            .with_base(base)
            .into();

        assert_eq!(entry.supertypes(), vec![base, iface]);
    }
}
