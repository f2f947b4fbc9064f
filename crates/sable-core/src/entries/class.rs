//! Class and interface type entries.
//!
//! Both carry their members directly except methods, which the registry
//! stores separately and links back by hash on registration.

use crate::TypeHash;

use super::{FieldEntry, PropertyEntry};

/// A class type.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassEntry {
    pub name: String,
    /// Name including namespaces; the type hash is derived from it.
    pub qualified_name: String,
    pub type_hash: TypeHash,
    /// Single base class.
    pub base_class: Option<TypeHash>,
    pub interfaces: Vec<TypeHash>,
    /// Filled in by the registry.
    pub methods: Vec<TypeHash>,
    pub properties: Vec<PropertyEntry>,
    pub fields: Vec<FieldEntry>,
    /// Defect reported wherever this type is used (e.g. it was imported
    /// from a module that failed to load).
    pub use_site_error: Option<String>,
}

impl ClassEntry {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::qualified(name.clone(), name)
    }

    pub fn qualified(name: impl Into<String>, qualified_name: impl Into<String>) -> Self {
        let qualified_name = qualified_name.into();
        Self {
            name: name.into(),
            type_hash: TypeHash::from_name(&qualified_name),
            qualified_name,
            base_class: None,
            interfaces: Vec::new(),
            methods: Vec::new(),
            properties: Vec::new(),
            fields: Vec::new(),
            use_site_error: None,
        }
    }

    pub fn with_base(mut self, base: TypeHash) -> Self {
        self.base_class = Some(base);
        self
    }

    pub fn with_interface(mut self, interface: TypeHash) -> Self {
        self.interfaces.push(interface);
        self
    }

    pub fn with_property(mut self, property: PropertyEntry) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_field(mut self, field: FieldEntry) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_use_site_error(mut self, message: impl Into<String>) -> Self {
        self.use_site_error = Some(message.into());
        self
    }
}

/// An interface type, e.g. the continuation capability.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceEntry {
    pub name: String,
    pub qualified_name: String,
    pub type_hash: TypeHash,
    /// Extended interfaces.
    pub bases: Vec<TypeHash>,
    pub methods: Vec<TypeHash>,
    pub properties: Vec<PropertyEntry>,
    pub use_site_error: Option<String>,
}

impl InterfaceEntry {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::qualified(name.clone(), name)
    }

    pub fn qualified(name: impl Into<String>, qualified_name: impl Into<String>) -> Self {
        let qualified_name = qualified_name.into();
        Self {
            name: name.into(),
            type_hash: TypeHash::from_name(&qualified_name),
            qualified_name,
            bases: Vec::new(),
            methods: Vec::new(),
            properties: Vec::new(),
            use_site_error: None,
        }
    }

    pub fn with_base(mut self, base: TypeHash) -> Self {
        self.bases.push(base);
        self
    }

    pub fn with_use_site_error(mut self, message: impl Into<String>) -> Self {
        self.use_site_error = Some(message.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_name_drives_hash() {
        let class = ClassEntry::qualified("Task", "Sable::Async::Task");
        assert_eq!(class.name, "Task");
        assert_eq!(class.type_hash, TypeHash::from_name("Sable::Async::Task"));
        let unqualified = ClassEntry::new("Task");
        assert_eq!(unqualified.type_hash, TypeHash::from_name("Task"));
    }

    #[test]
    fn awaiter_shape() {
        let notify = TypeHash::from_name("Sable::Async::NotifyCompletion");
        let class = ClassEntry::new("Awaiter")
            .with_interface(notify)
            .with_use_site_error("missing base");
        assert_eq!(class.interfaces, vec![notify]);
        assert!(class.methods.is_empty());
        assert_eq!(class.use_site_error.as_deref(), Some("missing base"));
    }

    #[test]
    fn interface_extends() {
        let notify = TypeHash::from_name("NotifyCompletion");
        let critical = InterfaceEntry::new("CriticalNotifyCompletion").with_base(notify);
        assert_eq!(critical.bases, vec![notify]);
    }
}
