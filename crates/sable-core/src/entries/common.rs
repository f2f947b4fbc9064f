//! Properties and fields, the non-method members of a type.

use crate::{DataType, TypeHash};

/// Accessor-backed member. The awaiter's completion flag is one.
///
/// Lookup finds a property whether or not it has a getter; readers must
/// check [`PropertyEntry::is_readable`].
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyEntry {
    pub name: String,
    pub data_type: DataType,
    pub getter: Option<TypeHash>,
    pub setter: Option<TypeHash>,
    /// Invisible through an instance receiver.
    pub is_static: bool,
}

impl PropertyEntry {
    pub fn new(
        name: impl Into<String>,
        data_type: DataType,
        getter: Option<TypeHash>,
        setter: Option<TypeHash>,
    ) -> Self {
        Self {
            name: name.into(),
            data_type,
            getter,
            setter,
            is_static: false,
        }
    }

    pub fn read_only(name: impl Into<String>, data_type: DataType, getter: TypeHash) -> Self {
        Self::new(name, data_type, Some(getter), None)
    }

    pub fn write_only(name: impl Into<String>, data_type: DataType, setter: TypeHash) -> Self {
        Self::new(name, data_type, None, Some(setter))
    }

    pub fn into_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn is_readable(&self) -> bool {
        self.getter.is_some()
    }
}

/// Storage member with no accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldEntry {
    pub name: String,
    pub data_type: DataType,
    pub is_static: bool,
}

impl FieldEntry {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            is_static: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readability_follows_getter() {
        let flag = DataType::bool();
        let getter = TypeHash::from_name("Awaiter::get_is_completed");
        let setter = TypeHash::from_name("Awaiter::set_is_completed");

        let read_only = PropertyEntry::read_only("is_completed", flag, getter);
        let write_only = PropertyEntry::write_only("is_completed", flag, setter);
        let both = PropertyEntry::new("is_completed", flag, Some(getter), Some(setter));
        assert!(read_only.is_readable());
        assert!(!write_only.is_readable());
        assert!(both.is_readable());
    }

    #[test]
    fn static_marker() {
        let flag = PropertyEntry::read_only("count", DataType::int32(), TypeHash::from_name("g"));
        assert!(!flag.is_static);
        assert!(flag.into_static().is_static);
        assert!(!FieldEntry::new("state", DataType::int32()).is_static);
    }
}
