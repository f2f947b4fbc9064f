//! DataType - a type reference as seen by the binder.
//!
//! `DataType` pairs a [`TypeHash`] with its qualifiers. It is `Copy` so the
//! binder can pass operand and member types around without allocating.

use crate::{TypeHash, primitives};

/// A complete type reference including qualifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DataType {
    /// The base type identity.
    pub type_hash: TypeHash,
    /// Whether the value is read-only.
    pub is_const: bool,
}

impl DataType {
    /// A type with no qualifiers.
    #[inline]
    pub const fn simple(type_hash: TypeHash) -> Self {
        Self {
            type_hash,
            is_const: false,
        }
    }

    /// A const-qualified type.
    #[inline]
    pub const fn with_const(type_hash: TypeHash) -> Self {
        Self {
            type_hash,
            is_const: true,
        }
    }

    /// `void`, the type of an expression that produces no value.
    #[inline]
    pub const fn void() -> Self {
        Self::simple(primitives::VOID)
    }

    /// `bool`
    #[inline]
    pub const fn bool() -> Self {
        Self::simple(primitives::BOOL)
    }

    /// `int`
    #[inline]
    pub const fn int32() -> Self {
        Self::simple(primitives::INT32)
    }

    /// The `dynamic` marker type.
    #[inline]
    pub const fn dynamic() -> Self {
        Self::simple(primitives::DYNAMIC)
    }

    /// The error marker type.
    #[inline]
    pub const fn error() -> Self {
        Self::simple(primitives::ERROR)
    }

    #[inline]
    pub fn is_void(&self) -> bool {
        self.type_hash == primitives::VOID
    }

    #[inline]
    pub fn is_bool(&self) -> bool {
        self.type_hash == primitives::BOOL
    }

    #[inline]
    pub fn is_dynamic(&self) -> bool {
        self.type_hash == primitives::DYNAMIC
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.type_hash == primitives::ERROR
    }

    /// Same base type, qualifiers ignored.
    #[inline]
    pub fn same_base(&self, other: &DataType) -> bool {
        self.type_hash == other.type_hash
    }
}

impl From<TypeHash> for DataType {
    fn from(type_hash: TypeHash) -> Self {
        DataType::simple(type_hash)
    }
}
