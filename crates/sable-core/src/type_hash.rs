//! Deterministic hash-based identity for types and functions.
//!
//! [`TypeHash`] is a 64-bit XXH64-derived value computed from a qualified
//! name (types) or from owner, name and parameter types (functions and
//! methods). The same input always yields the same hash, so binders can
//! refer to a symbol before it has been looked up and well-known types can
//! be addressed by a stable identity.
//!
//! ```
//! use sable_core::{TypeHash, primitives};
//!
//! assert_eq!(TypeHash::from_name("int"), primitives::INT32);
//!
//! let task = TypeHash::from_name("Task");
//! let a = TypeHash::from_method(task, "get_awaiter", &[]);
//! let b = TypeHash::from_method(task, "get_result", &[]);
//! assert_ne!(a, b);
//! ```

use std::fmt;
use xxhash_rust::xxh64::xxh64;

/// Domain mixing constants.
///
/// Types, free functions and methods use distinct domains so that a type
/// and a function sharing a name never share a hash.
pub mod hash_constants {
    /// Separator used when folding parameter hashes.
    pub const SEP: u64 = 0xa54ff53a5f1d36f1;

    /// Domain marker for type hashes.
    pub const TYPE: u64 = 0x6a09e667f3bcc908;

    /// Domain marker for free (and extension) function hashes.
    pub const FUNCTION: u64 = 0xbb67ae8584caa73b;

    /// Domain marker for instance method hashes.
    pub const METHOD: u64 = 0x3c6ef372fe94f82b;

    /// Per-position parameter markers; parameter order changes the hash.
    pub const PARAM_MARKERS: [u64; 8] = [
        0x510e527fade682d1,
        0x9b05688c2b3e6c1f,
        0x1f83d9abfb41bd6b,
        0x5be0cd19137e2179,
        0xcbbb9d5dc1059ed8,
        0x629a292a367cd507,
        0x9159015a3070dd17,
        0x152fecd8f70e5939,
    ];
}

/// A deterministic 64-bit hash identifying a type, function, or method.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeHash(pub u64);

impl TypeHash {
    /// Hash a qualified type name.
    #[inline]
    pub fn from_name(name: &str) -> Self {
        TypeHash(hash_constants::TYPE ^ xxh64(name.as_bytes(), 0))
    }

    /// Hash a free function (or extension method) by name and parameter types.
    #[inline]
    pub fn from_function(name: &str, params: &[TypeHash]) -> Self {
        let seed = hash_constants::FUNCTION ^ xxh64(name.as_bytes(), 0);
        TypeHash(fold_params(seed, params))
    }

    /// Hash an instance method by owner, name and parameter types.
    #[inline]
    pub fn from_method(owner: TypeHash, name: &str, params: &[TypeHash]) -> Self {
        let seed = hash_constants::METHOD ^ owner.0 ^ xxh64(name.as_bytes(), 0);
        TypeHash(fold_params(seed, params))
    }
}

fn fold_params(seed: u64, params: &[TypeHash]) -> u64 {
    params.iter().enumerate().fold(seed, |hash, (i, param)| {
        let marker = hash_constants::PARAM_MARKERS
            .get(i)
            .copied()
            .unwrap_or_else(|| hash_constants::PARAM_MARKERS[0].wrapping_add(i as u64));
        hash.wrapping_mul(hash_constants::SEP)
            .wrapping_add(marker ^ param.0)
    })
}

impl fmt::Debug for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeHash({:#018x})", self.0)
    }
}

impl fmt::Display for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

/// Hashes of the built-in types.
///
/// Each value equals `TypeHash::from_name` of the type's source spelling.
/// `ERROR` is a sentinel that no name hashes to.
pub mod primitives {
    use super::TypeHash;

    /// `void`: the type of an expression that produces no value.
    pub const VOID: TypeHash = TypeHash(0xa1168fac1529859e);

    /// `bool`
    pub const BOOL: TypeHash = TypeHash(0x5ba97975053d95b5);

    /// `int` (32-bit signed integer)
    pub const INT32: TypeHash = TypeHash(0x0afba5f104cc9ecb);

    /// `int64`
    pub const INT64: TypeHash = TypeHash(0x38c9a3dc3c4a1550);

    /// `float`
    pub const FLOAT: TypeHash = TypeHash(0x4770542c1325b71d);

    /// `double`
    pub const DOUBLE: TypeHash = TypeHash(0xaeb7a3563f12abef);

    /// `string`
    pub const STRING: TypeHash = TypeHash(0x3f28a96073b9550c);

    /// Type of the `null` literal.
    pub const NULL: TypeHash = TypeHash(0x54c0076790ab5632);

    /// `dynamic`: member access is bound at run time.
    pub const DYNAMIC: TypeHash = TypeHash(0xb68ba565dbe7f567);

    /// Error type marker produced when binding fails.
    pub const ERROR: TypeHash = TypeHash(0xffff_ffff_ffff_ffff);

    /// Source spelling of a built-in type hash, if it is one.
    pub fn name_of(hash: TypeHash) -> Option<&'static str> {
        Some(match hash {
            VOID => "void",
            BOOL => "bool",
            INT32 => "int",
            INT64 => "int64",
            FLOAT => "float",
            DOUBLE => "double",
            STRING => "string",
            NULL => "null",
            DYNAMIC => "dynamic",
            ERROR => "<error>",
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_constants_match_names() {
        for (name, hash) in [
            ("void", primitives::VOID),
            ("bool", primitives::BOOL),
            ("int", primitives::INT32),
            ("int64", primitives::INT64),
            ("float", primitives::FLOAT),
            ("double", primitives::DOUBLE),
            ("string", primitives::STRING),
            ("null", primitives::NULL),
            ("dynamic", primitives::DYNAMIC),
        ] {
            assert_eq!(TypeHash::from_name(name), hash, "hash for '{name}'");
        }
    }

    #[test]
    fn method_hash_depends_on_owner() {
        let a = TypeHash::from_method(TypeHash::from_name("A"), "get_awaiter", &[]);
        let b = TypeHash::from_method(TypeHash::from_name("B"), "get_awaiter", &[]);
        assert_ne!(a, b);
    }

    #[test]
    fn parameter_order_matters() {
        let f1 = TypeHash::from_function("f", &[primitives::INT32, primitives::BOOL]);
        let f2 = TypeHash::from_function("f", &[primitives::BOOL, primitives::INT32]);
        assert_ne!(f1, f2);
    }

    #[test]
    fn function_and_type_domains_differ() {
        assert_ne!(
            TypeHash::from_name("Task"),
            TypeHash::from_function("Task", &[])
        );
    }

    #[test]
    fn name_of_round_trips_builtins() {
        assert_eq!(primitives::name_of(primitives::DYNAMIC), Some("dynamic"));
        assert_eq!(primitives::name_of(TypeHash::from_name("Task")), None);
    }
}
