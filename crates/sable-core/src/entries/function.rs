//! Function and method entries.

use bitflags::bitflags;

use crate::{DataType, TypeHash};

bitflags! {
    /// Declaration traits of a function.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FunctionTraits: u8 {
        /// Method does not mutate its receiver.
        const CONST = 1 << 0;
        /// Static method; not callable through an instance receiver.
        const STATIC = 1 << 1;
        /// Free function whose first parameter is the receiver.
        const EXTENSION = 1 << 2;
    }
}

/// A function parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub data_type: DataType,
    /// Parameter has a default value and may be omitted.
    pub has_default: bool,
    /// Parameter collects any number of trailing arguments.
    pub is_variadic: bool,
}

impl Param {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            has_default: false,
            is_variadic: false,
        }
    }

    pub fn optional(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            has_default: true,
            ..Self::new(name, data_type)
        }
    }

    pub fn variadic(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            is_variadic: true,
            ..Self::new(name, data_type)
        }
    }

    /// The parameter can be left without an argument.
    pub fn can_be_omitted(&self) -> bool {
        self.has_default || self.is_variadic
    }
}

/// Registry entry for a function, method or extension method.
///
/// For extension methods the first parameter is the receiver; call sites
/// do not pass it as an argument.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionEntry {
    /// Identity of this function.
    pub func_hash: TypeHash,
    /// Unqualified name.
    pub name: String,
    /// Owning type for methods.
    pub object_type: Option<TypeHash>,
    /// Generic type parameter names; non-empty means generic.
    pub type_params: Vec<String>,
    pub params: Vec<Param>,
    pub return_type: DataType,
    pub traits: FunctionTraits,
    /// Conditional-compilation symbol the function's calls depend on.
    pub conditional: Option<String>,
}

impl FunctionEntry {
    /// An instance method with no parameters.
    pub fn method(owner: TypeHash, name: impl Into<String>, return_type: DataType) -> Self {
        let name = name.into();
        Self {
            func_hash: TypeHash::from_method(owner, &name, &[]),
            name,
            object_type: Some(owner),
            type_params: Vec::new(),
            params: Vec::new(),
            return_type,
            traits: FunctionTraits::empty(),
            conditional: None,
        }
    }

    /// An extension method whose receiver parameter has type `receiver`.
    pub fn extension(name: impl Into<String>, receiver: DataType, return_type: DataType) -> Self {
        let name = name.into();
        Self {
            func_hash: TypeHash::from_function(&name, &[receiver.type_hash]),
            name,
            object_type: None,
            type_params: Vec::new(),
            params: vec![Param::new("self", receiver)],
            return_type,
            traits: FunctionTraits::EXTENSION | FunctionTraits::STATIC,
            conditional: None,
        }
    }

    /// Append a parameter, re-deriving the hash from the new signature.
    pub fn with_param(mut self, param: Param) -> Self {
        self.params.push(param);
        self.rehash();
        self
    }

    pub fn with_type_params<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.type_params = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_traits(mut self, traits: FunctionTraits) -> Self {
        self.traits |= traits;
        self
    }

    /// Calls to this function are only kept when `symbol` is defined.
    pub fn conditional_on(mut self, symbol: impl Into<String>) -> Self {
        self.conditional = Some(symbol.into());
        self
    }

    fn rehash(&mut self) {
        let params: Vec<TypeHash> = self.params.iter().map(|p| p.data_type.type_hash).collect();
        self.func_hash = match self.object_type {
            Some(owner) => TypeHash::from_method(owner, &self.name, &params),
            None => TypeHash::from_function(&self.name, &params),
        };
    }

    pub fn is_extension(&self) -> bool {
        self.traits.contains(FunctionTraits::EXTENSION)
    }

    pub fn is_static(&self) -> bool {
        self.traits.contains(FunctionTraits::STATIC)
    }

    pub fn is_generic(&self) -> bool {
        !self.type_params.is_empty()
    }

    pub fn returns_void(&self) -> bool {
        self.return_type.is_void()
    }

    /// Parameters supplied by call-site arguments (receiver excluded).
    pub fn call_params(&self) -> &[Param] {
        if self.is_extension() {
            self.params.get(1..).unwrap_or(&[])
        } else {
            &self.params
        }
    }

    /// Receiver type of an extension method.
    pub fn receiver_type(&self) -> Option<DataType> {
        if self.is_extension() {
            self.params.first().map(|p| p.data_type)
        } else {
            None
        }
    }

    /// Any call parameter is optional or variadic.
    pub fn has_optional_or_variadic(&self) -> bool {
        self.call_params().iter().any(Param::can_be_omitted)
    }

    /// Number of arguments a call must supply.
    pub fn required_arg_count(&self) -> usize {
        self.call_params()
            .iter()
            .filter(|p| !p.can_be_omitted())
            .count()
    }
}
