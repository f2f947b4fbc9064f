//! Sable
//!
//! Semantic binding of `await` expressions for the Sable language.
//!
//! # Crates
//!
//! - [`sable_core`]: spans, type identity, symbol entries, errors, diagnostics
//! - [`sable_registry`]: the symbol registry and well-known types
//! - [`sable_binder`]: context rules, awaiter pattern resolution and the binder
//!
//! # Example
//!
//! ```
//! use sable::prelude::*;
//!
//! let mut registry = SymbolRegistry::with_primitives();
//! let notify = registry
//!     .register_type(InterfaceEntry::qualified(
//!         "NotifyCompletion",
//!         WellKnownType::NotifyCompletion.qualified_name(),
//!     ))
//!     .unwrap();
//! let getter = TypeHash::from_name("get_is_completed");
//! let flag = PropertyEntry::read_only("is_completed", DataType::bool(), getter);
//! let awaiter = ClassEntry::new("Awaiter")
//!     .with_interface(notify)
//!     .with_property(flag);
//! let awaiter = registry.register_type(awaiter).unwrap();
//! let result = FunctionEntry::method(awaiter, "get_result", DataType::int32());
//! registry.register_function(result).unwrap();
//! let task = registry.register_type(ClassEntry::new("Task")).unwrap();
//! let accessor = FunctionEntry::method(task, "get_awaiter", DataType::simple(awaiter));
//! registry.register_function(accessor).unwrap();
//!
//! let probe = RegistryProbe::new(&registry);
//! let binder = AwaitBinder::new(&probe);
//! let unit = EnclosingUnit::async_method("run", DataType::void());
//! let operand = BoundExpr::local(DataType::simple(task), Span::new(3, 15, 4));
//!
//! let mut diagnostics = DiagnosticBag::new();
//! let ctx = BindingContext::new(&unit);
//! let node = binder.bind(&operand, &ctx, Span::new(3, 9, 10), &mut diagnostics);
//!
//! assert!(!node.has_errors);
//! assert_eq!(node.result_type(), Some(DataType::int32()));
//! ```

pub use sable_binder;
pub use sable_core;
pub use sable_registry;

pub use sable_binder::{
    AwaitBinder, AwaitFailures, AwaitResultType, AwaiterPattern, BinderFlags, BinderOptions,
    BindingContext, BoundAwait, BoundExpr, EnclosingUnit, MemberProbe, RegistryProbe,
    RequireResultAccessor, ResultAccessorValidator,
};
pub use sable_core::{Diagnostic, DiagnosticBag, DiagnosticCode, DiagnosticSink, Span};
pub use sable_registry::{SymbolRegistry, WellKnownType};

/// Everything needed to populate a registry and bind awaits.
pub mod prelude {
    pub use sable_binder::{
        AccessResult, AnonymousFunctionKind, AwaitBinder, AwaitFailures, AwaitResultType,
        AwaiterPattern, BinderFlags, BinderOptions, BindingContext, BoundAwait, BoundExpr,
        BoundExprKind, CallResult, Conversion, DeferralReason, EnclosingUnit, MemberProbe,
        PatternMember, RegistryProbe, RequireResultAccessor, ResultAccessorValidator,
        could_be_awaited,
    };
    pub use sable_core::{
        ClassEntry, DataType, Diagnostic, DiagnosticBag, DiagnosticCode, DiagnosticSink,
        DiscardSink, FieldEntry, FunctionEntry, FunctionTraits, InterfaceEntry, Param,
        PropertyEntry, Span, TypeHash, primitives,
    };
    pub use sable_registry::{SymbolRegistry, WellKnownType};
}
