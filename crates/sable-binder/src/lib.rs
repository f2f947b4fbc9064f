//! Sable Binder
//!
//! Binding of `await` expressions: decides whether an await is legal where
//! it appears, resolves the awaiter pattern of its operand, and produces a
//! [`BoundAwait`] that later phases can consume even when binding failed.
//!
//! - [`context`]: enclosing unit and positional flags
//! - [`expr`]: the already-bound operand
//! - [`probe`]: member lookup, overload resolution and conversions
//! - [`awaits`]: the binder itself
//! - [`options`]: member names and switches

pub mod awaits;
pub mod context;
pub mod expr;
pub mod options;
pub mod probe;

pub use awaits::{
    AwaitBinder, AwaitFailures, AwaitResultType, AwaiterPattern, BoundAwait, DeferralReason,
    PatternMember, PatternResolver, RequireResultAccessor, ResolvedMembers,
    ResultAccessorValidator, bind_await, could_be_awaited,
};
pub use context::{AnonymousFunctionKind, BinderFlags, BindingContext, EnclosingUnit};
pub use expr::{BoundExpr, BoundExprKind};
pub use options::BinderOptions;
pub use probe::{AccessResult, CallResult, Conversion, MemberProbe, RegistryProbe};
