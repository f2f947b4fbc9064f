//! Await-expression binding.
//!
//! ```text
//! bind_await
//! ├── context_check   positional legality
//! ├── awaitable_type  operand can be awaited at all
//! ├── pattern         accessor / completion flag / capability / result accessor
//! └── classify        result type of the expression
//! ```
//!
//! Every failure is reported through [`report`] and recorded on the
//! [`BoundAwait`]; nothing here returns an error.

mod binder;
mod bound;
mod classify;
mod context_check;
mod deferred;
mod pattern;
pub mod report;

pub use binder::{AwaitBinder, bind_await, could_be_awaited};
pub use bound::{
    AwaitFailures, AwaitResultType, AwaiterPattern, BoundAwait, DeferralReason, PatternMember,
    ResolvedMembers,
};
pub use classify::classify_result;
pub use context_check::{check_context, context_error, is_context_legal};
pub use deferred::{RequireResultAccessor, ResultAccessorValidator};
pub use pattern::PatternResolver;
