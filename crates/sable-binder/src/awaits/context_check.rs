//! Positional legality of an await.
//!
//! Two stages, each reporting at most one diagnostic:
//!
//! 1. The enclosing unit must be async. If not, the diagnostic depends on
//!    what the unit is, and no region check runs.
//! 2. Region restrictions, first match wins: unsafe region (unless it
//!    allows await), lock body, catch filter, then catch and finally blocks
//!    when the options forbid them.

use sable_core::{ContextError, DiagnosticSink, DiscardSink, Span};

use crate::context::{BinderFlags, BindingContext, EnclosingUnit};
use crate::options::BinderOptions;
use crate::probe::MemberProbe;

use super::report;

/// The context error for an await at `ctx`, if any.
pub fn context_error<'r, P: MemberProbe<'r> + ?Sized>(
    ctx: &BindingContext<'_>,
    options: &BinderOptions,
    probe: &P,
) -> Option<ContextError> {
    if !ctx.is_async() {
        return Some(match ctx.unit {
            EnclosingUnit::NotMethod { .. } => ContextError::WithoutAsync,
            EnclosingUnit::AnonymousFunction {
                implicitly_generated: true,
                ..
            } => ContextError::InQuery,
            EnclosingUnit::AnonymousFunction { kind, .. } => ContextError::WithoutAsyncAnonymous {
                construct: kind.display().to_string(),
            },
            EnclosingUnit::Method {
                name, return_type, ..
            } if return_type.is_void() => ContextError::WithoutAsyncVoidMethod {
                method: name.clone(),
            },
            EnclosingUnit::Method {
                name, return_type, ..
            } => ContextError::WithoutAsyncMethod {
                method: name.clone(),
                return_type: probe.type_display(*return_type),
            },
        });
    }

    let flags = ctx.flags;
    if flags.contains(BinderFlags::UNSAFE_REGION)
        && !flags.contains(BinderFlags::ALLOW_AWAIT_IN_UNSAFE)
    {
        Some(ContextError::InUnsafe)
    } else if flags.contains(BinderFlags::IN_LOCK_BODY) {
        Some(ContextError::InLock)
    } else if flags.contains(BinderFlags::IN_CATCH_FILTER) {
        Some(ContextError::InCatchFilter)
    } else if flags.contains(BinderFlags::IN_CATCH_BLOCK) && !options.allow_await_in_catch {
        Some(ContextError::InCatch)
    } else if flags.contains(BinderFlags::IN_FINALLY_BLOCK) && !options.allow_await_in_finally {
        Some(ContextError::InFinally)
    } else {
        None
    }
}

/// Check the await position, reporting to `sink`. Returns `true` on error.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn check_context<'r, P: MemberProbe<'r> + ?Sized>(
    ctx: &BindingContext<'_>,
    options: &BinderOptions,
    probe: &P,
    span: Span,
    sink: &mut dyn DiagnosticSink,
) -> bool {
    match context_error(ctx, options, probe) {
        Some(error) => {
            tracing::debug!(%span, %error, "await rejected by context");
            report::report(sink, span, error);
            true
        }
        None => false,
    }
}

/// Speculative form of [`check_context`]: nothing is reported.
pub fn is_context_legal<'r, P: MemberProbe<'r> + ?Sized>(
    ctx: &BindingContext<'_>,
    options: &BinderOptions,
    probe: &P,
) -> bool {
    !check_context(ctx, options, probe, Span::default(), &mut DiscardSink)
}
