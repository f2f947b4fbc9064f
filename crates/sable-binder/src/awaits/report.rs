//! Mapping from await failures to diagnostics.
//!
//! Each failure kind has exactly one [`DiagnosticCode`] and fills a fixed
//! set of argument slots; the message is the error's `Display` form.

use sable_core::{
    ArgumentError, AwaitError, ContextError, Diagnostic, DiagnosticArgs, DiagnosticCode,
    DiagnosticSink, PatternError, ProbeError, Span,
};

/// Diagnostic code for a failure.
pub fn code_for(error: &AwaitError) -> DiagnosticCode {
    match error {
        AwaitError::Context(e) => match e {
            ContextError::WithoutAsync => DiagnosticCode::AwaitWithoutAsync,
            ContextError::InQuery => DiagnosticCode::AwaitInQuery,
            ContextError::WithoutAsyncAnonymous { .. } => {
                DiagnosticCode::AwaitWithoutAsyncAnonymous
            }
            ContextError::WithoutAsyncVoidMethod { .. } => {
                DiagnosticCode::AwaitWithoutAsyncVoidMethod
            }
            ContextError::WithoutAsyncMethod { .. } => DiagnosticCode::AwaitWithoutAsyncMethod,
            ContextError::InUnsafe => DiagnosticCode::AwaitInUnsafe,
            ContextError::InLock => DiagnosticCode::AwaitInLock,
            ContextError::InCatchFilter => DiagnosticCode::AwaitInCatchFilter,
            ContextError::InCatch => DiagnosticCode::AwaitInCatch,
            ContextError::InFinally => DiagnosticCode::AwaitInFinally,
        },
        AwaitError::Argument(e) => match e {
            ArgumentError::VoidOperand => DiagnosticCode::AwaitVoid,
            ArgumentError::Intrinsic { .. } => DiagnosticCode::AwaitIntrinsic,
        },
        AwaitError::Pattern(e) => match e {
            PatternError::BadAwaitArgument { .. } => DiagnosticCode::BadAwaitArgument,
            PatternError::MissingMember { .. } | PatternError::MissingResultAccessor { .. } => {
                DiagnosticCode::MissingMember
            }
            PatternError::PropertyLacksGetter { .. } => DiagnosticCode::PropertyLacksGetter,
            PatternError::MalformedPattern { .. } => DiagnosticCode::BadAwaiterPattern,
            PatternError::DoesNotImplement { .. } => DiagnosticCode::DoesNotImplementCapability,
        },
        AwaitError::Probe(e) => match e {
            ProbeError::AmbiguousCall { .. } => DiagnosticCode::AmbiguousCall,
            ProbeError::NoApplicableOverload { .. } => DiagnosticCode::NoApplicableOverload,
            ProbeError::PredefinedTypeMissing { .. } => DiagnosticCode::PredefinedTypeMissing,
            ProbeError::UseSite { .. } => DiagnosticCode::UseSiteError,
        },
    }
}

/// Argument slots for a failure.
pub fn args_for(error: &AwaitError) -> DiagnosticArgs {
    let args = DiagnosticArgs::default();
    match error {
        AwaitError::Context(e) => match e {
            ContextError::WithoutAsyncAnonymous { construct } => args.with_construct(construct),
            ContextError::WithoutAsyncVoidMethod { method } => args.with_member(method),
            ContextError::WithoutAsyncMethod {
                method,
                return_type,
            } => args.with_member(method).with_type(return_type),
            _ => args,
        },
        AwaitError::Argument(e) => match e {
            ArgumentError::VoidOperand => args.with_type("void"),
            ArgumentError::Intrinsic { operand } => args.with_construct(operand),
        },
        AwaitError::Pattern(e) => match e {
            PatternError::BadAwaitArgument { type_name, method } => {
                args.with_type(type_name).with_member(method)
            }
            PatternError::MissingMember { type_name, member }
            | PatternError::PropertyLacksGetter { type_name, member }
            | PatternError::MissingResultAccessor { type_name, member } => {
                args.with_type(type_name).with_member(member)
            }
            PatternError::MalformedPattern {
                awaiter_type,
                operand_type,
                member,
            } => args
                .with_type(awaiter_type)
                .with_other_type(operand_type)
                .with_member(member),
            PatternError::DoesNotImplement {
                type_name,
                capability,
            } => args.with_type(type_name).with_other_type(capability),
        },
        AwaitError::Probe(e) => match e {
            ProbeError::AmbiguousCall {
                type_name, member, ..
            }
            | ProbeError::NoApplicableOverload {
                type_name, member, ..
            } => args.with_type(type_name).with_member(member),
            ProbeError::PredefinedTypeMissing { name } => args.with_type(name),
            ProbeError::UseSite { type_name, .. } => args.with_type(type_name),
        },
    }
}

/// Build the diagnostic for a failure at `span`.
pub fn diagnostic(error: &AwaitError, span: Span) -> Diagnostic {
    Diagnostic::error(code_for(error), span, args_for(error), error.to_string())
}

/// Report a failure to `sink`.
pub fn report(sink: &mut dyn DiagnosticSink, span: Span, error: impl Into<AwaitError>) {
    let error = error.into();
    tracing::trace!(code = %code_for(&error), %span, "await diagnostic");
    sink.report(diagnostic(&error, span));
}
