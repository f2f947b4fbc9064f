//! The await binder: context check, operand check, pattern resolution and
//! classification composed into one total operation.

use sable_core::{ArgumentError, DataType, DiagnosticSink, DiscardSink, Span};

use crate::context::BindingContext;
use crate::expr::BoundExpr;
use crate::options::BinderOptions;
use crate::probe::MemberProbe;

use super::bound::{AwaitFailures, AwaiterPattern, BoundAwait};
use super::classify::classify_result;
use super::context_check::check_context;
use super::pattern::PatternResolver;
use super::report;

/// Binds await expressions against a [`MemberProbe`].
///
/// The binder holds no mutable state; one instance can serve many workers.
///
/// ```
/// use sable_binder::{AwaitBinder, BindingContext, BoundExpr, EnclosingUnit, RegistryProbe};
/// use sable_core::{DataType, DiagnosticBag, DiagnosticCode, Span};
/// use sable_registry::SymbolRegistry;
///
/// let registry = SymbolRegistry::with_primitives();
/// let probe = RegistryProbe::new(&registry);
/// let binder = AwaitBinder::new(&probe);
///
/// let unit = EnclosingUnit::sync_method("main", DataType::void());
/// let operand = BoundExpr::local(DataType::int32(), Span::new(2, 11, 1));
/// let mut diagnostics = DiagnosticBag::new();
/// let ctx = BindingContext::new(&unit);
/// let node = binder.bind(&operand, &ctx, Span::new(2, 5, 7), &mut diagnostics);
///
/// assert!(node.has_errors);
/// let expected = vec![DiagnosticCode::AwaitWithoutAsyncVoidMethod];
/// assert_eq!(diagnostics.codes(), expected);
/// ```
pub struct AwaitBinder<'a, P: ?Sized> {
    probe: &'a P,
    options: BinderOptions,
}

impl<'a, P: ?Sized> AwaitBinder<'a, P> {
    pub fn new(probe: &'a P) -> Self {
        Self {
            probe,
            options: BinderOptions::default(),
        }
    }

    pub fn with_options(mut self, options: BinderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &BinderOptions {
        &self.options
    }

    pub fn probe(&self) -> &'a P {
        self.probe
    }
}

impl<'r, P: MemberProbe<'r> + ?Sized> AwaitBinder<'_, P> {
    /// Bind `await operand` spanning `span`. Always produces a node.
    pub fn bind<'e>(
        &self,
        operand: &'e BoundExpr,
        ctx: &BindingContext<'_>,
        span: Span,
        sink: &mut dyn DiagnosticSink,
    ) -> BoundAwait<'e>
    where
        'r: 'e,
    {
        bind_await(self.probe, &self.options, operand, ctx, span, sink)
    }

    /// Whether `operand` could be awaited at `ctx`, with no diagnostics kept.
    pub fn could_be_awaited(&self, operand: &BoundExpr, ctx: &BindingContext<'_>) -> bool {
        could_be_awaited(self.probe, &self.options, operand, ctx)
    }
}

/// Bind `await operand` with an explicit probe and options.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn bind_await<'r, 'e, P: MemberProbe<'r> + ?Sized>(
    probe: &P,
    options: &BinderOptions,
    operand: &'e BoundExpr,
    ctx: &BindingContext<'_>,
    span: Span,
    sink: &mut dyn DiagnosticSink,
) -> BoundAwait<'e>
where
    'r: 'e,
{
    let context_failed = check_context(ctx, options, probe, span, sink);
    let mut failures = AwaitFailures::empty();
    if context_failed {
        failures |= AwaitFailures::CONTEXT;
    }

    let pattern: AwaiterPattern<'e> = match awaitable_type(operand) {
        Err(error) => {
            failures |= AwaitFailures::ARGUMENT;
            // A context failure already explains this await.
            if let Some(error) = error
                && !context_failed
            {
                report::report(sink, operand.span, error);
            }
            AwaiterPattern::failed()
        }
        Ok(_) if context_failed => AwaiterPattern::failed(),
        Ok(operand_type) => {
            let resolver = PatternResolver::new(probe, options);
            let pattern = resolver.resolve(operand, operand_type, span, sink);
            if !pattern.success {
                failures |= AwaitFailures::PATTERN;
            }
            pattern
        }
    };

    let result = classify_result(!context_failed, &pattern, operand.data_type);
    let has_errors = !failures.is_empty();
    tracing::trace!(%span, ?result, ?failures, "bound await");

    BoundAwait {
        operand,
        pattern,
        result,
        has_errors,
        failures,
        span,
    }
}

/// Speculative binding: runs the full pipeline against a discarding sink.
pub fn could_be_awaited<'r, P: MemberProbe<'r> + ?Sized>(
    probe: &P,
    options: &BinderOptions,
    operand: &BoundExpr,
    ctx: &BindingContext<'_>,
) -> bool {
    !bind_await(probe, options, operand, ctx, operand.span, &mut DiscardSink).has_errors
}

/// The operand's type if it can be awaited at all.
///
/// `Err(None)` means the operand is already erroneous and its cause was
/// reported elsewhere.
fn awaitable_type(operand: &BoundExpr) -> Result<DataType, Option<ArgumentError>> {
    if operand.has_errors {
        return Err(None);
    }
    match operand.data_type {
        None => Err(Some(ArgumentError::Intrinsic {
            operand: operand.display.clone(),
        })),
        Some(ty) if ty.is_error() => Err(None),
        Some(ty) if ty.is_void() => Err(Some(ArgumentError::VoidOperand)),
        Some(ty) => Ok(ty),
    }
}
