//! Deferred validation of the result accessor.
//!
//! Pattern resolution tolerates an awaiter without a result accessor and
//! marks the member as pending. Whichever later phase needs the accessor
//! (lowering, typically) runs a [`ResultAccessorValidator`] over the node;
//! binding itself never does.

use sable_core::{DiagnosticSink, PatternError};

use crate::options::BinderOptions;
use crate::probe::MemberProbe;

use super::bound::BoundAwait;
use super::report;

/// Decides whether a bound await's result accessor is acceptable.
pub trait ResultAccessorValidator {
    /// Report any problem to `sink`; returns `true` when the node is usable.
    fn validate(&self, node: &BoundAwait<'_>, sink: &mut dyn DiagnosticSink) -> bool;
}

/// Requires a resolved result accessor on every error-free await.
pub struct RequireResultAccessor<'a, P: ?Sized> {
    probe: &'a P,
    result_method: String,
}

impl<'a, P: ?Sized> RequireResultAccessor<'a, P> {
    pub fn new(probe: &'a P, options: &BinderOptions) -> Self {
        Self {
            probe,
            result_method: options.result_method.clone(),
        }
    }
}

impl<'r, P> ResultAccessorValidator for RequireResultAccessor<'_, P>
where
    P: MemberProbe<'r> + ?Sized,
{
    fn validate(&self, node: &BoundAwait<'_>, sink: &mut dyn DiagnosticSink) -> bool {
        if node.has_errors || !node.pattern.result_pending_validation() {
            return true;
        }
        let Some(awaiter_type) = node.pattern.awaiter_type else {
            return true;
        };

        tracing::debug!(
            span = %node.span,
            member = %self.result_method,
            "result accessor missing"
        );
        report::report(
            sink,
            node.span,
            PatternError::MissingResultAccessor {
                type_name: self.probe.type_display(awaiter_type),
                member: self.result_method.clone(),
            },
        );
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::awaits::binder::bind_await;
    use crate::context::{BindingContext, EnclosingUnit};
    use crate::expr::BoundExpr;
    use crate::probe::RegistryProbe;
    use sable_core::{
        ClassEntry, DataType, DiagnosticBag, DiagnosticCode, FunctionEntry, InterfaceEntry,
        PropertyEntry, Span, TypeHash,
    };
    use sable_registry::{SymbolRegistry, WellKnownType};

    /// `Task.get_awaiter() -> Awaiter`, where `Awaiter` lacks `get_result`
    /// unless `with_result` is set.
    fn registry(with_result: bool) -> (SymbolRegistry, TypeHash) {
        let mut registry = SymbolRegistry::with_primitives();
        let id = WellKnownType::NotifyCompletion;
        let capability = InterfaceEntry::qualified("NotifyCompletion", id.qualified_name());
        let notify = registry.register_type(capability).unwrap();

        let getter = TypeHash::from_name("Awaiter::get_is_completed");
        let flag = PropertyEntry::read_only("is_completed", DataType::bool(), getter);
        let awaiter = ClassEntry::new("Awaiter")
            .with_interface(notify)
            .with_property(flag);
        let awaiter = registry.register_type(awaiter).unwrap();
        if with_result {
            let result = FunctionEntry::method(awaiter, "get_result", DataType::void());
            registry.register_function(result).unwrap();
        }

        let task = registry.register_type(ClassEntry::new("Task")).unwrap();
        let accessor = FunctionEntry::method(task, "get_awaiter", DataType::simple(awaiter));
        registry.register_function(accessor).unwrap();
        (registry, task)
    }

    fn validate(with_result: bool) -> (bool, DiagnosticBag) {
        let (registry, task) = registry(with_result);
        let probe = RegistryProbe::new(&registry);
        let options = BinderOptions::default();
        let unit = EnclosingUnit::async_method("run", DataType::void());
        let operand = BoundExpr::local(DataType::simple(task), Span::new(1, 7, 4));

        let ctx = BindingContext::new(&unit);
        let span = Span::new(1, 1, 10);

        let mut bag = DiagnosticBag::new();
        let node = bind_await(&probe, &options, &operand, &ctx, span, &mut bag);
        assert!(!node.has_errors);
        assert!(bag.is_empty());

        let ok = RequireResultAccessor::new(&probe, &options).validate(&node, &mut bag);
        (ok, bag)
    }

    #[test]
    fn missing_accessor_is_reported_downstream() {
        let (ok, bag) = validate(false);
        assert!(!ok);
        assert_eq!(bag.codes(), vec![DiagnosticCode::MissingMember]);
        let diag = bag.iter().next().unwrap();
        assert_eq!(diag.args.type_name.as_deref(), Some("Awaiter"));
        assert_eq!(diag.args.member.as_deref(), Some("get_result"));
    }

    #[test]
    fn resolved_accessor_passes() {
        let (ok, bag) = validate(true);
        assert!(ok);
        assert!(bag.is_empty());
    }
}
