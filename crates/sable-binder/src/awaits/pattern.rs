//! Structural resolution of the awaiter pattern.
//!
//! An operand of type `T` is awaitable when:
//!
//! 1. `T` is not `void`;
//! 2. `T` has a parameterless, non-generic accessor method (instance or
//!    extension) returning some awaiter type `A`;
//! 3. `A` has a readable instance `bool` completion property;
//! 4. `A` converts implicitly to the continuation capability;
//! 5. `A` may have a parameterless instance result method. If no member
//!    has that name, the pattern still succeeds and the check is left to a
//!    later phase. A static method, property or field of that name is
//!    malformed.
//!
//! Steps run in order and the first failure stops resolution. `dynamic`
//! operands succeed immediately with every member deferred.

use sable_core::{
    ArgumentError, AwaitError, DataType, DiagnosticBag, DiagnosticSink, FunctionEntry,
    PatternError, PropertyEntry, Span,
};

use crate::expr::BoundExpr;
use crate::options::BinderOptions;
use crate::probe::{AccessResult, CallResult, MemberProbe};

use super::bound::{AwaiterPattern, DeferralReason, PatternMember};
use super::report;

/// How a resolution step failed.
#[derive(Debug)]
enum StepFailure {
    /// Needs a diagnostic.
    Report(AwaitError),
    /// A collaborator already reported the cause.
    Reported,
}

impl From<ArgumentError> for StepFailure {
    fn from(error: ArgumentError) -> Self {
        StepFailure::Report(error.into())
    }
}

impl From<PatternError> for StepFailure {
    fn from(error: PatternError) -> Self {
        StepFailure::Report(error.into())
    }
}

type Step<T> = Result<T, StepFailure>;

/// Resolves the awaiter pattern for one operand type.
pub struct PatternResolver<'a, P: ?Sized> {
    probe: &'a P,
    options: &'a BinderOptions,
}

impl<'a, P: ?Sized> PatternResolver<'a, P> {
    pub fn new(probe: &'a P, options: &'a BinderOptions) -> Self {
        Self { probe, options }
    }
}

impl<'r, P: MemberProbe<'r> + ?Sized> PatternResolver<'_, P> {
    /// Resolve the pattern for `operand`, whose type is `operand_type`.
    ///
    /// The operand must carry no errors. The returned pattern keeps every
    /// member resolved before a failure; `success` tells whether the
    /// operand is awaitable.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn resolve(
        &self,
        operand: &BoundExpr,
        operand_type: DataType,
        span: Span,
        sink: &mut dyn DiagnosticSink,
    ) -> AwaiterPattern<'r> {
        if operand_type.is_dynamic() {
            return AwaiterPattern::dynamic();
        }

        let mut pattern = AwaiterPattern::failed();
        match self.resolve_steps(operand, operand_type, span, sink, &mut pattern) {
            Ok(()) => pattern.success = true,
            Err(failure) => {
                tracing::debug!(
                    operand = %self.probe.type_display(operand_type),
                    ?failure,
                    "awaiter pattern rejected"
                );
                if let StepFailure::Report(error) = failure {
                    report::report(sink, span, error);
                }
            }
        }
        pattern
    }

    fn resolve_steps(
        &self,
        operand: &BoundExpr,
        operand_type: DataType,
        span: Span,
        sink: &mut dyn DiagnosticSink,
        pattern: &mut AwaiterPattern<'r>,
    ) -> Step<()> {
        if operand_type.is_void() {
            return Err(ArgumentError::VoidOperand.into());
        }

        let accessor = self.awaiter_accessor(operand, operand_type, span)?;
        pattern.awaiter = PatternMember::Resolved(accessor);
        let awaiter_type = accessor.return_type;
        pattern.awaiter_type = Some(awaiter_type);

        if awaiter_type.is_dynamic() {
            pattern.is_dynamic = true;
            pattern.is_completed = PatternMember::Deferred(DeferralReason::DynamicDispatch);
            pattern.result = PatternMember::Deferred(DeferralReason::DynamicDispatch);
            return Ok(());
        }

        let flag = self.completion_flag(awaiter_type, operand_type)?;
        pattern.is_completed = PatternMember::Resolved(flag);

        self.check_capability(awaiter_type, span, sink)?;

        pattern.result = self.result_method(awaiter_type, operand_type, span, sink)?;
        Ok(())
    }

    /// Step 2: `operand.get_awaiter()`.
    fn awaiter_accessor(
        &self,
        operand: &BoundExpr,
        operand_type: DataType,
        span: Span,
    ) -> Step<&'r FunctionEntry> {
        // Every failure here collapses into one diagnostic, so the probe's
        // own diagnostics are dropped.
        let mut bag = DiagnosticBag::new();
        let name = &self.options.awaiter_method;
        match self.probe.resolve_call(operand, name, &[], span, &mut bag) {
            CallResult::Call(method)
                if !method.has_optional_or_variadic()
                    && !method.returns_void()
                    && !method.return_type.is_error() =>
            {
                Ok(method)
            }
            _ => Err(PatternError::BadAwaitArgument {
                type_name: self.probe.type_display(operand_type),
                method: name.clone(),
            }
            .into()),
        }
    }

    /// Step 3: readable `bool` completion property on the awaiter.
    fn completion_flag(
        &self,
        awaiter_type: DataType,
        operand_type: DataType,
    ) -> Step<&'r PropertyEntry> {
        let member = &self.options.completion_property;
        match self.probe.resolve_access(awaiter_type, member) {
            AccessResult::Property(property) if !property.is_readable() => {
                Err(PatternError::PropertyLacksGetter {
                    type_name: self.probe.type_display(awaiter_type),
                    member: member.clone(),
                }
                .into())
            }
            AccessResult::Property(property) if !property.data_type.is_bool() => {
                Err(self.malformed(awaiter_type, operand_type, member))
            }
            AccessResult::Property(property) => Ok(property),
            AccessResult::Field(_) | AccessResult::Method | AccessResult::None => {
                Err(PatternError::MissingMember {
                    type_name: self.probe.type_display(awaiter_type),
                    member: member.clone(),
                }
                .into())
            }
        }
    }

    /// Step 4: awaiter converts to the continuation capability.
    fn check_capability(
        &self,
        awaiter_type: DataType,
        span: Span,
        sink: &mut dyn DiagnosticSink,
    ) -> Step<()> {
        let capability_id = self.options.notify_capability;
        // A missing capability type is reported by the lookup alone.
        let Some(capability) = self.probe.well_known_type(capability_id, span, sink) else {
            return Err(StepFailure::Reported);
        };

        // Use-site diagnostics only matter when the conversion is missing.
        let mut use_site = DiagnosticBag::new();
        let conversion = self
            .probe
            .classify_implicit(awaiter_type, capability, span, &mut use_site);
        if conversion.is_implicit() {
            return Ok(());
        }

        for diagnostic in use_site {
            sink.report(diagnostic);
        }
        Err(PatternError::DoesNotImplement {
            type_name: self.probe.type_display(awaiter_type),
            capability: capability_id.qualified_name().to_string(),
        }
        .into())
    }

    /// Step 5: `awaiter.get_result()`. Absent is tolerated; present but not
    /// callable through the awaiter is not.
    fn result_method(
        &self,
        awaiter_type: DataType,
        operand_type: DataType,
        span: Span,
        sink: &mut dyn DiagnosticSink,
    ) -> Step<PatternMember<&'r FunctionEntry>> {
        let name = &self.options.result_method;
        let receiver = BoundExpr::local(awaiter_type, span);
        match self.probe.resolve_call(&receiver, name, &[], span, sink) {
            CallResult::NotFound => {
                tracing::debug!(
                    awaiter = %self.probe.type_display(awaiter_type),
                    member = %name,
                    "result accessor left for downstream validation"
                );
                let pending = DeferralReason::DownstreamValidation;
                Ok(PatternMember::Deferred(pending))
            }
            CallResult::Error => Err(StepFailure::Reported),
            CallResult::NotInvocable => Err(self.malformed(awaiter_type, operand_type, name)),
            CallResult::Call(method)
                if method.is_extension()
                    || method.has_optional_or_variadic()
                    || self.is_excluded(method) =>
            {
                Err(self.malformed(awaiter_type, operand_type, name))
            }
            CallResult::Call(method) => Ok(PatternMember::Resolved(method)),
        }
    }

    fn malformed(
        &self,
        awaiter_type: DataType,
        operand_type: DataType,
        member: &str,
    ) -> StepFailure {
        PatternError::MalformedPattern {
            awaiter_type: self.probe.type_display(awaiter_type),
            operand_type: self.probe.type_display(operand_type),
            member: member.to_string(),
        }
        .into()
    }

    /// Conditional on a symbol this build does not define.
    fn is_excluded(&self, method: &FunctionEntry) -> bool {
        method
            .conditional
            .as_deref()
            .is_some_and(|symbol| !self.options.is_defined(symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::RegistryProbe;
    use sable_core::{
        ClassEntry, DiagnosticCode, FieldEntry, FunctionTraits, InterfaceEntry, Param, TypeHash,
        primitives,
    };
    use sable_registry::{SymbolRegistry, WellKnownType};

    /// Registry with the capability, an operand type `Task` and awaiter `Awaiter`.
    /// Callers add whatever members the case needs.
    struct Fixture {
        registry: SymbolRegistry,
        task: TypeHash,
        awaiter: TypeHash,
    }

    impl Fixture {
        fn new(awaiter: ClassEntry) -> Self {
            let mut registry = SymbolRegistry::with_primitives();
            registry.register_type(capability()).unwrap();
            Self::without_capability(registry, awaiter)
        }

        fn without_capability(mut registry: SymbolRegistry, awaiter: ClassEntry) -> Self {
            let awaiter = registry.register_type(awaiter).unwrap();
            let task = registry.register_type(ClassEntry::new("Task")).unwrap();
            Self {
                registry,
                task,
                awaiter,
            }
        }

        /// A conforming awaiter with the given result type.
        fn conforming(result: DataType) -> Self {
            let mut f = Self::new(awaiter_class());
            f.add_accessor();
            f.add(FunctionEntry::method(f.awaiter, "get_result", result));
            f
        }

        fn add(&mut self, function: FunctionEntry) {
            self.registry.register_function(function).unwrap();
        }

        fn add_accessor(&mut self) {
            let awaiter = DataType::simple(self.awaiter);
            self.add(FunctionEntry::method(self.task, "get_awaiter", awaiter));
        }

        fn resolve(&self, options: &BinderOptions, bag: &mut DiagnosticBag) -> AwaiterPattern<'_> {
            self.resolve_type(DataType::simple(self.task), options, bag)
        }

        fn resolve_type(
            &self,
            ty: DataType,
            options: &BinderOptions,
            bag: &mut DiagnosticBag,
        ) -> AwaiterPattern<'_> {
            let probe = RegistryProbe::new(&self.registry);
            let operand = BoundExpr::local(ty, Span::new(3, 11, 4));
            PatternResolver::new(&probe, options).resolve(&operand, ty, operand.span, bag)
        }
    }

    fn capability() -> InterfaceEntry {
        let id = WellKnownType::NotifyCompletion;
        InterfaceEntry::qualified("NotifyCompletion", id.qualified_name())
    }

    fn completed_property() -> PropertyEntry {
        let getter = TypeHash::from_name("Awaiter::get_is_completed");
        PropertyEntry::read_only("is_completed", DataType::bool(), getter)
    }

    fn notify() -> TypeHash {
        WellKnownType::NotifyCompletion.type_hash()
    }

    /// Awaiter with the completion flag and the capability, no result method.
    fn awaiter_class() -> ClassEntry {
        ClassEntry::new("Awaiter")
            .with_interface(notify())
            .with_property(completed_property())
    }

    #[test]
    fn conforming_type_resolves_all_members() {
        let f = Fixture::conforming(DataType::int32());
        let mut bag = DiagnosticBag::new();
        let pattern = f.resolve(&BinderOptions::default(), &mut bag);

        assert!(pattern.success);
        assert!(bag.is_empty());
        assert_eq!(pattern.awaiter_type, Some(DataType::simple(f.awaiter)));
        let members = pattern.resolved();
        assert_eq!(
            members.awaiter.map(|m| m.name.as_str()),
            Some("get_awaiter")
        );
        assert_eq!(
            members.is_completed.map(|p| p.name.as_str()),
            Some("is_completed")
        );
        assert_eq!(
            members.result.map(|m| m.return_type),
            Some(DataType::int32())
        );
    }

    #[test]
    fn dynamic_operand_defers_everything() {
        let f = Fixture::new(ClassEntry::new("Awaiter"));
        let options = BinderOptions::default();
        let mut bag = DiagnosticBag::new();
        let pattern = f.resolve_type(DataType::dynamic(), &options, &mut bag);

        assert!(pattern.success);
        assert!(pattern.is_dynamic);
        assert_eq!(pattern.resolved().awaiter, None);
        assert!(bag.is_empty());
    }

    #[test]
    fn void_operand_is_an_argument_error() {
        let f = Fixture::conforming(DataType::int32());
        let options = BinderOptions::default();
        let mut bag = DiagnosticBag::new();
        let pattern = f.resolve_type(DataType::void(), &options, &mut bag);

        assert!(!pattern.success);
        assert_eq!(bag.codes(), vec![DiagnosticCode::AwaitVoid]);
    }

    #[test]
    fn missing_accessor() {
        let f = Fixture::new(ClassEntry::new("Awaiter"));
        let mut bag = DiagnosticBag::new();
        let pattern = f.resolve(&BinderOptions::default(), &mut bag);

        assert!(!pattern.success);
        assert_eq!(bag.codes(), vec![DiagnosticCode::BadAwaitArgument]);
        let diag = bag.iter().next().unwrap();
        assert_eq!(diag.args.type_name.as_deref(), Some("Task"));
        assert_eq!(diag.args.member.as_deref(), Some("get_awaiter"));
    }

    #[test]
    fn accessor_failures_collapse_to_one_diagnostic() {
        // Ambiguous overloads: the probe's own diagnostic is not surfaced.
        let mut f = Fixture::new(ClassEntry::new("Awaiter"));
        let awaiter = DataType::simple(f.awaiter);
        for param in [
            Param::optional("a", DataType::int32()),
            Param::optional("b", DataType::bool()),
        ] {
            let accessor = FunctionEntry::method(f.task, "get_awaiter", awaiter);
            f.add(accessor.with_param(param));
        }
        let mut bag = DiagnosticBag::new();
        f.resolve(&BinderOptions::default(), &mut bag);
        assert_eq!(bag.codes(), vec![DiagnosticCode::BadAwaitArgument]);
    }

    #[test]
    fn accessor_with_optional_parameter_is_rejected() {
        let mut f = Fixture::new(ClassEntry::new("Awaiter"));
        let param = Param::optional("continue_on_context", DataType::bool());
        let awaiter = DataType::simple(f.awaiter);
        let accessor = FunctionEntry::method(f.task, "get_awaiter", awaiter);
        f.add(accessor.with_param(param));
        let mut bag = DiagnosticBag::new();
        assert!(!f.resolve(&BinderOptions::default(), &mut bag).success);
        assert_eq!(bag.codes(), vec![DiagnosticCode::BadAwaitArgument]);
    }

    #[test]
    fn generic_accessor_is_rejected() {
        let mut f = Fixture::new(awaiter_class());
        let awaiter = DataType::simple(f.awaiter);
        let accessor = FunctionEntry::method(f.task, "get_awaiter", awaiter);
        f.add(accessor.with_type_params(["TScheduler"]));
        let mut bag = DiagnosticBag::new();
        let pattern = f.resolve(&BinderOptions::default(), &mut bag);

        assert!(!pattern.success);
        assert!(!pattern.awaiter.is_resolved());
        assert_eq!(bag.codes(), vec![DiagnosticCode::BadAwaitArgument]);
    }

    #[test]
    fn generic_result_method_fails_instead_of_deferring() {
        let mut f = Fixture::new(awaiter_class());
        f.add_accessor();
        let result = FunctionEntry::method(f.awaiter, "get_result", DataType::int32());
        f.add(result.with_type_params(["T"]));
        let mut bag = DiagnosticBag::new();
        let pattern = f.resolve(&BinderOptions::default(), &mut bag);

        assert!(!pattern.success);
        assert!(!pattern.result_pending_validation());
        assert_eq!(bag.codes(), vec![DiagnosticCode::NoApplicableOverload]);
    }

    #[test]
    fn void_accessor_is_rejected() {
        let mut f = Fixture::new(ClassEntry::new("Awaiter"));
        let accessor = FunctionEntry::method(f.task, "get_awaiter", DataType::void());
        f.add(accessor);
        let mut bag = DiagnosticBag::new();
        assert!(!f.resolve(&BinderOptions::default(), &mut bag).success);
        assert_eq!(bag.codes(), vec![DiagnosticCode::BadAwaitArgument]);
    }

    #[test]
    fn extension_accessor_is_accepted() {
        let mut f = Fixture::new(awaiter_class());
        let task = DataType::simple(f.task);
        let awaiter = DataType::simple(f.awaiter);
        f.add(FunctionEntry::extension("get_awaiter", task, awaiter));
        let mut bag = DiagnosticBag::new();
        let pattern = f.resolve(&BinderOptions::default(), &mut bag);

        assert!(pattern.success);
        assert!(pattern.awaiter.get().is_some_and(|m| m.is_extension()));
        assert!(pattern.result_pending_validation());
    }

    #[test]
    fn missing_completion_property() {
        let mut f = Fixture::new(ClassEntry::new("Awaiter").with_interface(notify()));
        f.add_accessor();
        let mut bag = DiagnosticBag::new();
        let pattern = f.resolve(&BinderOptions::default(), &mut bag);

        assert!(!pattern.success);
        assert!(pattern.awaiter.is_resolved());
        assert!(!pattern.is_completed.is_resolved());
        assert_eq!(bag.codes(), vec![DiagnosticCode::MissingMember]);
    }

    #[test]
    fn completion_field_counts_as_missing() {
        let field = FieldEntry::new("is_completed", DataType::bool());
        let awaiter = ClassEntry::new("Awaiter")
            .with_interface(notify())
            .with_field(field);
        let mut f = Fixture::new(awaiter);
        f.add_accessor();
        let mut bag = DiagnosticBag::new();
        f.resolve(&BinderOptions::default(), &mut bag);
        assert_eq!(bag.codes(), vec![DiagnosticCode::MissingMember]);
    }

    #[test]
    fn write_only_completion_property() {
        let setter = TypeHash::from_name("Awaiter::set_is_completed");
        let flag = PropertyEntry::write_only("is_completed", DataType::bool(), setter);
        let awaiter = ClassEntry::new("Awaiter")
            .with_interface(notify())
            .with_property(flag);
        let mut f = Fixture::new(awaiter);
        f.add_accessor();
        let mut bag = DiagnosticBag::new();
        f.resolve(&BinderOptions::default(), &mut bag);
        assert_eq!(bag.codes(), vec![DiagnosticCode::PropertyLacksGetter]);
    }

    #[test]
    fn non_bool_completion_property() {
        let getter = TypeHash::from_name("Awaiter::get_is_completed");
        let flag = PropertyEntry::read_only("is_completed", DataType::int32(), getter);
        let awaiter = ClassEntry::new("Awaiter")
            .with_interface(notify())
            .with_property(flag);
        let mut f = Fixture::new(awaiter);
        f.add_accessor();
        let mut bag = DiagnosticBag::new();
        f.resolve(&BinderOptions::default(), &mut bag);

        assert_eq!(bag.codes(), vec![DiagnosticCode::BadAwaiterPattern]);
        let diag = bag.iter().next().unwrap();
        assert_eq!(diag.args.type_name.as_deref(), Some("Awaiter"));
        assert_eq!(diag.args.other_type.as_deref(), Some("Task"));
    }

    #[test]
    fn missing_capability() {
        let awaiter = ClassEntry::new("Awaiter").with_property(completed_property());
        let mut f = Fixture::new(awaiter);
        f.add_accessor();
        let mut bag = DiagnosticBag::new();
        let pattern = f.resolve(&BinderOptions::default(), &mut bag);

        assert!(!pattern.success);
        assert!(pattern.is_completed.is_resolved());
        let expected = vec![DiagnosticCode::DoesNotImplementCapability];
        assert_eq!(bag.codes(), expected);
    }

    #[test]
    fn missing_capability_surfaces_use_site_defects() {
        let awaiter = ClassEntry::new("Awaiter")
            .with_property(completed_property())
            .with_use_site_error("declared in an unreferenced module");
        let mut f = Fixture::new(awaiter);
        f.add_accessor();
        let mut bag = DiagnosticBag::new();
        f.resolve(&BinderOptions::default(), &mut bag);

        let codes = bag.codes();
        assert_eq!(codes.len(), 2);
        assert_eq!(codes[0], DiagnosticCode::UseSiteError);
        assert_eq!(codes[1], DiagnosticCode::DoesNotImplementCapability);
    }

    #[test]
    fn missing_capability_type() {
        let registry = SymbolRegistry::with_primitives();
        let awaiter = ClassEntry::new("Awaiter").with_property(completed_property());
        let mut f = Fixture::without_capability(registry, awaiter);
        f.add_accessor();
        let mut bag = DiagnosticBag::new();
        let pattern = f.resolve(&BinderOptions::default(), &mut bag);

        assert!(!pattern.success);
        assert_eq!(bag.codes(), vec![DiagnosticCode::PredefinedTypeMissing]);
    }

    #[test]
    fn absent_result_accessor_is_deferred() {
        let mut f = Fixture::new(awaiter_class());
        f.add_accessor();
        let mut bag = DiagnosticBag::new();
        let pattern = f.resolve(&BinderOptions::default(), &mut bag);

        assert!(pattern.success);
        assert!(bag.is_empty());
        assert!(pattern.result_pending_validation());
        assert_eq!(pattern.resolved().result, None);
    }

    #[test]
    fn static_result_method_is_malformed() {
        let mut f = Fixture::new(awaiter_class());
        f.add_accessor();
        let result = FunctionEntry::method(f.awaiter, "get_result", DataType::int32());
        f.add(result.with_traits(FunctionTraits::STATIC));
        let mut bag = DiagnosticBag::new();
        let pattern = f.resolve(&BinderOptions::default(), &mut bag);

        assert!(!pattern.success);
        assert!(!pattern.result_pending_validation());
        assert_eq!(bag.codes(), vec![DiagnosticCode::BadAwaiterPattern]);
        let diag = bag.iter().next().unwrap();
        assert_eq!(diag.args.member.as_deref(), Some("get_result"));
    }

    #[test]
    fn result_property_is_malformed() {
        let getter = TypeHash::from_name("Awaiter::get_get_result");
        let result = PropertyEntry::read_only("get_result", DataType::int32(), getter);
        let mut f = Fixture::new(awaiter_class().with_property(result));
        f.add_accessor();
        let mut bag = DiagnosticBag::new();
        let pattern = f.resolve(&BinderOptions::default(), &mut bag);

        assert!(!pattern.success);
        assert!(!pattern.result_pending_validation());
        assert_eq!(bag.codes(), vec![DiagnosticCode::BadAwaiterPattern]);
        let diag = bag.iter().next().unwrap();
        assert_eq!(diag.args.type_name.as_deref(), Some("Awaiter"));
        assert_eq!(diag.args.other_type.as_deref(), Some("Task"));
    }

    #[test]
    fn extension_result_accessor_is_malformed() {
        let mut f = Fixture::new(awaiter_class());
        f.add_accessor();
        let awaiter = DataType::simple(f.awaiter);
        let result = FunctionEntry::extension("get_result", awaiter, DataType::int32());
        f.add(result);
        let mut bag = DiagnosticBag::new();
        let pattern = f.resolve(&BinderOptions::default(), &mut bag);

        assert!(!pattern.success);
        assert_eq!(bag.codes(), vec![DiagnosticCode::BadAwaiterPattern]);
    }

    #[test]
    fn variadic_result_accessor_is_malformed() {
        let mut f = Fixture::new(awaiter_class());
        f.add_accessor();
        let rest = Param::variadic("rest", DataType::int32());
        let result = FunctionEntry::method(f.awaiter, "get_result", DataType::int32());
        f.add(result.with_param(rest));
        let mut bag = DiagnosticBag::new();
        f.resolve(&BinderOptions::default(), &mut bag);
        assert_eq!(bag.codes(), vec![DiagnosticCode::BadAwaiterPattern]);
    }

    #[test]
    fn conditional_result_accessor_depends_on_symbols() {
        let mut f = Fixture::new(awaiter_class());
        f.add_accessor();
        let result = FunctionEntry::method(f.awaiter, "get_result", DataType::void());
        f.add(result.conditional_on("DEBUG"));

        let mut bag = DiagnosticBag::new();
        assert!(!f.resolve(&BinderOptions::default(), &mut bag).success);
        assert_eq!(bag.codes(), vec![DiagnosticCode::BadAwaiterPattern]);

        let mut bag = DiagnosticBag::new();
        let debug = BinderOptions::default().with_defined_symbol("DEBUG");
        assert!(f.resolve(&debug, &mut bag).success);
        assert!(bag.is_empty());
    }

    #[test]
    fn ambiguous_result_accessor_fails_without_extra_diagnostic() {
        let mut f = Fixture::new(awaiter_class());
        f.add_accessor();
        for param in [
            Param::optional("a", DataType::int32()),
            Param::optional("b", DataType::bool()),
        ] {
            let result = FunctionEntry::method(f.awaiter, "get_result", DataType::int32());
            f.add(result.with_param(param));
        }
        let mut bag = DiagnosticBag::new();
        let pattern = f.resolve(&BinderOptions::default(), &mut bag);

        assert!(!pattern.success);
        assert_eq!(bag.codes(), vec![DiagnosticCode::AmbiguousCall]);
    }

    #[test]
    fn dynamic_awaiter_defers_remaining_members() {
        let mut f = Fixture::new(ClassEntry::new("Awaiter"));
        let accessor = FunctionEntry::method(f.task, "get_awaiter", DataType::dynamic());
        f.add(accessor);
        let mut bag = DiagnosticBag::new();
        let pattern = f.resolve(&BinderOptions::default(), &mut bag);

        assert!(pattern.success);
        assert!(pattern.is_dynamic);
        assert!(pattern.awaiter.is_resolved());
        assert!(pattern.is_completed.is_deferred());
        let awaiter_type = pattern.awaiter_type.map(|t| t.type_hash);
        assert_eq!(awaiter_type, Some(primitives::DYNAMIC));
    }

    #[test]
    fn configured_member_names() {
        let getter = TypeHash::from_name("Awaiter::get_done");
        let done = PropertyEntry::read_only("done", DataType::bool(), getter);
        let awaiter = ClassEntry::new("Awaiter")
            .with_interface(notify())
            .with_property(done);
        let mut f = Fixture::new(awaiter);
        let awaiter = DataType::simple(f.awaiter);
        f.add(FunctionEntry::method(f.task, "awaiter", awaiter));
        f.add(FunctionEntry::method(f.awaiter, "result", DataType::bool()));
        let options = BinderOptions::default()
            .with_awaiter_method("awaiter")
            .with_completion_property("done")
            .with_result_method("result");

        let mut bag = DiagnosticBag::new();
        let pattern = f.resolve(&options, &mut bag);
        assert!(pattern.success, "{bag:?}");
        assert!(pattern.result.is_resolved());
    }
}
