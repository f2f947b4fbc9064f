//! Member lookup, overload resolution and conversion as seen by the binder.
//!
//! [`MemberProbe`] is the seam between await binding and the general
//! semantic machinery. The binder only ever sees typed results or error
//! markers; any diagnostics for collaborator-internal failures (ambiguous
//! calls, missing predefined types, use-site defects) are appended by the
//! probe itself.
//!
//! [`RegistryProbe`] implements the seam over a [`SymbolRegistry`].

use sable_core::{
    DataType, DiagnosticSink, FieldEntry, FunctionEntry, ProbeError, PropertyEntry, Span,
    TypeHash,
};
use sable_registry::{MemberLookup, SymbolRegistry, WellKnownType};

use crate::awaits::report;
use crate::expr::BoundExpr;

/// Outcome of resolving `receiver.name(args)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CallResult<'p> {
    /// A single best candidate.
    Call(&'p FunctionEntry),
    /// Candidates exist but resolution failed; already reported.
    Error,
    /// The name denotes a member that cannot be invoked through an instance
    /// (a property, a field or only static methods). Not reported.
    NotInvocable,
    /// The receiver has no member with that name and no extension applies.
    NotFound,
}

/// Outcome of resolving `receiver.name` as a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccessResult<'p> {
    Property(&'p PropertyEntry),
    Field(&'p FieldEntry),
    /// The name denotes a method group.
    Method,
    None,
}

/// Implicit conversion classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    Identity,
    DynamicToAny,
    DerivedToBase { base: TypeHash },
    ClassToInterface { interface: TypeHash },
    None,
}

impl Conversion {
    pub fn is_implicit(self) -> bool {
        !matches!(self, Conversion::None)
    }
}

/// Lookup services consumed by await binding.
///
/// Resolved members borrow from the symbol source (`'r`), not from the
/// probe, so bound nodes can outlive the probe value. Implementations must
/// be safe to share across binding workers; every method takes `&self`.
pub trait MemberProbe<'r> {
    /// Resolve an instance or extension method call on `receiver`.
    fn resolve_call(
        &self,
        receiver: &BoundExpr,
        name: &str,
        args: &[BoundExpr],
        span: Span,
        sink: &mut dyn DiagnosticSink,
    ) -> CallResult<'r>;

    /// Resolve an instance property or field named `name`.
    fn resolve_access(&self, receiver: DataType, name: &str) -> AccessResult<'r>;

    /// Classify the implicit conversion from `from` to `to`.
    fn classify_implicit(
        &self,
        from: DataType,
        to: DataType,
        span: Span,
        sink: &mut dyn DiagnosticSink,
    ) -> Conversion;

    /// Resolve a type by its fixed identity.
    fn well_known_type(
        &self,
        id: WellKnownType,
        span: Span,
        sink: &mut dyn DiagnosticSink,
    ) -> Option<DataType>;

    /// Display form of a type for diagnostics.
    fn type_display(&self, ty: DataType) -> String;
}

// ============================================================================
// Registry-backed probe
// ============================================================================

/// [`MemberProbe`] over a populated [`SymbolRegistry`].
#[derive(Clone, Copy)]
pub struct RegistryProbe<'r> {
    registry: &'r SymbolRegistry,
}

/// How a candidate accepts the argument list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Fit {
    /// One argument per parameter.
    Exact,
    /// Needs default values or variadic expansion.
    Expanded,
}

impl<'r> RegistryProbe<'r> {
    pub fn new(registry: &'r SymbolRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r SymbolRegistry {
        self.registry
    }

    /// Conversion check without diagnostics.
    fn converts(&self, from: DataType, to: DataType) -> bool {
        from.same_base(&to)
            || from.is_dynamic()
            || self.registry.is_subtype(from.type_hash, to.type_hash)
    }

    /// Whether the extension `function` accepts `receiver` as its receiver.
    fn extends(&self, function: &FunctionEntry, receiver: DataType) -> bool {
        let Some(target) = function.receiver_type() else {
            return false;
        };
        self.converts(receiver, target)
    }

    fn fit(&self, function: &FunctionEntry, args: &[BoundExpr]) -> Option<Fit> {
        if function.is_generic() {
            return None;
        }
        let params = function.call_params();
        let variadic = params.last().is_some_and(|p| p.is_variadic);
        let too_few = args.len() < function.required_arg_count();
        let too_many = !variadic && args.len() > params.len();
        if too_few || too_many {
            return None;
        }

        for (i, arg) in args.iter().enumerate() {
            let param = params.get(i).or_else(|| params.last())?;
            if let Some(ty) = arg.data_type
                && !self.converts(ty, param.data_type)
            {
                return None;
            }
        }

        if args.len() == params.len() && !variadic {
            Some(Fit::Exact)
        } else {
            Some(Fit::Expanded)
        }
    }

    /// Pick the unique best candidate, reporting ambiguity or arity mismatch.
    fn select(
        &self,
        candidates: &[&'r FunctionEntry],
        receiver: DataType,
        name: &str,
        args: &[BoundExpr],
        span: Span,
        sink: &mut dyn DiagnosticSink,
    ) -> CallResult<'r> {
        let fits: Vec<(Fit, &'r FunctionEntry)> = candidates
            .iter()
            .filter_map(|f| self.fit(f, args).map(|fit| (fit, *f)))
            .collect();

        let Some(best) = fits.iter().map(|(fit, _)| *fit).min() else {
            report::report(
                sink,
                span,
                ProbeError::NoApplicableOverload {
                    type_name: self.type_display(receiver),
                    member: name.to_string(),
                    args: args.len(),
                },
            );
            return CallResult::Error;
        };

        let winners: Vec<&'r FunctionEntry> = fits
            .iter()
            .filter(|(fit, _)| *fit == best)
            .map(|(_, f)| *f)
            .collect();

        match winners.as_slice() {
            [single] => CallResult::Call(single),
            _ => {
                report::report(
                    sink,
                    span,
                    ProbeError::AmbiguousCall {
                        type_name: self.type_display(receiver),
                        member: name.to_string(),
                        candidates: winners.len(),
                    },
                );
                CallResult::Error
            }
        }
    }

    fn report_use_site(&self, types: &[TypeHash], span: Span, sink: &mut dyn DiagnosticSink) {
        for &hash in types {
            let Some(entry) = self.registry.get_type(hash) else {
                continue;
            };
            if let Some(message) = entry.use_site_error() {
                report::report(
                    sink,
                    span,
                    ProbeError::UseSite {
                        type_name: self.registry.type_name(hash),
                        message: message.to_string(),
                    },
                );
            }
        }
    }
}

impl<'r> MemberProbe<'r> for RegistryProbe<'r> {
    fn resolve_call(
        &self,
        receiver: &BoundExpr,
        name: &str,
        args: &[BoundExpr],
        span: Span,
        sink: &mut dyn DiagnosticSink,
    ) -> CallResult<'r> {
        let Some(receiver_type) = receiver.data_type.filter(|t| !t.is_error()) else {
            return CallResult::NotFound;
        };
        if receiver_type.is_dynamic() {
            return CallResult::NotFound;
        }

        let shadowed = match self.registry.lookup_member(receiver_type.type_hash, name) {
            MemberLookup::Methods(methods) => {
                let instance: Vec<&FunctionEntry> =
                    methods.into_iter().filter(|m| !m.is_static()).collect();
                if !instance.is_empty() {
                    return self.select(&instance, receiver_type, name, args, span, sink);
                }
                true
            }
            MemberLookup::Property(_) | MemberLookup::Field(_) => true,
            MemberLookup::None => false,
        };

        let extensions: Vec<&FunctionEntry> = self
            .registry
            .extension_methods(name)
            .filter(|f| self.extends(f, receiver_type))
            .collect();
        if !extensions.is_empty() {
            return self.select(&extensions, receiver_type, name, args, span, sink);
        }

        if shadowed {
            CallResult::NotInvocable
        } else {
            CallResult::NotFound
        }
    }

    fn resolve_access(&self, receiver: DataType, name: &str) -> AccessResult<'r> {
        match self.registry.lookup_member(receiver.type_hash, name) {
            MemberLookup::Property(p) if !p.is_static => AccessResult::Property(p),
            MemberLookup::Field(f) if !f.is_static => AccessResult::Field(f),
            MemberLookup::Methods(_) => AccessResult::Method,
            _ => AccessResult::None,
        }
    }

    fn classify_implicit(
        &self,
        from: DataType,
        to: DataType,
        span: Span,
        sink: &mut dyn DiagnosticSink,
    ) -> Conversion {
        if from.same_base(&to) {
            return Conversion::Identity;
        }
        if from.is_dynamic() {
            return Conversion::DynamicToAny;
        }

        match self.registry.supertype_path(from.type_hash, to.type_hash) {
            Some(path) => {
                self.report_use_site(&path, span, sink);
                let target_is_interface = self
                    .registry
                    .get_type(to.type_hash)
                    .is_some_and(|t| t.is_interface());
                if target_is_interface {
                    Conversion::ClassToInterface {
                        interface: to.type_hash,
                    }
                } else {
                    Conversion::DerivedToBase { base: to.type_hash }
                }
            }
            None => {
                let mut visited = self.registry.ancestors(from.type_hash);
                visited.push(to.type_hash);
                self.report_use_site(&visited, span, sink);
                Conversion::None
            }
        }
    }

    fn well_known_type(
        &self,
        id: WellKnownType,
        span: Span,
        sink: &mut dyn DiagnosticSink,
    ) -> Option<DataType> {
        match self.registry.well_known(id) {
            Some(entry) => Some(DataType::simple(entry.type_hash())),
            None => {
                report::report(
                    sink,
                    span,
                    ProbeError::PredefinedTypeMissing {
                        name: id.qualified_name().to_string(),
                    },
                );
                None
            }
        }
    }

    fn type_display(&self, ty: DataType) -> String {
        let name = self.registry.type_name(ty.type_hash);
        if ty.is_const {
            format!("const {name}")
        } else {
            name
        }
    }
}
