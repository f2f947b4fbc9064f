//! Bound await nodes and the awaiter pattern they carry.

use bitflags::bitflags;
use sable_core::{DataType, FunctionEntry, PropertyEntry, Span};

use crate::expr::BoundExpr;

/// Why a pattern member is left for a later phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeferralReason {
    /// The awaited value is `dynamic`; members bind at run time.
    DynamicDispatch,
    /// Absent here; a later validation phase decides whether that is an error.
    DownstreamValidation,
}

/// One member of the awaiter pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PatternMember<T> {
    Resolved(T),
    /// Not resolved because resolution stopped earlier or failed here.
    Unresolved,
    Deferred(DeferralReason),
}

impl<T: Copy> PatternMember<T> {
    pub fn get(&self) -> Option<T> {
        match self {
            PatternMember::Resolved(member) => Some(*member),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, PatternMember::Resolved(_))
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, PatternMember::Deferred(_))
    }
}

/// Nullable view of an [`AwaiterPattern`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResolvedMembers<'p> {
    pub awaiter: Option<&'p FunctionEntry>,
    pub is_completed: Option<&'p PropertyEntry>,
    pub result: Option<&'p FunctionEntry>,
}

/// The accessor, completion flag and result accessor resolved for an operand.
#[derive(Debug, Clone, PartialEq)]
pub struct AwaiterPattern<'p> {
    /// Method on the operand producing the awaiter.
    pub awaiter: PatternMember<&'p FunctionEntry>,
    /// Boolean property on the awaiter.
    pub is_completed: PatternMember<&'p PropertyEntry>,
    /// Method on the awaiter yielding the value.
    pub result: PatternMember<&'p FunctionEntry>,
    /// Return type of the accessor, once known.
    pub awaiter_type: Option<DataType>,
    /// Members bind at run time.
    pub is_dynamic: bool,
    pub success: bool,
}

impl<'p> AwaiterPattern<'p> {
    /// Nothing resolved; resolution did not succeed.
    pub fn failed() -> Self {
        Self {
            awaiter: PatternMember::Unresolved,
            is_completed: PatternMember::Unresolved,
            result: PatternMember::Unresolved,
            awaiter_type: None,
            is_dynamic: false,
            success: false,
        }
    }

    /// Successful pattern for a `dynamic` operand.
    pub fn dynamic() -> Self {
        let deferred = PatternMember::Deferred(DeferralReason::DynamicDispatch);
        Self {
            awaiter: deferred,
            is_completed: PatternMember::Deferred(DeferralReason::DynamicDispatch),
            result: deferred,
            awaiter_type: None,
            is_dynamic: true,
            success: true,
        }
    }

    pub fn resolved(&self) -> ResolvedMembers<'p> {
        ResolvedMembers {
            awaiter: self.awaiter.get(),
            is_completed: self.is_completed.get(),
            result: self.result.get(),
        }
    }

    /// The result accessor was left for downstream validation.
    pub fn result_pending_validation(&self) -> bool {
        self.result == PatternMember::Deferred(DeferralReason::DownstreamValidation)
    }
}

/// Type classification of an await expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AwaitResultType {
    Error,
    Dynamic,
    /// Declared return type of the result accessor; `void` means no value.
    Value(DataType),
    /// Valid so far, but no result accessor is resolved yet.
    Deferred,
}

impl AwaitResultType {
    /// The type the expression has when used as a value.
    pub fn data_type(self) -> Option<DataType> {
        match self {
            AwaitResultType::Error => Some(DataType::error()),
            AwaitResultType::Dynamic => Some(DataType::dynamic()),
            AwaitResultType::Value(ty) => Some(ty),
            AwaitResultType::Deferred => None,
        }
    }

    pub fn is_error(self) -> bool {
        self == AwaitResultType::Error
    }
}

bitflags! {
    /// Failure categories that apply to a bound await.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AwaitFailures: u8 {
        const CONTEXT = 1 << 0;
        const ARGUMENT = 1 << 1;
        const PATTERN = 1 << 2;
    }
}

/// The bound form of `await operand`.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundAwait<'a> {
    pub operand: &'a BoundExpr,
    pub pattern: AwaiterPattern<'a>,
    pub result: AwaitResultType,
    pub has_errors: bool,
    pub failures: AwaitFailures,
    pub span: Span,
}

impl BoundAwait<'_> {
    pub fn result_type(&self) -> Option<DataType> {
        self.result.data_type()
    }

    pub fn failed(&self, category: AwaitFailures) -> bool {
        self.failures.contains(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sable_core::TypeHash;

    #[test]
    fn dynamic_pattern_resolves_nothing() {
        let pattern = AwaiterPattern::dynamic();
        assert!(pattern.success);
        assert!(pattern.is_dynamic);
        assert!(pattern.awaiter.is_deferred());
        assert_eq!(pattern.resolved(), ResolvedMembers::default());
        assert!(!pattern.result_pending_validation());
    }

    #[test]
    fn failed_pattern() {
        let pattern = AwaiterPattern::failed();
        assert!(!pattern.success);
        assert!(!pattern.awaiter.is_resolved());
        assert_eq!(pattern.awaiter_type, None);
    }

    #[test]
    fn resolved_view_exposes_members() {
        let owner = TypeHash::from_name("Awaiter");
        let get_result = FunctionEntry::method(owner, "get_result", DataType::int32());
        let pattern = AwaiterPattern {
            result: PatternMember::Resolved(&get_result),
            ..AwaiterPattern::failed()
        };
        assert_eq!(pattern.resolved().result, Some(&get_result));
        assert_eq!(pattern.resolved().awaiter, None);
    }

    #[test]
    fn result_type_per_classification() {
        assert_eq!(AwaitResultType::Error.data_type(), Some(DataType::error()));
        assert_eq!(
            AwaitResultType::Dynamic.data_type(),
            Some(DataType::dynamic())
        );
        assert_eq!(
            AwaitResultType::Value(DataType::void()).data_type(),
            Some(DataType::void())
        );
        assert_eq!(AwaitResultType::Deferred.data_type(), None);
        assert!(AwaitResultType::Error.is_error());
    }
}
