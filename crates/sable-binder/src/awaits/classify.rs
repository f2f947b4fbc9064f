//! Result classification of a bound await.

use sable_core::DataType;

use super::bound::{AwaitResultType, AwaiterPattern};

/// Type the await expression has when used as a value.
///
/// Any failed phase yields [`AwaitResultType::Error`]. Otherwise a `dynamic`
/// operand or awaiter yields `Dynamic`, a resolved result accessor yields
/// its return type, and a result accessor left for later validation yields
/// `Deferred`.
pub fn classify_result(
    context_ok: bool,
    pattern: &AwaiterPattern<'_>,
    operand_type: Option<DataType>,
) -> AwaitResultType {
    if !context_ok || !pattern.success {
        return AwaitResultType::Error;
    }
    if operand_type.is_some_and(|t| t.is_dynamic()) || pattern.is_dynamic {
        return AwaitResultType::Dynamic;
    }
    match pattern.result.get() {
        Some(accessor) => AwaitResultType::Value(accessor.return_type),
        None => AwaitResultType::Deferred,
    }
}
