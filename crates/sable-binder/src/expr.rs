//! Already-bound operand expressions.

use sable_core::{DataType, Span, TypeHash};

/// Shape of a bound operand, as far as await binding cares.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundExprKind {
    /// Invocation of the function with this hash.
    Call { method: TypeHash },
    Local,
    Literal,
    NullLiteral,
    MethodGroup,
    Lambda,
    Other,
}

/// An operand handed to the await binder by the expression dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundExpr {
    pub kind: BoundExprKind,
    /// `None` for expressions without a natural type.
    pub data_type: Option<DataType>,
    /// An error was already reported for this expression.
    pub has_errors: bool,
    pub span: Span,
    /// Short source-like rendering, e.g. `null`.
    pub display: String,
}

impl BoundExpr {
    pub fn new(kind: BoundExprKind, data_type: Option<DataType>, span: Span) -> Self {
        let display = match &kind {
            BoundExprKind::NullLiteral => "null",
            BoundExprKind::MethodGroup => "method group",
            BoundExprKind::Lambda => "lambda expression",
            _ => "expression",
        };
        Self {
            kind,
            data_type,
            has_errors: false,
            span,
            display: display.to_string(),
        }
    }

    /// A local variable of the given type.
    pub fn local(data_type: DataType, span: Span) -> Self {
        Self::new(BoundExprKind::Local, Some(data_type), span)
    }

    /// A call to `method` returning `return_type`.
    pub fn call(method: TypeHash, return_type: DataType, span: Span) -> Self {
        Self::new(BoundExprKind::Call { method }, Some(return_type), span)
    }

    pub fn null_literal(span: Span) -> Self {
        Self::new(BoundExprKind::NullLiteral, None, span)
    }

    pub fn method_group(span: Span) -> Self {
        Self::new(BoundExprKind::MethodGroup, None, span)
    }

    pub fn lambda(span: Span) -> Self {
        Self::new(BoundExprKind::Lambda, None, span)
    }

    /// An expression whose binding already failed.
    pub fn erroneous(span: Span) -> Self {
        Self::new(BoundExprKind::Other, Some(DataType::error()), span).with_errors()
    }

    pub fn with_errors(mut self) -> Self {
        self.has_errors = true;
        self
    }

    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = display.into();
        self
    }

    /// The operand has a type that is usable for member lookup.
    pub fn usable_type(&self) -> Option<DataType> {
        if self.has_errors {
            return None;
        }
        self.data_type.filter(|t| !t.is_error())
    }
}
