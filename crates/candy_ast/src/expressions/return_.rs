use candy_type::span::Span;

use crate::{AstExpression, AstId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstReturn {
  pub id: AstId,
  /// Explicit return label. The parser only produces labels naming an
  /// enclosing function; the lowering currently resolves unlabeled returns.
  pub label: Option<String>,
  pub expression: Box<AstExpression>,
  pub span: Span,
}

impl AstReturn {
  pub fn new(
    id: AstId,
    expression: AstExpression,
    span: Span,
  ) -> Self {
    Self {
      id,
      label: None,
      expression: Box::new(expression),
      span,
    }
  }
}
