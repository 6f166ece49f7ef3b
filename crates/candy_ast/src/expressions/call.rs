use candy_type::span::Span;

use crate::{AstExpression, AstId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstCall {
  pub id: AstId,
  pub target: Box<AstExpression>,
  pub arguments: Vec<AstArgument>,
  pub span: Span,
}

/// A call argument, positional or named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstArgument {
  pub name: Option<String>,
  pub value: AstExpression,
}

impl AstCall {
  pub fn new(
    id: AstId,
    target: AstExpression,
    arguments: Vec<AstArgument>,
    span: Span,
  ) -> Self {
    Self {
      id,
      target: Box::new(target),
      arguments,
      span,
    }
  }
}
