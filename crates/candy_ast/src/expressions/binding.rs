use candy_type::span::Span;

use crate::{AstExpression, AstId, AstType};

/// A `let`-style local property binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstPropertyBinding {
  pub id: AstId,
  pub name: String,
  pub ty: Option<AstType>,
  pub mutable: bool,
  pub value: Box<AstExpression>,
  pub span: Span,
}

/// Assignment to an existing binding or navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstAssignment {
  pub id: AstId,
  pub target: Box<AstExpression>,
  pub value: Box<AstExpression>,
  pub span: Span,
}
