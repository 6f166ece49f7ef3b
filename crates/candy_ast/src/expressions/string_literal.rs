use candy_type::span::Span;

use crate::{AstExpression, AstId};

/// A string literal with alternating raw and interpolated parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstStringLiteral {
  pub id: AstId,
  pub parts: Vec<AstStringPart>,
  pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstStringPart {
  Literal {
    value: String,
    span: Span,
  },
  Interpolated {
    expression: AstExpression,
  },
}

impl AstStringLiteral {
  pub fn new(
    id: AstId,
    parts: Vec<AstStringPart>,
    span: Span,
  ) -> Self {
    Self { id, parts, span }
  }
}
