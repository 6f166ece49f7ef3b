use candy_type::span::Span;

use crate::{AstExpression, AstId};

/// Member access `receiver.name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstNavigation {
  pub id: AstId,
  pub receiver: Box<AstExpression>,
  pub name: String,
  pub span: Span,
}
