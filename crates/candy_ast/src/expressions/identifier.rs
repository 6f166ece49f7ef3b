use candy_type::span::Span;

use crate::AstId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstIdentifier {
  pub id: AstId,
  pub name: String,
  pub span: Span,
}

impl AstIdentifier {
  pub fn new(
    id: AstId,
    name: impl Into<String>,
    span: Span,
  ) -> Self {
    Self {
      id,
      name: name.into(),
      span,
    }
  }
}
