use candy_type::span::Span;

/// Unresolved type syntax as written in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstType {
  pub kind: AstTypeKind,
  pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstTypeKind {
  Named {
    name: String,
    type_arguments: Vec<AstType>,
  },
  Tuple(Vec<AstType>),
  Function {
    parameters: Vec<AstType>,
    return_type: Box<AstType>,
  },
  This,
}

impl AstType {
  pub fn named(
    name: impl Into<String>,
    span: Span,
  ) -> Self {
    Self {
      kind: AstTypeKind::Named {
        name: name.into(),
        type_arguments: Vec::new(),
      },
      span,
    }
  }
}
