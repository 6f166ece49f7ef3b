use candy_type::span::Span;

use crate::{expressions::AstValueParameter, AstExpression, AstType};

/// AST of a declaration, as handed over by declaration discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclarationAst {
  Function(FunctionAst),
  Property(PropertyAst),
}

impl DeclarationAst {
  pub fn span(&self) -> &Span {
    match self {
      DeclarationAst::Function(function) => &function.span,
      DeclarationAst::Property(property) => &property.span,
    }
  }
}

/// A function declaration: signature plus an optional expression-block body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionAst {
  pub name: String,
  pub parameters: Vec<AstValueParameter>,
  pub return_type: Option<AstType>,
  /// Top-level expressions of the body, in source order. `None` for
  /// bodyless declarations (trait requirements, externs).
  pub body: Option<Vec<AstExpression>>,
  pub is_static: bool,
  pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyAst {
  pub name: String,
  pub ty: Option<AstType>,
  pub initializer: Option<AstExpression>,
  pub mutable: bool,
  pub is_static: bool,
  pub span: Span,
}
