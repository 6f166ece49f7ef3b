pub mod declarations;
pub mod expressions;
pub mod types;

pub use declarations::{DeclarationAst, FunctionAst, PropertyAst};
pub use expressions::AstExpression;
pub use types::AstType;

/// Identity of an AST node, minted by the parser.
///
/// Unique within one declaration body (including the signature's value
/// parameters), not globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct AstId(pub u32);

impl std::fmt::Display for AstId {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>,
  ) -> std::fmt::Result {
    write!(f, "ast#{}", self.0)
  }
}
