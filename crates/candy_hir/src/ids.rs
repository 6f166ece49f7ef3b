use std::collections::HashMap;

use candy_ast::AstId;
use candy_type::declaration::DeclarationId;

/// Local id of a lowered node, unique and dense within its declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeclarationLocalId {
  pub declaration: DeclarationId,
  pub index: u32,
}

impl DeclarationLocalId {
  pub fn new(
    declaration: DeclarationId,
    index: u32,
  ) -> Self {
    Self { declaration, index }
  }
}

impl std::fmt::Display for DeclarationLocalId {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>,
  ) -> std::fmt::Result {
    write!(f, "%{}", self.index)
  }
}

/// Bidirectional, injective mapping between AST node ids and local ids.
///
/// Append-only during a lowering; immutable once the lowering succeeds.
/// Anonymous (synthesized) nodes get local ids that never appear here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BodyAstToHirIds {
  ast_to_hir: HashMap<AstId, DeclarationLocalId>,
  hir_to_ast: HashMap<DeclarationLocalId, AstId>,
}

impl BodyAstToHirIds {
  pub fn new() -> Self {
    Self::default()
  }

  /// Record a fresh pair. Both sides must be unseen.
  pub fn insert(
    &mut self,
    ast_id: AstId,
    local_id: DeclarationLocalId,
  ) {
    let previous = self.ast_to_hir.insert(ast_id, local_id.clone());
    assert!(previous.is_none(), "AST node {} mapped twice", ast_id);
    let previous = self.hir_to_ast.insert(local_id, ast_id);
    assert!(previous.is_none(), "local id mapped twice");
  }

  pub fn hir_for_ast(
    &self,
    ast_id: &AstId,
  ) -> Option<&DeclarationLocalId> {
    self.ast_to_hir.get(ast_id)
  }

  pub fn ast_for_hir(
    &self,
    local_id: &DeclarationLocalId,
  ) -> Option<&AstId> {
    self.hir_to_ast.get(local_id)
  }

  pub fn len(&self) -> usize {
    self.ast_to_hir.len()
  }

  pub fn is_empty(&self) -> bool {
    self.ast_to_hir.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&AstId, &DeclarationLocalId)> {
    self.ast_to_hir.iter()
  }
}
