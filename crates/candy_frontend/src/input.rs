use std::sync::Arc;

use candy_ast::{DeclarationAst, FunctionAst, PropertyAst};
use candy_type::declaration::DeclarationId;

#[salsa::query_group(DeclarationDbStorage)]
pub trait DeclarationDb: salsa::Database {
  /// AST of a declaration, as handed over by parsing and declaration
  /// discovery.
  #[salsa::input]
  fn declaration_ast(&self, id: DeclarationId) -> Arc<DeclarationAst>;

  fn function_declaration_ast(&self, id: DeclarationId) -> Option<Arc<FunctionAst>>;
  fn property_declaration_ast(&self, id: DeclarationId) -> Option<Arc<PropertyAst>>;

  /// Innermost module enclosing a declaration, or the resource root.
  fn declaration_module(&self, id: DeclarationId) -> DeclarationId;
}

fn function_declaration_ast(
  db: &dyn DeclarationDb,
  id: DeclarationId,
) -> Option<Arc<FunctionAst>> {
  match &*db.declaration_ast(id) {
    DeclarationAst::Function(function) => Some(Arc::new(function.clone())),
    DeclarationAst::Property(_) => None,
  }
}

fn property_declaration_ast(
  db: &dyn DeclarationDb,
  id: DeclarationId,
) -> Option<Arc<PropertyAst>> {
  match &*db.declaration_ast(id) {
    DeclarationAst::Property(property) => Some(Arc::new(property.clone())),
    DeclarationAst::Function(_) => None,
  }
}

fn declaration_module(
  _db: &dyn DeclarationDb,
  id: DeclarationId,
) -> DeclarationId {
  let mut current = id;
  loop {
    if current.is_module() {
      return current;
    }
    match current.parent() {
      Some(parent) => current = parent,
      None => return current,
    }
  }
}
