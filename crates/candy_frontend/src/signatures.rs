use std::sync::Arc;

use candy_ast::types::{AstType, AstTypeKind};
use candy_hir::{FunctionHir, ParameterHir, PropertyHir};
use candy_type::{declaration::DeclarationId, types::CandyType};

use crate::input::DeclarationDb;

#[salsa::query_group(SignatureDbStorage)]
pub trait SignatureDb: DeclarationDb {
  /// Resolved signature of a function declaration: parameter names and
  /// types, return type, staticness.
  fn function_declaration_hir(&self, id: DeclarationId) -> Option<Arc<FunctionHir>>;
  fn property_declaration_hir(&self, id: DeclarationId) -> Option<Arc<PropertyHir>>;
}

fn function_declaration_hir(
  db: &dyn SignatureDb,
  id: DeclarationId,
) -> Option<Arc<FunctionHir>> {
  let function = db.function_declaration_ast(id.clone())?;
  let module = db.declaration_module(id);

  let parameters = function
    .parameters
    .iter()
    .map(|parameter| ParameterHir {
      name: parameter.name.clone(),
      ty: ast_type_to_hir_type(&module, &parameter.ty),
    })
    .collect();
  let return_type = match &function.return_type {
    Some(ty) => ast_type_to_hir_type(&module, ty),
    None => CandyType::Unit,
  };

  Some(Arc::new(FunctionHir {
    name: function.name.clone(),
    parameters,
    return_type,
    is_static: function.is_static,
  }))
}

fn property_declaration_hir(
  db: &dyn SignatureDb,
  id: DeclarationId,
) -> Option<Arc<PropertyHir>> {
  let property = db.property_declaration_ast(id.clone())?;
  let module = db.declaration_module(id);

  let ty = match &property.ty {
    Some(ty) => ast_type_to_hir_type(&module, ty),
    None => CandyType::Any,
  };

  Some(Arc::new(PropertyHir {
    name: property.name.clone(),
    ty,
    mutable: property.mutable,
    is_static: property.is_static,
    has_initializer: property.initializer.is_some(),
  }))
}

/// Resolve type syntax into a surface type. Names that are not primitives
/// resolve to declared types owned by the enclosing module.
pub fn ast_type_to_hir_type(
  module: &DeclarationId,
  ty: &AstType,
) -> CandyType {
  match &ty.kind {
    AstTypeKind::Named {
      name,
      type_arguments,
    } if type_arguments.is_empty() => match name.as_str() {
      "Unit" => CandyType::Unit,
      "Never" => CandyType::Never,
      "Bool" => CandyType::Bool,
      "Int" => CandyType::Int,
      "Float" => CandyType::Float,
      "Number" => CandyType::Number,
      "String" => CandyType::String,
      "Any" => CandyType::Any,
      _ => CandyType::Declared {
        name: name.clone(),
        module: module.clone(),
        type_arguments: Vec::new(),
      },
    },
    AstTypeKind::Named {
      name,
      type_arguments,
    } => CandyType::Declared {
      name: name.clone(),
      module: module.clone(),
      type_arguments: type_arguments
        .iter()
        .map(|argument| ast_type_to_hir_type(module, argument))
        .collect(),
    },
    AstTypeKind::Tuple(elements) => CandyType::Tuple(
      elements
        .iter()
        .map(|element| ast_type_to_hir_type(module, element))
        .collect(),
    ),
    AstTypeKind::Function {
      parameters,
      return_type,
    } => CandyType::Function {
      receiver: None,
      parameters: parameters
        .iter()
        .map(|parameter| ast_type_to_hir_type(module, parameter))
        .collect(),
      return_type: Box::new(ast_type_to_hir_type(module, return_type)),
    },
    AstTypeKind::This => CandyType::This,
  }
}
