// Shared by every integration test binary; not all of them use every helper.
#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Arc;

use candy_ast::{
  declarations::{DeclarationAst, FunctionAst, PropertyAst},
  expressions::{
    AstArgument, AstBreak, AstCall, AstIdentifier, AstLiteral, AstLiteralValue, AstReturn,
    AstStringLiteral, AstStringPart, AstValueParameter,
  },
  types::{AstType, AstTypeKind},
  AstExpression, AstId,
};
use candy_diagnostics::Diagnostic;
use candy_frontend::{lowering::LoweredBody, AstToHir, CandyDatabase, DeclarationDb};
use candy_hir::{BodyAstToHirIds, HirExpression, HirExpressionKind, HirLiteral, StringPart};
use candy_type::{
  declaration::{DeclarationId, DeclarationKind},
  resource::{ResourceId, ResourceMap},
  span::Span,
  BytePosition,
};

/// Builds AST nodes with unique ids and distinct synthetic spans.
pub struct AstBuilder {
  resource: ResourceId,
  next_id: u32,
  next_position: u32,
}

impl AstBuilder {
  pub fn new(resource: ResourceId) -> Self {
    Self {
      resource,
      next_id: 0,
      next_position: 0,
    }
  }

  fn next_ast_id(&mut self) -> AstId {
    let id = AstId(self.next_id);
    self.next_id += 1;
    id
  }

  pub fn span(&mut self) -> Span {
    let start = self.next_position;
    self.next_position += 2;
    Span::new(self.resource, BytePosition(start), BytePosition(start + 1))
  }

  pub fn int(
    &mut self,
    value: i64,
  ) -> AstExpression {
    let id = self.next_ast_id();
    let span = self.span();
    AstExpression::Literal(AstLiteral::new(id, AstLiteralValue::Int(value), span))
  }

  pub fn bool(
    &mut self,
    value: bool,
  ) -> AstExpression {
    let id = self.next_ast_id();
    let span = self.span();
    AstExpression::Literal(AstLiteral::new(id, AstLiteralValue::Bool(value), span))
  }

  pub fn identifier(
    &mut self,
    name: &str,
  ) -> AstExpression {
    let id = self.next_ast_id();
    let span = self.span();
    AstExpression::Identifier(AstIdentifier::new(id, name, span))
  }

  pub fn string(
    &mut self,
    parts: Vec<AstStringPart>,
  ) -> AstExpression {
    let id = self.next_ast_id();
    let span = self.span();
    AstExpression::StringLiteral(AstStringLiteral::new(id, parts, span))
  }

  pub fn raw_part(
    &mut self,
    value: &str,
  ) -> AstStringPart {
    AstStringPart::Literal {
      value: value.to_string(),
      span: self.span(),
    }
  }

  pub fn interpolated_part(
    &mut self,
    expression: AstExpression,
  ) -> AstStringPart {
    AstStringPart::Interpolated { expression }
  }

  pub fn ret(
    &mut self,
    expression: AstExpression,
  ) -> AstExpression {
    let id = self.next_ast_id();
    let span = self.span();
    AstExpression::Return(AstReturn::new(id, expression, span))
  }

  pub fn call(
    &mut self,
    target: AstExpression,
    arguments: Vec<AstExpression>,
  ) -> AstExpression {
    let id = self.next_ast_id();
    let span = self.span();
    let arguments = arguments
      .into_iter()
      .map(|value| AstArgument { name: None, value })
      .collect();
    AstExpression::Call(AstCall::new(id, target, arguments, span))
  }

  pub fn break_(&mut self) -> AstExpression {
    let id = self.next_ast_id();
    let span = self.span();
    AstExpression::Break(AstBreak {
      id,
      label: None,
      expression: None,
      span,
    })
  }

  pub fn parameter(
    &mut self,
    name: &str,
    ty: AstType,
  ) -> AstValueParameter {
    let id = self.next_ast_id();
    let span = self.span();
    AstValueParameter::new(id, name, ty, span)
  }

  pub fn named_type(
    &mut self,
    name: &str,
  ) -> AstType {
    let span = self.span();
    AstType::named(name, span)
  }

  pub fn function_type(
    &mut self,
    parameters: Vec<&str>,
    return_type: &str,
  ) -> AstType {
    let parameters = parameters
      .into_iter()
      .map(|name| self.named_type(name))
      .collect();
    let return_type = Box::new(self.named_type(return_type));
    let span = self.span();
    AstType {
      kind: AstTypeKind::Function {
        parameters,
        return_type,
      },
      span,
    }
  }
}

/// One declaration under test: a database and the id the queries run
/// against.
pub struct Fixture {
  pub db: CandyDatabase,
  pub declaration_id: DeclarationId,
  pub ast: AstBuilder,
}

impl Fixture {
  pub fn new() -> Self {
    let mut resources = ResourceMap::new();
    let resource = resources.add_untitled("test", "");
    let declaration_id = DeclarationId::root(resource).child("main", DeclarationKind::Function);

    Self {
      db: CandyDatabase::default(),
      declaration_id,
      ast: AstBuilder::new(resource),
    }
  }

  /// Move the declaration under test into a class body.
  pub fn in_class(
    mut self,
    class: &str,
  ) -> Self {
    let resource = self.declaration_id.resource;
    self.declaration_id = DeclarationId::root(resource)
      .child(class, DeclarationKind::Class)
      .child("main", DeclarationKind::Function);
    self
  }

  pub fn set_function(
    &mut self,
    parameters: Vec<AstValueParameter>,
    return_type: Option<&str>,
    body: Option<Vec<AstExpression>>,
  ) {
    let return_type = return_type.map(|name| {
      let span = self.ast.span();
      AstType::named(name, span)
    });
    self.set_function_typed(parameters, return_type, body, false);
  }

  pub fn set_function_typed(
    &mut self,
    parameters: Vec<AstValueParameter>,
    return_type: Option<AstType>,
    body: Option<Vec<AstExpression>>,
    is_static: bool,
  ) {
    let name = self
      .declaration_id
      .simple_name()
      .unwrap_or("main")
      .to_string();
    let span = self.ast.span();
    let function = FunctionAst {
      name,
      parameters,
      return_type,
      body,
      is_static,
      span,
    };
    self
      .db
      .set_declaration_ast(self.declaration_id.clone(), Arc::new(DeclarationAst::Function(function)));
  }

  /// Replace the declaration under test with a property.
  pub fn set_property(&mut self) {
    let resource = self.declaration_id.resource;
    self.declaration_id = DeclarationId::root(resource).child("prop", DeclarationKind::Property);

    let ty = self.ast.named_type("Int");
    let initializer = self.ast.int(1);
    let span = self.ast.span();
    let property = PropertyAst {
      name: "prop".to_string(),
      ty: Some(ty),
      initializer: Some(initializer),
      mutable: false,
      is_static: false,
      span,
    };
    self
      .db
      .set_declaration_ast(self.declaration_id.clone(), Arc::new(DeclarationAst::Property(property)));
  }

  pub fn lower(&self) -> Option<LoweredBody> {
    self.db.lower_body(self.declaration_id.clone())
  }

  pub fn body(&self) -> Option<Arc<Vec<HirExpression>>> {
    self.db.body(self.declaration_id.clone())
  }

  pub fn ids(&self) -> Option<Arc<BodyAstToHirIds>> {
    self.db.body_ast_to_hir_ids(self.declaration_id.clone())
  }

  pub fn diagnostics(&self) -> Vec<Diagnostic> {
    (*self.db.body_diagnostics(self.declaration_id.clone())).clone()
  }

  pub fn error_codes(&self) -> Vec<String> {
    let mut codes: Vec<String> = self
      .diagnostics()
      .iter()
      .map(|diagnostic| diagnostic.error_code.clone())
      .collect();
    codes.sort();
    codes
  }
}

/// Collect every node id of a lowered tree, parents before children.
pub fn collect_ids(
  expression: &HirExpression,
  ids: &mut Vec<candy_hir::DeclarationLocalId>,
) {
  ids.push(expression.id.clone());
  match &expression.kind {
    HirExpressionKind::Literal(HirLiteral::String(parts)) => {
      for part in parts {
        if let StringPart::Interpolated(inner) = part {
          collect_ids(inner, ids);
        }
      }
    },
    HirExpressionKind::Return { expression, .. } => collect_ids(expression, ids),
    HirExpressionKind::Call { target, arguments } => {
      collect_ids(target, ids);
      for argument in arguments {
        collect_ids(&argument.value, ids);
      }
    },
    _ => {},
  }
}

/// Check the id invariants of a successful lowering: unique tree ids, an
/// injective map, every unmapped node a synthesized return, and a dense
/// id range starting at zero.
pub fn assert_ids_consistent(
  body: &[HirExpression],
  ids: &BodyAstToHirIds,
) {
  let mut tree_ids = Vec::new();
  for expression in body {
    collect_ids(expression, &mut tree_ids);
  }

  let tree_indices: HashSet<u32> = tree_ids.iter().map(|id| id.index).collect();
  assert_eq!(tree_indices.len(), tree_ids.len(), "duplicate ids in HIR tree");

  let mut mapped_indices = HashSet::new();
  for (_, local_id) in ids.iter() {
    assert!(mapped_indices.insert(local_id.index), "duplicate local id in map range");
  }

  for expression in body {
    assert_mapped_or_synthesized(expression, ids);
  }

  let mut all: Vec<u32> = tree_indices.union(&mapped_indices).copied().collect();
  all.sort_unstable();
  for (expected, actual) in all.iter().enumerate() {
    assert_eq!(*actual, expected as u32, "local ids are not dense");
  }
}

fn assert_mapped_or_synthesized(
  expression: &HirExpression,
  ids: &BodyAstToHirIds,
) {
  if ids.ast_for_hir(&expression.id).is_none() {
    assert!(
      expression.is_return(),
      "only synthesized returns may be missing from the id map, got {:?}",
      expression.kind
    );
  }
  match &expression.kind {
    HirExpressionKind::Literal(HirLiteral::String(parts)) => {
      for part in parts {
        if let StringPart::Interpolated(inner) = part {
          assert_mapped_or_synthesized(inner, ids);
        }
      }
    },
    HirExpressionKind::Return { expression, .. } => assert_mapped_or_synthesized(expression, ids),
    HirExpressionKind::Call { target, arguments } => {
      assert_mapped_or_synthesized(target, ids);
      for argument in arguments {
        assert_mapped_or_synthesized(&argument.value, ids);
      }
    },
    _ => {},
  }
}
