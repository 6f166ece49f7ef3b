use std::collections::HashMap;

use candy_ast::AstId;
use candy_diagnostics::DiagnosticMessage;
use candy_hir::{BodyAstToHirIds, DeclarationLocalId, Identifier};
use candy_type::{
  declaration::DeclarationId, resource::ResourceId, span::Span, types::CandyType, Id, Store,
};

use super::results::LowerResult;

pub type ContextId = Id<Frame>;

/// One frame of the lexical context stack.
///
/// Frames form a tree: each holds a parent index into the arena owned by the
/// lowering, and resolution walks from a frame outward. The whole arena is
/// scoped to one lowering and dropped with it.
#[derive(Debug, Clone)]
pub struct Frame {
  pub parent: Option<ContextId>,
  pub kind: FrameKind,
}

#[derive(Debug, Clone)]
pub enum FrameKind {
  /// Outermost scope, bound to the declaration being lowered. Resolves only
  /// `this`; not a binding scope for locals.
  Root {
    this_identifier: Option<Identifier>,
  },
  /// Scope of a function body: parameters and locals, by name.
  Function {
    name: String,
    scope: DeclarationId,
    return_type: CandyType,
    identifiers: HashMap<String, Identifier>,
  },
  /// Lightweight frame imposing an expected type on a single expression.
  Expression {
    expected_type: Option<CandyType>,
    forwards_identifiers: bool,
  },
  /// Scope of a loop body; target of `break`/`continue`.
  Loop {
    label: Option<String>,
    target: DeclarationLocalId,
    result_type: Option<CandyType>,
  },
}

/// State of one body lowering: the context arena, the local id counter, and
/// the AST-to-HIR id map. Owned by exactly one lowering and never shared.
pub struct BodyLowering {
  declaration_id: DeclarationId,
  frames: Store<Frame>,
  next_local_index: u32,
  id_map: BodyAstToHirIds,
}

impl BodyLowering {
  pub fn new(declaration_id: DeclarationId) -> Self {
    Self {
      declaration_id,
      frames: Store::new(),
      next_local_index: 0,
      id_map: BodyAstToHirIds::new(),
    }
  }

  pub fn declaration_id(&self) -> &DeclarationId {
    &self.declaration_id
  }

  pub fn resource_id(&self) -> ResourceId {
    self.declaration_id.resource
  }

  pub fn id_map(&self) -> &BodyAstToHirIds {
    &self.id_map
  }

  pub fn into_id_map(self) -> BodyAstToHirIds {
    self.id_map
  }

  /// Number of local ids handed out so far.
  pub fn local_id_count(&self) -> u32 {
    self.next_local_index
  }

  /// Mint or look up the local id for an AST node.
  ///
  /// `None` mints an anonymous id that never enters the id map. Repeated
  /// calls for the same AST node return the same id.
  pub fn get_id(
    &mut self,
    ast_id: Option<AstId>,
  ) -> DeclarationLocalId {
    let ast_id = match ast_id {
      Some(ast_id) => ast_id,
      None => return self.fresh_id(),
    };

    if let Some(existing) = self.id_map.hir_for_ast(&ast_id) {
      return existing.clone();
    }
    let id = self.fresh_id();
    self.id_map.insert(ast_id, id.clone());
    id
  }

  fn fresh_id(&mut self) -> DeclarationLocalId {
    let id = DeclarationLocalId::new(self.declaration_id.clone(), self.next_local_index);
    self.next_local_index += 1;
    id
  }

  pub fn push_root(
    &mut self,
    this_identifier: Option<Identifier>,
  ) -> ContextId {
    self.frames.alloc(Frame {
      parent: None,
      kind: FrameKind::Root { this_identifier },
    })
  }

  pub fn push_function(
    &mut self,
    parent: ContextId,
    name: String,
    return_type: CandyType,
    identifiers: HashMap<String, Identifier>,
  ) -> ContextId {
    let scope = self.declaration_id.clone();
    self.frames.alloc(Frame {
      parent: Some(parent),
      kind: FrameKind::Function {
        name,
        scope,
        return_type,
        identifiers,
      },
    })
  }

  pub fn push_expression(
    &mut self,
    parent: ContextId,
    expected_type: Option<CandyType>,
    forwards_identifiers: bool,
  ) -> ContextId {
    self.frames.alloc(Frame {
      parent: Some(parent),
      kind: FrameKind::Expression {
        expected_type,
        forwards_identifiers,
      },
    })
  }

  pub fn push_loop(
    &mut self,
    parent: ContextId,
    label: Option<String>,
    target: DeclarationLocalId,
    result_type: Option<CandyType>,
  ) -> ContextId {
    self.frames.alloc(Frame {
      parent: Some(parent),
      kind: FrameKind::Loop {
        label,
        target,
        result_type,
      },
    })
  }

  /// The expected type imposed on the expression lowered in this context.
  ///
  /// Only expression frames carry one; all other frames accept anything.
  pub fn expression_type(
    &self,
    context: ContextId,
  ) -> Option<&CandyType> {
    match &self.frames.get(&context).kind {
      FrameKind::Expression { expected_type, .. } => expected_type.as_ref(),
      _ => None,
    }
  }

  /// The single attach point for bidirectional checking: a type is valid if
  /// no expectation exists, or the oracle accepts the assignment.
  pub fn is_valid_expression_type(
    &self,
    context: ContextId,
    ty: &CandyType,
  ) -> bool {
    match self.expression_type(context) {
      None => true,
      Some(expected) => ty.is_assignable_to(expected),
    }
  }

  /// Innermost-first name lookup, delegating outward on miss.
  pub fn resolve_identifier(
    &self,
    context: ContextId,
    name: &str,
  ) -> Option<Identifier> {
    let mut current = Some(context);
    while let Some(context) = current {
      let frame = self.frames.get(&context);
      match &frame.kind {
        FrameKind::Function { identifiers, .. } => {
          if let Some(identifier) = identifiers.get(name) {
            return Some(identifier.clone());
          }
        },
        FrameKind::Root { this_identifier } => {
          if name == "this" {
            return this_identifier.clone();
          }
        },
        FrameKind::Expression { .. } | FrameKind::Loop { .. } => {},
      }
      current = frame.parent;
    }
    None
  }

  /// Introduce a binding visible to the expressions that follow in the
  /// nearest binding scope.
  ///
  /// Expression frames forward or swallow according to their configuration;
  /// reaching the root is an internal error.
  pub fn add_identifier(
    &mut self,
    context: ContextId,
    identifier: Identifier,
    span: &Span,
  ) -> LowerResult<()> {
    let name = match identifier.name() {
      Some(name) => name.to_string(),
      None => {
        return Err(vec![DiagnosticMessage::Internal {
          message: "added identifier has no name".to_string(),
          span: span.clone(),
        }]);
      },
    };

    let mut current = context;
    loop {
      let parent = self.frames.get(&current).parent;
      match &mut self.frames.get_mut(&current).kind {
        FrameKind::Expression {
          forwards_identifiers,
          ..
        } => {
          if !*forwards_identifiers {
            // The binding stays invisible outside this expression.
            return Ok(());
          }
        },
        FrameKind::Loop { .. } => {},
        FrameKind::Function { identifiers, .. } => {
          identifiers.insert(name, identifier);
          return Ok(());
        },
        FrameKind::Root { .. } => {
          return Err(vec![DiagnosticMessage::Internal {
            message: "cannot bind identifiers at the declaration root".to_string(),
            span: span.clone(),
          }]);
        },
      }
      match parent {
        Some(parent) => current = parent,
        None => {
          return Err(vec![DiagnosticMessage::Internal {
            message: "context chain ended without a binding scope".to_string(),
            span: span.clone(),
          }]);
        },
      }
    }
  }

  /// Locate the enclosing return target scope and its expected result type.
  ///
  /// A label, when given, must match the function's simple name.
  pub fn resolve_return(
    &self,
    context: ContextId,
    label: Option<&str>,
  ) -> Option<(DeclarationId, Option<CandyType>)> {
    let mut current = Some(context);
    while let Some(context) = current {
      let frame = self.frames.get(&context);
      if let FrameKind::Function {
        name,
        scope,
        return_type,
        ..
      } = &frame.kind
      {
        if label.is_none() || label == Some(name.as_str()) {
          return Some((scope.clone(), Some(return_type.clone())));
        }
      }
      current = frame.parent;
    }
    None
  }

  pub fn resolve_break(
    &self,
    context: ContextId,
    label: Option<&str>,
  ) -> Option<(DeclarationLocalId, Option<CandyType>)> {
    self.resolve_loop(context, label)
  }

  pub fn resolve_continue(
    &self,
    context: ContextId,
    label: Option<&str>,
  ) -> Option<(DeclarationLocalId, Option<CandyType>)> {
    // A continue never carries a value.
    self.resolve_loop(context, label).map(|(target, _)| (target, None))
  }

  fn resolve_loop(
    &self,
    context: ContextId,
    label: Option<&str>,
  ) -> Option<(DeclarationLocalId, Option<CandyType>)> {
    let mut current = Some(context);
    while let Some(context) = current {
      let frame = self.frames.get(&context);
      if let FrameKind::Loop {
        label: loop_label,
        target,
        result_type,
      } = &frame.kind
      {
        if label.is_none() || label == loop_label.as_deref() {
          return Some((target.clone(), result_type.clone()));
        }
      }
      current = frame.parent;
    }
    None
  }
}
