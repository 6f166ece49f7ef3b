pub mod context;
pub mod expressions;
pub mod results;

use std::collections::HashMap;
use std::sync::Arc;

use candy_ast::{AstExpression, DeclarationAst, FunctionAst};
use candy_diagnostics::{Diagnostic, DiagnosticMessage};
use candy_hir::{BodyAstToHirIds, FunctionHir, HirExpression, HirExpressionKind, Identifier};
use candy_type::{declaration::DeclarationId, types::CandyType};

use crate::signatures::SignatureDb;

pub use context::{BodyLowering, ContextId, Frame, FrameKind};
pub use results::{merge, merge_flatten, LowerResult};

pub type LoweredBody = (Arc<Vec<HirExpression>>, Arc<BodyAstToHirIds>);
pub type RawLoweringResult = Result<LoweredBody, Arc<Vec<Diagnostic>>>;

#[salsa::query_group(AstToHirStorage)]
pub trait AstToHir: SignatureDb {
  /// Run the body lowering, keeping its diagnostics.
  ///
  /// `None` for properties and for functions without a body.
  fn lower_body_raw(&self, id: DeclarationId) -> Option<RawLoweringResult>;

  /// The lowered body, if the declaration has one and it lowered cleanly.
  /// Both components always come from the same underlying lowering.
  fn lower_body(&self, id: DeclarationId) -> Option<LoweredBody>;

  fn body(&self, id: DeclarationId) -> Option<Arc<Vec<HirExpression>>>;
  fn body_ast_to_hir_ids(&self, id: DeclarationId) -> Option<Arc<BodyAstToHirIds>>;

  /// The diagnostic sink: every error the lowering for `id` produced.
  fn body_diagnostics(&self, id: DeclarationId) -> Arc<Vec<Diagnostic>>;
}

fn lower_body_raw(
  db: &dyn AstToHir,
  id: DeclarationId,
) -> Option<RawLoweringResult> {
  let function = match &*db.declaration_ast(id.clone()) {
    DeclarationAst::Function(function) => function.clone(),
    // Property initializers are not lowered yet.
    DeclarationAst::Property(_) => return None,
  };
  let body = function.body.as_ref()?;
  let signature = db.function_declaration_hir(id.clone())?;

  log::trace!("lowering body of {}", id);

  let mut lowering = BodyLowering::new(id);
  match lowering.lower_function_body(&function, &signature, body) {
    Ok(expressions) => Some(Ok((
      Arc::new(expressions),
      Arc::new(lowering.into_id_map()),
    ))),
    Err(messages) => {
      for message in &messages {
        if message.is_internal() {
          log::warn!("{}", message);
        }
      }
      Some(Err(Arc::new(
        messages.iter().map(|message| message.report()).collect(),
      )))
    },
  }
}

fn lower_body(
  db: &dyn AstToHir,
  id: DeclarationId,
) -> Option<LoweredBody> {
  match db.lower_body_raw(id) {
    Some(Ok(lowered)) => Some(lowered),
    _ => None,
  }
}

fn body(
  db: &dyn AstToHir,
  id: DeclarationId,
) -> Option<Arc<Vec<HirExpression>>> {
  db.lower_body(id).map(|(expressions, _)| expressions)
}

fn body_ast_to_hir_ids(
  db: &dyn AstToHir,
  id: DeclarationId,
) -> Option<Arc<BodyAstToHirIds>> {
  db.lower_body(id).map(|(_, ids)| ids)
}

fn body_diagnostics(
  db: &dyn AstToHir,
  id: DeclarationId,
) -> Arc<Vec<Diagnostic>> {
  match db.lower_body_raw(id) {
    Some(Err(diagnostics)) => diagnostics,
    _ => Arc::new(Vec::new()),
  }
}

impl BodyLowering {
  /// Lower a function body: every expression in source order, the last one
  /// checked against the declared return type and wrapped in a return.
  pub fn lower_function_body(
    &mut self,
    function: &FunctionAst,
    signature: &FunctionHir,
    body: &[AstExpression],
  ) -> LowerResult<Vec<HirExpression>> {
    let returns_unit = signature.return_type.is_unit();

    if !returns_unit && body.is_empty() {
      return Err(vec![DiagnosticMessage::MissingReturn {
        function: signature.name.clone(),
        return_type: signature.return_type.clone(),
        span: function.span.clone(),
      }]);
    }

    let this_identifier = self.resolve_this(signature);
    let root = self.push_root(this_identifier);

    let mut identifiers = HashMap::new();
    for (parameter, parameter_hir) in function.parameters.iter().zip(signature.parameters.iter()) {
      let local_id = self.get_id(Some(parameter.id));
      identifiers.insert(
        parameter_hir.name.clone(),
        Identifier::Parameter {
          id: local_id,
          name: parameter_hir.name.clone(),
          ty: parameter_hir.ty.clone(),
        },
      );
    }
    let function_context = self.push_function(
      root,
      signature.name.clone(),
      signature.return_type.clone(),
      identifiers,
    );

    let mut results = Vec::new();
    for (index, expression) in body.iter().enumerate() {
      let is_last = index + 1 == body.len();

      if returns_unit || !is_last {
        let child = self.push_expression(function_context, None, true);
        results.push(self.lower_unambiguous(child, expression));
        continue;
      }

      let child = self.push_expression(function_context, Some(signature.return_type.clone()), true);
      let result = match self.lower_unambiguous(child, expression) {
        Ok(lowered) if lowered.is_return() => Ok(lowered),
        Ok(lowered) => {
          // Downstream passes rely on the last expression of a non-Unit
          // body being a return.
          let id = self.get_id(None);
          Ok(HirExpression {
            id,
            kind: HirExpressionKind::Return {
              scope: self.declaration_id().clone(),
              expression: Box::new(lowered),
            },
            ty: CandyType::Never,
          })
        },
        Err(errors) => Err(errors),
      };
      results.push(result);
    }

    merge(results)
  }

  /// `this` is in scope for non-static members of a class, trait, or impl;
  /// constructors, statics, and free declarations have none.
  fn resolve_this(
    &self,
    signature: &FunctionHir,
  ) -> Option<Identifier> {
    let id = self.declaration_id();
    if (id.is_function() || id.is_property()) && id.is_member() && !signature.is_static {
      Some(Identifier::This { ty: CandyType::This })
    } else {
      None
    }
  }
}
