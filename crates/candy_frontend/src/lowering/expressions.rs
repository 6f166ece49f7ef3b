use candy_ast::{
  expressions::{AstCall, AstIdentifier, AstLiteral, AstLiteralValue, AstReturn, AstStringLiteral, AstStringPart},
  AstExpression,
};
use candy_diagnostics::DiagnosticMessage;
use candy_hir::{HirArgument, HirExpression, HirExpressionKind, HirLiteral, StringPart};
use candy_type::{span::Span, types::CandyType};

use super::{
  context::{BodyLowering, ContextId},
  results::{merge, LowerResult},
};

impl BodyLowering {
  /// Lower an expression to its set of well-typed candidate meanings.
  ///
  /// On success the list is non-empty and every candidate satisfies the
  /// context's expected type; on error the list carries every diagnostic the
  /// sub-tree produced.
  pub fn lower(
    &mut self,
    context: ContextId,
    expression: &AstExpression,
  ) -> LowerResult<Vec<HirExpression>> {
    match expression {
      AstExpression::Literal(literal) => self.lower_literal(context, literal),
      AstExpression::StringLiteral(string) => self.lower_string_literal(context, string),
      AstExpression::Identifier(identifier) => self.lower_identifier(context, identifier),
      AstExpression::Call(call) => self.lower_call(context, call),
      AstExpression::Return(ret) => self.lower_return(context, ret),
      AstExpression::Lambda(lambda) => unsupported("lambda", &lambda.span),
      AstExpression::Navigation(navigation) => unsupported("navigation", &navigation.span),
      AstExpression::If(if_) => unsupported("if", &if_.span),
      AstExpression::While(while_) => unsupported("while", &while_.span),
      AstExpression::Loop(loop_) => unsupported("loop", &loop_.span),
      AstExpression::Break(break_) => unsupported("break", &break_.span),
      AstExpression::Continue(continue_) => unsupported("continue", &continue_.span),
      AstExpression::PropertyBinding(binding) => unsupported("property binding", &binding.span),
      AstExpression::Assignment(assignment) => unsupported("assignment", &assignment.span),
    }
  }

  /// Lower an expression that must have exactly one meaning in this context.
  pub fn lower_unambiguous(
    &mut self,
    context: ContextId,
    expression: &AstExpression,
  ) -> LowerResult<HirExpression> {
    let mut candidates = self.lower(context, expression)?;
    if candidates.len() == 1 {
      return Ok(candidates.remove(0));
    }
    if candidates.is_empty() {
      return Err(self.invalid_expression_type(context, None, expression.span()));
    }
    Err(vec![DiagnosticMessage::AmbiguousExpression {
      candidates: candidates.len(),
      span: expression.span().clone(),
    }])
  }

  fn lower_literal(
    &mut self,
    context: ContextId,
    literal: &AstLiteral,
  ) -> LowerResult<Vec<HirExpression>> {
    let (ty, value) = match &literal.value {
      AstLiteralValue::Int(value) => (CandyType::Int, HirLiteral::Int(*value)),
      AstLiteralValue::Bool(value) => (CandyType::Bool, HirLiteral::Bool(*value)),
    };

    if !self.is_valid_expression_type(context, &ty) {
      return Err(self.invalid_expression_type(context, Some(ty), &literal.span));
    }

    let id = self.get_id(Some(literal.id));
    Ok(vec![HirExpression {
      id,
      kind: HirExpressionKind::Literal(value),
      ty,
    }])
  }

  fn lower_string_literal(
    &mut self,
    context: ContextId,
    string: &AstStringLiteral,
  ) -> LowerResult<Vec<HirExpression>> {
    if !self.is_valid_expression_type(context, &CandyType::String) {
      return Err(self.invalid_expression_type(context, Some(CandyType::String), &string.span));
    }

    let id = self.get_id(Some(string.id));

    let mut results: Vec<LowerResult<StringPart>> = Vec::new();
    for part in &string.parts {
      match part {
        AstStringPart::Literal { value, .. } => results.push(Ok(StringPart::Literal(value.clone()))),
        AstStringPart::Interpolated { expression } => {
          let child = self.push_expression(context, None, false);
          results.push(self.lower_unambiguous(child, expression).map(StringPart::Interpolated));
        },
      }
    }
    let parts = merge(results)?;

    Ok(vec![HirExpression {
      id,
      kind: HirExpressionKind::Literal(HirLiteral::String(parts)),
      ty: CandyType::String,
    }])
  }

  fn lower_identifier(
    &mut self,
    context: ContextId,
    identifier: &AstIdentifier,
  ) -> LowerResult<Vec<HirExpression>> {
    let resolved = match self.resolve_identifier(context, &identifier.name) {
      Some(resolved) => resolved,
      None => {
        return Err(vec![DiagnosticMessage::UndefinedIdentifier {
          name: identifier.name.clone(),
          span: identifier.span.clone(),
        }]);
      },
    };

    let ty = resolved.ty().clone();
    if !self.is_valid_expression_type(context, &ty) {
      return Err(self.invalid_expression_type(context, Some(ty), &identifier.span));
    }

    let id = self.get_id(Some(identifier.id));
    Ok(vec![HirExpression {
      id,
      kind: HirExpressionKind::Identifier(resolved),
      ty,
    }])
  }

  fn lower_return(
    &mut self,
    context: ContextId,
    ret: &AstReturn,
  ) -> LowerResult<Vec<HirExpression>> {
    // Labeled returns are parsed but not emitted here yet; resolution always
    // targets the innermost function.
    let (scope, expected) = match self.resolve_return(context, None) {
      Some(resolved) => resolved,
      None => {
        return Err(vec![DiagnosticMessage::InvalidReturnLabel {
          label: None,
          span: ret.span.clone(),
        }]);
      },
    };

    let id = self.get_id(Some(ret.id));
    let child = self.push_expression(context, expected, false);
    let expression = self.lower_unambiguous(child, &ret.expression)?;

    Ok(vec![HirExpression {
      id,
      kind: HirExpressionKind::Return {
        scope,
        expression: Box::new(expression),
      },
      ty: CandyType::Never,
    }])
  }

  fn lower_call(
    &mut self,
    context: ContextId,
    call: &AstCall,
  ) -> LowerResult<Vec<HirExpression>> {
    let id = self.get_id(Some(call.id));

    let target_context = self.push_expression(context, None, false);
    let targets = self.lower(target_context, &call.target)?;
    let expected = self.expression_type(context).cloned();

    let mut surviving = Vec::new();
    let mut failures = Vec::new();
    for target in targets {
      let (parameters, return_type) = match &target.ty {
        CandyType::Function {
          parameters,
          return_type,
          ..
        } if parameters.len() == call.arguments.len() => (parameters.clone(), (**return_type).clone()),
        _ => {
          failures.push(DiagnosticMessage::InvalidExpressionType {
            expected: callee_shape(call.arguments.len(), expected.as_ref()),
            found: Some(target.ty.clone()),
            span: call.target.span().clone(),
          });
          continue;
        },
      };

      if let Some(expected) = &expected {
        if !return_type.is_assignable_to(expected) {
          failures.push(DiagnosticMessage::InvalidExpressionType {
            expected: expected.clone(),
            found: Some(return_type.clone()),
            span: call.span.clone(),
          });
          continue;
        }
      }

      let mut argument_results = Vec::new();
      for (argument, parameter_type) in call.arguments.iter().zip(parameters.iter()) {
        let child = self.push_expression(context, Some(parameter_type.clone()), false);
        argument_results.push(
          self
            .lower_unambiguous(child, &argument.value)
            .map(|value| HirArgument {
              name: argument.name.clone(),
              value,
            }),
        );
      }

      match merge(argument_results) {
        Ok(arguments) => surviving.push(HirExpression {
          id: id.clone(),
          kind: HirExpressionKind::Call {
            target: Box::new(target),
            arguments,
          },
          ty: return_type,
        }),
        Err(mut errors) => failures.append(&mut errors),
      }
    }

    if surviving.is_empty() {
      if failures.is_empty() {
        failures = self.invalid_expression_type(context, None, &call.span);
      }
      return Err(failures);
    }
    Ok(surviving)
  }

  fn invalid_expression_type(
    &self,
    context: ContextId,
    found: Option<CandyType>,
    span: &Span,
  ) -> Vec<DiagnosticMessage> {
    let expected = self.expression_type(context).cloned().unwrap_or(CandyType::Any);
    vec![DiagnosticMessage::InvalidExpressionType {
      expected,
      found,
      span: span.clone(),
    }]
  }
}

/// The function shape a call target would need, used for diagnostics when
/// the target is not callable.
fn callee_shape(
  argument_count: usize,
  expected: Option<&CandyType>,
) -> CandyType {
  CandyType::Function {
    receiver: None,
    parameters: vec![CandyType::Any; argument_count],
    return_type: Box::new(expected.cloned().unwrap_or(CandyType::Any)),
  }
}

fn unsupported(
  construct: &'static str,
  span: &Span,
) -> LowerResult<Vec<HirExpression>> {
  Err(vec![DiagnosticMessage::UnsupportedFeature {
    construct,
    span: span.clone(),
  }])
}
