use std::fmt::Write;

use crate::{HirExpression, HirExpressionKind, HirLiteral, Identifier, StringPart};

/// Render a lowered body as stable plain text, one node per line.
///
/// Used by dumps and by tests for exact comparisons; the format is part of
/// no API contract beyond determinism.
pub fn print_body(expressions: &[HirExpression]) -> String {
  let mut printer = BodyPrinter {
    indent: 0,
    output: String::new(),
  };

  if expressions.is_empty() {
    return "(no expressions)\n".to_string();
  }

  for expression in expressions {
    printer.print_expression(expression);
  }
  printer.output
}

struct BodyPrinter {
  indent: usize,
  output: String,
}

impl BodyPrinter {
  fn line(
    &mut self,
    text: &str,
  ) {
    writeln!(self.output, "{:indent$}{}", "", text, indent = self.indent * 2).unwrap();
  }

  fn print_expression(
    &mut self,
    expression: &HirExpression,
  ) {
    let head = match &expression.kind {
      HirExpressionKind::Literal(literal) => match literal {
        HirLiteral::Int(value) => format!("int {}", value),
        HirLiteral::Bool(value) => format!("bool {}", value),
        HirLiteral::String(_) => "string".to_string(),
      },
      HirExpressionKind::Identifier(identifier) => match identifier {
        Identifier::This { .. } => "this".to_string(),
        Identifier::Super { .. } => "super".to_string(),
        Identifier::Parameter { name, .. } => format!("param {}", name),
        Identifier::LocalProperty { name, mutable, .. } => {
          if *mutable {
            format!("local mut {}", name)
          } else {
            format!("local {}", name)
          }
        },
        Identifier::Property { declaration, .. } => format!("property {}", declaration),
        Identifier::Reflection { declaration, .. } => format!("reflection {}", declaration),
      },
      HirExpressionKind::Return { scope, .. } => format!("return @{}", scope),
      HirExpressionKind::Call { arguments, .. } => format!("call ({} args)", arguments.len()),
      HirExpressionKind::Navigation { name, .. } => format!("navigation .{}", name),
      HirExpressionKind::PropertyBinding { name, mutable, .. } => {
        if *mutable {
          format!("let mut {}", name)
        } else {
          format!("let {}", name)
        }
      },
      HirExpressionKind::If { .. } => "if".to_string(),
      HirExpressionKind::While { .. } => "while".to_string(),
      HirExpressionKind::Loop { .. } => "loop".to_string(),
      HirExpressionKind::Break { .. } => "break".to_string(),
      HirExpressionKind::Continue { .. } => "continue".to_string(),
      HirExpressionKind::Assignment { .. } => "assign".to_string(),
    };

    self.line(&format!("{}: {} = {}", expression.id, expression.ty, head));

    self.indent += 1;
    match &expression.kind {
      HirExpressionKind::Literal(HirLiteral::String(parts)) => {
        for part in parts {
          match part {
            StringPart::Literal(value) => self.line(&format!("part {:?}", value)),
            StringPart::Interpolated(inner) => {
              self.line("interpolated");
              self.indent += 1;
              self.print_expression(inner);
              self.indent -= 1;
            },
          }
        }
      },
      HirExpressionKind::Return { expression, .. } => self.print_expression(expression),
      HirExpressionKind::Call { target, arguments } => {
        self.print_expression(target);
        for argument in arguments {
          self.print_expression(&argument.value);
        }
      },
      HirExpressionKind::Navigation { receiver, .. } => self.print_expression(receiver),
      HirExpressionKind::PropertyBinding { value, .. } => self.print_expression(value),
      HirExpressionKind::If {
        condition,
        then_body,
        else_body,
      } => {
        self.print_expression(condition);
        for expression in then_body.iter().chain(else_body.iter()) {
          self.print_expression(expression);
        }
      },
      HirExpressionKind::While { condition, body } => {
        self.print_expression(condition);
        for expression in body {
          self.print_expression(expression);
        }
      },
      HirExpressionKind::Loop { body } => {
        for expression in body {
          self.print_expression(expression);
        }
      },
      HirExpressionKind::Break { expression, .. } => {
        if let Some(expression) = expression {
          self.print_expression(expression);
        }
      },
      HirExpressionKind::Assignment { target, value } => {
        self.print_expression(target);
        self.print_expression(value);
      },
      _ => {},
    }
    self.indent -= 1;
  }
}
