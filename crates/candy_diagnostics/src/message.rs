use std::fmt;

use candy_type::{span::Span, types::CandyType};

use crate::diagnostic_report::{Diagnostic, Severity};

/// Every diagnostic kind the body lowering can surface.
///
/// All kinds except `Internal` are collected into result error lists; an
/// `Internal` message marks an invariant violation inside the compiler and
/// may abort the lowering that raised it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticMessage {
  UnsupportedFeature {
    construct: &'static str,
    span: Span,
  },
  InvalidExpressionType {
    expected: CandyType,
    found: Option<CandyType>,
    span: Span,
  },
  AmbiguousExpression {
    candidates: usize,
    span: Span,
  },
  MissingReturn {
    function: String,
    return_type: CandyType,
    span: Span,
  },
  InvalidReturnLabel {
    label: Option<String>,
    span: Span,
  },
  UndefinedIdentifier {
    name: String,
    span: Span,
  },
  Internal {
    message: String,
    span: Span,
  },
}

impl fmt::Display for DiagnosticMessage {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    match self {
      DiagnosticMessage::UnsupportedFeature { construct, .. } => {
        write!(f, "Lowering does not support {} expressions yet", construct)
      },
      DiagnosticMessage::InvalidExpressionType {
        expected,
        found: Some(found),
        ..
      } => {
        write!(f, "Expected an expression of type `{}`, found `{}`", expected, found)
      },
      DiagnosticMessage::InvalidExpressionType {
        expected,
        found: None,
        ..
      } => {
        write!(f, "Expected an expression of type `{}`", expected)
      },
      DiagnosticMessage::AmbiguousExpression { candidates, .. } => {
        write!(f, "Expression is ambiguous: {} candidates remain", candidates)
      },
      DiagnosticMessage::MissingReturn {
        function,
        return_type,
        ..
      } => {
        write!(
          f,
          "Function `{}` must return a value of type `{}`, but its body is empty",
          function, return_type
        )
      },
      DiagnosticMessage::InvalidReturnLabel { label: Some(label), .. } => {
        write!(f, "No enclosing scope matches the return label `{}`", label)
      },
      DiagnosticMessage::InvalidReturnLabel { label: None, .. } => {
        write!(f, "`return` is not valid here")
      },
      DiagnosticMessage::UndefinedIdentifier { name, .. } => {
        write!(f, "Undefined identifier `{}`", name)
      },
      DiagnosticMessage::Internal { message, .. } => {
        write!(f, "Internal compiler error: {}", message)
      },
    }
  }
}

impl DiagnosticMessage {
  pub fn primary_span(&self) -> Span {
    match self {
      DiagnosticMessage::UnsupportedFeature { span, .. }
      | DiagnosticMessage::InvalidExpressionType { span, .. }
      | DiagnosticMessage::AmbiguousExpression { span, .. }
      | DiagnosticMessage::MissingReturn { span, .. }
      | DiagnosticMessage::InvalidReturnLabel { span, .. }
      | DiagnosticMessage::UndefinedIdentifier { span, .. }
      | DiagnosticMessage::Internal { span, .. } => span.clone(),
    }
  }

  pub fn code(&self) -> String {
    match self {
      DiagnosticMessage::UnsupportedFeature { .. } => "L0001",
      DiagnosticMessage::InvalidExpressionType { .. } => "L0002",
      DiagnosticMessage::AmbiguousExpression { .. } => "L0003",
      DiagnosticMessage::MissingReturn { .. } => "L0004",
      DiagnosticMessage::InvalidReturnLabel { .. } => "L0005",
      DiagnosticMessage::UndefinedIdentifier { .. } => "L0006",
      DiagnosticMessage::Internal { .. } => "L0099",
    }
    .to_string()
  }

  fn level(&self) -> Severity {
    Severity::Error
  }

  pub fn is_internal(&self) -> bool {
    matches!(self, DiagnosticMessage::Internal { .. })
  }

  pub fn report(&self) -> Diagnostic {
    Diagnostic::new(self.level(), self.to_string(), self.code(), self.primary_span())
  }
}
