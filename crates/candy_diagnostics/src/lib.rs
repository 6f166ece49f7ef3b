pub mod diagnostic_report;
pub mod message;

pub use diagnostic_report::{Diagnostic, Label, Severity};
pub use message::DiagnosticMessage;

use candy_type::resource::ResourceMap;
use colored::Colorize;

/// Terminal reporter for diagnostics.
pub struct DiagnosticPrinter<'a> {
  resources: &'a ResourceMap,
}

impl<'a> DiagnosticPrinter<'a> {
  pub fn new(resources: &'a ResourceMap) -> Self {
    Self { resources }
  }

  pub fn report(
    &self,
    diagnostics: &[Diagnostic],
  ) {
    for diagnostic in diagnostics {
      self.print(diagnostic);
    }
  }

  pub fn print(
    &self,
    diagnostic: &Diagnostic,
  ) {
    let message = diagnostic.message.bold();
    let code = diagnostic.error_code.bold();

    match diagnostic.severity {
      Severity::Info => eprintln!("{}[{}]: {}", "Info".blue().bold(), code.blue(), message),
      Severity::Warning => eprintln!("{}[{}]: {}", "Warning".yellow().bold(), code.yellow(), message),
      Severity::Error => eprintln!("{}[{}]: {}", "Error".red().bold(), code.red().bold(), message),
      Severity::Hint => eprintln!("{}[{}]: {}", "Hint".cyan().bold(), code.cyan(), message),
    }

    let span = &diagnostic.primary_span;
    let resource = self.resources.get(&span.resource);
    let (line, column) = resource.line_col(span.start);
    eprintln!(
      "{:2}{} {}:{}:{}",
      "",
      "-->".blue().bold(),
      resource.path.display().to_string().bold(),
      line.to_string().bold(),
      column.to_string().bold(),
    );

    for label in &diagnostic.labels {
      let (line, column) = self.resources.get(&label.span.resource).line_col(label.span.start);
      eprintln!("  {} at {}:{}", label.message, line, column);
    }
    for note in &diagnostic.notes {
      eprintln!("  note: {}", note);
    }
    eprintln!();
  }
}
