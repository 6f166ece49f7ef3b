use candy_diagnostics::DiagnosticMessage;
use candy_frontend::lowering::{merge, merge_flatten, LowerResult};
use candy_type::{resource::ResourceMap, span::Span, BytePosition};

fn error(position: u32) -> DiagnosticMessage {
  let mut resources = ResourceMap::new();
  let resource = resources.add_untitled("test", "");
  DiagnosticMessage::UndefinedIdentifier {
    name: format!("x{}", position),
    span: Span::new(resource, BytePosition(position), BytePosition(position + 1)),
  }
}

#[test]
fn merge_keeps_all_successes_in_order() {
  let results: Vec<LowerResult<i32>> = vec![Ok(1), Ok(2), Ok(3)];
  assert_eq!(merge(results), Ok(vec![1, 2, 3]));
}

#[test]
fn merge_collects_every_error_instead_of_short_circuiting() {
  let first = error(0);
  let second = error(10);
  let third = error(20);
  let results: Vec<LowerResult<i32>> = vec![
    Err(vec![first.clone()]),
    Ok(1),
    Err(vec![second.clone(), third.clone()]),
  ];

  assert_eq!(merge(results), Err(vec![first, second, third]));
}

#[test]
fn merge_of_nothing_is_an_empty_success() {
  let results: Vec<LowerResult<i32>> = Vec::new();
  assert_eq!(merge(results), Ok(Vec::new()));
}

#[test]
fn merge_flatten_concatenates_success_lists() {
  let results: Vec<LowerResult<Vec<i32>>> = vec![Ok(vec![1, 2]), Ok(vec![]), Ok(vec![3])];
  assert_eq!(merge_flatten(results), Ok(vec![1, 2, 3]));
}

#[test]
fn merge_flatten_still_collects_errors() {
  let first = error(0);
  let second = error(10);
  let results: Vec<LowerResult<Vec<i32>>> = vec![
    Ok(vec![1]),
    Err(vec![first.clone()]),
    Err(vec![second.clone()]),
  ];

  assert_eq!(merge_flatten(results), Err(vec![first, second]));
}
