use candy_diagnostics::DiagnosticMessage;

/// Result of lowering one construct: a value, or every diagnostic its
/// sub-tree produced.
pub type LowerResult<T> = Result<T, Vec<DiagnosticMessage>>;

/// Fold per-element results into all values or all errors.
///
/// Errors are collected across elements, never short-circuited: a body with
/// three bad expressions reports three diagnostics.
pub fn merge<T>(results: impl IntoIterator<Item = LowerResult<T>>) -> LowerResult<Vec<T>> {
  let mut values = Vec::new();
  let mut errors = Vec::new();

  for result in results {
    match result {
      Ok(value) => values.push(value),
      Err(mut element_errors) => errors.append(&mut element_errors),
    }
  }

  if errors.is_empty() {
    Ok(values)
  } else {
    Err(errors)
  }
}

/// Like [`merge`], flattening per-element value lists.
pub fn merge_flatten<T>(
  results: impl IntoIterator<Item = LowerResult<Vec<T>>>,
) -> LowerResult<Vec<T>> {
  merge(results).map(|nested| nested.into_iter().flatten().collect())
}
