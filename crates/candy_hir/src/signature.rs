use candy_type::types::CandyType;

/// Resolved signature of a function declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionHir {
  pub name: String,
  pub parameters: Vec<ParameterHir>,
  pub return_type: CandyType,
  pub is_static: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterHir {
  pub name: String,
  pub ty: CandyType,
}

/// Resolved signature of a property declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyHir {
  pub name: String,
  pub ty: CandyType,
  pub mutable: bool,
  pub is_static: bool,
  pub has_initializer: bool,
}
