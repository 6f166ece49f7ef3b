use crate::declaration::DeclarationId;

/// Structural surface type.
///
/// `Never` is the bottom type: assignable to everything, the type of any
/// diverging expression. `Any` is the top type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CandyType {
  Unit,
  Never,
  Bool,
  Int,
  Float,
  Number,
  String,
  Any,

  Declared {
    name: String,
    module: DeclarationId,
    type_arguments: Vec<CandyType>,
  },
  Tuple(Vec<CandyType>),
  Function {
    receiver: Option<Box<CandyType>>,
    parameters: Vec<CandyType>,
    return_type: Box<CandyType>,
  },
  Union(Vec<CandyType>),
  Intersection(Vec<CandyType>),
  Parameter(String),
  Reflection(DeclarationId),
  This,
}

impl CandyType {
  pub fn function(
    parameters: Vec<CandyType>,
    return_type: CandyType,
  ) -> Self {
    CandyType::Function {
      receiver: None,
      parameters,
      return_type: Box::new(return_type),
    }
  }

  #[inline]
  pub fn is_unit(&self) -> bool {
    matches!(self, CandyType::Unit)
  }

  #[inline]
  pub fn is_never(&self) -> bool {
    matches!(self, CandyType::Never)
  }

  /// The assignability (subtyping) oracle.
  ///
  /// `a.is_assignable_to(b)` answers whether a value of type `a` may appear
  /// where `b` is expected. There is no unification: type arguments of
  /// declared types are matched invariantly.
  pub fn is_assignable_to(
    &self,
    to: &CandyType,
  ) -> bool {
    if self == to {
      return true;
    }

    if self.is_never() {
      return true;
    }

    match (self, to) {
      (_, CandyType::Any) => true,

      // A union source must fit in its entirety.
      (CandyType::Union(parts), _) => parts.iter().all(|part| part.is_assignable_to(to)),
      // A union target is satisfied by any single variant.
      (_, CandyType::Union(parts)) => parts.iter().any(|part| self.is_assignable_to(part)),

      // An intersection target demands all parts.
      (_, CandyType::Intersection(parts)) => parts.iter().all(|part| self.is_assignable_to(part)),
      // An intersection source satisfies a target through any part.
      (CandyType::Intersection(parts), _) => parts.iter().any(|part| part.is_assignable_to(to)),

      (CandyType::Int, CandyType::Number) | (CandyType::Float, CandyType::Number) => true,

      (CandyType::Tuple(from), CandyType::Tuple(target)) => {
        from.len() == target.len()
          && from
            .iter()
            .zip(target.iter())
            .all(|(a, b)| a.is_assignable_to(b))
      },

      (
        CandyType::Function {
          receiver: from_receiver,
          parameters: from_parameters,
          return_type: from_return,
        },
        CandyType::Function {
          receiver: to_receiver,
          parameters: to_parameters,
          return_type: to_return,
        },
      ) => {
        from_receiver == to_receiver
          && from_parameters.len() == to_parameters.len()
          && to_parameters
            .iter()
            .zip(from_parameters.iter())
            .all(|(to_param, from_param)| to_param.is_assignable_to(from_param))
          && from_return.is_assignable_to(to_return)
      },

      (
        CandyType::Declared {
          name: from_name,
          module: from_module,
          type_arguments: from_arguments,
        },
        CandyType::Declared {
          name: to_name,
          module: to_module,
          type_arguments: to_arguments,
        },
      ) => from_name == to_name && from_module == to_module && from_arguments == to_arguments,

      _ => false,
    }
  }
}

impl std::fmt::Display for CandyType {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>,
  ) -> std::fmt::Result {
    match self {
      CandyType::Unit => write!(f, "Unit"),
      CandyType::Never => write!(f, "Never"),
      CandyType::Bool => write!(f, "Bool"),
      CandyType::Int => write!(f, "Int"),
      CandyType::Float => write!(f, "Float"),
      CandyType::Number => write!(f, "Number"),
      CandyType::String => write!(f, "String"),
      CandyType::Any => write!(f, "Any"),
      CandyType::Declared {
        name,
        type_arguments,
        ..
      } => {
        write!(f, "{}", name)?;
        if !type_arguments.is_empty() {
          write!(f, "<")?;
          for (i, argument) in type_arguments.iter().enumerate() {
            if i > 0 {
              write!(f, ", ")?;
            }
            write!(f, "{}", argument)?;
          }
          write!(f, ">")?;
        }
        Ok(())
      },
      CandyType::Tuple(elements) => {
        write!(f, "(")?;
        for (i, element) in elements.iter().enumerate() {
          if i > 0 {
            write!(f, ", ")?;
          }
          write!(f, "{}", element)?;
        }
        write!(f, ")")
      },
      CandyType::Function {
        receiver,
        parameters,
        return_type,
      } => {
        if let Some(receiver) = receiver {
          write!(f, "{}.", receiver)?;
        }
        write!(f, "(")?;
        for (i, parameter) in parameters.iter().enumerate() {
          if i > 0 {
            write!(f, ", ")?;
          }
          write!(f, "{}", parameter)?;
        }
        write!(f, ") => {}", return_type)
      },
      CandyType::Union(parts) => {
        for (i, part) in parts.iter().enumerate() {
          if i > 0 {
            write!(f, " | ")?;
          }
          write!(f, "{}", part)?;
        }
        Ok(())
      },
      CandyType::Intersection(parts) => {
        for (i, part) in parts.iter().enumerate() {
          if i > 0 {
            write!(f, " & ")?;
          }
          write!(f, "{}", part)?;
        }
        Ok(())
      },
      CandyType::Parameter(name) => write!(f, "{}", name),
      CandyType::Reflection(declaration) => write!(f, "Reflection<{}>", declaration),
      CandyType::This => write!(f, "This"),
    }
  }
}
