use candy_type::{declaration::DeclarationId, types::CandyType};

use crate::{DeclarationLocalId, HirExpression};

/// A resolved identifier, produced by context resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
  This {
    ty: CandyType,
  },
  Super {
    ty: CandyType,
  },
  Parameter {
    id: DeclarationLocalId,
    name: String,
    ty: CandyType,
  },
  LocalProperty {
    id: DeclarationLocalId,
    name: String,
    ty: CandyType,
    mutable: bool,
  },
  Property {
    declaration: DeclarationId,
    ty: CandyType,
    receiver: Option<Box<HirExpression>>,
  },
  Reflection {
    declaration: DeclarationId,
    ty: CandyType,
  },
}

impl Identifier {
  pub fn ty(&self) -> &CandyType {
    match self {
      Identifier::This { ty }
      | Identifier::Super { ty }
      | Identifier::Parameter { ty, .. }
      | Identifier::LocalProperty { ty, .. }
      | Identifier::Property { ty, .. }
      | Identifier::Reflection { ty, .. } => ty,
    }
  }

  /// The source name this identifier binds, if it has one.
  pub fn name(&self) -> Option<&str> {
    match self {
      Identifier::This { .. } => Some("this"),
      Identifier::Super { .. } => Some("super"),
      Identifier::Parameter { name, .. } | Identifier::LocalProperty { name, .. } => Some(name),
      Identifier::Property { declaration, .. } => declaration.simple_name(),
      Identifier::Reflection { .. } => None,
    }
  }
}
