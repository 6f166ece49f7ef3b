use crate::resource::ResourceId;

/// Kind of a named declaration segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
  Module,
  Class,
  Trait,
  Impl,
  Function,
  Property,
  Constructor,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeclarationSegment {
  pub name: String,
  pub kind: DeclarationKind,
}

/// Stable path to a top-level or nested declaration, rooted at a resource.
///
/// An empty segment list denotes the resource's root module.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeclarationId {
  pub resource: ResourceId,
  pub segments: Vec<DeclarationSegment>,
}

impl DeclarationId {
  pub fn root(resource: ResourceId) -> Self {
    Self {
      resource,
      segments: Vec::new(),
    }
  }

  pub fn child(
    &self,
    name: impl Into<String>,
    kind: DeclarationKind,
  ) -> Self {
    let mut segments = self.segments.clone();
    segments.push(DeclarationSegment {
      name: name.into(),
      kind,
    });
    Self {
      resource: self.resource,
      segments,
    }
  }

  pub fn parent(&self) -> Option<Self> {
    if self.segments.is_empty() {
      return None;
    }
    Some(Self {
      resource: self.resource,
      segments: self.segments[..self.segments.len() - 1].to_vec(),
    })
  }

  /// Kind of the innermost segment. The resource root has no kind.
  pub fn kind(&self) -> Option<DeclarationKind> {
    self.segments.last().map(|s| s.kind)
  }

  pub fn simple_name(&self) -> Option<&str> {
    self.segments.last().map(|s| s.name.as_str())
  }

  pub fn is_function(&self) -> bool {
    self.kind() == Some(DeclarationKind::Function)
  }

  pub fn is_property(&self) -> bool {
    self.kind() == Some(DeclarationKind::Property)
  }

  pub fn is_constructor(&self) -> bool {
    self.kind() == Some(DeclarationKind::Constructor)
  }

  pub fn is_module(&self) -> bool {
    self.segments.is_empty() || self.kind() == Some(DeclarationKind::Module)
  }

  /// True when the direct parent is a type body (class, trait, or impl), i.e.
  /// the declaration is a member and `this` may be in scope.
  pub fn is_member(&self) -> bool {
    if self.segments.len() < 2 {
      return false;
    }
    matches!(
      self.segments[self.segments.len() - 2].kind,
      DeclarationKind::Class | DeclarationKind::Trait | DeclarationKind::Impl
    )
  }
}

impl std::fmt::Display for DeclarationId {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>,
  ) -> std::fmt::Result {
    write!(f, "{}:", self.resource)?;
    for (i, segment) in self.segments.iter().enumerate() {
      if i > 0 {
        write!(f, ".")?;
      }
      write!(f, "{}", segment.name)?;
    }
    Ok(())
  }
}
