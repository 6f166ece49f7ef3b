use std::path::{Path, PathBuf};

use ropey::Rope;

use crate::{span::Span, BytePosition, Id, Store};

pub type ResourceId = Id<Resource>;

/// A single compilation input.
///
/// Every resource roots its own module tree: declaration paths inside it
/// hang off a root module named after the file stem. An input without a
/// backing file (an unsaved editor buffer, a test snippet) is "untitled"
/// and uses its label as the stem.
#[derive(Debug, Clone)]
pub struct Resource {
  pub path: PathBuf,
  text: Rope,
}

impl Resource {
  pub fn new(
    path: PathBuf,
    text: &str,
  ) -> Self {
    Self {
      path,
      text: Rope::from_str(text),
    }
  }

  /// Name of the root module this resource defines.
  pub fn module_name(&self) -> &str {
    self
      .path
      .file_stem()
      .and_then(|stem| stem.to_str())
      .unwrap_or("")
  }

  pub fn len_bytes(&self) -> u32 {
    self.text.len_bytes() as u32
  }

  /// One-based line and column of a byte position. Columns count
  /// characters, not bytes; positions past the end clamp to it.
  pub fn line_col(
    &self,
    pos: BytePosition,
  ) -> (u32, u32) {
    let byte = (pos.0 as usize).min(self.text.len_bytes());
    let line = self.text.byte_to_line(byte);
    let column = self.text.byte_to_char(byte) - self.text.line_to_char(line);
    (line as u32 + 1, column as u32 + 1)
  }

  /// The source text a span points at.
  pub fn slice(
    &self,
    span: &Span,
  ) -> String {
    let start = (span.start.0 as usize).min(self.text.len_bytes());
    let end = (span.end.0 as usize).min(self.text.len_bytes()).max(start);
    self.text.byte_slice(start..end).to_string()
  }
}

/// Every resource of one compilation, addressed by `ResourceId`.
pub struct ResourceMap {
  resources: Store<Resource>,
}

impl ResourceMap {
  pub fn new() -> Self {
    Self {
      resources: Store::new(),
    }
  }

  /// Register a source file. Callers register each path once; registering
  /// it again yields a distinct resource.
  pub fn add_file(
    &mut self,
    path: impl Into<PathBuf>,
    text: &str,
  ) -> ResourceId {
    self.resources.alloc(Resource::new(path.into(), text))
  }

  /// Register an input with no backing file under a label.
  pub fn add_untitled(
    &mut self,
    label: &str,
    text: &str,
  ) -> ResourceId {
    self.resources.alloc(Resource::new(PathBuf::from(label), text))
  }

  pub fn get(
    &self,
    id: &ResourceId,
  ) -> &Resource {
    self.resources.get(id)
  }

  pub fn find_by_path(
    &self,
    path: &Path,
  ) -> Option<ResourceId> {
    self
      .resources
      .iter()
      .find(|(_, resource)| resource.path == path)
      .map(|(id, _)| id)
  }
}

impl Default for ResourceMap {
  fn default() -> Self {
    Self::new()
  }
}

impl std::fmt::Display for Id<Resource> {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>,
  ) -> std::fmt::Result {
    write!(f, "r{}", self.0)
  }
}
