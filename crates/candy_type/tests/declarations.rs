use candy_type::{
  declaration::{DeclarationId, DeclarationKind},
  resource::ResourceMap,
};

fn root() -> DeclarationId {
  let mut resources = ResourceMap::new();
  let resource = resources.add_untitled("test", "");
  DeclarationId::root(resource)
}

#[test]
fn paths_know_their_parents_and_names() {
  let root = root();
  let class = root.child("Counter", DeclarationKind::Class);
  let method = class.child("increment", DeclarationKind::Function);

  assert_eq!(method.simple_name(), Some("increment"));
  assert_eq!(method.parent(), Some(class.clone()));
  assert_eq!(class.parent(), Some(root.clone()));
  assert_eq!(root.parent(), None);
  assert_eq!(root.simple_name(), None);
}

#[test]
fn kind_predicates_follow_the_innermost_segment() {
  let root = root();
  let class = root.child("Counter", DeclarationKind::Class);
  let method = class.child("increment", DeclarationKind::Function);
  let property = class.child("count", DeclarationKind::Property);
  let constructor = class.child("new", DeclarationKind::Constructor);

  assert!(method.is_function());
  assert!(!method.is_property());
  assert!(property.is_property());
  assert!(constructor.is_constructor());
  assert!(!constructor.is_function());
  assert!(root.is_module());
  assert!(!class.is_module());
}

#[test]
fn members_are_declarations_directly_inside_type_bodies() {
  let root = root();
  let class = root.child("Counter", DeclarationKind::Class);
  let trait_ = root.child("Comparable", DeclarationKind::Trait);

  assert!(class.child("increment", DeclarationKind::Function).is_member());
  assert!(trait_.child("compare", DeclarationKind::Function).is_member());
  assert!(!root.child("main", DeclarationKind::Function).is_member());

  let module = root.child("util", DeclarationKind::Module);
  assert!(!module.child("helper", DeclarationKind::Function).is_member());
}
