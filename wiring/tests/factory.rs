use fibre_wiring::{injectable, Registrar, Value, WireError};
use pretty_assertions::assert_eq;
use std::sync::Arc;

// --- Test Fixtures ---

struct Bar;
struct Baz;

// A two-dependency target, fields in constructor-parameter order.
struct Foo {
  bar: Arc<Bar>,
  baz: Arc<Baz>,
}

struct Standalone;

injectable!(Bar);
injectable!(Baz);
injectable!(Foo, [bar: Bar, baz: Baz]);
injectable!(Standalone);

// --- Factory Shape Tests ---

#[test]
fn test_tokens_match_declared_order_without_overrides() {
  // Arrange
  let registrar = Registrar::new();

  // Act
  let factory = registrar.build_factory::<Foo>();

  // Assert
  assert_eq!(factory.tokens(), vec!["Bar", "Baz"]);
  assert_eq!(factory.arity(), 2);
  assert_eq!(factory.target(), "Foo");
}

#[test]
fn test_override_token_takes_precedence_at_its_position() {
  // Arrange
  let mut registrar = Registrar::new();
  registrar.record_override::<Foo>(1, "customBaz").unwrap();

  // Act
  let factory = registrar.build_factory::<Foo>();

  // Assert: position 1 carries the override, position 0 the declared token.
  assert_eq!(factory.tokens(), vec!["Bar", "customBaz"]);
  assert_eq!(factory.arity(), 2);
}

#[test]
fn test_zero_dependency_factory() {
  // Arrange
  let registrar = Registrar::new();
  let factory = registrar.build_factory::<Standalone>();

  // Act
  let instance = factory.construct(Vec::new()).unwrap();

  // Assert
  assert!(factory.tokens().is_empty());
  assert!(instance.downcast::<Standalone>().is_ok());
}

// --- Construction Tests ---

#[test]
fn test_thunk_builds_instance_holding_the_resolved_values() {
  // Arrange
  let mut registrar = Registrar::new();
  registrar.record_override::<Foo>(1, "customBaz").unwrap();
  let factory = registrar.build_factory::<Foo>();

  let bar = Arc::new(Bar);
  let baz = Arc::new(Baz);

  // Act
  let instance = factory
    .construct(vec![bar.clone() as Value, baz.clone() as Value])
    .unwrap();
  let foo = instance.downcast::<Foo>().ok().unwrap();

  // Assert: the instance holds exactly the values it was invoked with.
  assert!(Arc::ptr_eq(&foo.bar, &bar));
  assert!(Arc::ptr_eq(&foo.baz, &baz));
}

#[test]
fn test_thunk_rejects_wrong_argument_count() {
  // Arrange
  let registrar = Registrar::new();
  let factory = registrar.build_factory::<Foo>();

  // Act
  let result = factory.construct(vec![Arc::new(Bar) as Value]);

  // Assert
  assert_eq!(
    result.err().unwrap(),
    WireError::ArityMismatch {
      target: "Foo",
      expected: 2,
      actual: 1,
    }
  );
}

#[test]
fn test_thunk_rejects_wrong_value_type_positionally() {
  // Arrange
  let registrar = Registrar::new();
  let factory = registrar.build_factory::<Foo>();

  // Act: the values are swapped, so position 0 is not a Bar.
  let result = factory.construct(vec![Arc::new(Baz) as Value, Arc::new(Bar) as Value]);

  // Assert
  assert_eq!(
    result.err().unwrap(),
    WireError::DependencyMismatch {
      target: "Foo",
      index: 0,
      expected: "Bar",
    }
  );
}

#[test]
fn test_factory_is_reusable_across_invocations() {
  // The factory is computed once at registration time and must stay
  // invokable for every later instantiation request.

  // Arrange
  let registrar = Registrar::new();
  let factory = registrar.build_factory::<Foo>();

  // Act
  let first = factory.construct(vec![Arc::new(Bar) as Value, Arc::new(Baz) as Value]);
  let second = factory.construct(vec![Arc::new(Bar) as Value, Arc::new(Baz) as Value]);

  // Assert
  assert!(first.is_ok());
  assert!(second.is_ok());
}
