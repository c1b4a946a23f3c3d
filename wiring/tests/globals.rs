//! Tests for the global default registries.
//!
//! Registrations here use selectors and names unique to each test, since
//! the globals are shared across the whole test binary.

use fibre_wiring::{injectable, services, views, ComponentOptions, Registrar, TemplateRef};

// --- Test Fixtures ---

struct GlobalWidget;
struct GlobalAudit;

injectable!(GlobalWidget);
injectable!(GlobalAudit);

// --- Tests ---

#[test]
fn test_global_view_registry_is_shared() {
  // Arrange
  let registrar = Registrar::new();

  // Act
  registrar
    .register_component::<GlobalWidget>(
      views(),
      ComponentOptions::new("global-widget").template("<div></div>"),
    )
    .unwrap();

  // Assert: a later access through the global accessor sees the entry.
  let config = views().get("global-widget").unwrap();
  assert_eq!(
    config.template,
    TemplateRef::Inline("<div></div>".to_string())
  );
  assert_eq!(config.view_model.target(), "GlobalWidget");
}

#[test]
fn test_global_service_table_is_shared() {
  // Arrange
  let registrar = Registrar::new();

  // Act
  registrar.register_service::<GlobalAudit>(services());

  // Assert
  let factory = services().get("GlobalAudit").unwrap();
  assert_eq!(factory.arity(), 0);
}

#[test]
fn test_globals_survive_registrar_teardown() {
  // The registrar is a startup-phase object; registries outlive it.

  // Arrange
  struct GlobalOutliver;
  injectable!(GlobalOutliver);

  let registrar = Registrar::new();
  registrar.register_service::<GlobalOutliver>(services());

  // Act
  registrar.finish();

  // Assert
  assert!(services().get("GlobalOutliver").is_some());
}
