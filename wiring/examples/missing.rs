use fibre_wiring::{injectable, ComponentOptions, Registrar, ViewRegistry, WireError};

struct Banner;
injectable!(Banner);

fn main() {
  let registrar = Registrar::new();
  let views = ViewRegistry::new();

  // --- A component without any template is rejected ---
  println!("Registering a component with no template...");

  let result = registrar.register_component::<Banner>(&views, ComponentOptions::new("hero-banner"));

  match result {
    Err(WireError::MissingTemplate { component }) => {
      println!("Correctly rejected: component {} has no template.", component);
    }
    other => panic!("expected a missing-template error, got {:?}", other),
  }
  assert!(views.is_empty());

  // --- The same registration with a template succeeds ---
  registrar
    .register_component::<Banner>(
      &views,
      ComponentOptions::new("hero-banner").template("<header></header>"),
    )
    .expect("registration with a template should succeed");

  println!("Registered {} component(s).", views.len());
}
