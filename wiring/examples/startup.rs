use fibre_wiring::{injectable, Registrar, ServiceTable, Value};
use std::sync::Arc;

// --- Injectable Services ---

struct Database;

struct UserService {
  db: Arc<Database>,
}

impl UserService {
  fn describe(&self) -> String {
    format!("user service backed by {:p}", Arc::as_ptr(&self.db))
  }
}

injectable!(Database);
injectable!(UserService, [db: Database]);

// A minimal stand-in for the consuming framework: resolve each of a
// factory's tokens from the table, then invoke the factory with the
// results.
fn instantiate(table: &ServiceTable, name: &str) -> fibre_wiring::Result<Value> {
  let factory = table.get(name).expect("service not registered");
  let resolved = factory
    .tokens()
    .iter()
    .map(|token| instantiate(table, token))
    .collect::<fibre_wiring::Result<Vec<_>>>()?;
  factory.construct(resolved)
}

fn main() -> fibre_wiring::Result<()> {
  // --- Registration (startup phase) ---
  let registrar = Registrar::new();
  let table = ServiceTable::new();

  registrar.register_service::<Database>(&table);
  registrar.register_service::<UserService>(&table);
  registrar.finish();

  println!("registered services: {}", table.len());

  // --- Instantiation (framework-driven, after startup) ---
  let instance = instantiate(&table, "UserService")?;
  let user_service = instance
    .downcast::<UserService>()
    .ok()
    .expect("factory built the wrong type");

  println!("{}", user_service.describe());
  Ok(())
}
