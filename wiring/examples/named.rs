use fibre_wiring::{injectable, Registrar, Value};
use std::sync::Arc;

// --- Abstraction and Implementations ---

struct Mailer {
  transport: &'static str,
}

struct Newsletter {
  mailer: Arc<Mailer>,
}

injectable!(Newsletter, [mailer: Mailer]);

fn main() -> fibre_wiring::Result<()> {
  // --- Registration ---
  // By default the newsletter's first parameter resolves by type token.
  let mut registrar = Registrar::new();
  println!(
    "declared tokens: {:?}",
    registrar.build_factory::<Newsletter>().tokens()
  );

  // Route that parameter to a named registration instead.
  registrar.record_override::<Newsletter>(0, "bulkMailer")?;

  let factory = registrar.build_factory::<Newsletter>();
  println!("merged tokens:   {:?}", factory.tokens());
  assert_eq!(factory.tokens(), vec!["bulkMailer"]);

  // --- Instantiation ---
  // Whatever the consuming container resolved for "bulkMailer" is handed
  // to the factory positionally.
  let bulk = Arc::new(Mailer {
    transport: "smtp-bulk",
  });
  let instance = factory.construct(vec![bulk.clone() as Value])?;
  let newsletter = instance
    .downcast::<Newsletter>()
    .ok()
    .expect("factory built the wrong type");

  println!("newsletter sends via {}", newsletter.mailer.transport);
  assert!(Arc::ptr_eq(&newsletter.mailer, &bulk));
  Ok(())
}
