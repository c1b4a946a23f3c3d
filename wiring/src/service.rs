//! Service registration surface: the external container interface and a
//! table-only implementation.

use crate::factory::Factory;
use dashmap::DashMap;
use std::sync::Arc;

/// The narrow interface of an external dependency-injection container.
///
/// The wiring layer only checks for a prior registration and submits
/// factories; resolution and caching are the container's business.
pub trait ServiceContainer: Send + Sync {
  /// Whether `name` already has a registration.
  fn is_registered(&self, name: &str) -> bool;

  /// Stores `factory` under `name`.
  fn register_factory(&self, name: &str, factory: Factory);
}

/// A table-only service container holding submitted factories for a
/// consuming resolver.
///
/// The first registration for a name wins, concurrent registration
/// included.
#[derive(Default)]
pub struct ServiceTable {
  entries: DashMap<String, Arc<Factory>>,
}

impl ServiceTable {
  /// Creates a new, empty `ServiceTable`.
  pub fn new() -> Self {
    Self::default()
  }

  /// The stored factory for `name`, if any.
  pub fn get(&self, name: &str) -> Option<Arc<Factory>> {
    self.entries.get(name).map(|entry| Arc::clone(entry.value()))
  }

  /// Number of registered names.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl ServiceContainer for ServiceTable {
  fn is_registered(&self, name: &str) -> bool {
    self.entries.contains_key(name)
  }

  fn register_factory(&self, name: &str, factory: Factory) {
    self
      .entries
      .entry(name.to_owned())
      .or_insert_with(|| Arc::new(factory));
  }
}
