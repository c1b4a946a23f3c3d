//! Global default registries and access functions.

use crate::component::ViewRegistry;
use crate::service::ServiceTable;
use once_cell::sync::Lazy;

// The default registry instances, created on first access in a
// thread-safe manner.
static GLOBAL_VIEWS: Lazy<ViewRegistry> = Lazy::new(ViewRegistry::default);
static GLOBAL_SERVICES: Lazy<ServiceTable> = Lazy::new(ServiceTable::default);

/// Provides a reference to the global component registry.
///
/// Applications that don't carry their own registry instance register all
/// components here; a consuming renderer reads the same instance.
///
/// # Examples
///
/// ```
/// use fibre_wiring::views;
///
/// assert!(views().get("nonexistent-selector").is_none());
/// ```
pub fn views() -> &'static ViewRegistry {
  &GLOBAL_VIEWS
}

/// Provides a reference to the global service container.
///
/// ```
/// use fibre_wiring::services;
///
/// assert!(services().get("NonexistentService").is_none());
/// ```
pub fn services() -> &'static ServiceTable {
  &GLOBAL_SERVICES
}
