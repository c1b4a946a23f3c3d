//! The registration-phase context: records overrides, builds factories,
//! and hands registrations to external registries.

use crate::component::{ComponentConfig, ComponentOptions, ComponentRegistry};
use crate::core::{short_name, TargetId, Token};
use crate::error::{Result, WireError};
use crate::factory::{self, Factory};
use crate::injectable::Injectable;
use crate::metadata::MetadataStore;
use crate::service::ServiceContainer;
use tracing::{debug, trace};

/// The registration-phase context.
///
/// Built once at startup, used for every recording and registration call
/// in program order, and discarded once wiring is complete. All override
/// metadata lives here; there is no process-global state to reset between
/// runs.
#[derive(Default)]
pub struct Registrar {
  metadata: MetadataStore,
}

impl Registrar {
  /// Creates an empty registration context.
  pub fn new() -> Self {
    Self::default()
  }

  /// Records an explicit dependency token for one constructor parameter of
  /// `T`, superseding the declared token at that position.
  ///
  /// Overrides for the same target accumulate across calls and keep their
  /// recording order. Fails if the token is empty, `index` is outside
  /// `T`'s declared arity, or the position was already overridden.
  pub fn record_override<T: Injectable>(
    &mut self,
    index: usize,
    token: impl Into<Token>,
  ) -> Result<()> {
    let arity = T::dependencies().len();
    self
      .metadata
      .record(TargetId::of::<T>(), arity, index, token.into())
  }

  /// Produces the factory for `T`: the declared token list with recorded
  /// overrides applied positionally, plus the construction function.
  pub fn build_factory<T: Injectable>(&self) -> Factory {
    factory::build::<T>(self.metadata.overrides_for(&TargetId::of::<T>()))
  }

  /// Registers `T` as a renderable component under `options.selector()`.
  ///
  /// A selector the registry already knows is left untouched and the call
  /// returns `Ok(())` without further validation. Otherwise the options
  /// must carry a template (inline wins over a URL when both are present),
  /// and the generated factory is submitted as the view model.
  pub fn register_component<T: Injectable>(
    &self,
    registry: &dyn ComponentRegistry,
    options: ComponentOptions,
  ) -> Result<()> {
    if registry.is_registered(options.selector()) {
      trace!(
        selector = options.selector(),
        "component already registered, skipping"
      );
      return Ok(());
    }

    let template = options.template_ref().ok_or(WireError::MissingTemplate {
      component: short_name::<T>(),
    })?;

    let view_model = self.build_factory::<T>();
    debug!(
      selector = options.selector(),
      component = view_model.target(),
      "registering component"
    );
    registry.register(
      options.selector(),
      ComponentConfig {
        template,
        view_model,
      },
    );
    Ok(())
  }

  /// Registers `T` as an injectable service under its short type name.
  ///
  /// A name the container already knows is left untouched, so two distinct
  /// types sharing a short name collide and the first registration wins.
  pub fn register_service<T: Injectable>(&self, container: &dyn ServiceContainer) {
    let name = short_name::<T>();
    if container.is_registered(name) {
      trace!(name, "service already registered, skipping");
      return;
    }

    let factory = self.build_factory::<T>();
    debug!(name, arity = factory.arity(), "registering service");
    container.register_factory(name, factory);
  }

  /// Ends the registration phase.
  ///
  /// Consuming the context guarantees no further overrides are recorded
  /// once startup wiring completes.
  pub fn finish(self) {
    debug!(
      overrides = self.metadata.recorded(),
      "registration phase complete"
    );
  }
}
