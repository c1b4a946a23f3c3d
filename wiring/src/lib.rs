//! # Fibre Wiring
//!
//! A declarative registration layer for wiring renderable components and
//! injectable services into external registries.
//!
//! Injectable types declare a constructor manifest: the ordered list of
//! dependency tokens, one per constructor parameter, and a construction
//! function consuming resolved values in the same order. The wiring layer
//! merges explicit per-parameter token overrides into the declared list,
//! generates a [`Factory`] (the merged token list plus the construction
//! function), and hands it to an external rendering registry or service
//! container, registering each selector or name at most once.
//!
//! Resolution itself is the consuming framework's business: at
//! instantiation time it resolves each token and invokes the factory with
//! the results.
//!
//! ## Core Concepts
//!
//! - **Token**: a string key identifying an injectable unit, either a
//!   service name or a component selector.
//! - **Manifest**: the [`Injectable`] implementation, usually generated
//!   with [`injectable!`].
//! - **Registrar**: the startup-phase context that records overrides and
//!   performs all registrations in program order.
//! - **Factory**: ordered tokens plus a construction thunk; the contract
//!   handed to external registries.
//!
//! ## Quick Start
//!
//! ```
//! use fibre_wiring::{injectable, ComponentOptions, Registrar, ServiceTable, ViewRegistry};
//! use std::sync::Arc;
//!
//! struct Mailer;
//! struct Notifier {
//!   mailer: Arc<Mailer>,
//! }
//!
//! injectable!(Mailer);
//! injectable!(Notifier, [mailer: Mailer]);
//!
//! fn main() -> fibre_wiring::Result<()> {
//!   let mut registrar = Registrar::new();
//!   let services = ServiceTable::new();
//!   let views = ViewRegistry::new();
//!
//!   // Route the mailer parameter to a named registration instead of the
//!   // declared type token.
//!   registrar.record_override::<Notifier>(0, "PrimaryMailer")?;
//!   assert_eq!(
//!     registrar.build_factory::<Notifier>().tokens(),
//!     vec!["PrimaryMailer"]
//!   );
//!
//!   // Services register once under their short type name.
//!   registrar.register_service::<Mailer>(&services);
//!   registrar.register_service::<Mailer>(&services); // no-op
//!   assert_eq!(services.len(), 1);
//!
//!   // Components need a template and register once per selector.
//!   registrar.register_component::<Notifier>(
//!     &views,
//!     ComponentOptions::new("notifier-badge").template("<div></div>"),
//!   )?;
//!   assert!(views.get("notifier-badge").is_some());
//!
//!   registrar.finish();
//!   Ok(())
//! }
//! ```

mod component;
mod core;
mod error;
mod factory;
mod global;
mod injectable;
mod macros;
mod metadata;
mod registrar;
mod service;

pub use component::{ComponentConfig, ComponentOptions, ComponentRegistry, TemplateRef, ViewRegistry};
pub use crate::core::{token_of, Token};
pub use error::{Result, WireError};
pub use factory::Factory;
pub use global::{services, views};
pub use injectable::{Injectable, Resolved, Value};
pub use registrar::Registrar;
pub use service::{ServiceContainer, ServiceTable};
