//! Component registration surface: declarative options, template
//! references, and the external rendering-registry interface.

use crate::core::Token;
use crate::factory::Factory;
use dashmap::DashMap;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Declarative options for one renderable component.
///
/// Exactly one of the inline template and the template URL must be set by
/// registration time; when both are, the inline template wins.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComponentOptions {
  selector: String,
  template: Option<String>,
  template_url: Option<String>,
  directives: Vec<Token>,
}

impl ComponentOptions {
  /// Options for the component registered under `selector`.
  pub fn new(selector: impl Into<String>) -> Self {
    Self {
      selector: selector.into(),
      template: None,
      template_url: None,
      directives: Vec::new(),
    }
  }

  /// Inline template source.
  pub fn template(mut self, source: impl Into<String>) -> Self {
    self.template = Some(source.into());
    self
  }

  /// External template location, submitted as a require reference.
  pub fn template_url(mut self, url: impl Into<String>) -> Self {
    self.template_url = Some(url.into());
    self
  }

  /// Declares a child component selector this component's template uses.
  ///
  /// Carried on the options only; the submitted registration is exactly
  /// template plus view model.
  pub fn directive(mut self, selector: impl Into<Token>) -> Self {
    self.directives.push(selector.into());
    self
  }

  /// The selector this component registers under.
  pub fn selector(&self) -> &str {
    &self.selector
  }

  /// Declared child component selectors, in declaration order.
  pub fn directives(&self) -> &[Token] {
    &self.directives
  }

  pub(crate) fn template_ref(&self) -> Option<TemplateRef> {
    match (&self.template, &self.template_url) {
      (Some(source), _) => Some(TemplateRef::Inline(source.clone())),
      (None, Some(url)) => Some(TemplateRef::Require(url.clone())),
      (None, None) => None,
    }
  }
}

/// How the registered template reaches the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TemplateRef {
  /// Inline template source.
  Inline(String),
  /// A location the renderer loads the template from.
  Require(String),
}

/// The registration payload submitted for one component.
#[derive(Debug)]
pub struct ComponentConfig {
  /// Template, inline or by reference.
  pub template: TemplateRef,
  /// Factory constructing the component's view model.
  pub view_model: Factory,
}

/// The narrow interface of an external rendering registry.
///
/// The wiring layer only checks for a prior registration and submits new
/// ones; how templates are rendered is the registry's business.
pub trait ComponentRegistry: Send + Sync {
  /// Whether `selector` already has a registration.
  fn is_registered(&self, selector: &str) -> bool;

  /// Stores a registration for `selector`.
  fn register(&self, selector: &str, config: ComponentConfig);
}

/// A table-only rendering registry holding submitted configurations for a
/// consuming renderer.
///
/// The first registration for a selector wins, concurrent registration
/// included.
#[derive(Default)]
pub struct ViewRegistry {
  entries: DashMap<String, Arc<ComponentConfig>>,
}

impl ViewRegistry {
  /// Creates a new, empty `ViewRegistry`.
  pub fn new() -> Self {
    Self::default()
  }

  /// The stored configuration for `selector`, if any.
  pub fn get(&self, selector: &str) -> Option<Arc<ComponentConfig>> {
    self.entries.get(selector).map(|entry| Arc::clone(entry.value()))
  }

  /// Number of registered selectors.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl ComponentRegistry for ViewRegistry {
  fn is_registered(&self, selector: &str) -> bool {
    self.entries.contains_key(selector)
  }

  fn register(&self, selector: &str, config: ComponentConfig) {
    self
      .entries
      .entry(selector.to_owned())
      .or_insert_with(|| Arc::new(config));
  }
}
