//! Error types for recording, registration, and factory construction.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WireError>;

/// Errors raised while recording overrides, registering targets, or
/// constructing instances from a generated factory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
  /// A component was registered with neither an inline template nor a
  /// template URL.
  #[error("Component {component} must have template")]
  MissingTemplate { component: &'static str },

  /// An override targeted a parameter position outside the target's
  /// declared constructor arity.
  #[error("override index {index} is out of bounds for {target} (arity {arity})")]
  OverrideOutOfBounds {
    target: &'static str,
    index: usize,
    arity: usize,
  },

  /// Two overrides targeted the same parameter position of one target.
  #[error("duplicate override for parameter {index} of {target}")]
  DuplicateOverride { target: &'static str, index: usize },

  /// An override supplied an empty dependency token.
  #[error("empty dependency token for parameter {index} of {target}")]
  EmptyToken { target: &'static str, index: usize },

  /// A factory was invoked with the wrong number of resolved values.
  #[error("{target} expects {expected} resolved dependencies, got {actual}")]
  ArityMismatch {
    target: &'static str,
    expected: usize,
    actual: usize,
  },

  /// The resolved value at a parameter position was not of the type the
  /// constructor takes there.
  #[error("dependency {index} of {target} is not a {expected}")]
  DependencyMismatch {
    target: &'static str,
    index: usize,
    expected: &'static str,
  },
}
