//! Factory construction: ordered dependency tokens plus the trailing
//! construction function handed to external registries.

use crate::core::{short_name, Token};
use crate::error::{Result, WireError};
use crate::injectable::{Injectable, Resolved, Value};
use crate::metadata::ParamOverride;
use std::fmt;
use std::sync::Arc;

type ConstructFn = Box<dyn Fn(Vec<Value>) -> Result<Value> + Send + Sync>;

/// A generated construction recipe for one target type.
///
/// The contract handed to external registries: the first `arity()`
/// elements are the dependency tokens in constructor-parameter order, and
/// the final element is the construction function. A registry resolves
/// each token and invokes [`construct`](Factory::construct) with the
/// results, in the same order.
///
/// A `Factory` is computed once, at registration time, and never mutated.
pub struct Factory {
  target: &'static str,
  tokens: Vec<Token>,
  construct: ConstructFn,
}

impl Factory {
  /// The merged dependency tokens in positional order.
  pub fn tokens(&self) -> &[Token] {
    &self.tokens
  }

  /// Constructor arity; always equals `tokens().len()`.
  pub fn arity(&self) -> usize {
    self.tokens.len()
  }

  /// Short name of the type this factory constructs.
  pub fn target(&self) -> &'static str {
    self.target
  }

  /// Invokes the construction function with resolved values.
  pub fn construct(&self, values: Vec<Value>) -> Result<Value> {
    (self.construct)(values)
  }
}

impl fmt::Debug for Factory {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Factory")
      .field("target", &self.target)
      .field("tokens", &self.tokens)
      .field("construct", &"<function>")
      .finish()
  }
}

/// Merges `overrides` into `T`'s declared token list and appends the
/// construction thunk.
///
/// Override tokens strictly take precedence at their positions. Indices
/// were bounds-checked when recorded, so the merge cannot extend the list.
pub(crate) fn build<T: Injectable>(overrides: &[ParamOverride]) -> Factory {
  let mut tokens = T::dependencies();
  for entry in overrides {
    tokens[entry.index] = entry.token.clone();
  }

  let target = short_name::<T>();
  let arity = tokens.len();
  let construct: ConstructFn = Box::new(move |values| {
    if values.len() != arity {
      return Err(WireError::ArityMismatch {
        target,
        expected: arity,
        actual: values.len(),
      });
    }
    let mut args = Resolved::new(target, values);
    let instance = T::construct(&mut args)?;
    Ok(Arc::new(instance) as Value)
  });

  Factory {
    target,
    tokens,
    construct,
  }
}
