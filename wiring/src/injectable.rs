//! The `Injectable` manifest trait and the resolved-argument cursor.

use crate::core::{short_name, Token};
use crate::error::{Result, WireError};
use std::any::Any;
use std::sync::Arc;

/// A type-erased resolved dependency value, as delivered by an external
/// container at instantiation time.
pub type Value = Arc<dyn Any + Send + Sync>;

/// A type's constructor manifest: the ordered dependency token list and
/// the construction function consuming resolved values in the same order.
///
/// Most implementations are generated with [`injectable!`](crate::injectable);
/// implement the trait by hand when construction needs anything beyond
/// moving each resolved value into a field.
pub trait Injectable: Any + Send + Sync + Sized {
  /// The declared dependency tokens, one per constructor parameter, in
  /// declaration order. The conventional token for a parameter is the
  /// short name of its declared type (see [`token_of`](crate::token_of)).
  fn dependencies() -> Vec<Token>;

  /// Builds an instance from positionally resolved values. Call
  /// [`Resolved::take`] once per declared parameter, in declaration order.
  fn construct(args: &mut Resolved) -> Result<Self>;
}

/// An ordered cursor over the type-erased values handed to a factory.
pub struct Resolved {
  target: &'static str,
  values: Vec<Value>,
  next: usize,
}

impl Resolved {
  pub(crate) fn new(target: &'static str, values: Vec<Value>) -> Self {
    Self {
      target,
      values,
      next: 0,
    }
  }

  /// Takes the next positional value, downcast to its concrete type.
  ///
  /// Fails with [`WireError::ArityMismatch`] when the cursor runs past the
  /// delivered values, and with [`WireError::DependencyMismatch`] when the
  /// value at this position is not a `T`.
  pub fn take<T: Any + Send + Sync>(&mut self) -> Result<Arc<T>> {
    let index = self.next;
    let value = self
      .values
      .get(index)
      .cloned()
      .ok_or(WireError::ArityMismatch {
        target: self.target,
        expected: index + 1,
        actual: self.values.len(),
      })?;
    self.next += 1;
    value.downcast::<T>().map_err(|_| WireError::DependencyMismatch {
      target: self.target,
      index,
      expected: short_name::<T>(),
    })
  }

  /// Number of delivered values not yet taken.
  pub fn remaining(&self) -> usize {
    self.values.len() - self.next
  }
}
