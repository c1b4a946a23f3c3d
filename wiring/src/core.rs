//! Core, non-public data structures for the wiring layer.

use std::any::{Any, TypeId};
use std::fmt;

/// A dependency token: the string key identifying a registrable unit,
/// either a service name or a component selector.
pub type Token = String;

/// Returns the canonical token for a type: its short name, the final
/// path segment of [`std::any::type_name`].
///
/// Intended for plain named types; generic parameters are not stripped.
pub fn token_of<T: ?Sized>() -> Token {
  short_name::<T>().to_string()
}

pub(crate) fn short_name<T: ?Sized>() -> &'static str {
  let full = std::any::type_name::<T>();
  match full.rfind("::") {
    Some(idx) => &full[idx + 2..],
    None => full,
  }
}

/// Stable identity for a registration target.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct TargetId {
  type_id: TypeId,
  pub(crate) name: &'static str,
}

impl TargetId {
  pub(crate) fn of<T: Any>() -> Self {
    Self {
      type_id: TypeId::of::<T>(),
      name: short_name::<T>(),
    }
  }
}

impl fmt::Debug for TargetId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Target({}, {:?})", self.name, self.type_id)
  }
}
