//! Recording and retrieval of explicit per-parameter override tokens.

use crate::core::{TargetId, Token};
use crate::error::{Result, WireError};
use std::collections::HashMap;

/// An explicit override: `token` supersedes the declared token at
/// parameter position `index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParamOverride {
  pub(crate) index: usize,
  pub(crate) token: Token,
}

/// Accumulated overrides, keyed by stable target identity so unrelated
/// targets never interfere. Entries are append-only and kept in recording
/// order.
#[derive(Default)]
pub(crate) struct MetadataStore {
  overrides: HashMap<TargetId, Vec<ParamOverride>>,
}

impl MetadataStore {
  /// Appends one validated override pair to `target`'s list.
  pub(crate) fn record(
    &mut self,
    target: TargetId,
    arity: usize,
    index: usize,
    token: Token,
  ) -> Result<()> {
    if token.is_empty() {
      return Err(WireError::EmptyToken {
        target: target.name,
        index,
      });
    }
    if index >= arity {
      return Err(WireError::OverrideOutOfBounds {
        target: target.name,
        index,
        arity,
      });
    }
    let entries = self.overrides.entry(target).or_default();
    if entries.iter().any(|entry| entry.index == index) {
      return Err(WireError::DuplicateOverride {
        target: target.name,
        index,
      });
    }
    entries.push(ParamOverride { index, token });
    Ok(())
  }

  pub(crate) fn overrides_for(&self, target: &TargetId) -> &[ParamOverride] {
    self
      .overrides
      .get(target)
      .map(Vec::as_slice)
      .unwrap_or(&[])
  }

  /// Total override count across all targets.
  pub(crate) fn recorded(&self) -> usize {
    self.overrides.values().map(Vec::len).sum()
  }
}
