/*!

An append-only, point-addressable history of sequence snapshots.

Each registration event appends one token at a strictly increasing
*registration point* and records the resulting [`Sequence`] at that point in
a sparse history. Points need not be contiguous: resolving any point —
defined or not — finds the sequence effective at that moment by stepping
back to the nearest defined point, bottoming out at the empty sequence the
registry was declared with. Querying a point earlier than the declaration
point likewise yields the empty sequence; "nothing registered yet" is a
valid state, not a failure.

Because an entry is only ever the previous resolution extended by one token,
`resolve(p)` is non-decreasing in content as `p` grows: every defined entry
is a strict append-extension of the one before it.

Point allocation is the front-end's job (see the store behind the `macros`
feature); the registry itself only enforces monotonicity.

*/

mod error;

use std::collections::BTreeMap;

use crate::{
  abstractions::IString,
  api::token::Token,
  core::sequence::Sequence,
  debug,
  warning,
};

pub use error::RegistryError;

pub struct Registry {
  name: IString,
  /// The point the registry was declared at; resolution bottoms out here.
  declared_at: u64,
  /// Sparse history: the sequence that resulted from the event at each
  /// defined point. A `BTreeMap` doubles as the resolution cache — the
  /// nearest preceding defined point is one backward range step, so there
  /// is no recursive walk to memoize.
  history: BTreeMap<u64, Sequence>,
}

impl Registry {
  /// A fresh, empty history anchored at `declared_at`.
  pub fn new(name: IString, declared_at: u64) -> Registry {
    Registry {
      name,
      declared_at,
      history: BTreeMap::new(),
    }
  }

  pub fn name(&self) -> &IString {
    &self.name
  }

  pub fn declared_at(&self) -> u64 {
    self.declared_at
  }

  /// The greatest defined point, or the declaration point while the history
  /// is still empty.
  pub fn latest_point(&self) -> u64 {
    self.history.keys().next_back().copied().unwrap_or(self.declared_at)
  }

  /// Registers `token` at `point`, defining the sequence there as the
  /// resolution of `point - 1` extended by `token`. `point` must be strictly
  /// greater than every previously defined point (and the declaration
  /// point); otherwise the registry is left unmodified.
  pub fn add(&mut self, point: u64, token: Token) -> Result<(), RegistryError> {
    let latest = self.latest_point();
    if point <= latest {
      warning!(1, "registry '{}': rejected point {} (latest is {})", self.name, point, latest);
      return Err(RegistryError::OrderingViolation {
        name: self.name.clone(),
        point,
        latest,
      });
    }

    let extended = self.resolve(point - 1).push_back(token.clone());
    debug!(2, "registry '{}': point {}: '{}' ({} registered)", self.name, point, token, extended.len());
    self.history.insert(point, extended);
    Ok(())
  }

  /// The sequence effective at `point`: the entry at the nearest defined
  /// point at or before `point`, or the empty sequence before the first
  /// entry. Pure and idempotent.
  pub fn resolve(&self, point: u64) -> Sequence {
    match self.history.range(..=point).next_back() {
      Some((_, sequence)) => sequence.clone(),
      None => Sequence::new(),
    }
  }

  /// Public alias of [`Registry::resolve`]: the registry as of `point`.
  pub fn query(&self, point: u64) -> Sequence {
    self.resolve(point)
  }

  /// The registry as of its latest registration.
  pub fn current(&self) -> Sequence {
    self.resolve(self.latest_point())
  }

  /// Membership in the current resolved sequence.
  pub fn contains(&self, token: &Token) -> bool {
    self.current().contains(token)
  }
}
