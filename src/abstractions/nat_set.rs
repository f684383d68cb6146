/*!

A set of natural numbers backed by a bit vector. Members are dense small
indices (positions of tokens in a table), which is exactly the shape a bit
vector is good at.

*/

use std::fmt::{Debug, Formatter};

use bit_set::BitSet;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct NatSet(BitSet);

impl NatSet {
  pub fn new() -> NatSet {
    NatSet::default()
  }

  /// Inserts `value`, returning `true` if it was not already present.
  pub fn insert(&mut self, value: usize) -> bool {
    self.0.insert(value)
  }

  pub fn contains(&self, value: usize) -> bool {
    self.0.contains(value)
  }

  /// Unions `other` into `self` in place.
  pub fn union_in_place(&mut self, other: &NatSet) {
    self.0.union_with(&other.0);
  }

  /// The number of members, not the backing capacity.
  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
    self.0.iter()
  }
}

impl Debug for NatSet {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_set().entries(self.iter()).finish()
  }
}
