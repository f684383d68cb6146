/*!

The explicit type graph backing the subtype relation.

The linearizer works against an injected [`SubtypeRelation`]; this module
provides the table-backed implementation. Each token records its declared
direct supertypes as an adjacency list, and sealing the table computes the
transitive ancestor closure — a [`NatSet`] of ancestor indices per token —
so that the relation is a single bit test at query time.

## Lifecycle

A `Hierarchy` starts `Open`. Supertype edges may only be inserted while
open. [`Hierarchy::seal`] computes the closure and moves the table to
`Closed`; after that the table is immutable. Querying an open table is
permitted — it walks the adjacency lists instead of the closure, the slow
path — and both paths give the same answers on well-formed input.

## Precondition

The edge set must be a DAG: no token may be its own transitive supertype.
The closure computation and the open-table walk both terminate on cyclic
input (visited marking), but their answers are then meaningless. Cycles are
not detected.

*/

use std::collections::HashMap;

use crate::{
  abstractions::NatSet,
  api::{relation::SubtypeRelation, token::Token},
};

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Default, Debug)]
pub enum HierarchyStatus {
  #[default]
  Open,
  Closed,
}

#[derive(Default)]
pub struct Hierarchy {
  status: HierarchyStatus,

  /// Index of each known token. Indices are dense, assigned in order of
  /// first mention, and stable for the lifetime of the table.
  indices: HashMap<Token, usize>,
  tokens : Vec<Token>,

  /// Declared direct supertypes, by index. Adjacency only; transitivity
  /// lives in `ancestors` once the table is sealed.
  parents: Vec<Vec<usize>>,

  /// Per-token transitive ancestor closure, computed by [`Hierarchy::seal`].
  /// Row `i` holds the indices of every (possibly transitive) supertype of
  /// token `i`; the row never contains `i` itself.
  ancestors: Vec<NatSet>,
}

impl Hierarchy {
  pub fn new() -> Hierarchy {
    Hierarchy::default()
  }

  pub fn status(&self) -> HierarchyStatus {
    self.status
  }

  /// The number of distinct tokens mentioned so far.
  pub fn len(&self) -> usize {
    self.tokens.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tokens.is_empty()
  }

  pub fn is_known(&self, token: &Token) -> bool {
    self.indices.contains_key(token)
  }

  fn intern(&mut self, token: Token) -> usize {
    match self.indices.get(&token) {
      Some(&index) => index,
      None => {
        let index = self.tokens.len();
        self.indices.insert(token.clone(), index);
        self.tokens.push(token);
        self.parents.push(Vec::new());
        index
      }
    }
  }

  /// Records `parent` as a declared direct supertype of `child`. Unknown
  /// tokens are created on first mention.
  ///
  /// Panics if the table has been sealed.
  pub fn insert_subtype(&mut self, child: impl Into<Token>, parent: impl Into<Token>) {
    assert_eq!(
      self.status,
      HierarchyStatus::Open,
      "tried to insert a supertype edge into a sealed hierarchy"
    );
    let child_index  = self.intern(child.into());
    let parent_index = self.intern(parent.into());
    self.parents[child_index].push(parent_index);
  }

  /// Computes the transitive ancestor closure and closes the table. From
  /// here on [`SubtypeRelation::is_ancestor_of`] is a constant-time bit
  /// test. Sealing twice is a programming error.
  pub fn seal(&mut self) {
    assert_eq!(self.status, HierarchyStatus::Open, "tried to seal a hierarchy twice");
    self.ancestors = vec![NatSet::new(); self.tokens.len()];
    let mut resolved = vec![false; self.tokens.len()];
    for index in 0..self.tokens.len() {
      self.resolve_closure(index, &mut resolved);
    }
    self.status = HierarchyStatus::Closed;
  }

  /// Closure row of `index`: each direct parent plus that parent's own row.
  /// Rows are marked resolved before their parents are visited, so the
  /// recursion terminates even on (malformed) cyclic input.
  fn resolve_closure(&mut self, index: usize, resolved: &mut Vec<bool>) {
    if resolved[index] {
      return;
    }
    resolved[index] = true;

    let parent_indices = self.parents[index].clone();
    for parent in parent_indices {
      self.resolve_closure(parent, resolved);
      let parent_row = self.ancestors[parent].clone();
      self.ancestors[index].insert(parent);
      self.ancestors[index].union_in_place(&parent_row);
    }
  }

  /// The pre-closure slow path: a depth-first walk of the adjacency lists.
  fn walk_is_ancestor(&self, ancestor_index: usize, from: usize, visited: &mut NatSet) -> bool {
    for &parent in &self.parents[from] {
      if parent == ancestor_index {
        return true;
      }
      if visited.insert(parent) && self.walk_is_ancestor(ancestor_index, parent, visited) {
        return true;
      }
    }
    false
  }
}

impl SubtypeRelation for Hierarchy {
  fn is_ancestor_of(&self, ancestor: &Token, descendant: &Token) -> bool {
    let (Some(&ancestor_index), Some(&descendant_index)) =
        (self.indices.get(ancestor), self.indices.get(descendant))
    else {
      return false;
    };
    if ancestor_index == descendant_index {
      // Irreflexive: a token is never its own ancestor.
      return false;
    }

    match self.status {
      HierarchyStatus::Closed => self.ancestors[descendant_index].contains(ancestor_index),
      HierarchyStatus::Open => {
        let mut visited = NatSet::new();
        self.walk_is_ancestor(ancestor_index, descendant_index, &mut visited)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  // One diamond: Top is extended by Left and Right, Bottom extends both.
  fn diamond() -> Hierarchy {
    let mut hierarchy = Hierarchy::new();
    for (child, parent) in [
      ("Left", "Top"),
      ("Right", "Top"),
      ("Bottom", "Left"),
      ("Bottom", "Right"),
    ] {
      hierarchy.insert_subtype(child, parent);
    }
    hierarchy
  }

  fn is_ancestor(hierarchy: &Hierarchy, ancestor: &str, descendant: &str) -> bool {
    hierarchy.is_ancestor_of(&Token::new(ancestor), &Token::new(descendant))
  }

  #[test]
  fn closure_includes_transitive_supertypes() {
    let mut hierarchy = diamond();
    hierarchy.seal();

    assert!(is_ancestor(&hierarchy, "Top", "Bottom"));
    assert!(is_ancestor(&hierarchy, "Left", "Bottom"));
    assert!(is_ancestor(&hierarchy, "Right", "Bottom"));
    assert!(is_ancestor(&hierarchy, "Top", "Left"));

    // Not the other way around, and not across siblings.
    assert!(!is_ancestor(&hierarchy, "Bottom", "Top"));
    assert!(!is_ancestor(&hierarchy, "Left", "Right"));
  }

  #[test]
  fn relation_is_irreflexive() {
    let mut hierarchy = diamond();
    hierarchy.seal();
    for name in ["Top", "Left", "Right", "Bottom"] {
      assert!(!is_ancestor(&hierarchy, name, name));
    }
  }

  #[test]
  fn unknown_tokens_are_unrelated() {
    let mut hierarchy = diamond();
    hierarchy.seal();
    assert!(!is_ancestor(&hierarchy, "Phantom", "Bottom"));
    assert!(!is_ancestor(&hierarchy, "Top", "Phantom"));
  }

  #[test]
  fn open_walk_agrees_with_sealed_closure() {
    let open = diamond();
    let mut sealed = diamond();
    sealed.seal();

    let names = ["Top", "Left", "Right", "Bottom", "Phantom"];
    for ancestor in names {
      for descendant in names {
        assert_eq!(
          is_ancestor(&open, ancestor, descendant),
          is_ancestor(&sealed, ancestor, descendant),
          "disagreement on ({}, {})",
          ancestor,
          descendant
        );
      }
    }
  }

  #[test]
  fn first_mention_creates_tokens() {
    let hierarchy = diamond();
    assert_eq!(hierarchy.len(), 4);
    assert!(hierarchy.is_known(&Token::new("Top")));
    assert!(!hierarchy.is_known(&Token::new("Phantom")));
  }

  #[test]
  #[should_panic(expected = "seal a hierarchy twice")]
  fn sealing_twice_panics() {
    let mut hierarchy = diamond();
    hierarchy.seal();
    hierarchy.seal();
  }

  #[test]
  #[should_panic(expected = "sealed hierarchy")]
  fn inserting_into_a_sealed_hierarchy_panics() {
    let mut hierarchy = diamond();
    hierarchy.seal();
    hierarchy.insert_subtype("New", "Top");
  }
}
