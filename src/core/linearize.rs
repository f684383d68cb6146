/*!

Ancestor linearization: the ordered chain of a token's supertypes found in a
universe sequence, from most general to most specific.

The chain is duplicate-free and never contains the target itself; callers
that want a target-terminated chain append the target (or dispatch with
[`IncludeTarget`](crate::DispatchOption::IncludeTarget)).

## Algorithm

Repeated extraction. The universe is filtered down to the target's declared
ancestors, and then the most ancient remaining candidate is pulled out over
and over — a pairwise [`select_best`](crate::Sequence::select_best)
reduction under the subtype relation, followed by deletion of every
occurrence of the winner. Diamonds converge because extraction removes all
occurrences at once. This is the repeated-root-extraction shape of a
topological sort, with the pairwise reduction standing in for in-degree
bookkeeping; it is correct because the candidates of a single target form a
forest of comparable chains (the relation is a DAG).

Elements from unrelated branches are incomparable under the relation, and
their output order is decided by the reduction's tie-break: `select_best`
folds right to left, so among mutually incomparable candidates the rightmost
survives the fold and is extracted first. This tie-break is part of the
observable contract and must not be "fixed" by changing the fold direction.

Cost is O(n²) in the candidate count per query. Candidate sets are
class-hierarchy sized, so this is fine; a registry serving thousands of
mutually comparable tokens per query would want an explicit in-degree
topological sort with the same tie-break instead.

## Precondition

The relation must be irreflexive and acyclic over the universe. A cyclic or
inconsistent relation is not detected; the resulting order is meaningless.

*/

use crate::{
  api::{relation::SubtypeRelation, token::Token},
  core::sequence::Sequence,
};

/// The ancestors of `target` present in `universe`, most general first,
/// without `target` itself.
pub fn ancestors(target: &Token, universe: &Sequence, relation: &impl SubtypeRelation) -> Sequence {
  // Candidates: every declared ancestor of `target` present in the universe.
  // The target itself is removed first so it cannot join the comparisons.
  let mut candidates =
      universe
          .remove_all(target)
          .filter(|token| relation.is_ancestor_of(token, target));

  let mut chain = Sequence::new();
  while let Ok(most_ancient) = candidates.select_best(|x, y| relation.is_ancestor_of(x, y)) {
    candidates = candidates.remove_all(&most_ancient);
    chain = chain.push_back(most_ancient);
  }
  chain
}
