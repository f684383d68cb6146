/*!

Per-ancestor dispatch: walk an ancestor chain in order, handing each level
to a caller-supplied handler along with an opaque reference to caller state
(in the motivating use, the live instance being reinterpreted as each
ancestor type in turn).

Iteration is strictly sequential and synchronous. The first handler error
propagates to the caller immediately; later elements are not visited, and no
recovery is attempted here. No element is ever skipped or repeated
otherwise.

*/

use enumflags2::{bitflags, BitFlags};

use crate::{
  api::{relation::SubtypeRelation, token::Token},
  core::{linearize::ancestors, sequence::Sequence},
};

/// Adjustments to the dispatched chain.
#[bitflags]
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum DispatchOption {
  /// Also hand the target itself to the handler, after its ancestors —
  /// provided the target is present in the universe.
  IncludeTarget,
  /// Walk the chain most specific first instead of most general first.
  MostSpecificFirst,
}

pub type DispatchOptions = BitFlags<DispatchOption, u8>;

/// Invokes `handler(context, token, position)` once per element of `chain`,
/// in order. The first handler error aborts the remaining iterations and is
/// returned as is.
pub fn for_each<C, E>(
  chain  : &Sequence,
  context: &mut C,
  mut handler: impl FnMut(&mut C, &Token, usize) -> Result<(), E>,
) -> Result<(), E> {
  for (position, token) in chain.iter().enumerate() {
    handler(context, token, position)?;
  }
  Ok(())
}

/// Linearizes `target` against `universe` and dispatches the resulting
/// chain under `options`.
pub fn dispatch_hierarchy<C, E>(
  target  : &Token,
  universe: &Sequence,
  relation: &impl SubtypeRelation,
  options : DispatchOptions,
  context : &mut C,
  handler : impl FnMut(&mut C, &Token, usize) -> Result<(), E>,
) -> Result<(), E> {
  let mut chain = ancestors(target, universe, relation);
  if options.contains(DispatchOption::IncludeTarget) && universe.contains(target) {
    chain = chain.push_back(target.clone());
  }
  if options.contains(DispatchOption::MostSpecificFirst) {
    chain = chain.invert();
  }
  for_each(&chain, context, handler)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{core::hierarchy::Hierarchy, seq};

  fn chain_relation() -> Hierarchy {
    let mut hierarchy = Hierarchy::new();
    hierarchy.insert_subtype("Mid", "Root");
    hierarchy.insert_subtype("Leaf", "Mid");
    hierarchy.seal();
    hierarchy
  }

  #[test]
  fn visits_every_element_in_order_with_positions() {
    let chain = seq!["Root", "Mid", "Leaf"];
    let mut visited: Vec<(String, usize)> = Vec::new();
    let outcome = for_each(&chain, &mut visited, |visited, token, position| {
      visited.push((token.name().to_string(), position));
      Ok::<(), std::convert::Infallible>(())
    });
    assert!(outcome.is_ok());
    assert_eq!(
      visited,
      vec![("Root".to_string(), 0), ("Mid".to_string(), 1), ("Leaf".to_string(), 2)]
    );
  }

  #[test]
  fn a_handler_error_aborts_the_remaining_iterations() {
    let chain = seq!["Root", "Mid", "Leaf"];
    let mut visited: Vec<String> = Vec::new();
    let outcome = for_each(&chain, &mut visited, |visited, token, _position| {
      if token.name() == "Mid" {
        return Err("handler refused");
      }
      visited.push(token.name().to_string());
      Ok(())
    });
    assert_eq!(outcome, Err("handler refused"));
    assert_eq!(visited, vec!["Root".to_string()]);
  }

  #[test]
  fn include_target_appends_the_target_when_registered() {
    let universe = seq!["Root", "Mid", "Leaf"];
    let mut names: Vec<String> = Vec::new();
    dispatch_hierarchy(
      &Token::new("Leaf"),
      &universe,
      &chain_relation(),
      DispatchOption::IncludeTarget.into(),
      &mut names,
      |names, token, _position| {
        names.push(token.name().to_string());
        Ok::<(), std::convert::Infallible>(())
      },
    )
    .expect("infallible handler");
    assert_eq!(names, vec!["Root".to_string(), "Mid".to_string(), "Leaf".to_string()]);
  }

  #[test]
  fn include_target_is_inert_for_an_unregistered_target() {
    // Leaf itself was never registered, so only its ancestors dispatch.
    let universe = seq!["Root", "Mid"];
    let mut names: Vec<String> = Vec::new();
    dispatch_hierarchy(
      &Token::new("Leaf"),
      &universe,
      &chain_relation(),
      DispatchOption::IncludeTarget.into(),
      &mut names,
      |names, token, _position| {
        names.push(token.name().to_string());
        Ok::<(), std::convert::Infallible>(())
      },
    )
    .expect("infallible handler");
    assert_eq!(names, vec!["Root".to_string(), "Mid".to_string()]);
  }

  #[test]
  fn most_specific_first_inverts_the_walk() {
    let universe = seq!["Root", "Mid", "Leaf"];
    let mut names: Vec<String> = Vec::new();
    dispatch_hierarchy(
      &Token::new("Leaf"),
      &universe,
      &chain_relation(),
      DispatchOption::IncludeTarget | DispatchOption::MostSpecificFirst,
      &mut names,
      |names, token, _position| {
        names.push(token.name().to_string());
        Ok::<(), std::convert::Infallible>(())
      },
    )
    .expect("infallible handler");
    assert_eq!(names, vec!["Leaf".to_string(), "Mid".to_string(), "Root".to_string()]);
  }

  #[test]
  fn empty_options_dispatch_ancestors_only() {
    let universe = seq!["Root", "Mid", "Leaf"];
    let mut count = 0usize;
    dispatch_hierarchy(
      &Token::new("Leaf"),
      &universe,
      &chain_relation(),
      DispatchOptions::empty(),
      &mut count,
      |count, _token, _position| {
        *count += 1;
        Ok::<(), std::convert::Infallible>(())
      },
    )
    .expect("infallible handler");
    assert_eq!(count, 2);
  }
}
