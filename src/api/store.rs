/*!

The process-wide registry store behind the declarative surface.

The store owns two things the individual [`Registry`] deliberately does not:
the name → registry map and the monotone registration-point counter (the
runtime stand-in for a build-time declaration counter — every `declare` and
`add` anywhere in the process draws the next point from the same stream).

Registration is a write and serializes on the store lock; queries run under
the read guard and return independent [`Sequence`] values, so a reader
racing a writer observes the state strictly before or strictly after the
append, never a torn one. The history only ever grows, so a poisoned lock
cannot leave it inconsistent; lock poisoning is therefore ignored rather
than propagated.

*/

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use once_cell::sync::Lazy;

use crate::{
  abstractions::IString,
  api::token::Token,
  core::{
    registry::{Registry, RegistryError},
    sequence::Sequence,
  },
  debug,
};

#[derive(Default)]
pub struct RegistryStore {
  registries: HashMap<IString, Registry>,
  /// The last allocated registration point.
  point: u64,
}

impl RegistryStore {
  fn next_point(&mut self) -> u64 {
    self.point += 1;
    self.point
  }
}

static STORE: Lazy<RwLock<RegistryStore>> = Lazy::new(|| RwLock::new(RegistryStore::default()));

fn read_store() -> RwLockReadGuard<'static, RegistryStore> {
  STORE.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write_store() -> RwLockWriteGuard<'static, RegistryStore> {
  STORE.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Allocates a fresh, empty registry under `name`, anchored at a new
/// registration point. Must precede any [`add`] for the same name, and must
/// happen at most once per name.
pub fn declare(name: &str) -> Result<(), RegistryError> {
  let mut store = write_store();
  let name = IString::from(name);
  if store.registries.contains_key(&name) {
    return Err(RegistryError::AlreadyDeclared { name });
  }
  let point = store.next_point();
  debug!(2, "declared registry '{}' at point {}", name, point);
  store.registries.insert(name.clone(), Registry::new(name, point));
  Ok(())
}

/// Registers one token under `name` at a freshly allocated, strictly
/// increasing point.
pub fn add(token: impl Into<Token>, name: &str) -> Result<(), RegistryError> {
  let mut store = write_store();
  let name = IString::from(name);
  let point = store.next_point();
  match store.registries.get_mut(&name) {
    Some(registry) => registry.add(point, token.into()),
    None => Err(RegistryError::Undeclared { name }),
  }
}

/// Membership of `token` in `name`'s current resolved sequence. An
/// undeclared registry contains nothing.
pub fn contains(token: impl Into<Token>, name: &str) -> bool {
  let store = read_store();
  match store.registries.get(&IString::from(name)) {
    Some(registry) => registry.contains(&token.into()),
    None => false,
  }
}

/// The sequence registered under `name` as it stood just before this call.
/// An undeclared registry resolves to the empty sequence.
pub fn types(name: &str) -> Sequence {
  let store = read_store();
  types_resolved(&store, name, store.point)
}

/// Point-addressable query: the sequence registered under `name` as it
/// stood at `point`.
pub fn types_at(name: &str, point: u64) -> Sequence {
  let store = read_store();
  types_resolved(&store, name, point)
}

/// The last allocated registration point.
pub fn current_point() -> u64 {
  read_store().point
}

fn types_resolved(store: &RegistryStore, name: &str, point: u64) -> Sequence {
  match store.registries.get(&IString::from(name)) {
    Some(registry) => registry.resolve(point),
    None => Sequence::new(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::seq;

  // The store is genuinely process-wide, so every test works in its own
  // registry namespace.

  #[test]
  fn declare_add_query_roundtrip() {
    declare("STORE_ROUNDTRIP").unwrap();
    add("Alpha", "STORE_ROUNDTRIP").unwrap();
    add("Beta", "STORE_ROUNDTRIP").unwrap();

    assert_eq!(types("STORE_ROUNDTRIP"), seq!["Alpha", "Beta"]);
    assert!(contains("Alpha", "STORE_ROUNDTRIP"));
    assert!(!contains("Gamma", "STORE_ROUNDTRIP"));
  }

  #[test]
  fn queries_on_undeclared_registries_are_empty_not_errors() {
    assert_eq!(types("STORE_NEVER_DECLARED"), Sequence::new());
    assert!(!contains("Anything", "STORE_NEVER_DECLARED"));
  }

  #[test]
  fn adding_to_an_undeclared_registry_is_rejected() {
    assert!(matches!(
      add("Alpha", "STORE_UNDECLARED_ADD"),
      Err(RegistryError::Undeclared { .. })
    ));
  }

  #[test]
  fn double_declaration_is_rejected() {
    declare("STORE_DOUBLE_DECLARE").unwrap();
    assert!(matches!(
      declare("STORE_DOUBLE_DECLARE"),
      Err(RegistryError::AlreadyDeclared { .. })
    ));
  }

  #[test]
  fn point_addressable_history() {
    declare("STORE_HISTORY").unwrap();
    let declared = current_point();
    add("One", "STORE_HISTORY").unwrap();
    let after_one = current_point();
    add("Two", "STORE_HISTORY").unwrap();

    assert_eq!(types_at("STORE_HISTORY", declared), Sequence::new());
    assert_eq!(types_at("STORE_HISTORY", after_one), seq!["One"]);
    assert_eq!(types("STORE_HISTORY"), seq!["One", "Two"]);
  }

  #[test]
  fn concurrent_readers_see_consistent_snapshots() {
    declare("STORE_CONCURRENT").unwrap();

    std::thread::scope(|scope| {
      let writer = scope.spawn(|| {
        for index in 0..64 {
          add(format!("Tok{}", index), "STORE_CONCURRENT").unwrap();
        }
      });

      let reader = scope.spawn(|| {
        let mut last_len = 0;
        while last_len < 64 {
          let snapshot = types("STORE_CONCURRENT");
          // Each snapshot extends the previous one; lengths never regress.
          assert!(snapshot.len() >= last_len);
          last_len = snapshot.len();
        }
      });

      writer.join().unwrap();
      reader.join().unwrap();
    });
  }
}
