/*!

Registration failures. A rejected operation always leaves the registry (and
the store) exactly as it was; none of these conditions is transient, so
there is no retry path anywhere.

*/

use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

use crate::abstractions::IString;

pub enum RegistryError {
  /// `add` was given a point that is not strictly greater than the latest
  /// defined point.
  OrderingViolation {
    name  : IString,
    point : u64,
    latest: u64,
  },
  /// `declare` was called twice for the same registry name.
  AlreadyDeclared {
    name: IString,
  },
  /// `add` was called for a registry name that was never declared.
  Undeclared {
    name: IString,
  },
}

impl Display for RegistryError {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {

      RegistryError::OrderingViolation { name, point, latest } => {
        write!(
          f,
          "registry '{}': registration point {} is not after the latest point {}",
          name, point, latest
        )
      }

      RegistryError::AlreadyDeclared { name } => {
        write!(f, "registry '{}' was already declared", name)
      }

      RegistryError::Undeclared { name } => {
        write!(f, "registry '{}' was never declared", name)
      }

    }
  }
}

impl Debug for RegistryError {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    Display::fmt(self, f)
  }
}

impl Error for RegistryError {}
