/*!

A `Token` is an opaque, comparable identifier for a registered type. Two
tokens denote the same type iff they compare equal; there is no ordering
among tokens. The name is interned, so cloning and equality are cheap and
tokens cross thread boundaries freely.

*/

use std::fmt::{Debug, Display, Formatter};

use crate::abstractions::IString;

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token {
  name: IString,
}

impl Token {
  pub fn new(name: &str) -> Token {
    Token { name: IString::from(name) }
  }

  /// The token's textual name, as registered.
  pub fn name(&self) -> &str {
    &self.name
  }
}

impl From<&str> for Token {
  fn from(name: &str) -> Token {
    Token::new(name)
  }
}

impl From<String> for Token {
  fn from(name: String) -> Token {
    Token::new(name.as_str())
  }
}

impl From<IString> for Token {
  fn from(name: IString) -> Token {
    Token { name }
  }
}

impl Display for Token {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.name)
  }
}

impl Debug for Token {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "Token({})", self.name)
  }
}
