
use regex::Regex;
use once_cell::sync::Lazy;
use serde::{Serialize, Deserialize};
use thiserror::Error;

use std::fmt::{self, Display, Formatter};

/// A variable in an expression, with respect to which we may
/// differentiate.
///
/// Variables are identified by strings. A variable's name must begin
/// with a letter, followed by zero or more letters, digits, or
/// apostrophes. This structure enforces these constraints.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Var(String);

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Invalid variable name '{original_string}'")]
pub struct TryFromStringError {
  original_string: String,
}

pub static VALID_NAME_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^[a-zA-Z][a-zA-Z0-9']*$").unwrap()
});

impl Var {
  pub fn new(name: impl Into<String>) -> Option<Self> {
    Self::try_from(name.into()).ok()
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl TryFromStringError {
  /// The string which failed validation.
  pub fn original_string(&self) -> &str {
    &self.original_string
  }
}

impl TryFrom<String> for Var {
  type Error = TryFromStringError;

  fn try_from(name: String) -> Result<Self, Self::Error> {
    if VALID_NAME_RE.is_match(&name) {
      Ok(Self(name))
    } else {
      Err(TryFromStringError { original_string: name })
    }
  }
}

impl From<Var> for String {
  fn from(v: Var) -> Self {
    v.0
  }
}

impl Display for Var {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", &self.0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_valid_variable_names() {
    Var::new("x").unwrap();
    Var::new("abc").unwrap();
    Var::new("q0").unwrap();
    Var::new("x1234567890").unwrap();
    Var::new("aBCd").unwrap();
    Var::new("theta").unwrap();
    Var::new("x'").unwrap();
    Var::new("y''").unwrap();
    Var::new("r0'0").unwrap();
  }

  #[test]
  fn test_invalid_variable_names() {
    assert_eq!(Var::new(""), None);
    assert_eq!(Var::new("0"), None);
    assert_eq!(Var::new("0a"), None);
    assert_eq!(Var::new("'"), None);
    assert_eq!(Var::new("a b"), None);
    assert_eq!(Var::new(" x"), None);
    assert_eq!(Var::new("x "), None);
    assert_eq!(Var::new("c-d"), None);
    assert_eq!(Var::new("$x"), None);
  }

  #[test]
  fn test_try_from_error() {
    let err = Var::try_from(String::from("2x")).unwrap_err();
    assert_eq!(err.original_string(), "2x");
    assert_eq!(err.to_string(), "Invalid variable name '2x'");
  }

  #[test]
  fn test_serde_is_transparent_and_validated() {
    let var = Var::new("x").unwrap();
    assert_eq!(serde_json::to_string(&var).unwrap(), r#""x""#);
    assert_eq!(serde_json::from_str::<Var>(r#""x""#).unwrap(), var);
    assert!(serde_json::from_str::<Var>(r#""1x""#).is_err());
  }
}
