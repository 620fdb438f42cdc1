
use super::derivative::{DerivativeEngine, DifferentiationError};
use crate::expr::Expression;
use crate::expr::var::Var;

use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};

/// A single-parameter function, written `x -> body`.
///
/// Differentiating a `Lambda` always differentiates with respect to
/// its own parameter, so callers never have to name the variable
/// twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lambda {
  parameter: Var,
  body: Expression,
}

impl Lambda {
  pub fn new(parameter: Var, body: Expression) -> Self {
    Self { parameter, body }
  }

  pub fn parameter(&self) -> &Var {
    &self.parameter
  }

  pub fn body(&self) -> &Expression {
    &self.body
  }

  pub fn into_body(self) -> Expression {
    self.body
  }

  /// The derivative of this function, as a new function over the
  /// same parameter.
  pub fn derivative(&self) -> Result<Lambda, DifferentiationError> {
    let engine = DerivativeEngine::new(&self.parameter);
    let body = engine.differentiate(&self.body)?;
    Ok(Lambda::new(self.parameter.clone(), body))
  }
}

impl Display for Lambda {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{} -> {}", self.parameter, self.body)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::expr::test_utils::{x, y};

  fn lambda(param: &str, body: Expression) -> Lambda {
    Lambda::new(Var::new(param).unwrap(), body)
  }

  #[test]
  fn test_derivative_uses_own_parameter() {
    let f = lambda("x", Expression::mul(x(), y()));
    let df = f.derivative().unwrap();
    assert_eq!(df.parameter(), f.parameter());
    assert_eq!(
      df.body(),
      &Expression::add(
        Expression::mul(Expression::from(1), y()),
        Expression::mul(x(), Expression::from(0)),
      ),
    );

    let g = lambda("y", Expression::mul(x(), y()));
    assert_eq!(
      g.derivative().unwrap().into_body(),
      Expression::add(
        Expression::mul(Expression::from(0), y()),
        Expression::mul(x(), Expression::from(1)),
      ),
    );
  }

  #[test]
  fn test_derivative_of_constant_function() {
    let f = lambda("x", Expression::from(5));
    assert_eq!(f.derivative().unwrap(), lambda("x", Expression::from(0)));
  }

  #[test]
  fn test_derivative_failure() {
    let f = lambda("x", Expression::sin(Expression::unsupported("max(x, 2)")));
    assert_eq!(
      f.derivative().unwrap_err(),
      DifferentiationError::NotDifferentiable(String::from("max(x, 2)")),
    );
  }

  #[test]
  fn test_display() {
    let f = lambda("x", Expression::sin(x()));
    assert_eq!(f.to_string(), "x -> sin(x)");
    assert_eq!(f.derivative().unwrap().to_string(), "x -> cos(x) * 1");
  }
}
