
pub mod arithmetic;
pub mod calculus;
pub mod var;
pub mod walker;

use var::Var;

use serde::{Serialize, Deserialize};

/// A scalar, real-valued symbolic expression.
///
/// Expressions are immutable trees. Every operation in this crate
/// which "modifies" an expression actually produces a new one,
/// leaving its input untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
  Constant(f64),
  Variable(Var),
  Add(Box<Expression>, Box<Expression>),
  Subtract(Box<Expression>, Box<Expression>),
  Multiply(Box<Expression>, Box<Expression>),
  Sin(Box<Expression>),
  Cos(Box<Expression>),
  Negate(Box<Expression>),
  /// Any operator or call which this crate does not model. The
  /// payload is a human-readable description of the original node,
  /// supplied by whoever built the tree.
  Unsupported(String),
}

impl Expression {
  pub fn constant(value: f64) -> Expression {
    Expression::Constant(value)
  }

  /// Convenience constructor for [Expression::Variable]. Returns
  /// `None` if the name is not a valid [`Var`].
  pub fn var(name: &str) -> Option<Expression> {
    Var::new(name).map(Expression::Variable)
  }

  pub fn add(left: Expression, right: Expression) -> Expression {
    Expression::Add(Box::new(left), Box::new(right))
  }

  pub fn sub(left: Expression, right: Expression) -> Expression {
    Expression::Subtract(Box::new(left), Box::new(right))
  }

  pub fn mul(left: Expression, right: Expression) -> Expression {
    Expression::Multiply(Box::new(left), Box::new(right))
  }

  pub fn sin(arg: Expression) -> Expression {
    Expression::Sin(Box::new(arg))
  }

  pub fn cos(arg: Expression) -> Expression {
    Expression::Cos(Box::new(arg))
  }

  pub fn neg(arg: Expression) -> Expression {
    Expression::Negate(Box::new(arg))
  }

  pub fn unsupported(description: impl Into<String>) -> Expression {
    Expression::Unsupported(description.into())
  }

  pub fn is_leaf(&self) -> bool {
    self.children().is_empty()
  }

  /// The immediate sub-expressions of this node, from left to right.
  pub fn children(&self) -> Vec<&Expression> {
    match self {
      Expression::Constant(_) | Expression::Variable(_) | Expression::Unsupported(_) => {
        vec![]
      }
      Expression::Add(left, right) | Expression::Subtract(left, right) | Expression::Multiply(left, right) => {
        vec![left.as_ref(), right.as_ref()]
      }
      Expression::Sin(arg) | Expression::Cos(arg) | Expression::Negate(arg) => {
        vec![arg.as_ref()]
      }
    }
  }

  /// Number of nodes in the tree, including `self`.
  pub fn node_count(&self) -> usize {
    let mut count = 0;
    walker::postorder_walk_borrowed(self, |_| count += 1);
    count
  }

  pub fn contains_var(&self, var: &Var) -> bool {
    walker::any(self, |e| matches!(e, Expression::Variable(v) if v == var))
  }

  /// Whether every node in this tree has a known derivative. If this
  /// is true, then [`calculus::differentiate`] will succeed on this
  /// expression, regardless of the chosen variable.
  pub fn is_differentiable(&self) -> bool {
    !walker::any(self, |e| matches!(e, Expression::Unsupported(_)))
  }
}

impl From<f64> for Expression {
  fn from(value: f64) -> Expression {
    Expression::Constant(value)
  }
}

impl From<i32> for Expression {
  fn from(value: i32) -> Expression {
    Expression::Constant(f64::from(value))
  }
}

impl From<Var> for Expression {
  fn from(var: Var) -> Expression {
    Expression::Variable(var)
  }
}

#[cfg(test)]
pub(crate) mod test_utils {
  use super::*;

  /// Numerically evaluates an expression, binding every variable to
  /// `x`. Returns `None` on `Unsupported` nodes. Only used to sanity
  /// check the derivative engine against calculus.
  pub fn eval_at(expr: &Expression, x: f64) -> Option<f64> {
    let value = match expr {
      Expression::Constant(c) => *c,
      Expression::Variable(_) => x,
      Expression::Add(a, b) => eval_at(a, x)? + eval_at(b, x)?,
      Expression::Subtract(a, b) => eval_at(a, x)? - eval_at(b, x)?,
      Expression::Multiply(a, b) => eval_at(a, x)? * eval_at(b, x)?,
      Expression::Sin(a) => eval_at(a, x)?.sin(),
      Expression::Cos(a) => eval_at(a, x)?.cos(),
      Expression::Negate(a) => - eval_at(a, x)?,
      Expression::Unsupported(_) => return None,
    };
    Some(value)
  }

  pub fn x() -> Expression {
    Expression::var("x").unwrap()
  }

  pub fn y() -> Expression {
    Expression::var("y").unwrap()
  }
}
