
//! Rust operator overloads for building [`Expression`] trees.
//!
//! Unlike a numerical type, these operators never simplify. `x + 0`
//! produces an `Add` node over `x` and `0`, exactly as written.

use super::Expression;

use num::{Zero, One};

use std::ops::{Add, Sub, Mul, Neg};

impl Zero for Expression {
  fn zero() -> Self {
    Expression::Constant(0.0)
  }

  /// Structural check: true only for the literal constant zero.
  fn is_zero(&self) -> bool {
    matches!(self, Expression::Constant(c) if *c == 0.0)
  }
}

impl One for Expression {
  fn one() -> Self {
    Expression::Constant(1.0)
  }
}

impl Add for Expression {
  type Output = Expression;

  fn add(self, rhs: Self) -> Self::Output {
    Expression::add(self, rhs)
  }
}

impl Sub for Expression {
  type Output = Expression;

  fn sub(self, rhs: Self) -> Self::Output {
    Expression::sub(self, rhs)
  }
}

impl Mul for Expression {
  type Output = Expression;

  fn mul(self, rhs: Self) -> Self::Output {
    Expression::mul(self, rhs)
  }
}

impl Neg for Expression {
  type Output = Expression;

  fn neg(self) -> Self::Output {
    Expression::neg(self)
  }
}
