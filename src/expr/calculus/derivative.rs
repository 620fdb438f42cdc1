
use crate::expr::Expression;
use crate::expr::var::Var;

use num::{Zero, One};
use thiserror::Error;
use tracing::{debug, trace};

/// Computes derivatives with respect to a single fixed variable.
///
/// The engine holds no state besides the target variable, so the
/// same engine can be reused on any number of expressions.
#[derive(Debug, Clone)]
pub struct DerivativeEngine<'a> {
  target_variable: &'a Var,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DifferentiationError {
  #[error("{0} is not differentiable")]
  NotDifferentiable(String),
}

impl<'a> DerivativeEngine<'a> {
  pub fn new(target_variable: &'a Var) -> Self {
    Self { target_variable }
  }

  pub fn target_variable(&self) -> &Var {
    self.target_variable
  }

  /// Differentiates `expr` with respect to the engine's variable.
  /// The input is not modified; the result is a freshly-allocated
  /// tree, which shares no nodes with the input.
  pub fn differentiate(&self, expr: &Expression) -> Result<Expression, DifferentiationError> {
    match expr {
      Expression::Constant(_) => {
        trace!(rule = "constant");
        Ok(Expression::zero())
      }
      Expression::Variable(var) => {
        trace!(rule = "variable", %var);
        if var == self.target_variable {
          Ok(Expression::one())
        } else {
          // Any other variable is constant with respect to the target.
          Ok(Expression::zero())
        }
      }
      Expression::Add(left, right) => {
        trace!(rule = "sum");
        self.sum_rule(left, right, Expression::add)
      }
      Expression::Subtract(left, right) => {
        trace!(rule = "difference");
        self.sum_rule(left, right, Expression::sub)
      }
      Expression::Multiply(left, right) => {
        trace!(rule = "product");
        self.product_rule(left, right)
      }
      Expression::Sin(arg) => {
        trace!(rule = "sin");
        self.sin_rule(arg)
      }
      Expression::Cos(arg) => {
        trace!(rule = "cos");
        self.cos_rule(arg)
      }
      Expression::Negate(arg) => {
        trace!(rule = "negate");
        Ok(Expression::neg(self.differentiate(arg)?))
      }
      Expression::Unsupported(description) => {
        debug!(%description, "encountered non-differentiable node");
        Err(DifferentiationError::NotDifferentiable(description.to_owned()))
      }
    }
  }

  /// `(a ± b)' = a' ± b'`, where `rebuild` produces a node of the
  /// same kind as the original.
  fn sum_rule<F>(&self, left: &Expression, right: &Expression, rebuild: F) -> Result<Expression, DifferentiationError>
  where F: FnOnce(Expression, Expression) -> Expression {
    let left_deriv = self.differentiate(left)?;
    let right_deriv = self.differentiate(right)?;
    Ok(rebuild(left_deriv, right_deriv))
  }

  /// `(a * b)' = a' * b + a * b'`
  fn product_rule(&self, left: &Expression, right: &Expression) -> Result<Expression, DifferentiationError> {
    let left_deriv = self.differentiate(left)?;
    let right_deriv = self.differentiate(right)?;
    Ok(Expression::add(
      Expression::mul(left_deriv, right.clone()),
      Expression::mul(left.clone(), right_deriv),
    ))
  }

  /// `sin(a)' = cos(a) * a'`
  fn sin_rule(&self, arg: &Expression) -> Result<Expression, DifferentiationError> {
    let arg_deriv = self.differentiate(arg)?;
    Ok(Expression::mul(Expression::cos(arg.clone()), arg_deriv))
  }

  /// `cos(a)' = -(sin(a) * a')`
  fn cos_rule(&self, arg: &Expression) -> Result<Expression, DifferentiationError> {
    let arg_deriv = self.differentiate(arg)?;
    Ok(Expression::neg(
      Expression::mul(Expression::sin(arg.clone()), arg_deriv),
    ))
  }
}

/// Differentiates `expr` with respect to `var`.
pub fn differentiate(expr: &Expression, var: &Var) -> Result<Expression, DifferentiationError> {
  debug!(variable = %var, nodes = expr.node_count(), "differentiating expression");
  let result = DerivativeEngine::new(var).differentiate(expr);
  match &result {
    Ok(deriv) => debug!(variable = %var, nodes = deriv.node_count(), "differentiation succeeded"),
    Err(err) => debug!(variable = %var, %err, "differentiation failed"),
  }
  result
}

/// Takes the `n`th derivative of `expr` with respect to `var`. The
/// zeroth derivative is the expression itself.
///
/// No simplification is done between steps, so the result grows
/// quickly with `n`.
pub fn nth_derivative(expr: &Expression, var: &Var, n: usize) -> Result<Expression, DifferentiationError> {
  let engine = DerivativeEngine::new(var);
  let mut result = expr.clone();
  for _ in 0..n {
    result = engine.differentiate(&result)?;
  }
  Ok(result)
}
