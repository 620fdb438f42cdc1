
//! Infix text rendering of expressions.

pub mod operator;

use crate::expr::Expression;
use operator::{Operator, Precedence};

use std::fmt::{self, Display, Formatter};

/// Renders expressions as infix text, inserting only the parentheses
/// that precedence and associativity require.
///
/// Rendering is purely cosmetic: `(x + y) + z` and `x + (y + z)` are
/// different trees and render differently, but nothing is simplified.
#[derive(Clone, Debug, Default)]
pub struct InfixRenderer;

impl InfixRenderer {
  pub fn new() -> Self {
    Self
  }

  pub fn render(&self, expr: &Expression) -> String {
    let mut out = String::new();
    self.render_prec(&mut out, expr, Precedence::MIN);
    out
  }

  fn render_prec(&self, out: &mut String, expr: &Expression, min_prec: Precedence) {
    if precedence_of(expr) < min_prec {
      out.push('(');
      self.render_prec(out, expr, Precedence::MIN);
      out.push(')');
      return;
    }
    match expr {
      Expression::Constant(c) => {
        out.push_str(&c.to_string());
      }
      Expression::Variable(var) => {
        out.push_str(var.as_str());
      }
      Expression::Add(left, right) => {
        self.binary_op(out, Operator::ADD, left, right);
      }
      Expression::Subtract(left, right) => {
        self.binary_op(out, Operator::SUBTRACT, left, right);
      }
      Expression::Multiply(left, right) => {
        self.binary_op(out, Operator::MULTIPLY, left, right);
      }
      Expression::Sin(arg) => {
        self.function_call(out, "sin", arg);
      }
      Expression::Cos(arg) => {
        self.function_call(out, "cos", arg);
      }
      Expression::Negate(arg) => {
        out.push_str(Operator::NEGATE.symbol());
        self.render_prec(out, arg, Operator::NEGATE.right_precedence());
      }
      Expression::Unsupported(description) => {
        out.push_str(description);
      }
    }
  }

  fn binary_op(&self, out: &mut String, op: Operator, left: &Expression, right: &Expression) {
    self.render_prec(out, left, op.left_precedence());
    out.push(' ');
    out.push_str(op.symbol());
    out.push(' ');
    self.render_prec(out, right, op.right_precedence());
  }

  fn function_call(&self, out: &mut String, f: &str, arg: &Expression) {
    out.push_str(f);
    out.push('(');
    self.render_prec(out, arg, Precedence::MIN);
    out.push(')');
  }
}

fn precedence_of(expr: &Expression) -> Precedence {
  match expr {
    Expression::Add(_, _) => Operator::ADD.precedence(),
    Expression::Subtract(_, _) => Operator::SUBTRACT.precedence(),
    Expression::Multiply(_, _) => Operator::MULTIPLY.precedence(),
    Expression::Negate(_) => Operator::NEGATE.precedence(),
    // A negative literal reads as a negation.
    Expression::Constant(c) if c.is_sign_negative() => Operator::NEGATE.precedence(),
    Expression::Constant(_) | Expression::Variable(_) | Expression::Sin(_) | Expression::Cos(_) | Expression::Unsupported(_) => {
      Precedence::ATOM
    }
  }
}

impl Display for Expression {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(&InfixRenderer::new().render(self))
  }
}
