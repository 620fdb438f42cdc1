
//! Utility functions for walking an expression tree.

use super::Expression;

/// Visits every node of `expr` in post-order, left to right, so that
/// children are always seen before their parent.
pub fn postorder_walk_borrowed<F>(expr: &Expression, mut f: F)
where F: FnMut(&Expression) {
  postorder_walk_borrowed_impl(expr, &mut f);
}

fn postorder_walk_borrowed_impl<F>(expr: &Expression, f: &mut F)
where F: FnMut(&Expression) {
  for child in expr.children() {
    postorder_walk_borrowed_impl(child, f);
  }
  f(expr);
}

/// Returns true if any of the sub-expressions of `expr` (including
/// `expr` itself) satisfies the predicate.
pub fn any<F>(expr: &Expression, f: F) -> bool
where F: Fn(&Expression) -> bool {
  let mut result = false;
  postorder_walk_borrowed(expr, |e| {
    if f(e) {
      result = true;
    }
  });
  result
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::expr::test_utils::x;

  #[test]
  fn test_postorder_visits_children_first() {
    let expr = Expression::add(Expression::sin(x()), Expression::from(2));
    let mut seen = Vec::new();
    postorder_walk_borrowed(&expr, |e| seen.push(e.clone()));
    assert_eq!(seen, vec![
      x(),
      Expression::sin(x()),
      Expression::from(2),
      expr.clone(),
    ]);
  }

  #[test]
  fn test_any() {
    let expr = Expression::mul(Expression::from(3), Expression::cos(x()));
    assert!(any(&expr, |e| matches!(e, Expression::Cos(_))));
    assert!(any(&expr, |e| *e == Expression::from(3)));
    assert!(!any(&expr, |e| matches!(e, Expression::Sin(_))));
  }
}
