
//! Symbolic differentiation of single-variable real expressions.
//!
//! Build an [`Expression`](expr::Expression) tree, then call
//! [`differentiate`](expr::calculus::differentiate) to get a new tree
//! representing its derivative. The result is not simplified.

pub mod display;
pub mod expr;
