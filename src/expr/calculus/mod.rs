
//! Subsystems for doing basic calculus on expressions, such as taking
//! derivatives.

mod derivative;
mod lambda;

pub use derivative::{DerivativeEngine, DifferentiationError, differentiate, nth_derivative};
pub use lambda::Lambda;
