
/// An operator has a symbol, a precedence, and an associativity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operator {
  symbol: &'static str,
  assoc: Associativity,
  prec: Precedence,
}

/// The precedence of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Precedence(u64);

/// The associativity of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Associativity {
  left_assoc: bool,
  right_assoc: bool,
}

impl Operator {
  pub const ADD: Operator = Operator::new("+", Associativity::LEFT, Precedence::new(1));
  pub const SUBTRACT: Operator = Operator::new("-", Associativity::LEFT, Precedence::new(1));
  pub const MULTIPLY: Operator = Operator::new("*", Associativity::LEFT, Precedence::new(2));
  /// Prefix negation. Only the right-hand side of this operator is
  /// meaningful.
  pub const NEGATE: Operator = Operator::new("-", Associativity::NONE, Precedence::new(3));

  pub const fn new(symbol: &'static str, assoc: Associativity, prec: Precedence) -> Operator {
    Operator { symbol, assoc, prec }
  }

  pub fn symbol(&self) -> &'static str {
    self.symbol
  }

  pub fn precedence(&self) -> Precedence {
    self.prec
  }

  pub fn left_precedence(&self) -> Precedence {
    if self.assoc.is_left_assoc() {
      self.prec
    } else {
      self.prec.incremented()
    }
  }

  pub fn right_precedence(&self) -> Precedence {
    if self.assoc.is_right_assoc() {
      self.prec
    } else {
      self.prec.incremented()
    }
  }
}

impl Associativity {
  /// Indicates an operator which associates to the left.
  pub const LEFT: Associativity = Associativity {
    left_assoc: true,
    right_assoc: false,
  };
  /// Indicates an operator which associate to the right.
  pub const RIGHT: Associativity = Associativity {
    left_assoc: false,
    right_assoc: true,
  };
  /// Indicates a non-associative operator, which always requires
  /// parentheses for nested applications of itself.
  pub const NONE: Associativity = Associativity {
    left_assoc: false,
    right_assoc: false,
  };
  pub const fn is_left_assoc(self) -> bool {
    self.left_assoc
  }
  pub const fn is_right_assoc(self) -> bool {
    self.right_assoc
  }
}

impl Precedence {
  /// The loosest precedence. Anything may appear in a position
  /// requiring this precedence without parentheses.
  pub const MIN: Precedence = Precedence(0);
  /// The precedence of atoms and function calls, which never need
  /// parentheses.
  pub const ATOM: Precedence = Precedence(u64::MAX);

  /// Internally, we store an operator's precedence as ten times the
  /// input value, so that we can increment to represent
  /// associativity.
  ///
  /// For example, if `#` is a left-associative operator with
  /// (internal) precedence value `p`, then its left-hand side is also
  /// at precedence value `p`, while its right-hand side is at
  /// precedence value `p + 1`, indicating parentheses will be
  /// required if `#` is encountered again.
  pub const fn new(n: u64) -> Precedence {
    Precedence(n * 10)
  }

  pub const fn from_raw(n: u64) -> Precedence {
    Precedence(n)
  }

  pub fn incremented(self) -> Precedence {
    Precedence(self.0.saturating_add(1))
  }
}
