use calc_attrs::ErrorKind;
use calc_error::ErrorKind;
use crate::atom::AtomKind;
use rug::Integer;
use std::fmt;

/// An arithmetic operation between two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Multiplication, used to combine factors inside a term.
    Multiply,

    /// Addition, used to combine factors of two terms.
    Add,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Multiply => write!(f, "multiply"),
            Self::Add => write!(f, "add"),
        }
    }
}

/// A fraction was constructed or reduced with a zero denominator.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot divide `{}` by zero", self.numerator),
    labels = ["this fraction"],
    help = "the denominator of a fraction must be non-zero",
)]
pub struct DivisionByZero {
    /// The numerator of the offending fraction.
    pub numerator: Integer,
}

/// The operation is not defined for the kinds of the given operands.
///
/// Only fractions have arithmetic. Radicals, exponentials and logarithms are opaque, so any
/// attempt to multiply or add them results in this error.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot {} a `{}` and a `{}`", self.op, self.lhs, self.rhs),
    labels = [
        format!("this operand is a `{}`", self.lhs),
        String::new(),
        format!("this operand is a `{}`", self.rhs),
    ],
    help = "arithmetic is only implemented between two fractions",
)]
pub struct OperationNotImplemented {
    /// The operation that was attempted.
    pub op: Operation,

    /// The kind of the left operand.
    pub lhs: AtomKind,

    /// The kind of the right operand.
    pub rhs: AtomKind,
}

/// An expression with no terms was simplified. There is no identity term to fold from.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "cannot simplify an expression with no terms",
    labels = ["this expression"],
    help = "add at least one term to the expression",
)]
pub struct EmptyExpression;
