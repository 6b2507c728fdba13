//! Indivisible algebraic primitives.
//!
//! An [`Atom`] is one of four kinds: a [`Fraction`], a [`Radical`], an [`Exponential`] or a
//! [`Logarithm`]. Only fractions have arithmetic; the other kinds are opaque values that hold
//! their fields and compare structurally. Multiplying or adding them fails with
//! [`OperationNotImplemented`].

use crate::error::{kind::{Operation, OperationNotImplemented}, Error};
use crate::fraction::Fraction;
use crate::ops::Arithmetic;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of an [`Atom`], used to classify factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AtomKind {
    Fraction,
    Radical,
    Exponential,
    Logarithm,
}

impl fmt::Display for AtomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fraction => write!(f, "fraction"),
            Self::Radical => write!(f, "radical"),
            Self::Exponential => write!(f, "exponential"),
            Self::Logarithm => write!(f, "logarithm"),
        }
    }
}

/// Writes the fraction, wrapped in parentheses unless it is a whole number.
fn fmt_grouped(fraction: &Fraction, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if fraction.is_integer() {
        write!(f, "{}", fraction.reduced())
    } else {
        write!(f, "({})", fraction)
    }
}

/// The `index`-th root of `radicand`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Radical {
    index: Fraction,
    radicand: Fraction,
}

impl Radical {
    /// Creates the `index`-th root of `radicand`.
    pub fn new(index: Fraction, radicand: Fraction) -> Self {
        Self { index, radicand }
    }

    pub fn index(&self) -> &Fraction {
        &self.index
    }

    pub fn radicand(&self) -> &Fraction {
        &self.radicand
    }
}

impl fmt::Display for Radical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "root({}, {})", self.index, self.radicand)
    }
}

/// `base` raised to the power of `exponent`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Exponential {
    base: Fraction,
    exponent: Fraction,
}

impl Exponential {
    /// Creates `base` raised to the power of `exponent`.
    pub fn new(base: Fraction, exponent: Fraction) -> Self {
        Self { base, exponent }
    }

    pub fn base(&self) -> &Fraction {
        &self.base
    }

    pub fn exponent(&self) -> &Fraction {
        &self.exponent
    }
}

impl fmt::Display for Exponential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_grouped(&self.base, f)?;
        write!(f, "^")?;
        fmt_grouped(&self.exponent, f)
    }
}

/// The logarithm of `value` in the given `base`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Logarithm {
    base: Fraction,
    value: Fraction,
}

impl Logarithm {
    /// Creates the logarithm of `value` in the given `base`.
    pub fn new(base: Fraction, value: Fraction) -> Self {
        Self { base, value }
    }

    pub fn base(&self) -> &Fraction {
        &self.base
    }

    pub fn value(&self) -> &Fraction {
        &self.value
    }
}

impl fmt::Display for Logarithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "log({}, {})", self.base, self.value)
    }
}

/// Short names for the atom types.
pub type Rat = Fraction;
pub type Rad = Radical;
pub type Exp = Exponential;
pub type Log = Logarithm;

/// An indivisible algebraic primitive.
///
/// [`PartialEq`] compares atoms structurally: atoms of different kinds are never equal, and atoms
/// of the same kind are equal if all of their fields are. Fractions (including the fields of the
/// other kinds) compare by value, so `root(2, 2/4) == root(2, 1/2)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Atom {
    Fraction(Fraction),
    Radical(Radical),
    Exponential(Exponential),
    Logarithm(Logarithm),
}

impl Atom {
    /// Creates a fraction atom.
    pub fn rational(fraction: Fraction) -> Self {
        Self::Fraction(fraction)
    }

    /// Creates a radical atom.
    pub fn radical(index: Fraction, radicand: Fraction) -> Self {
        Self::Radical(Radical::new(index, radicand))
    }

    /// Creates an exponential atom.
    pub fn exponential(base: Fraction, exponent: Fraction) -> Self {
        Self::Exponential(Exponential::new(base, exponent))
    }

    /// Creates a logarithm atom.
    pub fn logarithm(base: Fraction, value: Fraction) -> Self {
        Self::Logarithm(Logarithm::new(base, value))
    }

    /// Returns the kind of this atom.
    pub fn kind(&self) -> AtomKind {
        match self {
            Self::Fraction(_) => AtomKind::Fraction,
            Self::Radical(_) => AtomKind::Radical,
            Self::Exponential(_) => AtomKind::Exponential,
            Self::Logarithm(_) => AtomKind::Logarithm,
        }
    }

    /// If the atom is a fraction, returns a reference to it.
    pub fn as_fraction(&self) -> Option<&Fraction> {
        match self {
            Self::Fraction(fraction) => Some(fraction),
            _ => None,
        }
    }

    /// Builds the error for an operation between two atoms that don't support it.
    pub(crate) fn not_implemented(op: Operation, lhs: &Self, rhs: &Self) -> Error {
        Error::new(OperationNotImplemented { op, lhs: lhs.kind(), rhs: rhs.kind() })
    }
}

impl From<Fraction> for Atom {
    fn from(fraction: Fraction) -> Self {
        Self::Fraction(fraction)
    }
}

impl From<Radical> for Atom {
    fn from(radical: Radical) -> Self {
        Self::Radical(radical)
    }
}

impl From<Exponential> for Atom {
    fn from(exponential: Exponential) -> Self {
        Self::Exponential(exponential)
    }
}

impl From<Logarithm> for Atom {
    fn from(logarithm: Logarithm) -> Self {
        Self::Logarithm(logarithm)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fraction(fraction) => write!(f, "{}", fraction),
            Self::Radical(radical) => write!(f, "{}", radical),
            Self::Exponential(exponential) => write!(f, "{}", exponential),
            Self::Logarithm(logarithm) => write!(f, "{}", logarithm),
        }
    }
}

impl Arithmetic for Atom {
    fn try_multiply(&self, rhs: &Self) -> Result<Self, Error> {
        match (self, rhs) {
            (Self::Fraction(lhs), Self::Fraction(rhs)) => Ok(Self::Fraction(lhs * rhs)),
            _ => Err(Self::not_implemented(Operation::Multiply, self, rhs)),
        }
    }

    fn try_add(&self, rhs: &Self) -> Result<Self, Error> {
        match (self, rhs) {
            (Self::Fraction(lhs), Self::Fraction(rhs)) => Ok(Self::Fraction(lhs + rhs)),
            _ => Err(Self::not_implemented(Operation::Add, self, rhs)),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(n, d).unwrap()
    }

    #[test]
    fn kind() {
        assert_eq!(Atom::from(frac(1, 2)).kind(), AtomKind::Fraction);
        assert_eq!(Atom::radical(frac(2, 1), frac(3, 1)).kind(), AtomKind::Radical);
        assert_eq!(Atom::exponential(frac(2, 1), frac(1, 2)).kind(), AtomKind::Exponential);
        assert_eq!(Atom::logarithm(frac(2, 1), frac(8, 1)).kind(), AtomKind::Logarithm);
    }

    #[test]
    fn accessors() {
        let radical = Rad::new(frac(3, 1), frac(5, 2));
        assert_eq!(radical.index(), &frac(3, 1));
        assert_eq!(radical.radicand(), &frac(5, 2));

        let exponential = Exp::new(frac(2, 1), frac(-1, 3));
        assert_eq!(exponential.base(), &frac(2, 1));
        assert_eq!(exponential.exponent(), &frac(-1, 3));

        let logarithm = Log::new(frac(10, 1), frac(1000, 1));
        assert_eq!(logarithm.base(), &frac(10, 1));
        assert_eq!(logarithm.value(), &frac(1000, 1));
    }

    #[test]
    fn structural_equality() {
        assert_eq!(Atom::radical(frac(2, 1), frac(2, 4)), Atom::radical(frac(2, 1), frac(1, 2)));
        assert_ne!(Atom::radical(frac(2, 1), frac(3, 1)), Atom::radical(frac(3, 1), frac(3, 1)));
        assert_ne!(Atom::exponential(frac(2, 1), frac(8, 1)), Atom::logarithm(frac(2, 1), frac(8, 1)));
        assert_ne!(Atom::from(frac(1, 1)), Atom::exponential(frac(1, 1), frac(1, 1)));
    }

    #[test]
    fn fraction_arithmetic() {
        let a = Atom::from(frac(1, 2));
        let b = Atom::from(frac(1, 3));
        assert_eq!(a.multiply(&b).unwrap(), Atom::from(frac(1, 6)));
        assert_eq!(a.add(&b).unwrap(), Atom::from(frac(5, 6)));
        assert_eq!(a.add(None).unwrap(), a);
    }

    #[test]
    fn opaque_arithmetic() {
        let radical = Atom::radical(frac(2, 1), frac(3, 1));
        let err = radical.multiply(&radical).unwrap_err();
        assert_eq!(
            err.downcast_ref::<OperationNotImplemented>(),
            Some(&OperationNotImplemented {
                op: Operation::Multiply,
                lhs: AtomKind::Radical,
                rhs: AtomKind::Radical,
            }),
        );

        let err = Atom::from(frac(1, 2)).add(&Atom::logarithm(frac(2, 1), frac(8, 1))).unwrap_err();
        assert_eq!(
            err.downcast_ref::<OperationNotImplemented>(),
            Some(&OperationNotImplemented {
                op: Operation::Add,
                lhs: AtomKind::Fraction,
                rhs: AtomKind::Logarithm,
            }),
        );
        assert_eq!(err.to_string(), "cannot add a `fraction` and a `logarithm` (help: arithmetic is only implemented between two fractions)");
    }

    #[test]
    fn display() {
        assert_eq!(Atom::radical(frac(2, 1), frac(3, 1)).to_string(), "root(2, 3)");
        assert_eq!(Atom::exponential(frac(4, 2), frac(1, 2)).to_string(), "2^(1/2)");
        assert_eq!(Atom::logarithm(frac(2, 1), frac(8, 1)).to_string(), "log(2, 8)");
        assert_eq!(Atom::from(frac(-3, 4)).to_string(), "-3/4");
    }
}
