//! Combinable units that wrap an [`Atom`], optionally scaled by a coefficient.

use crate::atom::{Atom, AtomKind};
use crate::error::{kind::Operation, Error};
use crate::fraction::Fraction;
use crate::ops::Arithmetic;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A factor: `coefficient * atom`.
///
/// Factors built with [`Factor::new`] (or converted from an [`Atom`] / [`Fraction`]) have a
/// coefficient of 1. The kind of a factor, used to classify the factors of a
/// [`Term`](crate::term::Term), is the kind of its atom.
///
/// When two fraction factors are multiplied or added, the coefficients are folded into the
/// result, so the resulting factor has a coefficient of 1.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Factor {
    coefficient: Fraction,
    atom: Atom,
}

impl Factor {
    /// Creates a factor with a coefficient of 1.
    pub fn new(atom: impl Into<Atom>) -> Self {
        Self { coefficient: Fraction::one(), atom: atom.into() }
    }

    /// Creates a factor with the given coefficient.
    pub fn with_coefficient(coefficient: Fraction, atom: impl Into<Atom>) -> Self {
        Self { coefficient, atom: atom.into() }
    }

    pub fn coefficient(&self) -> &Fraction {
        &self.coefficient
    }

    pub fn atom(&self) -> &Atom {
        &self.atom
    }

    /// Returns the kind of the wrapped atom.
    pub fn kind(&self) -> AtomKind {
        self.atom.kind()
    }

    /// If the atom is a fraction, returns `coefficient * atom`.
    pub fn value(&self) -> Option<Fraction> {
        self.atom.as_fraction().map(|fraction| &self.coefficient * fraction)
    }
}

impl From<Atom> for Factor {
    fn from(atom: Atom) -> Self {
        Self::new(atom)
    }
}

impl From<Fraction> for Factor {
    fn from(fraction: Fraction) -> Self {
        Self::new(fraction)
    }
}

/// Fraction factors are equal if their values are. Other factors are equal if both the
/// coefficient and the atom are.
impl PartialEq for Factor {
    fn eq(&self, other: &Self) -> bool {
        match (self.value(), other.value()) {
            (Some(lhs), Some(rhs)) => lhs == rhs,
            _ => self.coefficient == other.coefficient && self.atom == other.atom,
        }
    }
}

impl Eq for Factor {}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coefficient == Fraction::one() {
            write!(f, "{}", self.atom)
        } else {
            write!(f, "{} * {}", self.coefficient, self.atom)
        }
    }
}

impl Arithmetic for Factor {
    fn try_multiply(&self, rhs: &Self) -> Result<Self, Error> {
        match (self.value(), rhs.value()) {
            (Some(lhs), Some(rhs)) => Ok(Self::new(lhs * rhs)),
            _ => Err(Atom::not_implemented(Operation::Multiply, &self.atom, &rhs.atom)),
        }
    }

    fn try_add(&self, rhs: &Self) -> Result<Self, Error> {
        match (self.value(), rhs.value()) {
            (Some(lhs), Some(rhs)) => Ok(Self::new(lhs + rhs)),
            _ => Err(Atom::not_implemented(Operation::Add, &self.atom, &rhs.atom)),
        }
    }
}
