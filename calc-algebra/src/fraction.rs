//! Exact rational numbers.
//!
//! A [`Fraction`] stores the numerator and denominator it was constructed with, without reducing
//! them. Reduction happens in [`Simplify::simplify`] (or [`Fraction::reduced`]), and in the result
//! of every arithmetic operation. Two fractions are equal if their reduced forms are identical, so
//! `2/4 == 1/2` and `1/-2 == -1/2`.
//!
//! The denominator of a constructed fraction is never zero. This makes multiplication and
//! addition infallible, which is why [`Fraction`] also implements the operator traits from
//! [`std::ops`].

use crate::error::{kind::DivisionByZero, Error};
use crate::ops::{Arithmetic, Simplify};
use crate::primitive::int;
use crate::step::Step;
use crate::step_collector::StepCollector;
use rug::Integer;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reduces the fraction `numerator / denominator`, dividing both by their greatest common
/// divisor, and normalizing the sign so that the returned denominator is positive.
///
/// Returns [`DivisionByZero`] if the denominator is zero.
pub fn reduce(numerator: &Integer, denominator: &Integer) -> Result<(Integer, Integer), Error> {
    if denominator.is_zero() {
        return Err(Error::new(DivisionByZero { numerator: numerator.clone() }));
    }

    Ok(reduce_nonzero(numerator, denominator))
}

/// [`reduce`] for a denominator that is known to be non-zero.
fn reduce_nonzero(numerator: &Integer, denominator: &Integer) -> (Integer, Integer) {
    // gcd(0, d) = |d|, so the gcd is at least 1 here
    let gcd = Integer::from(numerator.gcd_ref(denominator));
    let mut numerator = Integer::from(numerator.div_exact_ref(&gcd));
    let mut denominator = Integer::from(denominator.div_exact_ref(&gcd));

    if denominator.is_negative() {
        numerator = -numerator;
        denominator = -denominator;
    }

    (numerator, denominator)
}

/// An exact rational number.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(Integer, Integer)", into = "(Integer, Integer)"))]
pub struct Fraction {
    numerator: Integer,
    denominator: Integer,
}

impl Fraction {
    /// Creates the fraction `numerator / denominator`. The fraction is not reduced.
    ///
    /// Returns [`DivisionByZero`] if the denominator is zero.
    pub fn new<N, D>(numerator: N, denominator: D) -> Result<Self, Error>
    where
        Integer: From<N> + From<D>,
    {
        let (numerator, denominator) = (int(numerator), int(denominator));
        if denominator.is_zero() {
            return Err(Error::new(DivisionByZero { numerator }));
        }

        Ok(Self { numerator, denominator })
    }

    /// Creates the fraction `n / 1`.
    pub fn from_integer<T>(n: T) -> Self
    where
        Integer: From<T>,
    {
        Self { numerator: int(n), denominator: int(1) }
    }

    /// The fraction `0 / 1`.
    pub fn zero() -> Self {
        Self::from_integer(0)
    }

    /// The fraction `1 / 1`.
    pub fn one() -> Self {
        Self::from_integer(1)
    }

    /// Reduces the given parts. The denominator must be non-zero.
    fn from_nonzero(numerator: Integer, denominator: Integer) -> Self {
        let (numerator, denominator) = reduce_nonzero(&numerator, &denominator);
        Self { numerator, denominator }
    }

    /// The numerator, as constructed.
    pub fn numerator(&self) -> &Integer {
        &self.numerator
    }

    /// The denominator, as constructed. Never zero.
    pub fn denominator(&self) -> &Integer {
        &self.denominator
    }

    /// Returns the reduced numerator and denominator.
    pub fn reduced_parts(&self) -> (Integer, Integer) {
        reduce_nonzero(&self.numerator, &self.denominator)
    }

    /// Returns the reduced form of this fraction.
    pub fn reduced(&self) -> Self {
        let (numerator, denominator) = self.reduced_parts();
        Self { numerator, denominator }
    }

    /// Returns true if the fraction is stored in reduced form.
    pub fn is_reduced(&self) -> bool {
        let (numerator, denominator) = self.reduced_parts();
        numerator == self.numerator && denominator == self.denominator
    }

    /// Returns true if the fraction is zero.
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Returns true if the fraction is a whole number.
    pub fn is_integer(&self) -> bool {
        self.numerator.is_divisible(&self.denominator)
    }
}

/// Two fractions are equal if their reduced forms have identical numerators and denominators.
impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.reduced_parts() == other.reduced_parts()
    }
}

impl Eq for Fraction {}

/// Writes the parts as constructed, with the sign moved to the numerator. `2/4` stays `2/4`, and
/// `1/-2` is written `-1/2`.
impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (numerator, denominator) = if self.denominator.is_negative() {
            (Integer::from(-&self.numerator), Integer::from(-&self.denominator))
        } else {
            (self.numerator.clone(), self.denominator.clone())
        };

        if denominator == 1 {
            write!(f, "{}", numerator)
        } else {
            write!(f, "{}/{}", numerator, denominator)
        }
    }
}

impl From<Integer> for Fraction {
    fn from(n: Integer) -> Self {
        Self { numerator: n, denominator: int(1) }
    }
}

impl TryFrom<(Integer, Integer)> for Fraction {
    type Error = Error;

    fn try_from((numerator, denominator): (Integer, Integer)) -> Result<Self, Self::Error> {
        Self::new(numerator, denominator)
    }
}

impl From<Fraction> for (Integer, Integer) {
    fn from(fraction: Fraction) -> Self {
        (fraction.numerator, fraction.denominator)
    }
}

/// `(a/b) * (c/d) = (a*c) / (b*d)`, reduced.
impl std::ops::Mul<&Fraction> for &Fraction {
    type Output = Fraction;

    fn mul(self, rhs: &Fraction) -> Self::Output {
        let numerator = Integer::from(&self.numerator * &rhs.numerator);
        let denominator = Integer::from(&self.denominator * &rhs.denominator);
        Fraction::from_nonzero(numerator, denominator)
    }
}

impl std::ops::Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl std::ops::MulAssign<&Fraction> for Fraction {
    fn mul_assign(&mut self, rhs: &Fraction) {
        *self = &*self * rhs;
    }
}

/// `(a/b) + (c/d) = (a*d + c*b) / (b*d)`, reduced.
impl std::ops::Add<&Fraction> for &Fraction {
    type Output = Fraction;

    fn add(self, rhs: &Fraction) -> Self::Output {
        let numerator = Integer::from(&self.numerator * &rhs.denominator)
            + Integer::from(&rhs.numerator * &self.denominator);
        let denominator = Integer::from(&self.denominator * &rhs.denominator);
        Fraction::from_nonzero(numerator, denominator)
    }
}

impl std::ops::Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl std::ops::AddAssign<&Fraction> for Fraction {
    fn add_assign(&mut self, rhs: &Fraction) {
        *self = &*self + rhs;
    }
}

impl std::ops::Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Self::Output {
        Self { numerator: -self.numerator, denominator: self.denominator }
    }
}

impl Arithmetic for Fraction {
    fn try_multiply(&self, rhs: &Self) -> Result<Self, Error> {
        Ok(self * rhs)
    }

    fn try_add(&self, rhs: &Self) -> Result<Self, Error> {
        Ok(self + rhs)
    }
}

impl Simplify for Fraction {
    fn simplify_with(&self, step_collector: &mut dyn StepCollector<Step>) -> Result<Self, Error> {
        let reduced = self.reduced();
        if reduced.numerator != self.numerator || reduced.denominator != self.denominator {
            step_collector.push(Step::ReduceFraction);
        }
        Ok(reduced)
    }
}
