//! The operations shared by fractions, atoms, factors, terms and expressions.
//!
//! Every operation comes in two forms: a pure method that returns a new value, and an `_in_place`
//! method that computes the pure result and overwrites the receiver with it, returning the
//! receiver so that calls can be chained.
//!
//! The right-hand operand of [`Arithmetic::multiply`] and [`Arithmetic::add`] is optional. A
//! missing operand leaves the receiver unchanged:
//!
//! ```
//! use calc_algebra::{Arithmetic, Fraction};
//!
//! let half = Fraction::new(1, 2)?;
//! assert_eq!(half.multiply(None)?, half);
//! assert_eq!(half.multiply(&Fraction::new(2, 3)?)?, Fraction::new(1, 3)?);
//! # Ok::<(), calc_algebra::Error>(())
//! ```

use crate::error::Error;
use crate::step::Step;
use crate::step_collector::StepCollector;

/// Multiplication and addition between two values of the same type.
pub trait Arithmetic: Clone {
    /// Multiplies `self` by `rhs`.
    fn try_multiply(&self, rhs: &Self) -> Result<Self, Error>;

    /// Adds `rhs` to `self`.
    fn try_add(&self, rhs: &Self) -> Result<Self, Error>;

    /// Multiplies `self` by `rhs`, or returns a copy of `self` if there is no `rhs`.
    fn multiply<'a>(&self, rhs: impl Into<Option<&'a Self>>) -> Result<Self, Error>
    where
        Self: 'a,
    {
        match rhs.into() {
            Some(rhs) => self.try_multiply(rhs),
            None => Ok(self.clone()),
        }
    }

    /// Adds `rhs` to `self`, or returns a copy of `self` if there is no `rhs`.
    fn add<'a>(&self, rhs: impl Into<Option<&'a Self>>) -> Result<Self, Error>
    where
        Self: 'a,
    {
        match rhs.into() {
            Some(rhs) => self.try_add(rhs),
            None => Ok(self.clone()),
        }
    }

    /// Overwrites `self` with the product of `self` and `rhs`.
    ///
    /// On error, `self` is left untouched.
    fn multiply_in_place<'a>(&mut self, rhs: impl Into<Option<&'a Self>>) -> Result<&mut Self, Error>
    where
        Self: 'a,
    {
        *self = self.multiply(rhs)?;
        Ok(self)
    }

    /// Overwrites `self` with the sum of `self` and `rhs`.
    ///
    /// On error, `self` is left untouched.
    fn add_in_place<'a>(&mut self, rhs: impl Into<Option<&'a Self>>) -> Result<&mut Self, Error>
    where
        Self: 'a,
    {
        *self = self.add(rhs)?;
        Ok(self)
    }
}

/// Reduction of a value to its canonical form.
pub trait Simplify: Sized {
    /// Simplifies `self`, reporting every step taken to the given collector.
    fn simplify_with(&self, step_collector: &mut dyn StepCollector<Step>) -> Result<Self, Error>;

    /// Simplifies `self`.
    fn simplify(&self) -> Result<Self, Error> {
        self.simplify_with(&mut ())
    }

    /// Simplifies `self`. The steps taken by the simplifier are collected and returned as well.
    fn simplify_with_steps(&self) -> Result<(Self, Vec<Step>), Error> {
        let mut steps: Vec<Step> = Vec::new();
        let simplified = self.simplify_with(&mut steps)?;
        Ok((simplified, steps))
    }

    /// Overwrites `self` with its simplified form.
    ///
    /// On error, `self` is left untouched.
    fn simplify_in_place(&mut self) -> Result<&mut Self, Error> {
        *self = self.simplify()?;
        Ok(self)
    }
}
