//! Exact symbolic arithmetic on fractions, factors, terms and expressions.
//!
//! # Representation
//!
//! Values are built bottom-up from caller-supplied leaves:
//!
//! - A [`Fraction`] is an exact rational number with arbitrary precision numerator and
//! denominator.
//! - An [`Atom`] is an indivisible primitive: a fraction, a [`Radical`], an [`Exponential`] or a
//! [`Logarithm`]. Only fractions have arithmetic; the other kinds are opaque values.
//! - A [`Factor`] wraps an atom, optionally scaled by a fraction coefficient.
//! - A [`Term`] is a product of factors.
//! - An [`Expression`] is a sum of terms.
//!
//! # Simplification
//!
//! Simplifying a term classifies its factors by the kind of their atom and multiplies the factors
//! of each kind together, leaving at most one factor per kind. Simplifying an expression
//! simplifies every term, then adds the terms together, kind by kind, until a single term is
//! left.
//!
//! ```
//! use calc_algebra::{Expression, Factor, Fraction, Simplify, Term};
//!
//! let half = || Factor::new(Fraction::new(1, 2).unwrap());
//! let expr = Expression::new(vec![
//!     Term::new(vec![half(), half()]),
//!     Term::new(vec![half()]),
//! ]);
//!
//! // 1/2 * 1/2 + 1/2 = 3/4
//! let simplified = expr.simplify()?;
//! assert_eq!(simplified, Expression::from(Term::from(Factor::new(Fraction::new(3, 4)?))));
//! # Ok::<(), calc_algebra::Error>(())
//! ```
//!
//! Every operation has a pure form that returns a new value (like [`Simplify::simplify`] and
//! [`Arithmetic::add`]), and an in-place form that overwrites the receiver (like
//! [`Simplify::simplify_in_place`] and [`Arithmetic::add_in_place`]). See the [`ops`] module.
//!
//! # Errors
//!
//! Fallible operations return [`Error`]; see [`error::kind`] for the possible kinds of errors.

pub mod atom;
pub mod error;
pub mod expression;
pub mod factor;
pub mod fraction;
pub mod ops;
pub mod primitive;
pub mod step;
pub mod step_collector;
pub mod term;

#[cfg(test)]
mod proptests;

pub use atom::{Atom, AtomKind, Exp, Exponential, Log, Logarithm, Rad, Radical, Rat};
pub use error::Error;
pub use expression::Expression;
pub use factor::Factor;
pub use fraction::{reduce, Fraction};
pub use ops::{Arithmetic, Simplify};
pub use step::Step;
pub use step_collector::StepCollector;
pub use term::Term;
