//! Expressions: sums of terms.

use crate::error::{kind::EmptyExpression, Error};
use crate::ops::Simplify;
use crate::step::Step;
use crate::step_collector::StepCollector;
use crate::term::{same_elements, Term};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A sum of terms.
///
/// Simplifying an expression simplifies each of its terms, then folds them into a single term by
/// adding them together from left to right (see [`Term`] for how terms are added). An expression
/// with no terms cannot be simplified, and fails with [`EmptyExpression`].
///
/// The [`PartialEq`] implementation compares the term lists in any order. To compare the
/// simplified forms of two expressions, use [`Expression::equivalent`].
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Expression {
    terms: Vec<Term>,
}

impl Expression {
    /// Creates an expression from the given terms.
    pub fn new(terms: Vec<Term>) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn into_terms(self) -> Vec<Term> {
        self.terms
    }

    /// If the expression has exactly one term, returns a reference to it.
    pub fn as_term(&self) -> Option<&Term> {
        match self.terms.as_slice() {
            [term] => Some(term),
            _ => None,
        }
    }

    /// Returns true if both expressions simplify to equal terms.
    pub fn equivalent(&self, other: &Self) -> Result<bool, Error> {
        Ok(self.simplify()? == other.simplify()?)
    }
}

impl From<Vec<Term>> for Expression {
    fn from(terms: Vec<Term>) -> Self {
        Self::new(terms)
    }
}

impl From<Term> for Expression {
    fn from(term: Term) -> Self {
        Self::new(vec![term])
    }
}

impl FromIterator<Term> for Expression {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        same_elements(&self.terms, &other.terms)
    }
}

impl Eq for Expression {}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.terms.iter();
        match iter.next() {
            Some(term) => {
                write!(f, "{}", term)?;
                for term in iter {
                    write!(f, " + {}", term)?;
                }
                Ok(())
            },
            None => write!(f, "0"),
        }
    }
}

impl Simplify for Expression {
    fn simplify_with(&self, step_collector: &mut dyn StepCollector<Step>) -> Result<Self, Error> {
        let Some((first, rest)) = self.terms.split_first() else {
            return Err(Error::new(EmptyExpression));
        };

        let mut sum = first.simplify_with(step_collector)?;
        for term in rest {
            let term = term.simplify_with(step_collector)?;
            sum = sum.add_with(&term, step_collector)?;
        }

        if !rest.is_empty() {
            step_collector.push(Step::CombineTerms { count: self.terms.len() });
        }
        Ok(Self::new(vec![sum]))
    }
}

#[cfg(test)]
mod tests {
    use crate::atom::{Atom, AtomKind};
    use crate::error::kind::OperationNotImplemented;
    use crate::factor::Factor;
    use crate::fraction::Fraction;
    use pretty_assertions::assert_eq;
    use super::*;

    fn frac(n: i64, d: i64) -> Factor {
        Factor::new(Fraction::new(n, d).unwrap())
    }

    fn radical(index: i64, radicand: i64) -> Factor {
        Factor::new(Atom::radical(Fraction::from_integer(index), Fraction::from_integer(radicand)))
    }

    #[test]
    fn two_halves() {
        let expr = Expression::new(vec![Term::from(frac(1, 2)), Term::from(frac(1, 2))]);
        let simplified = expr.simplify().unwrap();
        assert_eq!(simplified.terms().len(), 1);
        assert_eq!(simplified.as_term().unwrap().factors(), &[frac(1, 1)]);
    }

    #[test]
    fn simplifies_terms_before_adding() {
        // (1/2 * 2/3) + (1/4) + (3/4 * 1/3) = 1/3 + 1/4 + 1/4 = 5/6
        let expr = Expression::new(vec![
            Term::new(vec![frac(1, 2), frac(2, 3)]),
            Term::from(frac(1, 4)),
            Term::new(vec![frac(3, 4), frac(1, 3)]),
        ]);
        let simplified = expr.simplify().unwrap();
        assert_eq!(simplified, Expression::from(Term::from(frac(5, 6))));
    }

    #[test]
    fn single_term() {
        let expr = Expression::from(Term::new(vec![frac(2, 4), radical(2, 3)]));
        let (simplified, steps) = expr.simplify_with_steps().unwrap();
        assert_eq!(simplified, expr);
        assert_eq!(steps, vec![]);
    }

    #[test]
    fn steps() {
        let expr = Expression::new(vec![
            Term::new(vec![frac(1, 2), frac(1, 3)]),
            Term::from(frac(1, 6)),
        ]);
        let (simplified, steps) = expr.simplify_with_steps().unwrap();
        assert_eq!(simplified.as_term().unwrap().factors(), &[frac(1, 3)]);
        assert_eq!(steps, vec![
            Step::CombineLikeFactors { kind: AtomKind::Fraction, count: 2 },
            Step::AddLikeFactors { kind: AtomKind::Fraction },
            Step::CombineTerms { count: 2 },
        ]);
    }

    #[test]
    fn empty() {
        let err = Expression::default().simplify().unwrap_err();
        assert!(err.is::<EmptyExpression>());
        assert_eq!(
            err.to_string(),
            "cannot simplify an expression with no terms (help: add at least one term to the expression)",
        );
    }

    #[test]
    fn opaque_terms() {
        let expr = Expression::new(vec![Term::from(radical(2, 3)), Term::from(radical(2, 3))]);
        assert!(expr.simplify().unwrap_err().is::<OperationNotImplemented>());
    }

    #[test]
    fn simplify_in_place() {
        let mut expr = Expression::new(vec![
            Term::new(vec![frac(1, 2), radical(2, 3)]),
            Term::from(frac(1, 3)),
        ]);
        expr.simplify_in_place().unwrap();
        assert_eq!(expr.terms(), &[Term::new(vec![frac(5, 6), radical(2, 3)])]);

        let mut empty = Expression::default();
        assert!(empty.simplify_in_place().is_err());
        assert!(empty.terms().is_empty());
    }

    #[test]
    fn equivalence() {
        let lhs = Expression::new(vec![Term::from(frac(1, 2)), Term::from(frac(1, 2))]);
        let rhs = Expression::from(Term::from(frac(3, 3)));
        assert_ne!(lhs, rhs);
        assert!(lhs.equivalent(&rhs).unwrap());
    }

    #[test]
    fn equality_counts_duplicates() {
        let half = Term::from(frac(1, 2));
        let third = Term::from(frac(1, 3));
        let lhs = Expression::new(vec![half.clone(), half.clone(), third.clone()]);
        let rhs = Expression::new(vec![half.clone(), third.clone(), third.clone()]);
        assert_ne!(lhs, rhs);
        assert_eq!(lhs, Expression::new(vec![third, half.clone(), half]));
    }

    #[test]
    fn into_terms() {
        let expr = Expression::new(vec![Term::from(frac(1, 2)), Term::from(radical(2, 3))]);
        let terms = expr.into_terms();
        assert_eq!(terms.len(), 2);
        assert_eq!(terms[1].factors(), &[radical(2, 3)]);
    }

    #[test]
    fn display() {
        let expr = Expression::new(vec![
            Term::new(vec![frac(1, 2), radical(2, 3)]),
            Term::from(frac(1, 3)),
        ]);
        assert_eq!(expr.to_string(), "1/2 * root(2, 3) + 1/3");
        assert_eq!(Expression::default().to_string(), "0");
    }
}
