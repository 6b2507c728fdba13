//! Terms: products of factors, combined kind by kind.
//!
//! # Classification
//!
//! The factors of a [`Term`] are **classified** by the kind of their atom (see [`AtomKind`]). Each
//! kind forms a group, and the groups are ordered by the first appearance of their kind in the
//! term. The factors inside a group keep their relative order.
//!
//! # Simplification
//!
//! A term is simplified by reducing each group to a single representative factor: the factors of
//! the group are multiplied together from left to right. A group with a single factor is kept as
//! is, so a term with one fraction and one radical is already simplified. After simplification, a
//! term has at most one factor of each kind.
//!
//! ```
//! use calc_algebra::{Factor, Fraction, Simplify, Term};
//!
//! let term = Term::new(vec![
//!     Factor::new(Fraction::new(1, 2)?),
//!     Factor::new(Fraction::new(1, 3)?),
//! ]);
//! assert_eq!(term.simplify()?, Term::new(vec![Factor::new(Fraction::new(1, 6)?)]));
//! # Ok::<(), calc_algebra::Error>(())
//! ```
//!
//! # Addition
//!
//! Two terms are added by reducing the groups of both terms, then merging them: a kind present in
//! only one of the terms keeps its representative, and the representatives of a kind present in
//! both terms are **added** together. The merged factors are ordered by the kinds of the left
//! term, followed by the kinds that only appear in the right term.
//!
//! Only fractions can be multiplied or added, so reducing or merging a group of radicals,
//! exponentials or logarithms with more than one factor fails with
//! [`OperationNotImplemented`](crate::error::kind::OperationNotImplemented).

use crate::atom::AtomKind;
use crate::error::Error;
use crate::factor::Factor;
use crate::ops::{Arithmetic, Simplify};
use crate::step::Step;
use crate::step_collector::StepCollector;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A group of factors of the same kind, in the order they appear in the term.
pub type Group<'a> = (AtomKind, Vec<&'a Factor>);

/// Multiplies the factors of a group together, from left to right.
fn reduce_group(
    kind: AtomKind,
    factors: &[&Factor],
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Option<Factor>, Error> {
    let Some((first, rest)) = factors.split_first() else {
        return Ok(None);
    };

    let mut representative = (*first).clone();
    for factor in rest {
        representative.multiply_in_place(*factor)?;
    }

    if !rest.is_empty() {
        step_collector.push(Step::CombineLikeFactors { kind, count: factors.len() });
    }
    Ok(Some(representative))
}

/// Returns true if both slices hold the same elements the same number of times, in any order.
pub(crate) fn same_elements<T: PartialEq>(lhs: &[T], rhs: &[T]) -> bool {
    if lhs.len() != rhs.len() {
        return false;
    }

    let mut unmatched = rhs.iter().collect::<Vec<_>>();
    lhs.iter().all(|item| {
        match unmatched.iter().position(|other| item == *other) {
            Some(idx) => {
                unmatched.swap_remove(idx);
                true
            },
            None => false,
        }
    })
}

/// A product of factors.
///
/// The [`PartialEq`] implementation compares the factor lists in any order: two terms are equal if
/// every factor of one term matches a distinct factor of the other.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Term {
    factors: Vec<Factor>,
}

impl Term {
    /// Creates a term from the given factors.
    pub fn new(factors: Vec<Factor>) -> Self {
        Self { factors }
    }

    pub fn factors(&self) -> &[Factor] {
        &self.factors
    }

    pub fn into_factors(self) -> Vec<Factor> {
        self.factors
    }

    /// Returns true if the term has no factors.
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Returns the factor of the given kind, if the term has exactly one.
    pub fn factor_of(&self, kind: AtomKind) -> Option<&Factor> {
        let mut iter = self.factors.iter().filter(|factor| factor.kind() == kind);
        match (iter.next(), iter.next()) {
            (Some(factor), None) => Some(factor),
            _ => None,
        }
    }

    /// Groups the factors of this term by kind, in order of first appearance.
    pub fn classify(&self) -> Vec<Group<'_>> {
        let mut groups: Vec<Group<'_>> = Vec::new();
        for factor in &self.factors {
            let kind = factor.kind();
            match groups.iter_mut().find(|(group_kind, _)| *group_kind == kind) {
                Some((_, group)) => group.push(factor),
                None => groups.push((kind, vec![factor])),
            }
        }
        groups
    }

    /// Classifies the factors of this term, and reduces each group to a single factor.
    fn reduced_groups(
        &self,
        step_collector: &mut dyn StepCollector<Step>,
    ) -> Result<Vec<(AtomKind, Factor)>, Error> {
        let mut reduced = Vec::new();
        for (kind, group) in self.classify() {
            if let Some(representative) = reduce_group(kind, &group, step_collector)? {
                reduced.push((kind, representative));
            }
        }
        Ok(reduced)
    }

    /// Adds `rhs` to this term, reporting every step taken to the given collector.
    pub(crate) fn add_with(
        &self,
        rhs: &Self,
        step_collector: &mut dyn StepCollector<Step>,
    ) -> Result<Self, Error> {
        let lhs = self.reduced_groups(step_collector)?;
        let mut rhs = rhs.reduced_groups(step_collector)?;

        let mut factors = Vec::with_capacity(lhs.len() + rhs.len());
        for (kind, factor) in lhs {
            match rhs.iter().position(|(rhs_kind, _)| *rhs_kind == kind) {
                Some(idx) => {
                    // keep the order of the remaining right-hand kinds
                    let (_, other) = rhs.remove(idx);
                    factors.push(factor.try_add(&other)?);
                    step_collector.push(Step::AddLikeFactors { kind });
                },
                None => factors.push(factor),
            }
        }
        factors.extend(rhs.into_iter().map(|(_, factor)| factor));

        Ok(Self::new(factors))
    }
}

impl From<Vec<Factor>> for Term {
    fn from(factors: Vec<Factor>) -> Self {
        Self::new(factors)
    }
}

impl From<Factor> for Term {
    fn from(factor: Factor) -> Self {
        Self::new(vec![factor])
    }
}

impl FromIterator<Factor> for Term {
    fn from_iter<I: IntoIterator<Item = Factor>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        same_elements(&self.factors, &other.factors)
    }
}

impl Eq for Term {}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.factors.iter();
        match iter.next() {
            Some(factor) => {
                write!(f, "{}", factor)?;
                for factor in iter {
                    write!(f, " * {}", factor)?;
                }
                Ok(())
            },
            None => write!(f, "1"),
        }
    }
}

impl Simplify for Term {
    fn simplify_with(&self, step_collector: &mut dyn StepCollector<Step>) -> Result<Self, Error> {
        let factors = self.reduced_groups(step_collector)?
            .into_iter()
            .map(|(_, factor)| factor)
            .collect();
        Ok(Self::new(factors))
    }
}

impl Arithmetic for Term {
    /// Multiplies two terms by concatenating their factors and simplifying the result.
    fn try_multiply(&self, rhs: &Self) -> Result<Self, Error> {
        self.factors.iter()
            .chain(rhs.factors.iter())
            .cloned()
            .collect::<Self>()
            .simplify()
    }

    fn try_add(&self, rhs: &Self) -> Result<Self, Error> {
        self.add_with(rhs, &mut ())
    }
}
