use crate::atom::AtomKind;

/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step {
    /// `6/8 = 3/4`
    /// `4/-2 = -2`
    ReduceFraction,

    /// Factors of the same kind in one term are multiplied together.
    ///
    /// `1/2 * 1/3 = 1/6`
    CombineLikeFactors {
        /// The kind of the combined factors.
        kind: AtomKind,

        /// How many factors were combined.
        count: usize,
    },

    /// Two terms both have a factor of this kind, and the factors are added together.
    ///
    /// `(1/2) + (1/3) = 5/6`
    AddLikeFactors {
        /// The kind of the added factors.
        kind: AtomKind,
    },

    /// The terms of an expression are folded into a single term.
    CombineTerms {
        /// How many terms were folded.
        count: usize,
    },
}
