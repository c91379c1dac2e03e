pub use equality::Equality;
pub use submatrix::SubstitutionMatrix;

pub use crate::Score;

use crate::pairwise::Op;

mod equality;
mod submatrix;

/// A complete scoring scheme for one aligner run: substitution scores for
/// symbol pairs, a per-gap penalty, and the match/mismatch classification
/// used to label diagonal traceback moves.
pub trait Scheme {
    type Score: Score;
    type Symbol;

    /// Substitution score for aligning `s1` against `s2`.
    fn score(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> Self::Score;

    /// Score contribution of a single gap in either sequence.
    fn gap(&self) -> Self::Score;

    /// Classify an aligned symbol pair as [`Op::Match`] or [`Op::Mismatch`].
    fn classify(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> Op;
}
