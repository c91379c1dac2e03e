pub use alignment::{Alignment, Op, Step};
pub use matrix::Matrix;
pub use nw::Global;
pub use scoring::{Equality, Scheme, SubstitutionMatrix};
pub use sw::Local;

use eyre::Result;

use crate::{Alignable, Score};

use trace::{SnapshotHistory, Tracer};

pub mod alignment;
pub mod display;
mod matrix;
mod nw;
pub mod scoring;
mod sw;
pub mod trace;

/// The one capability both engines share: given two sequences, produce an
/// optimal alignment while reporting every matrix write to a tracer.
pub trait Align {
    type Scheme: Scheme;

    fn align<S1, S2, T>(
        &self,
        seq1: &S1,
        seq2: &S2,
        tracer: &mut T,
    ) -> Result<Alignment<<Self::Scheme as Scheme>::Score>>
    where
        S1: Alignable<Symbol = <Self::Scheme as Scheme>::Symbol>,
        S2: Alignable<Symbol = <Self::Scheme as Scheme>::Symbol>,
        T: Tracer<Score = <Self::Scheme as Scheme>::Score>;
}

/// Global (Needleman-Wunsch) alignment of two text sequences with full-frame
/// history. All-zero score triples are replaced with the {1, -1, -2}
/// fallback before the run.
pub fn global<S: Score>(
    seq1: &str,
    seq2: &str,
    matches: S,
    mismatch: S,
    gap: S,
) -> Result<(String, String, Vec<Matrix<S>>)> {
    let scoring = Equality::<S, u8>::new(matches, mismatch, gap).or_fallback();
    let mut history = SnapshotHistory::new();

    let aln = Global::new(scoring).align(&seq1, &seq2, &mut history)?;
    let (aligned1, aligned2) = alignment::utils::gapped(&seq1, &seq2, &aln)?;
    Ok((aligned1, aligned2, history.into_frames()))
}

/// Local (Smith-Waterman) alignment of two text sequences with full-frame
/// history. All-zero score triples are replaced with the {1, -1, -2}
/// fallback before the run.
pub fn local<S: Score>(
    seq1: &str,
    seq2: &str,
    matches: S,
    mismatch: S,
    gap: S,
) -> Result<(String, String, Vec<Matrix<S>>)> {
    let scoring = Equality::<S, u8>::new(matches, mismatch, gap).or_fallback();
    let mut history = SnapshotHistory::new();

    let aln = Local::new(scoring).align(&seq1, &seq2, &mut history)?;
    let (aligned1, aligned2) = alignment::utils::gapped(&seq1, &seq2, &aln)?;
    Ok((aligned1, aligned2, history.into_frames()))
}
