use std::ops::Range;

use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;
use eyre::{ensure, Result};

use crate::pairwise::scoring::Scheme;
use crate::{Alignable, Score};

use super::op::Op;
use super::step::Step;

/// The outcome of one aligner run: the optimal score, the run-length encoded
/// path, and the half-open span each sequence contributes. Global alignments
/// span both sequences end to end; local alignments may start and end
/// strictly inside them.
#[derive(Clone, Eq, PartialEq, Debug, Getters, Constructor, Dissolve)]
pub struct Alignment<S: Score> {
    score: S,
    steps: Vec<Step>,
    seq1: Range<usize>,
    seq2: Range<usize>,
}

impl<S: Score> Alignment<S> {
    /// An alignment with no steps; produced by the local engine when no cell
    /// scores above zero.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total number of alignment columns.
    pub fn len(&self) -> usize {
        self.steps.iter().map(|step| *step.len()).sum()
    }

    /// Compact text form of the path, e.g. `1=1v5=1^1=`.
    pub fn rle(&self) -> String {
        Step::rle_string(self.steps.iter())
    }

    /// Replay the path against `scheme`, accumulating substitution and gap
    /// contributions. For a well-formed alignment the result equals
    /// [`Alignment::score`].
    pub fn rescore<Sch, S1, S2>(&self, seq1: &S1, seq2: &S2, scheme: &Sch) -> Result<S>
    where
        Sch: Scheme<Score = S>,
        S1: Alignable<Symbol = Sch::Symbol>,
        S2: Alignable<Symbol = Sch::Symbol>,
    {
        let (mut pos1, mut pos2) = (self.seq1.start, self.seq2.start);
        let mut total = S::zero();

        for step in &self.steps {
            match step.op() {
                Op::GapFirst | Op::GapSecond => {
                    let penalty = scheme.gap();
                    for _ in 0..*step.len() {
                        total = total + penalty;
                    }
                }
                Op::Match | Op::Mismatch => {
                    for offset in 0..*step.len() {
                        ensure!(
                            pos1 + offset < seq1.len() && pos2 + offset < seq2.len(),
                            "alignment path overruns the sequences"
                        );
                        total = total + scheme.score(seq1.at(pos1 + offset), seq2.at(pos2 + offset));
                    }
                }
            }
            step.op().apply(&mut pos1, &mut pos2, *step.len());
        }

        ensure!(
            pos1 == self.seq1.end && pos2 == self.seq2.end,
            "alignment path does not cover the recorded spans"
        );
        Ok(total)
    }
}
