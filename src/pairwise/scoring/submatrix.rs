use eyre::{ensure, Result};

use crate::pairwise::Matrix;
use crate::{Alignable, Score};

use super::Scheme;

/// Precomputed substitution scores: an n×m grid where cell (i, j) holds the
/// scheme's score for `seq1[i]` against `seq2[j]`. Built once per
/// (sequences, scheme) combination and shared read-only across however many
/// aligner runs reuse it.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SubstitutionMatrix<S: Score> {
    scores: Matrix<S>,
}

impl<S: Score> SubstitutionMatrix<S> {
    pub fn build<Sch, S1, S2>(seq1: &S1, seq2: &S2, scheme: &Sch) -> Result<Self>
    where
        Sch: Scheme<Score = S>,
        S1: Alignable<Symbol = Sch::Symbol>,
        S2: Alignable<Symbol = Sch::Symbol>,
    {
        ensure!(!seq1.is_empty(), "invalid input: sequence 1 is empty");
        ensure!(!seq2.is_empty(), "invalid input: sequence 2 is empty");

        let mut scores = Matrix::zeroed(seq1.len(), seq2.len());
        for row in 0..seq1.len() {
            for col in 0..seq2.len() {
                scores[(row, col)] = scheme.score(seq1.at(row), seq2.at(col));
            }
        }
        Ok(Self { scores })
    }

    pub fn rows(&self) -> usize {
        self.scores.rows()
    }

    pub fn cols(&self) -> usize {
        self.scores.cols()
    }

    #[inline(always)]
    pub fn at(&self, row: usize, col: usize) -> S {
        self.scores[(row, col)]
    }
}
