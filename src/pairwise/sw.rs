use std::cmp::max;

use eyre::{bail, ensure, Result};
use log::{debug, trace};
use num::Zero;

use crate::{Alignable, Score};

use super::alignment::{Alignment, Op, Step};
use super::matrix::Matrix;
use super::scoring::{Scheme, SubstitutionMatrix};
use super::trace::Tracer;
use super::Align;

/// The best-scoring cell seen so far during the fill. Strict comparison
/// during the row-major sweep keeps the first occurrence on ties.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
struct Seed<S: Score> {
    row: usize,
    col: usize,
    score: S,
}

/// Smith-Waterman engine: best-scoring contiguous-substring alignment. The
/// matrix starts at zero, negative running scores are floored at zero, and
/// the traceback runs from the maximum cell back to the first zero cell.
pub struct Local<Sch: Scheme> {
    scoring: Sch,
}

impl<Sch: Scheme> Local<Sch> {
    pub fn new(scoring: Sch) -> Self {
        Self { scoring }
    }

    pub fn with_scoring(&mut self, scoring: Sch) {
        self.scoring = scoring;
    }

    pub fn scoring(&self) -> &Sch {
        &self.scoring
    }

    /// Align against a prebuilt substitution matrix. The matrix must have
    /// been built for exactly these sequences.
    pub fn align_with<S1, S2, T>(
        &self,
        seq1: &S1,
        seq2: &S2,
        subst: &SubstitutionMatrix<Sch::Score>,
        tracer: &mut T,
    ) -> Result<Alignment<Sch::Score>>
    where
        S1: Alignable<Symbol = Sch::Symbol>,
        S2: Alignable<Symbol = Sch::Symbol>,
        T: Tracer<Score = Sch::Score>,
    {
        ensure!(!seq1.is_empty(), "invalid input: sequence 1 is empty");
        ensure!(!seq2.is_empty(), "invalid input: sequence 2 is empty");
        ensure!(
            subst.rows() == seq1.len() && subst.cols() == seq2.len(),
            "invalid input: substitution matrix is {}x{}, sequences are {}x{}",
            subst.rows(),
            subst.cols(),
            seq1.len(),
            seq2.len(),
        );

        let (rows, cols) = (seq1.len() + 1, seq2.len() + 1);
        trace!("local alignment over a {rows}x{cols} matrix");
        tracer.reset(rows, cols);

        // Zeroed borders are part of the initial state, not writes: the
        // tracer is intentionally silent until the fill begins.
        let mut matrix = Matrix::zeroed(rows, cols);
        let seed = self.fill(&mut matrix, subst, tracer);
        let (steps, start) = self.traceback(seq1, seq2, subst, &matrix, seed)?;

        debug!("local alignment score: {:?}", seed.score);
        Ok(Alignment::new(
            seed.score,
            steps,
            start.0..seed.row,
            start.1..seed.col,
        ))
    }

    fn fill<T>(
        &self,
        matrix: &mut Matrix<Sch::Score>,
        subst: &SubstitutionMatrix<Sch::Score>,
        tracer: &mut T,
    ) -> Seed<Sch::Score>
    where
        T: Tracer<Score = Sch::Score>,
    {
        let gap = self.scoring.gap();
        let zero = Sch::Score::zero();
        // The zero at the origin is the row-major first occurrence of the
        // maximum whenever nothing scores above it.
        let mut best = Seed {
            row: 0,
            col: 0,
            score: zero,
        };

        for row in 1..matrix.rows() {
            for col in 1..matrix.cols() {
                let diagonal = matrix[(row - 1, col - 1)] + subst.at(row - 1, col - 1);
                let vertical = matrix[(row - 1, col)] + gap;
                let horizontal = matrix[(row, col - 1)] + gap;

                let score = max(zero, max(diagonal, max(vertical, horizontal)));
                matrix[(row, col)] = score;
                tracer.cell(row, col, score);

                if score > best.score {
                    best = Seed { row, col, score };
                }
            }
        }
        best
    }

    /// Walk back from the seed with the same three-way recurrence test as
    /// the global engine, stopping at the first zero-valued cell. Any cell
    /// scoring above zero lies strictly inside the matrix, so no border
    /// bounds checks are needed here.
    fn traceback<S1, S2>(
        &self,
        seq1: &S1,
        seq2: &S2,
        subst: &SubstitutionMatrix<Sch::Score>,
        matrix: &Matrix<Sch::Score>,
        seed: Seed<Sch::Score>,
    ) -> Result<(Vec<Step>, (usize, usize))>
    where
        S1: Alignable<Symbol = Sch::Symbol>,
        S2: Alignable<Symbol = Sch::Symbol>,
    {
        let gap = self.scoring.gap();
        let (mut row, mut col) = (seed.row, seed.col);
        let mut ops = Vec::with_capacity(row + col);

        while matrix[(row, col)] > Sch::Score::zero() {
            let here = matrix[(row, col)];

            if here == matrix[(row - 1, col - 1)] + subst.at(row - 1, col - 1) {
                ops.push(self.scoring.classify(seq1.at(row - 1), seq2.at(col - 1)));
                row -= 1;
                col -= 1;
            } else if here == matrix[(row - 1, col)] + gap {
                ops.push(Op::GapSecond);
                row -= 1;
            } else if here == matrix[(row, col - 1)] + gap {
                ops.push(Op::GapFirst);
                col -= 1;
            } else {
                bail!("local traceback stalled at ({row}, {col})");
            }
        }

        ops.reverse();
        Ok((Step::from_ops(ops), (row, col)))
    }
}

impl<Sch: Scheme> Align for Local<Sch> {
    type Scheme = Sch;

    fn align<S1, S2, T>(
        &self,
        seq1: &S1,
        seq2: &S2,
        tracer: &mut T,
    ) -> Result<Alignment<Sch::Score>>
    where
        S1: Alignable<Symbol = Sch::Symbol>,
        S2: Alignable<Symbol = Sch::Symbol>,
        T: Tracer<Score = Sch::Score>,
    {
        let subst = SubstitutionMatrix::build(seq1, seq2, &self.scoring)?;
        self.align_with(seq1, seq2, &subst, tracer)
    }
}
