use std::cmp::max;

use eyre::{bail, ensure, Result};
use log::{debug, trace};
use num::Zero;

use crate::Alignable;

use super::alignment::{Alignment, Op, Step};
use super::matrix::Matrix;
use super::scoring::{Scheme, SubstitutionMatrix};
use super::trace::Tracer;
use super::Align;

/// Needleman-Wunsch engine: aligns both sequences end to end. The borders of
/// the (n+1)×(m+1) matrix are seeded with cumulative gap penalties and the
/// traceback runs from the terminal cell all the way back to the origin.
pub struct Global<Sch: Scheme> {
    scoring: Sch,
}

impl<Sch: Scheme> Global<Sch> {
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
        trace!("global alignment over a {rows}x{cols} matrix");
        tracer.reset(rows, cols);

        let mut matrix = Matrix::zeroed(rows, cols);
        self.initialize(&mut matrix, tracer);
        self.fill(&mut matrix, subst, tracer);
        let steps = self.traceback(seq1, seq2, subst, &matrix)?;

        let score = matrix[(rows - 1, cols - 1)];
        debug!("global alignment score: {score:?}");
        Ok(Alignment::new(score, steps, 0..seq1.len(), 0..seq2.len()))
    }

    /// Seed the first column, then the first row, with cumulative gap
    /// penalties. The origin cell is written (and reported) once per pass.
    fn initialize<T>(&self, matrix: &mut Matrix<Sch::Score>, tracer: &mut T)
    where
        T: Tracer<Score = Sch::Score>,
    {
        let gap = self.scoring.gap();

        let mut acc = Sch::Score::zero();
        for row in 0..matrix.rows() {
            matrix[(row, 0)] = acc;
            tracer.cell(row, 0, acc);
            acc = acc + gap;
        }

        let mut acc = Sch::Score::zero();
        for col in 0..matrix.cols() {
            matrix[(0, col)] = acc;
            tracer.cell(0, col, acc);
            acc = acc + gap;
        }
    }

    fn fill<T>(
        &self,
        matrix: &mut Matrix<Sch::Score>,
        subst: &SubstitutionMatrix<Sch::Score>,
        tracer: &mut T,
    ) where
        T: Tracer<Score = Sch::Score>,
    {
        let gap = self.scoring.gap();
        for row in 1..matrix.rows() {
            for col in 1..matrix.cols() {
                let diagonal = matrix[(row - 1, col - 1)] + subst.at(row - 1, col - 1);
                let vertical = matrix[(row - 1, col)] + gap;
                let horizontal = matrix[(row, col - 1)] + gap;

                let score = max(diagonal, max(vertical, horizontal));
                matrix[(row, col)] = score;
                tracer.cell(row, col, score);
            }
        }
    }

    /// Walk back from the terminal cell, re-testing the forward recurrence
    /// with fixed precedence: diagonal, then vertical, then horizontal.
    /// Border cells exclude out-of-range candidates explicitly.
    fn traceback<S1, S2>(
        &self,
        seq1: &S1,
        seq2: &S2,
        subst: &SubstitutionMatrix<Sch::Score>,
        matrix: &Matrix<Sch::Score>,
    ) -> Result<Vec<Step>>
    where
        S1: Alignable<Symbol = Sch::Symbol>,
        S2: Alignable<Symbol = Sch::Symbol>,
    {
        let gap = self.scoring.gap();
        let (mut row, mut col) = (matrix.rows() - 1, matrix.cols() - 1);
        let mut ops = Vec::with_capacity(row + col);

        while row > 0 || col > 0 {
            let here = matrix[(row, col)];

            if row > 0 && col > 0 && here == matrix[(row - 1, col - 1)] + subst.at(row - 1, col - 1)
            {
                ops.push(self.scoring.classify(seq1.at(row - 1), seq2.at(col - 1)));
                row -= 1;
                col -= 1;
            } else if row > 0 && here == matrix[(row - 1, col)] + gap {
                ops.push(Op::GapSecond);
                row -= 1;
            } else if col > 0 && here == matrix[(row, col - 1)] + gap {
                ops.push(Op::GapFirst);
                col -= 1;
            } else {
                bail!("global traceback stalled at ({row}, {col})");
            }
        }

        ops.reverse();
        Ok(Step::from_ops(ops))
    }
}

impl<Sch: Scheme> Align for Global<Sch> {
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
