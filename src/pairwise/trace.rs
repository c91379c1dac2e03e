use std::marker::PhantomData;

use derive_getters::{Dissolve, Getters};

use crate::Score;

use super::Matrix;

/// Observer for one aligner run. The engine calls `reset` once before
/// touching the matrix and `cell` once per matrix-cell write, in write
/// order. Implementations must not assume anything beyond that; the
/// engines never read back from the tracer.
#[allow(unused_variables)]
pub trait Tracer {
    type Score: Score;

    fn reset(&mut self, rows: usize, cols: usize) {}
    fn cell(&mut self, row: usize, col: usize, score: Self::Score) {}
}

/// Tracer that records nothing. Runs that skip visualization pay nothing.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Noop<S: Score> {
    _phantom: PhantomData<S>,
}

impl<S: Score> Noop<S> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: Score> Tracer for Noop<S> {
    type Score = S;
}

/// A single recorded matrix write.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct CellWrite<S: Score> {
    pub row: usize,
    pub col: usize,
    pub score: S,
}

/// Diff-style history: one `CellWrite` per matrix write plus the grid
/// dimensions. Costs O(1) per write instead of a full-grid copy; frames can
/// be reconstructed by replaying the writes over a zeroed grid.
#[derive(Clone, Eq, PartialEq, Debug, Default, Getters, Dissolve)]
pub struct CellLog<S: Score> {
    rows: usize,
    cols: usize,
    writes: Vec<CellWrite<S>>,
}

impl<S: Score> CellLog<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }
}

impl<S: Score> Tracer for CellLog<S> {
    type Score = S;

    fn reset(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        self.writes.clear();
    }

    #[inline(always)]
    fn cell(&mut self, row: usize, col: usize, score: S) {
        self.writes.push(CellWrite { row, col, score });
    }
}

/// Full-frame history: an ordered list of complete matrix copies, one per
/// write, mirroring the grid as the engine builds it. This is the shape the
/// presentation layer reveals frame by frame; prefer [`CellLog`] when full
/// frames are not needed, the storage here is quadratic in the number of
/// writes.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SnapshotHistory<S: Score> {
    current: Matrix<S>,
    frames: Vec<Matrix<S>>,
}

impl<S: Score> SnapshotHistory<S> {
    pub fn new() -> Self {
        Self {
            current: Matrix::zeroed(0, 0),
            frames: Vec::new(),
        }
    }

    pub fn frames(&self) -> &[Matrix<S>] {
        &self.frames
    }

    pub fn into_frames(self) -> Vec<Matrix<S>> {
        self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl<S: Score> Default for SnapshotHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Score> Tracer for SnapshotHistory<S> {
    type Score = S;

    fn reset(&mut self, rows: usize, cols: usize) {
        self.current = Matrix::zeroed(rows, cols);
        self.frames.clear();
    }

    fn cell(&mut self, row: usize, col: usize, score: S) {
        self.current[(row, col)] = score;
        self.frames.push(self.current.clone());
    }
}
