use std::marker::PhantomData;

use crate::pairwise::Op;
use crate::Score;

use super::Scheme;

/// Identity-based scheme: one score for equal symbols, one for different
/// symbols, one linear per-gap penalty.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Equality<S: Score, Symbol> {
    pub equal: S,
    pub different: S,
    pub gap: S,
    _phantom: PhantomData<Symbol>,
}

impl<S: Score, Symbol: PartialEq> Equality<S, Symbol> {
    pub fn new(equal: S, different: S, gap: S) -> Self {
        Self {
            equal,
            different,
            gap,
            _phantom: Default::default(),
        }
    }

    /// Replace an all-zero parameter triple with the documented fallback
    /// {equal: 1, different: -1, gap: -2}. A triple where only some scores
    /// are zero is kept as supplied.
    pub fn or_fallback(self) -> Self {
        if self.equal.is_zero() && self.different.is_zero() && self.gap.is_zero() {
            let one = S::one();
            Self::new(one, -one, -(one + one))
        } else {
            self
        }
    }
}

impl<S: Score, Symbol: PartialEq> Scheme for Equality<S, Symbol> {
    type Score = S;
    type Symbol = Symbol;

    #[inline(always)]
    fn score(&self, s1: &Symbol, s2: &Symbol) -> S {
        if s1 == s2 {
            self.equal
        } else {
            self.different
        }
    }

    #[inline(always)]
    fn gap(&self) -> S {
        self.gap
    }

    #[inline(always)]
    fn classify(&self, s1: &Symbol, s2: &Symbol) -> Op {
        if s1 == s2 {
            Op::Match
        } else {
            Op::Mismatch
        }
    }
}
