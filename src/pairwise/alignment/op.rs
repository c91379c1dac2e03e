/// A single column of a pairwise alignment.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Op {
    /// Gap in the first sequence: a seq2 symbol aligned against nothing (v).
    GapFirst,
    /// Gap in the second sequence: a seq1 symbol aligned against nothing (^).
    GapSecond,
    /// Identical symbols aligned diagonally (=).
    Match,
    /// Different symbols aligned diagonally (X).
    Mismatch,
}

impl Op {
    pub fn is_diagonal(&self) -> bool {
        matches!(self, Op::Match | Op::Mismatch)
    }

    pub fn symbol(&self) -> char {
        match self {
            Op::GapFirst => 'v',
            Op::GapSecond => '^',
            Op::Match => '=',
            Op::Mismatch => 'X',
        }
    }

    /// Advance sequence cursors by `len` applications of the operation.
    pub fn apply(&self, seq1: &mut usize, seq2: &mut usize, len: usize) {
        match self {
            Op::GapFirst => *seq2 += len,
            Op::GapSecond => *seq1 += len,
            Op::Match | Op::Mismatch => {
                *seq1 += len;
                *seq2 += len;
            }
        }
    }
}

impl TryFrom<char> for Op {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'v' => Ok(Op::GapFirst),
            '^' => Ok(Op::GapSecond),
            '=' => Ok(Op::Match),
            'X' => Ok(Op::Mismatch),
            _ => Err(()),
        }
    }
}
