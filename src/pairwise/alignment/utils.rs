use eyre::{ensure, Result};

use crate::{Alignable, Score};

use super::alignment::Alignment;
use super::op::Op;

/// Gap marker used in rendered alignments.
pub const GAP: char = '-';

/// Render an alignment over byte sequences as two equal-length strings with
/// `-` marking gaps. Only the spans recorded in the alignment are rendered,
/// so local alignments come out as their matched fragments.
pub fn gapped<S, S1, S2>(seq1: &S1, seq2: &S2, aln: &Alignment<S>) -> Result<(String, String)>
where
    S: Score,
    S1: Alignable<Symbol = u8>,
    S2: Alignable<Symbol = u8>,
{
    let columns = aln.len();
    let mut out1 = String::with_capacity(columns);
    let mut out2 = String::with_capacity(columns);

    let (mut pos1, mut pos2) = (aln.seq1().start, aln.seq2().start);
    for step in aln.steps() {
        for _ in 0..*step.len() {
            match step.op() {
                Op::GapFirst => {
                    ensure!(pos2 < seq2.len(), "alignment path overruns sequence 2");
                    out1.push(GAP);
                    out2.push(char::from(*seq2.at(pos2)));
                    pos2 += 1;
                }
                Op::GapSecond => {
                    ensure!(pos1 < seq1.len(), "alignment path overruns sequence 1");
                    out1.push(char::from(*seq1.at(pos1)));
                    out2.push(GAP);
                    pos1 += 1;
                }
                Op::Match | Op::Mismatch => {
                    ensure!(
                        pos1 < seq1.len() && pos2 < seq2.len(),
                        "alignment path overruns the sequences"
                    );
                    out1.push(char::from(*seq1.at(pos1)));
                    out2.push(char::from(*seq2.at(pos2)));
                    pos1 += 1;
                    pos2 += 1;
                }
            }
        }
    }

    Ok((out1, out2))
}
