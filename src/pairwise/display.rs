use std::fmt::Display;

use eyre::{ensure, Result};
use itertools::Itertools;

use crate::Score;

use super::Matrix;

/// Format one history frame with the sequence symbols as row and column
/// headers, the way a stepwise viewer presents it:
///
/// ```text
///  	 	G	T
///  	0	-2	-4
/// G	-2	1	-1
/// ```
///
/// The frame must be the (n+1)×(m+1) alignment matrix for the given
/// sequences. Columns are tab-separated.
pub fn bordered<S: Score + Display>(frame: &Matrix<S>, seq1: &str, seq2: &str) -> Result<String> {
    ensure!(
        frame.rows() == seq1.len() + 1 && frame.cols() == seq2.len() + 1,
        "invalid input: frame is {}x{}, sequences are {}x{}",
        frame.rows(),
        frame.cols(),
        seq1.len(),
        seq2.len(),
    );

    let mut out = String::new();

    // Header row: two leading blanks (row-label column + border column).
    out.push_str(" \t ");
    for symbol in seq2.chars() {
        out.push('\t');
        out.push(symbol);
    }
    out.push('\n');

    let labels = std::iter::once(' ').chain(seq1.chars());
    for (label, row) in labels.zip(0..frame.rows()) {
        out.push(label);
        out.push('\t');
        out.push_str(&frame.row(row).iter().format("\t").to_string());
        out.push('\n');
    }

    Ok(out)
}
