use std::borrow::Borrow;

use derive_getters::{Dissolve, Getters};

use super::op::Op;

/// A run of identical alignment operations. Length is guaranteed non-zero.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Getters, Dissolve)]
pub struct Step {
    op: Op,
    len: usize,
}

impl Step {
    pub fn new(op: Op, len: usize) -> eyre::Result<Self> {
        eyre::ensure!(len > 0, "step length must be greater than zero");
        Ok(Self { op, len })
    }

    /// Run-length encode a stream of operations.
    pub fn from_ops(ops: impl IntoIterator<Item = Op>) -> Vec<Step> {
        let mut steps: Vec<Step> = Vec::new();
        for op in ops {
            match steps.last_mut() {
                Some(last) if last.op == op => last.len += 1,
                _ => steps.push(Step { op, len: 1 }),
            }
        }
        steps
    }

    /// Compact text form, e.g. `3=1X2v` for three matches, a mismatch and
    /// two gaps in the first sequence.
    pub fn rle_string(steps: impl IntoIterator<Item: Borrow<Step>>) -> String {
        let mut result = String::new();
        for step in steps {
            let step = step.borrow();
            result.push_str(&step.len.to_string());
            result.push(step.op.symbol());
        }
        result
    }
}
