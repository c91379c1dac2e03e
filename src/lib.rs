//! Pairwise sequence alignment with stepwise scoring-matrix tracing.
//!
//! Two classical dynamic-programming engines, global ([`pairwise::Global`],
//! Needleman-Wunsch) and local ([`pairwise::Local`], Smith-Waterman), built
//! around a shared substitution scorer. Every write into the alignment matrix
//! is reported through a [`pairwise::trace::Tracer`], so callers can replay
//! the construction of the matrix frame by frame (or pay nothing with
//! [`pairwise::trace::Noop`]).

use std::fmt::Debug;

pub use alignable::Alignable;

mod alignable;
pub mod pairwise;

/// Alignment scores are signed primitive integers.
pub trait Score: ::num::PrimInt + ::num::Signed + Debug + Default {}

impl<T: ::num::PrimInt + ::num::Signed + Debug + Default> Score for T {}
