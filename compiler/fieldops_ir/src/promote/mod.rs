//! Type promotion for binary field arithmetic.
//!
//! Given the kinds of both operands, [`resolve`] decides the kind of the
//! result and how the kernel has to walk the buffers:
//!
//! - **Linear**: the operands are congruent (same kind) or one of them is a
//!   scalar broadcast over the other, so a single flat loop over the total
//!   element count touches every element of every buffer consistently.
//! - **Elementwise**: the operands are two different non-scalar kinds. Their
//!   flat layouts disagree, so the kernel loops over each axis of the result
//!   and every operand re-derives its own offset from the shared coordinates.

use std::fmt;

use crate::kind::FieldKind;

/// How a kernel iterates over its buffers.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum IterationMode {
    /// One nested loop per axis of the result.
    Elementwise,
    /// One flat loop over the total element count.
    Linear,
}

impl IterationMode {
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Elementwise => "elementwise",
            Self::Linear => "linear",
        }
    }
}

impl fmt::Display for IterationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Outcome of promoting two operand kinds.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Promotion {
    pub result: FieldKind,
    pub mode: IterationMode,
}

/// The operand with the smaller rank (`rhs` on ties).
#[inline]
pub fn lower_rank(lhs: FieldKind, rhs: FieldKind) -> FieldKind {
    if lhs.rank() < rhs.rank() {
        lhs
    } else {
        rhs
    }
}

/// Promote a pair of operand kinds.
///
/// Two distinct non-scalar kinds promote to [`FieldKind::MAXIMAL`]. With only
/// one such pair in the registry this is a conservative fallback rather than
/// a general join.
pub fn resolve(lhs: FieldKind, rhs: FieldKind) -> Promotion {
    let result = if lhs == rhs {
        lhs
    } else if lhs.is_scalar() {
        rhs
    } else if rhs.is_scalar() {
        lhs
    } else {
        FieldKind::MAXIMAL
    };

    let mode = if lhs == rhs || lower_rank(lhs, rhs).is_scalar() {
        IterationMode::Linear
    } else {
        IterationMode::Elementwise
    };

    Promotion { result, mode }
}

#[cfg(test)]
mod tests;
