//! Errors raised while building operation specs.

/// An operation that cannot be generated.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SpecError {
    /// Both operands are scalars; native arithmetic already covers them.
    #[error("scalar {op} scalar is native arithmetic and is never generated")]
    ScalarOperands { op: &'static str },
}
