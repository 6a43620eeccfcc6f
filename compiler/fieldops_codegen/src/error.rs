//! Generation-time errors.

use fieldops_ir::SpecError;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum CodegenError {
    #[error(transparent)]
    Spec(#[from] SpecError),

    /// Two emitted items would share a name, so a wrapper could not find
    /// its kernel unambiguously.
    #[error("duplicate generated symbol `{symbol}`")]
    DuplicateSymbol { symbol: String },

    #[error("`{name}` is not a valid cargo feature name")]
    InvalidFeatureName { name: String },

    #[error("`{path}` is not a valid Rust path")]
    InvalidRuntimePath { path: String },
}
