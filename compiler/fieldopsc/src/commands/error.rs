//! Errors reported by the command handlers.

use std::path::PathBuf;

use fieldops_codegen::CodegenError;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Codegen(#[from] CodegenError),

    #[error("unknown field kind '{name}' (expected real, field2d or field3d)")]
    UnknownKind { name: String },

    #[error("unknown operator '{symbol}' (expected *, /, +, - or mul, div, plus, minus)")]
    UnknownOperator { symbol: String },

    #[error("cannot write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write output: {0}")]
    Io(#[from] std::io::Error),
}
