//! Rust Code Generation for Field Arithmetic
//!
//! Emits the arithmetic operators of the field runtime: for every
//! combination of operand kinds and operator, a raw numeric kernel plus an
//! API-level wrapper, and an in-place variant where the result does not
//! widen the left operand.
//!
//! # Architecture
//!
//! ```text
//! fieldops_ir::operations()
//!        ↓
//!   OperationContext   (result, lhs, rhs, operator, iteration mode)
//!        ↓
//!   emit_kernel / emit_wrapper / emit_in_place_*   (pure, text per item)
//!        ↓
//!   generate_module    (collect, check symbols, join)
//! ```
//!
//! The generated module expects the runtime items `check_data`, `Field2D`,
//! `Field3D`, `FieldError` and `Real` at [`CodegenConfig::runtime_path`].
//!
//! # Tracing
//!
//! - `RUST_LOG=fieldops_codegen=debug`: one event per emitted operation.
//! - `RUST_LOG=fieldops_codegen=trace`: one event per emitted item.

mod config;
mod context;
mod error;
mod in_place;
mod kernel;
mod module;
mod naming;
mod wrapper;

pub use config::{CodegenConfig, DEFAULT_CHECK_FEATURE};
pub use context::CodegenContext;
pub use error::CodegenError;
pub use in_place::emit_in_place_wrapper;
pub use kernel::{emit_in_place_kernel, emit_kernel};
pub use module::{
    emit_in_place, emit_operation, emit_single, generate_module, preamble, EmittedFunction,
    AUTOGEN_BANNER,
};
pub use naming::{in_place_kernel_name, in_place_wrapper_name, kernel_name, wrapper_name};
pub use wrapper::emit_wrapper;
