//! Fieldops IR - kinds, operators and promotion
//!
//! This crate holds the decision logic of the field operator generator:
//! - the closed registry of operand kinds ([`FieldKind`]) and their indexing
//! - the arithmetic [`Operator`] set
//! - type promotion ([`resolve`]) choosing the result kind and [`IterationMode`]
//! - [`OperationContext`], the immutable parameter set for one emitted function
//!
//! # Generation Order
//!
//! ```text
//! kinds() × kinds()  (minus scalar × scalar)
//!     │
//!     ▼
//! resolve(lhs, rhs) ──► Promotion { result, mode }
//!     │
//!     ▼
//! OperationContext × Operator::ALL
//! ```

mod context;
mod error;
mod kind;
mod operator;
mod promote;

pub use context::{in_place_operations, operations, OperationContext, Role};
pub use error::SpecError;
pub use kind::{kinds, Axis, BufferAccess, FieldKind};
pub use operator::Operator;
pub use promote::{lower_rank, resolve, IterationMode, Promotion};
