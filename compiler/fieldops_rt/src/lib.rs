//! Fieldops Runtime
//!
//! The mesh field types the generated arithmetic operators work on, plus
//! the operators themselves, generated at build time by `fieldops_codegen`.
//!
//! ```text
//! let mesh = Mesh::shared(nx, ny, nz);
//! let a = Field3D::filled(mesh.clone(), 3.0);
//! let b = Field2D::filled(mesh, 4.0);
//! let c = &a * &b;            // Field3D, elementwise kernel
//! let d = plus_field3d_field3d_real(&c, 1.0)?;   // fallible form
//! ```
//!
//! Every operator exists in two forms: a wrapper function returning
//! `Result<_, FieldError>` (`{op}_{result}_{lhs}_{rhs}`,
//! `{op}_assign_{lhs}_{rhs}`) and the `std::ops` trait implementation,
//! which panics with the error.
//!
//! # Check Level
//!
//! The `checks` feature (on by default) compiles location-agreement checks
//! between 3D operands into the operators. Mesh agreement is a debug
//! assertion.

/// Scalar element type of every field.
pub type Real = f64;

mod check;
mod error;
mod field2d;
mod field3d;
mod location;
mod mesh;
mod storage;

#[allow(
    clippy::needless_range_loop,
    reason = "generated kernels index several buffers with one counter"
)]
mod ops {
    include!(concat!(env!("OUT_DIR"), "/field_ops.rs"));
}

pub use check::{check_data, CheckData};
pub use error::FieldError;
pub use field2d::Field2D;
pub use field3d::Field3D;
pub use location::CellLocation;
pub use mesh::Mesh;
pub use ops::*;
