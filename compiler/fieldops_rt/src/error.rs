//! Errors raised by field operations.

use crate::location::CellLocation;
use crate::Real;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum FieldError {
    /// Two 3D operands sit at different cell locations.
    #[error("Trying to {operation} fields of different locations. lhs is at {lhs}, rhs is at {rhs}!")]
    LocationMismatch {
        operation: &'static str,
        lhs: CellLocation,
        rhs: CellLocation,
    },

    #[error("{kind} data is not allocated")]
    Unallocated { kind: &'static str },

    #[error("{kind} has non-finite value {value} at index {index}")]
    NonFinite {
        kind: &'static str,
        index: usize,
        value: Real,
    },

    #[error("scalar operand is not finite: {value}")]
    NonFiniteScalar { value: Real },
}
