//! Operation contexts.
//!
//! An [`OperationContext`] is the complete, immutable parameter set for
//! emitting one generated function. Emitters read everything they need from
//! it, so emitting one operation never depends on what was emitted before.

use crate::error::SpecError;
use crate::kind::{kinds, FieldKind};
use crate::operator::Operator;
use crate::promote::{resolve, IterationMode};

/// Name a value is bound to inside an emitted function.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Role {
    Result,
    Lhs,
    Rhs,
}

impl Role {
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Result => "result",
            Self::Lhs => "lhs",
            Self::Rhs => "rhs",
        }
    }
}

/// One (result, lhs, rhs, operator) combination plus its iteration mode.
///
/// The result kind and mode are always computed by [`resolve`]; they cannot
/// be supplied independently.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct OperationContext {
    result: FieldKind,
    lhs: FieldKind,
    rhs: FieldKind,
    op: Operator,
    mode: IterationMode,
}

impl OperationContext {
    /// Build the context for `lhs <op> rhs`.
    ///
    /// Scalar-scalar arithmetic is native and never generated.
    pub fn new(lhs: FieldKind, rhs: FieldKind, op: Operator) -> Result<Self, SpecError> {
        if lhs.is_scalar() && rhs.is_scalar() {
            return Err(SpecError::ScalarOperands { op: op.symbol() });
        }
        let promoted = resolve(lhs, rhs);
        Ok(Self {
            result: promoted.result,
            lhs,
            rhs,
            op,
            mode: promoted.mode,
        })
    }

    #[inline]
    pub fn result(&self) -> FieldKind {
        self.result
    }

    #[inline]
    pub fn lhs(&self) -> FieldKind {
        self.lhs
    }

    #[inline]
    pub fn rhs(&self) -> FieldKind {
        self.rhs
    }

    #[inline]
    pub fn op(&self) -> Operator {
        self.op
    }

    #[inline]
    pub fn mode(&self) -> IterationMode {
        self.mode
    }

    /// Kind bound to `role`.
    #[inline]
    pub fn kind(&self, role: Role) -> FieldKind {
        match role {
            Role::Result => self.result,
            Role::Lhs => self.lhs,
            Role::Rhs => self.rhs,
        }
    }

    /// Whether an in-place form exists: the result must not widen `lhs`.
    #[inline]
    pub fn supports_in_place(&self) -> bool {
        self.result == self.lhs
    }

    /// Operand providing the mesh for the result: `lhs` unless it is a scalar.
    #[inline]
    pub fn mesh_source(&self) -> Role {
        if self.lhs.is_scalar() {
            Role::Rhs
        } else {
            Role::Lhs
        }
    }

    /// Whether both operands live on a mesh, so their meshes must agree.
    #[inline]
    pub fn needs_mesh_check(&self) -> bool {
        !self.lhs.is_scalar() && !self.rhs.is_scalar()
    }

    /// Whether both operands carry a location that must agree.
    #[inline]
    pub fn needs_location_check(&self) -> bool {
        self.lhs.is_maximal() && self.rhs.is_maximal()
    }

    /// Operand whose location the result inherits, if the result carries one.
    ///
    /// Prefers `rhs` when it is maximal-rank, then a non-scalar `lhs`, and
    /// falls back to `rhs`.
    pub fn location_source(&self) -> Option<Role> {
        if !self.result.is_maximal() {
            return None;
        }
        let source = if self.rhs.is_maximal() {
            Role::Rhs
        } else if !self.lhs.is_scalar() {
            Role::Lhs
        } else {
            Role::Rhs
        };
        Some(source)
    }
}

/// Every operation the generator emits, in generation order.
///
/// Pairs iterate the registry for `lhs` then `rhs`, skipping scalar-scalar;
/// each pair yields all operators.
pub fn operations() -> impl Iterator<Item = OperationContext> {
    kinds().flat_map(|lhs| {
        kinds().flat_map(move |rhs| {
            Operator::ALL
                .into_iter()
                .filter_map(move |op| OperationContext::new(lhs, rhs, op).ok())
        })
    })
}

/// The subset of [`operations`] that also get an in-place form.
pub fn in_place_operations() -> impl Iterator<Item = OperationContext> {
    operations().filter(OperationContext::supports_in_place)
}
