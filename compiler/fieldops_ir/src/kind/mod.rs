//! Field kind registry.
//!
//! Every value an arithmetic operator can act on belongs to one of a closed
//! set of kinds. A kind fixes the rank (the ordered spatial axes it indexes
//! over) and the formula mapping axis coordinates to a buffer offset.
//!
//! | kind      | axes      | element access            |
//! |-----------|-----------|---------------------------|
//! | `Real`    | none      | `name`                    |
//! | `Field2D` | `x, y`    | `name[y + x * ny]`        |
//! | `Field3D` | `x, y, z` | `name[z + nz * (y + ny * x)]` |
//!
//! A perpendicular (`x, z`) kind exists in the runtime but has no arithmetic
//! operators yet, so it is not part of the registry.

use std::fmt;

use crate::promote::IterationMode;

/// A spatial axis of a field.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Loop coordinate name for this axis.
    #[inline]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }

    /// Name of the extent parameter bounding this axis (`nx`, `ny`, `nz`).
    #[inline]
    pub const fn extent(self) -> &'static str {
        match self {
            Self::X => "nx",
            Self::Y => "ny",
            Self::Z => "nz",
        }
    }

    /// Mesh accessor returning the local extent along this axis.
    #[inline]
    pub const fn mesh_extent(self) -> &'static str {
        match self {
            Self::X => "local_nx",
            Self::Y => "local_ny",
            Self::Z => "local_nz",
        }
    }
}

/// How a buffer is handed to a kernel.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BufferAccess {
    /// Read-only operand view.
    Read,
    /// Exclusive view of a buffer the kernel writes.
    Write,
}

/// Kind of an arithmetic operand.
///
/// Equality is by kind only: two values of the same variant are the same
/// kind regardless of where they came from.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub enum FieldKind {
    /// Plain floating point scalar.
    Real,
    /// Field over the `x`/`y` plane.
    Field2D,
    /// Field over the full `x`/`y`/`z` domain.
    Field3D,
}

impl FieldKind {
    /// All kinds in registry order.
    pub const ALL: [FieldKind; 3] = [Self::Real, Self::Field2D, Self::Field3D];

    /// The kind with the highest rank.
    pub const MAXIMAL: FieldKind = Self::Field3D;

    /// Ordered axes this kind indexes over (empty for scalars).
    #[inline]
    pub const fn axes(self) -> &'static [Axis] {
        match self {
            Self::Real => &[],
            Self::Field2D => &[Axis::X, Axis::Y],
            Self::Field3D => &[Axis::X, Axis::Y, Axis::Z],
        }
    }

    #[inline]
    pub const fn rank(self) -> usize {
        self.axes().len()
    }

    #[inline]
    pub const fn is_scalar(self) -> bool {
        matches!(self, Self::Real)
    }

    /// Whether this is the maximal-rank kind, the only one carrying a
    /// cell location.
    #[inline]
    pub const fn is_maximal(self) -> bool {
        matches!(self, Self::Field3D)
    }

    /// Rust type name of values of this kind.
    #[inline]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Real => "Real",
            Self::Field2D => "Field2D",
            Self::Field3D => "Field3D",
        }
    }

    /// Short lowercase identifier used when building symbol names.
    #[inline]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Real => "real",
            Self::Field2D => "field2d",
            Self::Field3D => "field3d",
        }
    }

    /// Look up a kind by its tag or type name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag().eq_ignore_ascii_case(name))
    }

    /// Kernel parameter type for a buffer of this kind.
    pub const fn kernel_param(self, access: BufferAccess) -> &'static str {
        match (self, access) {
            (Self::Real, _) => "Real",
            (_, BufferAccess::Read) => "&[Real]",
            (_, BufferAccess::Write) => "&mut [Real]",
        }
    }

    /// Wrapper parameter type for an operand of this kind.
    pub const fn operand_param(self) -> &'static str {
        match self {
            Self::Real => "Real",
            Self::Field2D => "&Field2D",
            Self::Field3D => "&Field3D",
        }
    }

    /// Expression reading one element of the buffer bound to `name`.
    ///
    /// In elementwise iteration the offset is derived from the shared axis
    /// coordinates with this kind's own formula; in linear iteration every
    /// non-scalar is addressed by the flat index `i`.
    pub fn element_access(self, name: &str, mode: IterationMode) -> String {
        match (self, mode) {
            (Self::Real, _) => name.to_owned(),
            (_, IterationMode::Linear) => format!("{name}[i]"),
            (Self::Field2D, IterationMode::Elementwise) => format!("{name}[y + x * ny]"),
            (Self::Field3D, IterationMode::Elementwise) => {
                format!("{name}[z + nz * (y + ny * x)]")
            }
        }
    }

    /// Expression passing the whole buffer bound to `name` to a kernel.
    pub fn pointer_access(self, name: &str, access: BufferAccess) -> String {
        match (self, access) {
            (Self::Real, _) => name.to_owned(),
            (_, BufferAccess::Read) => format!("&{name}[..]"),
            (_, BufferAccess::Write) => format!("&mut {name}[..]"),
        }
    }
}

impl fmt::Debug for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldKind::{}", self.type_name())
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.type_name())
    }
}

/// Iterate the registry in order: scalar, 2-axis, 3-axis.
pub fn kinds() -> impl Iterator<Item = FieldKind> {
    FieldKind::ALL.into_iter()
}
