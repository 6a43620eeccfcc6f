//! Fields over the full `x`/`y`/`z` domain.

use std::ops::{Index, IndexMut, RangeFull};
use std::rc::Rc;

use crate::check::{check_buffer, CheckData};
use crate::error::FieldError;
use crate::location::CellLocation;
use crate::mesh::Mesh;
use crate::storage::Storage;
use crate::Real;

/// A 3D field: one value per mesh point, stored `x`-major with `z`
/// contiguous (`z + nz * (y + ny * x)`).
///
/// Cloning is cheap and shares the buffer until one of the clones is
/// written to.
#[derive(Clone, Debug)]
pub struct Field3D {
    mesh: Rc<Mesh>,
    storage: Storage,
    location: CellLocation,
}

impl Field3D {
    /// An unallocated field on `mesh`.
    pub fn new(mesh: Rc<Mesh>) -> Self {
        Self {
            mesh,
            storage: Storage::default(),
            location: CellLocation::default(),
        }
    }

    /// A field with every element set to `value`.
    pub fn filled(mesh: Rc<Mesh>, value: Real) -> Self {
        let len = mesh.size_3d();
        Self {
            mesh,
            storage: Storage::from_vec(vec![value; len]),
            location: CellLocation::default(),
        }
    }

    /// A field with element `(x, y, z)` set to `f(x, y, z)`.
    pub fn from_fn(mesh: Rc<Mesh>, mut f: impl FnMut(usize, usize, usize) -> Real) -> Self {
        let mut values = Vec::with_capacity(mesh.size_3d());
        for x in 0..mesh.local_nx() {
            for y in 0..mesh.local_ny() {
                for z in 0..mesh.local_nz() {
                    values.push(f(x, y, z));
                }
            }
        }
        Self {
            mesh,
            storage: Storage::from_vec(values),
            location: CellLocation::default(),
        }
    }

    #[must_use]
    pub fn with_location(mut self, location: CellLocation) -> Self {
        self.location = location;
        self
    }

    #[inline]
    pub fn mesh(&self) -> &Rc<Mesh> {
        &self.mesh
    }

    #[inline]
    pub fn location(&self) -> CellLocation {
        self.location
    }

    #[inline]
    pub fn set_location(&mut self, location: CellLocation) {
        self.location = location;
    }

    /// Give this field a uniquely owned buffer sized for its mesh.
    pub fn allocate(&mut self) {
        self.storage.allocate(self.mesh.size_3d());
    }

    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.storage.is_allocated()
    }

    /// Whether no other field shares this field's buffer.
    #[inline]
    pub fn is_unique(&self) -> bool {
        self.storage.is_unique()
    }

    /// Whether `self` and `other` currently share one buffer.
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        self.storage.shares_with(&other.storage)
    }

    /// All values in storage order; empty if unallocated.
    pub fn values(&self) -> &[Real] {
        self.storage.as_slice().unwrap_or_default()
    }

    /// Value at `(x, y, z)`, if allocated and in range.
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<Real> {
        let (nx, ny, nz) = (
            self.mesh.local_nx(),
            self.mesh.local_ny(),
            self.mesh.local_nz(),
        );
        if x >= nx || y >= ny || z >= nz {
            return None;
        }
        self.values().get(z + nz * (y + ny * x)).copied()
    }
}

impl Index<RangeFull> for Field3D {
    type Output = [Real];

    fn index(&self, _: RangeFull) -> &[Real] {
        self.values()
    }
}

impl IndexMut<RangeFull> for Field3D {
    fn index_mut(&mut self, _: RangeFull) -> &mut [Real] {
        self.storage.as_mut_slice()
    }
}

impl CheckData for Field3D {
    fn check_data(&self) -> Result<(), FieldError> {
        check_buffer("Field3D", self.storage.as_slice())
    }
}
