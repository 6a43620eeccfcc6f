//! Fields over the `x`/`y` plane, constant along `z`.

use std::ops::{Index, IndexMut, RangeFull};
use std::rc::Rc;

use crate::check::{check_buffer, CheckData};
use crate::error::FieldError;
use crate::mesh::Mesh;
use crate::storage::Storage;
use crate::Real;

/// A 2D field stored `x`-major (`y + x * ny`).
#[derive(Clone, Debug)]
pub struct Field2D {
    mesh: Rc<Mesh>,
    storage: Storage,
}

impl Field2D {
    /// An unallocated field on `mesh`.
    pub fn new(mesh: Rc<Mesh>) -> Self {
        Self {
            mesh,
            storage: Storage::default(),
        }
    }

    pub fn filled(mesh: Rc<Mesh>, value: Real) -> Self {
        let len = mesh.size_2d();
        Self {
            mesh,
            storage: Storage::from_vec(vec![value; len]),
        }
    }

    /// A field with element `(x, y)` set to `f(x, y)`.
    pub fn from_fn(mesh: Rc<Mesh>, mut f: impl FnMut(usize, usize) -> Real) -> Self {
        let mut values = Vec::with_capacity(mesh.size_2d());
        for x in 0..mesh.local_nx() {
            for y in 0..mesh.local_ny() {
                values.push(f(x, y));
            }
        }
        Self {
            mesh,
            storage: Storage::from_vec(values),
        }
    }

    #[inline]
    pub fn mesh(&self) -> &Rc<Mesh> {
        &self.mesh
    }

    pub fn allocate(&mut self) {
        self.storage.allocate(self.mesh.size_2d());
    }

    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.storage.is_allocated()
    }

    #[inline]
    pub fn is_unique(&self) -> bool {
        self.storage.is_unique()
    }

    pub fn shares_storage_with(&self, other: &Self) -> bool {
        self.storage.shares_with(&other.storage)
    }

    pub fn values(&self) -> &[Real] {
        self.storage.as_slice().unwrap_or_default()
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Real> {
        let (nx, ny) = (self.mesh.local_nx(), self.mesh.local_ny());
        if x >= nx || y >= ny {
            return None;
        }
        self.values().get(y + x * ny).copied()
    }
}

impl Index<RangeFull> for Field2D {
    type Output = [Real];

    fn index(&self, _: RangeFull) -> &[Real] {
        self.values()
    }
}

impl IndexMut<RangeFull> for Field2D {
    fn index_mut(&mut self, _: RangeFull) -> &mut [Real] {
        self.storage.as_mut_slice()
    }
}

impl CheckData for Field2D {
    fn check_data(&self) -> Result<(), FieldError> {
        check_buffer("Field2D", self.storage.as_slice())
    }
}
