//! Mesh extents shared by the fields living on it.

use std::rc::Rc;

/// Local extents of a structured mesh.
///
/// Two meshes are the same mesh when their extents agree.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Mesh {
    local_nx: usize,
    local_ny: usize,
    local_nz: usize,
}

impl Mesh {
    pub fn new(local_nx: usize, local_ny: usize, local_nz: usize) -> Self {
        Self {
            local_nx,
            local_ny,
            local_nz,
        }
    }

    /// A mesh handle ready to be shared between fields.
    pub fn shared(local_nx: usize, local_ny: usize, local_nz: usize) -> Rc<Self> {
        Rc::new(Self::new(local_nx, local_ny, local_nz))
    }

    #[inline]
    pub fn local_nx(&self) -> usize {
        self.local_nx
    }

    #[inline]
    pub fn local_ny(&self) -> usize {
        self.local_ny
    }

    #[inline]
    pub fn local_nz(&self) -> usize {
        self.local_nz
    }

    /// Element count of a 2D field on this mesh.
    #[inline]
    pub fn size_2d(&self) -> usize {
        self.local_nx * self.local_ny
    }

    /// Element count of a 3D field on this mesh.
    #[inline]
    pub fn size_3d(&self) -> usize {
        self.local_nx * self.local_ny * self.local_nz
    }
}
