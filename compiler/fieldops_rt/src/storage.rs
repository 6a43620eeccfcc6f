//! Copy-on-write value storage shared by field handles.
//!
//! Cloning a field shares its buffer. Writing through [`Storage::as_mut_slice`]
//! copies the buffer first if any other handle still refers to it, so only
//! a uniquely owned buffer is ever mutated in place.

use std::rc::Rc;

use crate::Real;

#[derive(Clone, Debug, Default)]
pub(crate) struct Storage {
    data: Option<Rc<Vec<Real>>>,
}

impl Storage {
    pub(crate) fn from_vec(values: Vec<Real>) -> Self {
        Self {
            data: Some(Rc::new(values)),
        }
    }

    /// Make sure a uniquely owned buffer of `len` elements exists.
    ///
    /// A fresh buffer is filled with NaN so that elements never written
    /// fail the validity check.
    pub(crate) fn allocate(&mut self, len: usize) {
        let reusable = matches!(&self.data, Some(data) if data.len() == len && Rc::strong_count(data) == 1);
        if !reusable {
            self.data = Some(Rc::new(vec![Real::NAN; len]));
        }
    }

    #[inline]
    pub(crate) fn is_allocated(&self) -> bool {
        self.data.is_some()
    }

    /// Whether no other handle shares this buffer. An unallocated storage
    /// shares nothing.
    #[inline]
    pub(crate) fn is_unique(&self) -> bool {
        self.data.as_ref().is_none_or(|data| Rc::strong_count(data) == 1)
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> Option<&[Real]> {
        self.data.as_deref().map(Vec::as_slice)
    }

    /// Writable view of the buffer, copied first if shared.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Real] {
        match &mut self.data {
            Some(data) => Rc::make_mut(data).as_mut_slice(),
            None => Default::default(),
        }
    }

    pub(crate) fn shares_with(&self, other: &Self) -> bool {
        match (&self.data, &other.data) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}
