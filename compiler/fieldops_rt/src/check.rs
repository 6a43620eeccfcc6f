//! Validity checks run before and after every generated operation.

use crate::error::FieldError;
use crate::Real;

/// A value that can verify it is fully written and finite.
pub trait CheckData {
    fn check_data(&self) -> Result<(), FieldError>;
}

/// Check `value`, failing on unallocated or non-finite data.
#[inline]
pub fn check_data<T: CheckData + ?Sized>(value: &T) -> Result<(), FieldError> {
    value.check_data()
}

impl CheckData for Real {
    fn check_data(&self) -> Result<(), FieldError> {
        if self.is_finite() {
            Ok(())
        } else {
            Err(FieldError::NonFiniteScalar { value: *self })
        }
    }
}

/// Check a field buffer of the named kind.
pub(crate) fn check_buffer(kind: &'static str, data: Option<&[Real]>) -> Result<(), FieldError> {
    let data = data.ok_or(FieldError::Unallocated { kind })?;
    match data.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(FieldError::NonFinite {
            kind,
            index,
            value: data[index],
        }),
        None => Ok(()),
    }
}
