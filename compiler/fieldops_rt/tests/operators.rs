//! Behaviour of the generated field operators.
//!
//! These run the code emitted by `fieldops_codegen` as compiled into
//! `fieldops_rt` by its build script.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::float_cmp,
    clippy::cast_precision_loss,
    reason = "exact small values in test data"
)]

use std::rc::Rc;

use fieldops_codegen::emit_kernel;
use fieldops_ir::{resolve, FieldKind, IterationMode, OperationContext, Operator};
use fieldops_rt::{
    div_field3d_field3d_real, mul_assign_field3d_real, mul_field3d_field3d_real,
    plus_field3d_field3d_field3d, CellLocation, Field2D, Field3D, FieldError, Mesh, Real,
};
use pretty_assertions::assert_eq;

fn mesh() -> Rc<Mesh> {
    Mesh::shared(2, 2, 2)
}

fn all_equal(values: &[Real], expected: Real) -> bool {
    values.iter().all(|&v| v == expected)
}

#[test]
fn add_two_3d_fields() {
    let mesh = mesh();
    let a = Field3D::filled(mesh.clone(), 3.0);
    let b = Field3D::filled(mesh, 4.0);

    let c = plus_field3d_field3d_field3d(&a, &b).unwrap();
    assert_eq!(c.values().len(), 8);
    assert!(all_equal(c.values(), 7.0));

    let d = &a + &b;
    assert_eq!(d.values(), c.values());
}

#[test]
fn scale_3d_field_by_scalar_linearly() {
    let promoted = resolve(FieldKind::Field3D, FieldKind::Real);
    assert_eq!(promoted.mode, IterationMode::Linear);
    let ctx = OperationContext::new(FieldKind::Field3D, FieldKind::Real, Operator::Mul).unwrap();
    assert!(emit_kernel(&ctx).contains("len: usize"));

    let a = Field3D::filled(mesh(), 2.0);
    let product = mul_field3d_field3d_real(&a, 5.0).unwrap();
    assert_eq!(product.values().len(), 8);
    assert!(all_equal(product.values(), 10.0));
    assert!(all_equal((&a * 5.0).values(), 10.0));
}

#[test]
fn scalar_on_the_left() {
    let a = Field3D::filled(mesh(), 4.0);
    let s: Real = 1.0;
    assert!(all_equal((s - &a).values(), -3.0));
    assert!(all_equal((s / &a).values(), 0.25));

    let p = Field2D::filled(mesh(), 2.0);
    let q = s + &p;
    assert_eq!(q.values().len(), 4);
    assert!(all_equal(q.values(), 3.0));
}

#[test]
fn operations_between_2d_fields_stay_2d() {
    let mesh = mesh();
    let a = Field2D::from_fn(mesh.clone(), |x, y| (x + y) as Real);
    let b = Field2D::filled(mesh, 2.0);
    let c = &a * &b;
    assert_eq!(c.values(), &[0.0, 2.0, 2.0, 4.0]);
}

#[test]
fn elementwise_broadcasts_2d_over_z() {
    let mesh = Mesh::shared(2, 3, 4);
    let f3 = Field3D::from_fn(mesh.clone(), |x, y, z| (100 * x + 10 * y + z) as Real);
    let f2 = Field2D::from_fn(mesh.clone(), |x, y| (1000 * (x + 1) + 10_000 * y) as Real);

    let sum = &f3 + &f2;
    let diff = &f2 - &f3;
    for x in 0..2 {
        for y in 0..3 {
            for z in 0..4 {
                let a = f3.get(x, y, z).unwrap();
                let b = f2.get(x, y).unwrap();
                assert_eq!(sum.get(x, y, z), Some(a + b), "({x}, {y}, {z})");
                assert_eq!(diff.get(x, y, z), Some(b - a), "({x}, {y}, {z})");
            }
        }
    }
}

#[test]
fn in_place_on_unique_buffer_mutates_it() {
    let mut a = Field3D::filled(mesh(), 3.0);
    assert!(a.is_unique());
    let before = a.values().as_ptr();

    let updated: *const Field3D = mul_assign_field3d_real(&mut a, 2.0).unwrap();
    assert!(std::ptr::eq(updated, &a));
    assert_eq!(a.values().as_ptr(), before);
    assert!(all_equal(a.values(), 6.0));

    a *= 2.0;
    assert_eq!(a.values().as_ptr(), before);
    assert!(all_equal(a.values(), 12.0));
}

#[test]
fn in_place_on_shared_buffer_rebinds() {
    let mesh = mesh();
    let mut a = Field3D::filled(mesh.clone(), 1.0);
    let alias = a.clone();
    let b = Field3D::filled(mesh, 2.0);
    assert!(!a.is_unique());

    a += &b;

    assert!(all_equal(alias.values(), 1.0));
    assert!(all_equal(a.values(), 3.0));
    assert!(!a.shares_storage_with(&alias));
    assert!(a.is_unique());
}

#[test]
fn in_place_with_2d_operand() {
    let mesh = Mesh::shared(2, 2, 3);
    let mut a = Field3D::filled(mesh.clone(), 1.0);
    let b = Field2D::from_fn(mesh, |x, y| (2 * x + y) as Real);
    a -= &b;
    for z in 0..3 {
        assert_eq!(a.get(1, 1, z), Some(-2.0));
        assert_eq!(a.get(0, 0, z), Some(1.0));
    }

    let mut p = Field2D::filled(Mesh::shared(2, 2, 3), 6.0);
    p /= 3.0;
    assert!(all_equal(p.values(), 2.0));
}

#[test]
fn result_inherits_left_location_with_scalar() {
    let a = Field3D::filled(mesh(), 1.0).with_location(CellLocation::XLow);
    assert_eq!((&a * 2.0).location(), CellLocation::XLow);
    let s: Real = 2.0;
    assert_eq!((s * &a).location(), CellLocation::XLow);
}

#[test]
fn result_inherits_shared_location() {
    let mesh = mesh();
    let a = Field3D::filled(mesh.clone(), 1.0).with_location(CellLocation::YLow);
    let b = Field3D::filled(mesh, 1.0).with_location(CellLocation::YLow);
    let c = plus_field3d_field3d_field3d(&a, &b).unwrap();
    assert_eq!(c.location(), CellLocation::YLow);
}

#[test]
fn result_inherits_3d_location_over_2d() {
    let mesh = mesh();
    let a = Field3D::filled(mesh.clone(), 1.0).with_location(CellLocation::ZLow);
    let b = Field2D::filled(mesh, 1.0);
    assert_eq!((&a + &b).location(), CellLocation::ZLow);
    assert_eq!((&b + &a).location(), CellLocation::ZLow);
}

#[cfg(feature = "checks")]
#[test]
fn differing_locations_are_rejected() {
    let mesh = mesh();
    let a = Field3D::filled(mesh.clone(), 1.0).with_location(CellLocation::XLow);
    let b = Field3D::filled(mesh, 1.0);
    let err = plus_field3d_field3d_field3d(&a, &b).unwrap_err();
    assert_eq!(
        err,
        FieldError::LocationMismatch {
            operation: "plus",
            lhs: CellLocation::XLow,
            rhs: CellLocation::Centre,
        }
    );
}

#[cfg(feature = "checks")]
#[test]
fn differing_locations_rejected_in_place() {
    use fieldops_rt::plus_assign_field3d_field3d;

    let mesh = mesh();
    let mut a = Field3D::filled(mesh.clone(), 1.0).with_location(CellLocation::YLow);
    let b = Field3D::filled(mesh, 1.0).with_location(CellLocation::ZLow);
    let err = plus_assign_field3d_field3d(&mut a, &b).unwrap_err();
    assert!(matches!(err, FieldError::LocationMismatch { operation: "plus", .. }));
}

#[cfg(feature = "checks")]
#[test]
fn unique_in_place_is_updated_before_location_check() {
    use fieldops_rt::plus_assign_field3d_field3d;

    let mesh = mesh();
    let mut a = Field3D::filled(mesh.clone(), 1.0).with_location(CellLocation::XLow);
    let b = Field3D::filled(mesh, 2.0);
    assert!(a.is_unique());

    let err = plus_assign_field3d_field3d(&mut a, &b).unwrap_err();
    assert!(matches!(err, FieldError::LocationMismatch { .. }));
    assert!(all_equal(a.values(), 3.0));
    assert_eq!(a.location(), CellLocation::XLow);
}

#[cfg(feature = "checks")]
#[test]
fn shared_in_place_leaves_lhs_on_location_error() {
    use fieldops_rt::plus_assign_field3d_field3d;

    let mesh = mesh();
    let mut a = Field3D::filled(mesh.clone(), 1.0).with_location(CellLocation::XLow);
    let alias = a.clone();
    let b = Field3D::filled(mesh, 2.0);

    assert!(plus_assign_field3d_field3d(&mut a, &b).is_err());
    assert!(all_equal(a.values(), 1.0));
    assert!(a.shares_storage_with(&alias));
}

#[cfg(not(feature = "checks"))]
#[test]
fn location_mismatch_passes_without_checks() {
    let mesh = mesh();
    let a = Field3D::filled(mesh.clone(), 1.0).with_location(CellLocation::XLow);
    let b = Field3D::filled(mesh, 2.0);

    let c = plus_field3d_field3d_field3d(&a, &b).unwrap();
    assert_eq!(c.location(), CellLocation::Centre);
    assert!(all_equal(c.values(), 3.0));

    let d = &a * &b;
    assert!(all_equal(d.values(), 2.0));
}

#[cfg(feature = "checks")]
#[test]
#[should_panic(expected = "different locations")]
fn operator_panics_on_location_mismatch() {
    let mesh = mesh();
    let a = Field3D::filled(mesh.clone(), 1.0).with_location(CellLocation::XLow);
    let b = Field3D::filled(mesh, 1.0);
    let _ = &a * &b;
}

#[test]
fn unallocated_operand_is_invalid() {
    let mesh = mesh();
    let a = Field3D::new(mesh.clone());
    let b = Field3D::filled(mesh, 1.0);
    assert_eq!(
        plus_field3d_field3d_field3d(&a, &b).unwrap_err(),
        FieldError::Unallocated { kind: "Field3D" }
    );
}

#[test]
fn non_finite_result_is_invalid() {
    let a = Field3D::filled(mesh(), 1.0);
    let err = div_field3d_field3d_real(&a, 0.0).unwrap_err();
    assert!(matches!(err, FieldError::NonFinite { kind: "Field3D", index: 0, .. }));
}

#[test]
fn non_finite_scalar_is_invalid() {
    let a = Field3D::filled(mesh(), 1.0);
    let err = mul_field3d_field3d_real(&a, Real::NAN).unwrap_err();
    assert!(matches!(err, FieldError::NonFiniteScalar { .. }));
}

#[test]
fn result_never_aliases_inputs() {
    let mesh = mesh();
    let a = Field3D::filled(mesh.clone(), 1.0);
    let b = Field3D::filled(mesh, 2.0);
    let c = &a + &b;
    assert!(!c.shares_storage_with(&a));
    assert!(!c.shares_storage_with(&b));
    assert!(c.is_unique());
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "operands are on different meshes")]
fn mesh_mismatch_is_a_debug_assertion() {
    let a = Field3D::filled(Mesh::shared(2, 2, 2), 1.0);
    let b = Field3D::filled(Mesh::shared(2, 2, 3), 1.0);
    let _ = &a + &b;
}
