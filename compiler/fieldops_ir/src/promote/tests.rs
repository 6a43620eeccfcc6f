#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::kind::kinds;

fn kind_strategy() -> impl Strategy<Value = FieldKind> {
    prop::sample::select(FieldKind::ALL.to_vec())
}

fn linear(result: FieldKind) -> Promotion {
    Promotion {
        result,
        mode: IterationMode::Linear,
    }
}

#[test]
fn same_kind_is_linear() {
    for kind in kinds() {
        assert_eq!(resolve(kind, kind), linear(kind));
    }
}

#[test]
fn scalar_broadcasts_linearly() {
    for kind in kinds().filter(|k| !k.is_scalar()) {
        assert_eq!(resolve(kind, FieldKind::Real), linear(kind));
        assert_eq!(resolve(FieldKind::Real, kind), linear(kind));
    }
}

#[test]
fn distinct_fields_promote_to_maximal_elementwise() {
    let expected = Promotion {
        result: FieldKind::Field3D,
        mode: IterationMode::Elementwise,
    };
    assert_eq!(resolve(FieldKind::Field3D, FieldKind::Field2D), expected);
    assert_eq!(resolve(FieldKind::Field2D, FieldKind::Field3D), expected);
}

#[test]
fn lower_rank_prefers_rhs_on_ties() {
    assert_eq!(
        lower_rank(FieldKind::Field2D, FieldKind::Field3D),
        FieldKind::Field2D
    );
    assert_eq!(
        lower_rank(FieldKind::Field3D, FieldKind::Real),
        FieldKind::Real
    );
    assert_eq!(
        lower_rank(FieldKind::Field3D, FieldKind::Field3D),
        FieldKind::Field3D
    );
}

proptest! {
    #[test]
    fn promotion_is_symmetric(a in kind_strategy(), b in kind_strategy()) {
        prop_assert_eq!(resolve(a, b), resolve(b, a));
    }

    #[test]
    fn result_never_loses_rank(a in kind_strategy(), b in kind_strategy()) {
        let promoted = resolve(a, b);
        prop_assert!(promoted.result.rank() >= a.rank());
        prop_assert!(promoted.result.rank() >= b.rank());
    }

    #[test]
    fn elementwise_only_for_distinct_fields(a in kind_strategy(), b in kind_strategy()) {
        let elementwise = resolve(a, b).mode == IterationMode::Elementwise;
        prop_assert_eq!(elementwise, a != b && !a.is_scalar() && !b.is_scalar());
    }
}
