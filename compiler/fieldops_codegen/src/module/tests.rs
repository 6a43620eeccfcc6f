#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use fieldops_ir::SpecError;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

#[test]
fn module_has_every_function_once() {
    let module = generate_module(&CodegenConfig::default()).unwrap();
    // 32 operations with kernel + wrapper, 20 in-place with kernel + wrapper.
    assert_eq!(module.matches("\nfn autogen_").count(), 52);
    assert_eq!(module.matches("\npub fn ").count(), 52);
    assert_eq!(module.matches("\nimpl").count(), 52);
}

#[test]
fn module_starts_with_banner_and_imports() {
    let module = generate_module(&CodegenConfig::default()).unwrap();
    assert!(module.starts_with(&format!(
        "{AUTOGEN_BANNER}\n\nuse crate::{{check_data, Field2D, Field3D, FieldError, Real}};\n"
    )));
}

#[test]
fn preamble_honours_config() {
    let config = CodegenConfig::default()
        .with_banner(false)
        .with_runtime_path("fieldops_rt");
    assert_eq!(
        preamble(&config),
        "use fieldops_rt::{check_data, Field2D, Field3D, FieldError, Real};\n"
    );
}

#[test]
fn invalid_config_is_rejected() {
    let config = CodegenConfig::default().with_runtime_path("not a path");
    assert_eq!(
        generate_module(&config),
        Err(CodegenError::InvalidRuntimePath {
            path: "not a path".to_owned()
        })
    );
}

#[test]
fn single_scalar_pair_is_an_error() {
    let err = emit_single(
        FieldKind::Real,
        FieldKind::Real,
        Operator::Plus,
        &CodegenConfig::default(),
    )
    .unwrap_err();
    assert_eq!(err, CodegenError::Spec(SpecError::ScalarOperands { op: "+" }));
}

#[test]
fn single_includes_in_place_when_supported() {
    let config = CodegenConfig::default();
    let symbols = |lhs, rhs| -> Vec<String> {
        emit_single(lhs, rhs, Operator::Mul, &config)
            .unwrap()
            .into_iter()
            .map(|item| item.symbol)
            .collect()
    };
    assert_eq!(
        symbols(FieldKind::Field3D, FieldKind::Field2D),
        vec![
            "autogen_field3d_field3d_field2d_mul",
            "mul_field3d_field3d_field2d",
            "autogen_field3d_field2d_mul_assign",
            "mul_assign_field3d_field2d",
        ]
    );
    assert_eq!(
        symbols(FieldKind::Field2D, FieldKind::Field3D),
        vec![
            "autogen_field3d_field2d_field3d_mul",
            "mul_field3d_field2d_field3d",
        ]
    );
}

#[test]
fn every_wrapper_calls_its_own_kernel() {
    let config = CodegenConfig::default();
    for ctx in operations() {
        let items = emit_operation(&ctx, &config);
        assert!(items[1].source.contains(&format!("{}(", items[0].symbol)));
    }
}

#[test]
fn generation_is_deterministic() {
    let config = CodegenConfig::default();
    assert_eq!(
        generate_module(&config).unwrap(),
        generate_module(&config).unwrap()
    );
}

fn operation_strategy() -> impl Strategy<Value = OperationContext> {
    prop::sample::select(operations().collect::<Vec<_>>())
}

proptest! {
    #[test]
    fn emission_does_not_depend_on_history(
        history in prop::collection::vec(operation_strategy(), 0..8),
        target in operation_strategy(),
    ) {
        let config = CodegenConfig::default();
        let fresh = emit_operation(&target, &config);
        for ctx in &history {
            let _ = emit_operation(ctx, &config);
            let _ = emit_in_place(ctx, &config);
        }
        prop_assert_eq!(emit_operation(&target, &config), fresh);
    }
}
