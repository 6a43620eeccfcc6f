//! Wrapper emission.
//!
//! The wrapper is the API-level entry point for `lhs <op> rhs`. It keeps the
//! mesh and location bookkeeping out of the kernel:
//!
//! 1. take the mesh from the first non-scalar operand
//! 2. assert both field operands share it (debug builds only)
//! 3. allocate a fresh result, so it never aliases an input
//! 4. validity-check the inputs
//! 5. run the kernel with buffer views and the result's shape
//! 6. check that two maximal-rank operands agree on location (check level)
//! 7. give a maximal-rank result its location
//! 8. validity-check and return the result
//!
//! Every wrapper is also exposed through the matching `std::ops` trait,
//! which panics on error.

use fieldops_ir::{BufferAccess, FieldKind, IterationMode, OperationContext, Role};

use crate::config::CodegenConfig;
use crate::context::CodegenContext;
use crate::naming::{kernel_name, wrapper_name};

/// Emit the wrapper function for `ctx`.
pub fn emit_wrapper(ctx: &OperationContext, config: &CodegenConfig) -> String {
    let mut cg = CodegenContext::new();
    cg.writeln(&format!(
        "// Provide the wrapper for {} of {} and {}",
        ctx.op().noun(),
        ctx.lhs(),
        ctx.rhs()
    ));

    let header = format!(
        "pub fn {}(lhs: {}, rhs: {}) -> Result<{}, FieldError>",
        wrapper_name(ctx),
        ctx.lhs().operand_param(),
        ctx.rhs().operand_param(),
        ctx.result()
    );
    cg.block(&header, |cg| {
        let mesh_source = ctx.mesh_source().name();
        cg.writeln(&format!("let localmesh = {mesh_source}.mesh().clone();"));
        if ctx.needs_mesh_check() {
            emit_mesh_check(cg, *ctx, "localmesh");
        }
        cg.writeln(&format!(
            "let mut result = {}::new(localmesh.clone());",
            ctx.result()
        ));
        cg.writeln("result.allocate();");
        cg.writeln(&format!("check_data({})?;", check_arg(ctx.lhs(), Role::Lhs)));
        cg.writeln(&format!("check_data({})?;", check_arg(ctx.rhs(), Role::Rhs)));

        let mut args: Vec<String> = [
            (Role::Result, BufferAccess::Write),
            (Role::Lhs, BufferAccess::Read),
            (Role::Rhs, BufferAccess::Read),
        ]
        .into_iter()
        .map(|(role, buffer)| ctx.kind(role).pointer_access(role.name(), buffer))
        .collect();
        args.extend(shape_args(*ctx, "localmesh"));
        cg.writeln(&format!("{}({});", kernel_name(ctx), args.join(", ")));

        if ctx.needs_location_check() {
            emit_location_check(cg, *ctx, config);
        }
        if let Some(source) = ctx.location_source() {
            cg.writeln(&format!(
                "result.set_location({}.location());",
                source.name()
            ));
        }
        cg.writeln("check_data(&result)?;");
        cg.writeln("Ok(result)");
    });
    cg.newline();
    emit_operator_impl(&mut cg, *ctx);
    cg.take_output()
}

/// `impl std::ops::<Trait><Rhs> for <Lhs>` delegating to the wrapper.
fn emit_operator_impl(cg: &mut CodegenContext, ctx: OperationContext) {
    let op = ctx.op();
    let (generics, rhs_ty) = trait_operand(ctx.rhs());
    let header = format!(
        "impl{generics} std::ops::{}<{rhs_ty}> for {}",
        op.trait_name(),
        ctx.lhs().operand_param()
    );
    cg.block(&header, |cg| {
        cg.writeln(&format!("type Output = {};", ctx.result()));
        cg.newline();
        let method = format!("fn {}(self, rhs: {rhs_ty}) -> {}", op.method(), ctx.result());
        cg.block(&method, |cg| {
            cg.block(&format!("match {}(self, rhs)", wrapper_name(&ctx)), |cg| {
                cg.writeln("Ok(result) => result,");
                cg.writeln("Err(err) => panic!(\"{err}\"),");
            });
        });
    });
}

/// Generic parameters and right-hand type for an operator trait impl.
///
/// Borrowed operands need a named lifetime shared by the trait argument
/// and the method parameter.
pub(crate) fn trait_operand(kind: FieldKind) -> (&'static str, String) {
    if kind.is_scalar() {
        ("", kind.type_name().to_owned())
    } else {
        ("<'a>", format!("&'a {}", kind.type_name()))
    }
}

/// Argument passed to `check_data` for an operand.
pub(crate) fn check_arg(kind: FieldKind, role: Role) -> String {
    if kind.is_scalar() {
        format!("&{}", role.name())
    } else {
        role.name().to_owned()
    }
}

/// Debug-only assertion that `rhs` lives on `mesh`.
pub(crate) fn emit_mesh_check(cg: &mut CodegenContext, ctx: OperationContext, mesh: &str) {
    cg.writeln(&format!(
        "debug_assert_eq!({mesh}, *rhs.mesh(), \"{}: operands are on different meshes\");",
        ctx.op().name()
    ));
}

/// Location agreement check between `lhs` and `rhs`, gated by the
/// configured check level.
pub(crate) fn emit_location_check(
    cg: &mut CodegenContext,
    ctx: OperationContext,
    config: &CodegenConfig,
) {
    if let Some(gate) = config.check_gate() {
        cg.writeln(&gate);
    }
    cg.block("if lhs.location() != rhs.location()", |cg| {
        cg.block_with_close("return Err(FieldError::LocationMismatch", "});", |cg| {
            cg.writeln(&format!("operation: \"{}\",", ctx.op().name()));
            cg.writeln("lhs: lhs.location(),");
            cg.writeln("rhs: rhs.location(),");
        });
    });
}

/// Shape arguments for the kernel call, read from `mesh`.
///
/// Elementwise kernels get one extent per result axis; linear kernels get
/// the product of all of them.
pub(crate) fn shape_args(ctx: OperationContext, mesh: &str) -> Vec<String> {
    let extents = ctx
        .result()
        .axes()
        .iter()
        .map(|axis| format!("{mesh}.{}()", axis.mesh_extent()));
    match ctx.mode() {
        IterationMode::Elementwise => extents.collect(),
        IterationMode::Linear => vec![extents.collect::<Vec<_>>().join(" * ")],
    }
}
