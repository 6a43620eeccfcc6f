//! In-place wrapper emission.
//!
//! `lhs <op>= rhs` only exists when the promoted result kind equals the kind
//! of `lhs`. The emitted function branches on ownership of the left buffer:
//!
//! - uniquely owned: run the in-place kernel on it directly, with the same
//!   mesh, validity and location checks as the plain wrapper;
//! - shared: compute `lhs <op> rhs` through the plain wrapper and rebind
//!   `lhs` to the fresh result, leaving other holders untouched.
//!
//! The shared branch gets its location check from the plain wrapper.
//!
//! In the unique branch the kernel runs before the location check, so when
//! the fallible `{op}_assign_*` wrapper returns `LocationMismatch` (or a
//! validity error from the final check), `lhs` already holds the updated
//! values. Callers that need `lhs` intact on error must clone it first,
//! which also routes the update through the shared branch.

use fieldops_ir::{BufferAccess, OperationContext, Role};

use crate::config::CodegenConfig;
use crate::context::CodegenContext;
use crate::naming::{in_place_kernel_name, in_place_wrapper_name, wrapper_name};
use crate::wrapper::{check_arg, emit_location_check, emit_mesh_check, shape_args, trait_operand};

/// Emit the in-place wrapper for `ctx`.
pub fn emit_in_place_wrapper(ctx: &OperationContext, config: &CodegenConfig) -> String {
    debug_assert!(ctx.supports_in_place(), "in-place wrapper for widening {ctx:?}");

    let mut cg = CodegenContext::new();
    cg.writeln(&format!(
        "// Provide the wrapper to update {} by {} with {}",
        ctx.lhs(),
        ctx.op().noun(),
        ctx.rhs()
    ));

    // A borrowed rhs makes the returned borrow ambiguous without a name.
    let (generics, lhs_ref) = if ctx.rhs().is_scalar() {
        ("", "&mut")
    } else {
        ("<'a>", "&'a mut")
    };
    let lhs_ty = ctx.lhs().type_name();
    let header = format!(
        "pub fn {}{generics}(lhs: {lhs_ref} {lhs_ty}, rhs: {}) -> Result<{lhs_ref} {lhs_ty}, FieldError>",
        in_place_wrapper_name(ctx),
        ctx.rhs().operand_param()
    );
    cg.block(&header, |cg| {
        cg.writeln("// only if data is unique we update the field");
        cg.writeln("// otherwise just call the non-inplace version");
        cg.block_with_close("if lhs.is_unique()", "} else {", |cg| {
            emit_unique_branch(cg, *ctx, config);
        });
        cg.indent();
        cg.writeln(&format!("*lhs = {}(&*lhs, rhs)?;", wrapper_name(ctx)));
        cg.dedent();
        cg.writeln("}");
        cg.writeln("Ok(lhs)");
    });
    cg.newline();
    emit_assign_impl(&mut cg, *ctx);
    cg.take_output()
}

fn emit_unique_branch(cg: &mut CodegenContext, ctx: OperationContext, config: &CodegenConfig) {
    cg.writeln("let fieldmesh = lhs.mesh().clone();");
    if ctx.needs_mesh_check() {
        emit_mesh_check(cg, ctx, "fieldmesh");
    }
    cg.writeln("check_data(&*lhs)?;");
    cg.writeln(&format!("check_data({})?;", check_arg(ctx.rhs(), Role::Rhs)));

    let mut args = vec![
        ctx.lhs().pointer_access(Role::Lhs.name(), BufferAccess::Write),
        ctx.rhs().pointer_access(Role::Rhs.name(), BufferAccess::Read),
    ];
    args.extend(shape_args(ctx, "fieldmesh"));
    cg.writeln(&format!("{}({});", in_place_kernel_name(&ctx), args.join(", ")));

    if ctx.needs_location_check() {
        emit_location_check(cg, ctx, config);
    }
    cg.writeln("check_data(&*lhs)?;");
}

/// `impl std::ops::<Trait>Assign<Rhs> for <Lhs>` delegating to the wrapper.
fn emit_assign_impl(cg: &mut CodegenContext, ctx: OperationContext) {
    let op = ctx.op();
    let (generics, rhs_ty) = trait_operand(ctx.rhs());
    let header = format!(
        "impl{generics} std::ops::{}<{rhs_ty}> for {}",
        op.assign_trait_name(),
        ctx.lhs()
    );
    cg.block(&header, |cg| {
        let method = format!("fn {}(&mut self, rhs: {rhs_ty})", op.assign_method());
        cg.block(&method, |cg| {
            cg.block(
                &format!("if let Err(err) = {}(self, rhs)", in_place_wrapper_name(&ctx)),
                |cg| cg.writeln("panic!(\"{err}\");"),
            );
        });
    });
}
