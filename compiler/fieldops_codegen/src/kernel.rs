//! Kernel emission.
//!
//! Kernels work on raw buffers only. The result (or, for in-place kernels,
//! the updated left operand) comes first as an exclusive slice, then the
//! operands as shared slices or scalars, then the shape: one extent per axis
//! of the result in elementwise mode, a single length in linear mode.

use fieldops_ir::{BufferAccess, IterationMode, OperationContext, Role};

use crate::context::CodegenContext;
use crate::naming::{in_place_kernel_name, kernel_name};

/// Emit the kernel computing `result = lhs <op> rhs`.
pub fn emit_kernel(ctx: &OperationContext) -> String {
    let mut cg = CodegenContext::new();
    cg.writeln(&format!(
        "// Do the actual {} of {} and {}",
        ctx.op().noun(),
        ctx.lhs(),
        ctx.rhs()
    ));

    let mut params = vec![
        param(*ctx, Role::Result, BufferAccess::Write),
        param(*ctx, Role::Lhs, BufferAccess::Read),
        param(*ctx, Role::Rhs, BufferAccess::Read),
    ];
    params.extend(shape_params(*ctx));

    let header = format!("fn {}({})", kernel_name(ctx), params.join(", "));
    cg.block(&header, |cg| {
        let statement = format!(
            "{} = {} {} {};",
            access(*ctx, Role::Result),
            access(*ctx, Role::Lhs),
            ctx.op().symbol(),
            access(*ctx, Role::Rhs)
        );
        emit_loops(cg, *ctx, &statement);
    });
    cg.take_output()
}

/// Emit the kernel computing `lhs <op>= rhs` on the left operand's buffer.
///
/// Only meaningful when `ctx` supports an in-place form; the loop shape is
/// that of the result, which then equals the left operand's.
pub fn emit_in_place_kernel(ctx: &OperationContext) -> String {
    debug_assert!(ctx.supports_in_place(), "in-place kernel for widening {ctx:?}");

    let mut cg = CodegenContext::new();
    cg.writeln(&format!(
        "// Update {} by {} with {}",
        ctx.lhs(),
        ctx.op().noun(),
        ctx.rhs()
    ));

    let mut params = vec![
        param(*ctx, Role::Lhs, BufferAccess::Write),
        param(*ctx, Role::Rhs, BufferAccess::Read),
    ];
    params.extend(shape_params(*ctx));

    let header = format!("fn {}({})", in_place_kernel_name(ctx), params.join(", "));
    cg.block(&header, |cg| {
        let statement = format!(
            "{} {}= {};",
            access(*ctx, Role::Lhs),
            ctx.op().symbol(),
            access(*ctx, Role::Rhs)
        );
        emit_loops(cg, *ctx, &statement);
    });
    cg.take_output()
}

fn param(ctx: OperationContext, role: Role, buffer: BufferAccess) -> String {
    format!("{}: {}", role.name(), ctx.kind(role).kernel_param(buffer))
}

fn access(ctx: OperationContext, role: Role) -> String {
    ctx.kind(role).element_access(role.name(), ctx.mode())
}

/// Shape parameter declarations for the kernel signature.
fn shape_params(ctx: OperationContext) -> Vec<String> {
    match ctx.mode() {
        IterationMode::Elementwise => ctx
            .result()
            .axes()
            .iter()
            .map(|axis| format!("{}: usize", axis.extent()))
            .collect(),
        IterationMode::Linear => vec!["len: usize".to_owned()],
    }
}

/// Emit the loop nest around a single innermost statement.
fn emit_loops(cg: &mut CodegenContext, ctx: OperationContext, statement: &str) {
    let headers: Vec<String> = match ctx.mode() {
        IterationMode::Elementwise => ctx
            .result()
            .axes()
            .iter()
            .map(|axis| format!("for {} in 0..{} {{", axis.symbol(), axis.extent()))
            .collect(),
        IterationMode::Linear => vec!["for i in 0..len {".to_owned()],
    };

    for header in &headers {
        cg.writeln(header);
        cg.indent();
    }
    cg.writeln(statement);
    for _ in &headers {
        cg.dedent();
        cg.writeln("}");
    }
}
