//! Symbol names of generated items.
//!
//! Names are purely positional in the kind tags and operator name, so a
//! wrapper always knows the name of its kernel.

use fieldops_ir::OperationContext;

/// `autogen_{result}_{lhs}_{rhs}_{op}`
pub fn kernel_name(ctx: &OperationContext) -> String {
    format!(
        "autogen_{}_{}_{}_{}",
        ctx.result().tag(),
        ctx.lhs().tag(),
        ctx.rhs().tag(),
        ctx.op().name()
    )
}

/// `{op}_{result}_{lhs}_{rhs}`
pub fn wrapper_name(ctx: &OperationContext) -> String {
    format!(
        "{}_{}_{}_{}",
        ctx.op().name(),
        ctx.result().tag(),
        ctx.lhs().tag(),
        ctx.rhs().tag()
    )
}

/// `autogen_{lhs}_{rhs}_{op}_assign`
pub fn in_place_kernel_name(ctx: &OperationContext) -> String {
    format!(
        "autogen_{}_{}_{}_assign",
        ctx.lhs().tag(),
        ctx.rhs().tag(),
        ctx.op().name()
    )
}

/// `{op}_assign_{lhs}_{rhs}`
pub fn in_place_wrapper_name(ctx: &OperationContext) -> String {
    format!(
        "{}_assign_{}_{}",
        ctx.op().name(),
        ctx.lhs().tag(),
        ctx.rhs().tag()
    )
}
