//! List command: the resolved kinds and mode of every generated operation.

use std::io::Write;

use fieldops_ir::{operations, OperationContext};

use super::{exit_with, CommandError};

/// One line describing `ctx`: `Field3D = Field3D + Field2D  elementwise  in-place`.
pub fn format_operation(ctx: &OperationContext) -> String {
    let line = format!(
        "{:<7} = {:<7} {} {:<7}  {:<11}",
        ctx.result(),
        ctx.lhs(),
        ctx.op(),
        ctx.rhs(),
        ctx.mode()
    );
    if ctx.supports_in_place() {
        format!("{line}  in-place")
    } else {
        line.trim_end().to_string()
    }
}

/// Write every operation, in generation order, to `out`.
pub fn list_operations(out: &mut impl Write) -> Result<(), CommandError> {
    let mut count = 0;
    for ctx in operations() {
        writeln!(out, "{}", format_operation(&ctx))?;
        count += 1;
    }
    writeln!(out)?;
    writeln!(out, "{count} operations")?;
    Ok(())
}

/// Entry point for `fieldops list`.
pub fn list_command() {
    let stdout = std::io::stdout();
    if let Err(err) = list_operations(&mut stdout.lock()) {
        exit_with(&err);
    }
}
