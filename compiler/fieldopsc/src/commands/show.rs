//! Show command: print the items generated for a single operation.

use std::io::Write;

use fieldops_codegen::emit_single;
use fieldops_ir::{FieldKind, Operator};

use super::{exit_with, CommandError, GenerateOptions};

/// Parse `<lhs> <op> <rhs>` into kinds and operator.
pub fn parse_operation(
    lhs: &str,
    op: &str,
    rhs: &str,
) -> Result<(FieldKind, Operator, FieldKind), CommandError> {
    let kind = |name: &str| {
        FieldKind::from_name(name).ok_or_else(|| CommandError::UnknownKind {
            name: name.to_string(),
        })
    };
    let op = Operator::parse(op).ok_or_else(|| CommandError::UnknownOperator {
        symbol: op.to_string(),
    })?;
    Ok((kind(lhs)?, op, kind(rhs)?))
}

/// Write every item generated for `lhs <op> rhs` to `out`.
pub fn show(
    lhs: &str,
    op: &str,
    rhs: &str,
    options: &GenerateOptions,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let (lhs, op, rhs) = parse_operation(lhs, op, rhs)?;
    let items = emit_single(lhs, rhs, op, &options.to_config())?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        out.write_all(item.source.as_bytes())?;
    }
    Ok(())
}

/// Entry point for `fieldops show`.
pub fn show_command(lhs: &str, op: &str, rhs: &str, options: &GenerateOptions) {
    let stdout = std::io::stdout();
    if let Err(err) = show(lhs, op, rhs, options, &mut stdout.lock()) {
        exit_with(&err);
    }
}
