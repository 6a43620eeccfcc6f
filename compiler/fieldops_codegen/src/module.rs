//! Assembly of the complete operator module.
//!
//! Emitters are pure: each returns the text of one item. This module walks
//! every operation in generation order, collects the items, rejects symbol
//! collisions, and joins everything into one source file.

use std::fmt::Write as _;

use rustc_hash::FxHashSet;

use fieldops_ir::{in_place_operations, operations, FieldKind, OperationContext, Operator};

use crate::config::CodegenConfig;
use crate::error::CodegenError;
use crate::in_place::emit_in_place_wrapper;
use crate::kernel::{emit_in_place_kernel, emit_kernel};
use crate::naming::{in_place_kernel_name, in_place_wrapper_name, kernel_name, wrapper_name};
use crate::wrapper::emit_wrapper;

/// First line of every generated module.
pub const AUTOGEN_BANNER: &str = "// This file is autogenerated by fieldops - do not edit.";

/// One generated item and the symbol it defines.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmittedFunction {
    pub symbol: String,
    pub source: String,
}

/// Kernel and wrapper for `ctx`.
pub fn emit_operation(ctx: &OperationContext, config: &CodegenConfig) -> Vec<EmittedFunction> {
    let items = vec![
        EmittedFunction {
            symbol: kernel_name(ctx),
            source: emit_kernel(ctx),
        },
        EmittedFunction {
            symbol: wrapper_name(ctx),
            source: emit_wrapper(ctx, config),
        },
    ];
    trace_items(*ctx, &items);
    items
}

/// In-place kernel and wrapper for `ctx`, or nothing when `ctx` widens `lhs`.
pub fn emit_in_place(ctx: &OperationContext, config: &CodegenConfig) -> Vec<EmittedFunction> {
    if !ctx.supports_in_place() {
        return Vec::new();
    }
    let items = vec![
        EmittedFunction {
            symbol: in_place_kernel_name(ctx),
            source: emit_in_place_kernel(ctx),
        },
        EmittedFunction {
            symbol: in_place_wrapper_name(ctx),
            source: emit_in_place_wrapper(ctx, config),
        },
    ];
    trace_items(*ctx, &items);
    items
}

/// Every item generated for `lhs <op> rhs`, including the in-place form
/// when one exists.
pub fn emit_single(
    lhs: FieldKind,
    rhs: FieldKind,
    op: Operator,
    config: &CodegenConfig,
) -> Result<Vec<EmittedFunction>, CodegenError> {
    config.validate()?;
    let ctx = OperationContext::new(lhs, rhs, op)?;
    let mut items = emit_operation(&ctx, config);
    items.extend(emit_in_place(&ctx, config));
    Ok(items)
}

/// Generate the complete operator module.
pub fn generate_module(config: &CodegenConfig) -> Result<String, CodegenError> {
    config.validate()?;

    let items: Vec<EmittedFunction> = operations()
        .flat_map(|ctx| emit_operation(&ctx, config))
        .chain(in_place_operations().flat_map(|ctx| emit_in_place(&ctx, config)))
        .collect();

    let mut seen = FxHashSet::default();
    for item in &items {
        if !seen.insert(item.symbol.as_str()) {
            return Err(CodegenError::DuplicateSymbol {
                symbol: item.symbol.clone(),
            });
        }
    }

    let mut out = preamble(config);
    for item in &items {
        out.push('\n');
        out.push_str(&item.source);
    }

    tracing::debug!(
        functions = items.len(),
        bytes = out.len(),
        "assembled field operator module"
    );
    Ok(out)
}

/// Banner and imports at the top of the module.
pub fn preamble(config: &CodegenConfig) -> String {
    let mut out = String::new();
    if config.banner {
        out.push_str(AUTOGEN_BANNER);
        out.push('\n');
        out.push('\n');
    }
    let _ = writeln!(
        out,
        "use {}::{{check_data, Field2D, Field3D, FieldError, Real}};",
        config.runtime_path
    );
    out
}

fn trace_items(ctx: OperationContext, items: &[EmittedFunction]) {
    tracing::debug!(
        result = %ctx.result(),
        lhs = %ctx.lhs(),
        rhs = %ctx.rhs(),
        op = ctx.op().symbol(),
        mode = %ctx.mode(),
        "emitted operation"
    );
    for item in items {
        tracing::trace!(symbol = %item.symbol, bytes = item.source.len(), "emitted item");
    }
}

#[cfg(test)]
mod tests;
