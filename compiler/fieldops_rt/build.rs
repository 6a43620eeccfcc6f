//! Generates the arithmetic operators of the field types.

use std::env;
use std::fs;
use std::path::PathBuf;

use fieldops_codegen::{generate_module, CodegenConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = PathBuf::from(env::var_os("OUT_DIR").ok_or("OUT_DIR is not set")?);
    let source = generate_module(&CodegenConfig::default())?;
    fs::write(out_dir.join("field_ops.rs"), source)?;
    Ok(())
}
