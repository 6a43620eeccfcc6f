//! Generate command: write the complete operator module.

use std::io::Write;
use std::path::PathBuf;

use fieldops_codegen::{generate_module, CodegenConfig};

use super::{exit_with, CommandError};

/// Options accepted by `generate` and `show`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Output file path (-o, --output=); stdout when absent
    pub output: Option<PathBuf>,
    /// Runtime import path (--runtime-path=<path>)
    pub runtime_path: Option<String>,
    /// Feature gating location checks (--check-feature=<name>)
    pub check_feature: Option<String>,
    /// Compile location checks in unconditionally (--no-check-gate)
    pub no_check_gate: bool,
    /// Omit the autogenerated banner (--no-banner)
    pub no_banner: bool,
}

impl GenerateOptions {
    /// Merge another set of options into this one. Later options win.
    pub fn merge(&mut self, other: &Self) {
        if other.output.is_some() {
            self.output.clone_from(&other.output);
        }
        if other.runtime_path.is_some() {
            self.runtime_path.clone_from(&other.runtime_path);
        }
        if other.check_feature.is_some() {
            self.check_feature.clone_from(&other.check_feature);
            self.no_check_gate = false;
        }
        if other.no_check_gate {
            self.no_check_gate = true;
            self.check_feature = None;
        }
        self.no_banner |= other.no_banner;
    }

    /// Generator configuration described by these options.
    pub fn to_config(&self) -> CodegenConfig {
        let mut config = CodegenConfig::default().with_banner(!self.no_banner);
        if let Some(path) = &self.runtime_path {
            config = config.with_runtime_path(path.as_str());
        }
        if self.no_check_gate {
            config = config.with_check_feature(None);
        } else if let Some(feature) = &self.check_feature {
            config = config.with_check_feature(Some(feature.clone()));
        }
        config
    }
}

/// Parse generate options from command line arguments.
///
/// `-o <path>` needs lookahead and is handled by the caller; `-o=<path>`
/// and `--output=<path>` are accepted here.
pub fn parse_generate_options(args: &[String]) -> GenerateOptions {
    let mut options = GenerateOptions::default();

    for arg in args {
        if let Some(output) = arg
            .strip_prefix("-o=")
            .or_else(|| arg.strip_prefix("--output="))
        {
            options.output = Some(PathBuf::from(output));
        } else if let Some(path) = arg.strip_prefix("--runtime-path=") {
            options.runtime_path = Some(path.to_string());
        } else if let Some(feature) = arg.strip_prefix("--check-feature=") {
            options.check_feature = Some(feature.to_string());
            options.no_check_gate = false;
        } else if arg == "--no-check-gate" {
            options.no_check_gate = true;
            options.check_feature = None;
        } else if arg == "--no-banner" {
            options.no_banner = true;
        } else {
            eprintln!("warning: unknown option '{arg}'");
        }
    }

    options
}

/// Generate the module and write it to `out`, or to the configured file.
pub fn generate(options: &GenerateOptions, out: &mut impl Write) -> Result<(), CommandError> {
    let module = generate_module(&options.to_config())?;
    match &options.output {
        Some(path) => std::fs::write(path, &module).map_err(|source| CommandError::Write {
            path: path.clone(),
            source,
        })?,
        None => out.write_all(module.as_bytes())?,
    }
    tracing::debug!(output = ?options.output, bytes = module.len(), "wrote operator module");
    Ok(())
}

/// Entry point for `fieldops generate`.
pub fn generate_command(options: &GenerateOptions) {
    let stdout = std::io::stdout();
    if let Err(err) = generate(options, &mut stdout.lock()) {
        exit_with(&err);
    }
}
