//! Command handlers for the `fieldops` CLI.
//!
//! Each submodule implements one command. Handlers that produce output
//! render into a writer and return a [`CommandError`]; the `*_command`
//! entry points used by `main.rs` report errors on stderr and exit with
//! status 1.

mod error;
mod generate;
mod list;
mod show;

pub use error::CommandError;
pub use generate::{generate, generate_command, parse_generate_options, GenerateOptions};
pub use list::{format_operation, list_command, list_operations};
pub use show::{parse_operation, show, show_command};

/// Print `err` and terminate the process.
fn exit_with(err: &CommandError) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1);
}
