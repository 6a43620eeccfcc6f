//! Fieldops CLI
//!
//! Generates the arithmetic operators of the field runtime.

use fieldopsc::commands::{
    generate_command, list_command, parse_generate_options, show_command, GenerateOptions,
};

fn main() {
    fieldopsc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "generate" => {
            let options = parse_options(&args[2..]);
            generate_command(&options);
        }
        "list" => {
            list_command();
        }
        "show" => {
            if args.len() < 5 {
                eprintln!("Usage: fieldops show <lhs> <op> <rhs> [options]");
                eprintln!();
                eprintln!("Kinds:     real, field2d, field3d");
                eprintln!("Operators: mul, div, plus, minus (or *, /, +, -)");
                eprintln!();
                eprintln!("Example: fieldops show field3d plus field2d");
                std::process::exit(1);
            }
            let options = parse_options(&args[5..]);
            show_command(&args[2], &args[3], &args[4], &options);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("fieldops {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

/// Parse options, handling `-o` specially (needs lookahead).
fn parse_options(args: &[String]) -> GenerateOptions {
    let mut options = GenerateOptions::default();
    let mut i = 0;
    while i < args.len() {
        if args[i] == "-o" && i + 1 < args.len() {
            options.output = Some(std::path::PathBuf::from(&args[i + 1]));
            i += 2;
        } else {
            let parsed = parse_generate_options(&args[i..=i]);
            options.merge(&parsed);
            i += 1;
        }
    }
    options
}

fn print_usage() {
    println!("fieldops - field arithmetic operator generator");
    println!();
    println!("Usage: fieldops <command> [options]");
    println!();
    println!("Commands:");
    println!("  generate                 Generate the complete operator module");
    println!("  list                     List every operation with its resolved kinds");
    println!("  show <lhs> <op> <rhs>    Print the items generated for one operation");
    println!("  help                     Show this help message");
    println!("  version                  Show version information");
    println!();
    println!("Generate options:");
    println!("  -o <path>                Output file (default: stdout)");
    println!("  --runtime-path=<path>    Rust path of the runtime items (default: crate)");
    println!("  --check-feature=<name>   Cargo feature gating location checks (default: checks)");
    println!("  --no-check-gate          Always compile location checks in");
    println!("  --no-banner              Omit the autogenerated-file banner");
    println!();
    println!("Examples:");
    println!("  fieldops generate -o src/field_ops.rs");
    println!("  fieldops generate --runtime-path=fieldops_rt --no-check-gate");
    println!("  fieldops show field3d mul real");
    println!("  RUST_LOG=fieldops_codegen=debug fieldops generate > /dev/null");
}
