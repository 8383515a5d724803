use clap::{Parser, Subcommand};
use std::path::Path;
use tagml_scanner::Scanner;

#[derive(Parser)]
#[command(name = "tagml")]
#[command(about = "TagML — tag markup well-formedness checker")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check a TagML file for syntax errors
    Check {
        /// Input file
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Check { path } => cmd_check(&path),
    }
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_check(path: &str) {
    let source = read_source(path);

    if let Err(e) = Scanner::validate(&source) {
        eprintln!("{path}: {e}");
        std::process::exit(1);
    }

    eprintln!("OK: {path}");
}
