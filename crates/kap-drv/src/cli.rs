//! Command-line surface (§6 "CLI surface (collaborator, not core)"): argument
//! parsing only. Every byte of actual lexing/parsing behavior lives in
//! `kap-lex`/`kap-par`; this crate wires stdin-free file paths to artifacts.

use std::path::PathBuf;

use clap::Parser;

/// Drives the lexer and LL(1) parser over one or more `.src` files, writing
/// sibling artifact files next to each input.
#[derive(Parser, Debug)]
#[command(name = "kapc", author, version, about)]
pub struct Cli {
    /// Source files to process.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Also write `<file>.out.first` and `<file>.out.follow` FIRST/FOLLOW
    /// dumps (built once, shared across every input file).
    #[arg(long)]
    pub emit_sets: bool,

    /// Log each file as it's read, scanned, and parsed.
    #[arg(short, long)]
    pub verbose: bool,
}
