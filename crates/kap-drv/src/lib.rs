//! Driver: wires the scanner and LL(1) parser to file I/O (§6 "CLI surface").
//! Everything here is orchestration glue; the lexing/parsing behavior itself
//! lives in `kap-lex`/`kap-par`.

pub mod artifacts;
pub mod cli;

use std::fs;
use std::sync::Arc;

use anyhow::{Context, Result};
use kap_lex::{Scanner, Token, TokenKind};
use kap_par::{Grammar, Parser as KapParser};
use kap_util::SourceFile;
use rayon::prelude::*;

pub use cli::Cli;

/// Runs the full scanner over `source`, keeping trivia and `UNKNOWN` tokens
/// (unlike the parser's own token collection, which drops trivia) but not
/// the terminal `END_OF_FILE` sentinel, matching what the original lexer
/// drivers dumped.
fn scan_all(source: &Arc<SourceFile>) -> Vec<Token> {
    let mut scanner = Scanner::new(Arc::clone(source));
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next();
        if token.kind == TokenKind::Eof {
            break;
        }
        tokens.push(token);
    }
    tokens
}

/// Processes one source file: writes the lexer artifacts, then runs the
/// parser and reports whether the file was accepted. Returns `Ok(true)` on
/// a clean parse, `Ok(false)` on a syntax error (both are "the file was
/// readable"), and `Err` only on I/O failure.
fn process_file(grammar: &Grammar, path: &std::path::Path, verbose: bool) -> Result<bool> {
    if verbose {
        tracing::info!(path = %path.display(), "reading");
    }

    let source = Arc::new(
        SourceFile::open(0, path)
            .with_context(|| format!("couldn't read source file: {}", path.display()))?,
    );

    let tokens = scan_all(&source);

    let tokens_path = artifacts::sibling_path(path, ".outlextokens");
    let flaci_path = artifacts::sibling_path(path, ".outlextokensflaci");
    let errors_path = artifacts::sibling_path(path, ".outlexerrors");

    let mut tokens_file = fs::File::create(&tokens_path)
        .with_context(|| format!("couldn't open output file: {}", tokens_path.display()))?;
    artifacts::write_tokens(&mut tokens_file, &tokens)?;

    let mut flaci_file = fs::File::create(&flaci_path)
        .with_context(|| format!("couldn't open output file: {}", flaci_path.display()))?;
    artifacts::write_tokens_flaci(&mut flaci_file, &tokens)?;

    let mut errors_file = fs::File::create(&errors_path)
        .with_context(|| format!("couldn't open output file: {}", errors_path.display()))?;
    artifacts::write_errors(&mut errors_file, &tokens)?;

    if verbose {
        tracing::info!(path = %path.display(), "parsing");
    }

    let parser = KapParser::open(grammar, Arc::clone(&source));
    match parser.parse() {
        Ok(()) => Ok(true),
        Err(diag) => {
            eprintln!("{}", diag.message);
            Ok(false)
        }
    }
}

/// Writes `<file>.out.first`/`<file>.out.follow` next to `path`.
fn write_sets(grammar: &Grammar, path: &std::path::Path) -> Result<()> {
    let first_path = artifacts::sibling_path(path, ".out.first");
    let follow_path = artifacts::sibling_path(path, ".out.follow");
    fs::write(&first_path, grammar.get_first_set())
        .with_context(|| format!("couldn't open output file: {}", first_path.display()))?;
    fs::write(&follow_path, grammar.get_follow_set())
        .with_context(|| format!("couldn't open output file: {}", follow_path.display()))?;
    Ok(())
}

/// Runs the whole CLI invocation. Returns `true` if every file was read and
/// accepted; a per-file I/O or syntax failure is logged and processing
/// continues with the remaining files rather than aborting the run.
///
/// Files are independent (§5: scanner/parser instances share no mutable
/// state beyond the grammar), so they're driven with `rayon`'s `par_iter`
/// over one `Grammar` built once and shared by reference across the pool.
pub fn run(cli: &Cli) -> Result<bool> {
    let grammar = Grammar::build().context("grammar is not LL(1)")?;

    if cli.emit_sets {
        for path in &cli.files {
            write_sets(&grammar, path)?;
        }
    }

    let all_ok = cli
        .files
        .par_iter()
        .map(|path| match process_file(&grammar, path, cli.verbose) {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::error!("{e:#}");
                false
            }
        })
        .reduce(|| true, |a, b| a && b);

    Ok(all_ok)
}
