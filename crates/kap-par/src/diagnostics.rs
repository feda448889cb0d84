//! Syntax-error formatting (§4.H): source line lookup, leading-whitespace
//! trim, and the caret-then-tilde underline built from a token's column
//! and lexeme length.

use kap_lex::Token;
use kap_util::diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode};
use kap_util::{SourceFile, Span};

fn strip_leading_whitespace(line: &[u8]) -> String {
    let start = line.iter().position(|b| !b.is_ascii_whitespace()).unwrap_or(line.len());
    String::from_utf8_lossy(&line[start..]).into_owned()
}

fn underline(column: u32, lexeme_len: usize) -> String {
    let mut s = String::with_capacity(column as usize + lexeme_len);
    for _ in 1..column {
        s.push(' ');
    }
    s.push('^');
    for _ in 0..lexeme_len.saturating_sub(1) {
        s.push('~');
    }
    s
}

/// Builds the full multi-line syntax-error diagnostic for `token`, per the
/// `<path>:<line>:<col>: Syntax error: <message>` layout with the source
/// line and underline beneath it.
pub fn syntax_error(source: &SourceFile, token: &Token, message: impl std::fmt::Display) -> Diagnostic {
    let line_bytes = source.line_at(token.line as usize).unwrap_or(&[]);
    let line_text = strip_leading_whitespace(line_bytes);
    let gutter = " ".repeat(2 + token.line.to_string().len() + 2);

    let full_message = format!(
        "{}:{}:{}: Syntax error: {}\n  {}  |  {}\n{}|  {}",
        token.file_path,
        token.line,
        token.column,
        message,
        token.line,
        line_text,
        gutter,
        underline(token.column, token.lexeme.len().max(1)),
    );

    let span = Span::point_with_file(source.id(), token.line, token.column);
    DiagnosticBuilder::error(full_message)
        .code(DiagnosticCode::E_PARSER_UNEXPECTED_TOKEN)
        .span(span)
        .build()
}
