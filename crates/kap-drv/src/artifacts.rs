//! Artifact writers (§6 "persisted artifact writers"): the four per-file
//! dump formats, grounded in the original `lexdriver`/`syntactic_analyzer_driver`
//! output routines.

use std::io::Write;
use std::path::{Path, PathBuf};

use kap_lex::{Token, TokenKind};

/// Replaces a trailing `.src` with `suffix`, or appends `suffix` when the
/// path doesn't end in `.src`.
pub fn sibling_path(src: &Path, suffix: &str) -> PathBuf {
    let name = src.to_string_lossy();
    match name.strip_suffix(".src") {
        Some(stem) => PathBuf::from(format!("{stem}{suffix}")),
        None => PathBuf::from(format!("{name}{suffix}")),
    }
}

/// `[KIND, lexeme, line:column]` groups, one source line per output line.
/// Embedded newlines in a lexeme are escaped as the two characters `\n`.
pub fn write_tokens(out: &mut impl Write, tokens: &[Token]) -> std::io::Result<()> {
    let mut current_line = 1u32;
    let mut first_on_line = true;

    for token in tokens {
        while token.line > current_line {
            writeln!(out)?;
            current_line += 1;
            first_on_line = true;
        }
        if !first_on_line {
            write!(out, " ")?;
        }
        write!(
            out,
            "[{}, {}, {}:{}]",
            token.kind,
            token.lexeme_escaped(),
            token.line,
            token.column
        )?;
        first_on_line = false;
    }

    Ok(())
}

/// One lexeme per line; trivia and `UNKNOWN` tokens are omitted.
pub fn write_tokens_flaci(out: &mut impl Write, tokens: &[Token]) -> std::io::Result<()> {
    for token in tokens {
        if token.kind.is_trivia() || token.kind == TokenKind::Unknown {
            continue;
        }
        writeln!(out, "{}", token.lexeme_escaped())?;
    }
    Ok(())
}

/// One line per `UNKNOWN` token.
pub fn write_errors(out: &mut impl Write, tokens: &[Token]) -> std::io::Result<()> {
    for token in tokens {
        if token.kind != TokenKind::Unknown {
            continue;
        }
        writeln!(
            out,
            "Error: Unknown token '{}' at line {}, position {}",
            token.lexeme_escaped(),
            token.line,
            token.column
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sibling_path_replaces_src_extension() {
        assert_eq!(
            sibling_path(Path::new("a/b.src"), ".outlextokens"),
            PathBuf::from("a/b.outlextokens")
        );
        assert_eq!(
            sibling_path(Path::new("a/b.txt"), ".outlextokens"),
            PathBuf::from("a/b.txt.outlextokens")
        );
    }

    #[test]
    fn write_tokens_groups_by_line() {
        let tokens = vec![
            Token::new(TokenKind::Main, b"main".to_vec(), 1, 1, "t.src"),
            Token::new(TokenKind::Do, b"do".to_vec(), 1, 6, "t.src"),
            Token::new(TokenKind::End, b"end".to_vec(), 2, 1, "t.src"),
        ];
        let mut buf = Vec::new();
        write_tokens(&mut buf, &tokens).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "[MAIN, main, 1:1] [DO, do, 1:6]\n[END, end, 2:1]");
    }

    #[test]
    fn write_tokens_flaci_skips_comments_and_unknown() {
        let tokens = vec![
            Token::new(TokenKind::Main, b"main".to_vec(), 1, 1, "t.src"),
            Token::new(TokenKind::InlineComment, b"// hi".to_vec(), 1, 6, "t.src"),
            Token::new(TokenKind::Unknown, b"@".to_vec(), 1, 12, "t.src"),
        ];
        let mut buf = Vec::new();
        write_tokens_flaci(&mut buf, &tokens).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "main\n");
    }

    #[test]
    fn write_errors_reports_only_unknown_tokens() {
        let tokens = vec![
            Token::new(TokenKind::Unknown, b"@".to_vec(), 3, 7, "t.src"),
        ];
        let mut buf = Vec::new();
        write_errors(&mut buf, &tokens).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "Error: Unknown token '@' at line 3, position 7\n");
    }
}
