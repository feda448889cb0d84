//! Lexical analysis: a streaming, maximal-munch scanner that turns a source
//! file into a flat token stream (§1-4.D).
//!
//! ```
//! use std::sync::Arc;
//! use kap_util::SourceFile;
//! use kap_lex::{Scanner, TokenKind};
//!
//! let source = Arc::new(SourceFile::from_bytes(0, "main.src", b"main do end;".to_vec()));
//! let mut scanner = Scanner::new(source);
//! assert_eq!(scanner.next().kind, TokenKind::Main);
//! ```

pub mod cursor;
mod lexer;
pub mod token;

pub use lexer::Scanner;
pub use token::{Token, TokenKind};
