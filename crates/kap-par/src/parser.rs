//! The stack-based LL(1) driver (§4.G): no AST is built, the parse either
//! drains the stack in lockstep with the token cursor or halts with a
//! syntax error.

use std::sync::Arc;

use kap_lex::{Scanner, Token, TokenKind};
use kap_util::diagnostic::Diagnostic;
use kap_util::SourceFile;

use crate::diagnostics::syntax_error;
use crate::nonterminal::NonTerminal;
use crate::symbol::Symbol;
use crate::Grammar;

/// Runs the scanner to completion, dropping trivia tokens and keeping the
/// terminal `END_OF_FILE` the scanner itself emits.
fn collect_tokens(source: &Arc<SourceFile>) -> Vec<Token> {
    let mut scanner = Scanner::new(Arc::clone(source));
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next();
        let is_eof = token.kind == TokenKind::Eof;
        if !token.kind.is_trivia() {
            tokens.push(token);
        }
        if is_eof {
            break;
        }
    }
    tokens
}

/// One parse pass over a single source file.
pub struct Parser<'g> {
    grammar: &'g Grammar,
    source: Arc<SourceFile>,
    tokens: Vec<Token>,
}

impl<'g> Parser<'g> {
    /// Drives the scanner over `source`, filters comments, and appends the
    /// `END_OF_FILE` sentinel (the scanner already produces one).
    pub fn open(grammar: &'g Grammar, source: Arc<SourceFile>) -> Self {
        let tokens = collect_tokens(&source);
        Self { grammar, source, tokens }
    }

    /// The filtered token stream this parser will drive over.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Runs the table-driven acceptance check. The first syntax error
    /// halts the pass; there is no error recovery.
    pub fn parse(&self) -> Result<(), Diagnostic> {
        let mut stack: Vec<Symbol> =
            vec![Symbol::Terminal(TokenKind::Eof), Symbol::NonTerminal(NonTerminal::START)];
        let mut idx = 0usize;

        while let Some(top) = stack.pop() {
            let lookahead = self.current_token(idx);

            match top {
                Symbol::Terminal(expected) => {
                    if expected == lookahead.kind {
                        idx += 1;
                    } else {
                        return Err(syntax_error(
                            &self.source,
                            lookahead,
                            format!(
                                "expected token of type {}, but got token of type {}",
                                expected, lookahead.kind
                            ),
                        ));
                    }
                }
                Symbol::NonTerminal(nt) => match self.grammar.table().get(nt, lookahead.kind) {
                    Some(production) => {
                        tracing::debug!(
                            nonterminal = %nt,
                            lookahead = %lookahead.kind,
                            production = %crate::grammar::production_to_string(production),
                            "production chosen"
                        );
                        for &sym in production.iter().rev() {
                            stack.push(sym);
                        }
                    }
                    None => {
                        return Err(syntax_error(
                            &self.source,
                            lookahead,
                            format!(
                                "no production for non-terminal <{nt}> with lookahead token of type {}",
                                lookahead.kind
                            ),
                        ));
                    }
                },
            }
        }

        if idx != self.tokens.len() {
            let extra = self.tokens.len() - idx;
            return Err(syntax_error(
                &self.source,
                self.current_token(idx),
                format!("expected end of file, but got {extra} extra tokens"),
            ));
        }

        Ok(())
    }

    fn current_token(&self, idx: usize) -> &Token {
        self.tokens
            .get(idx)
            .unwrap_or_else(|| self.tokens.last().expect("token stream always ends in END_OF_FILE"))
    }
}
