//! Grammar symbols: terminals are scanner [`TokenKind`]s, non-terminals are
//! [`NonTerminal`] ids. A production's right-hand side is a sequence of
//! these; an empty sequence denotes the epsilon production (§4.E).

use kap_lex::TokenKind;

use crate::nonterminal::NonTerminal;

/// One symbol on a production's right-hand side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    Terminal(TokenKind),
    NonTerminal(NonTerminal),
}

impl Symbol {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Terminal(t) => write!(f, "{t}"),
            Symbol::NonTerminal(nt) => write!(f, "{nt}"),
        }
    }
}

/// A production's right-hand side. `&[]` is the epsilon production.
pub type Production = &'static [Symbol];

/// Shorthand constructors used by `grammar.rs`'s production table, kept
/// terse since that table lists several hundred symbols.
pub const fn t(kind: TokenKind) -> Symbol {
    Symbol::Terminal(kind)
}

pub const fn n(nt: NonTerminal) -> Symbol {
    Symbol::NonTerminal(nt)
}
