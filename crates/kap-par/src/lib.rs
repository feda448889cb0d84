//! LL(1) predictive parsing: grammar, FIRST/FOLLOW, parse-table
//! construction, and the stack-based acceptance driver (§4).
//!
//! ```
//! use std::sync::Arc;
//! use kap_util::SourceFile;
//! use kap_par::{Grammar, Parser};
//!
//! let grammar = Grammar::build().expect("grammar is LL(1)");
//! let source = Arc::new(SourceFile::from_bytes(0, "main.src", b"main do end;".to_vec()));
//! let parser = Parser::open(&grammar, source);
//! assert!(parser.parse().is_ok());
//! ```

pub mod diagnostics;
pub mod grammar;
pub mod nonterminal;
pub mod parser;
pub mod sets;
pub mod symbol;
pub mod table;

pub use nonterminal::NonTerminal;
pub use parser::Parser;
pub use sets::{FirstSets, FollowSets};
pub use symbol::{Production, Symbol};
pub use table::{ParseTable, TableConflict};

use sets::{FirstSets as First, FollowSets as Follow};

/// The compiled grammar: FIRST/FOLLOW sets and the parse table they
/// produce, built once and reused across every file in a run.
pub struct Grammar {
    first: First,
    follow: Follow,
    table: ParseTable,
}

impl Grammar {
    /// Runs the FIRST/FOLLOW fixed-point and builds the parse table. Fails
    /// only if the grammar is not LL(1), which for this fixed grammar would
    /// be a build-time defect rather than anything data-dependent.
    pub fn build() -> Result<Self, TableConflict> {
        let first = First::build();
        let follow = Follow::build(&first);
        let table = ParseTable::build(&first, &follow)?;
        Ok(Self { first, follow, table })
    }

    pub fn table(&self) -> &ParseTable {
        &self.table
    }

    /// Textual FIRST-set dump, one `FIRST(<name>)= [...]` line per
    /// non-terminal, for tooling that wants to inspect the built grammar.
    pub fn get_first_set(&self) -> String {
        self.first.dump()
    }

    /// Textual FOLLOW-set dump, same shape as [`Grammar::get_first_set`].
    pub fn get_follow_set(&self) -> String {
        self.follow.dump()
    }
}
