//! Parse table construction (§4.F) from FIRST/FOLLOW, with conflict
//! detection: an attempt to set an already-occupied cell to a different
//! production means the grammar is not LL(1).

use indexmap::IndexMap;
use kap_lex::TokenKind;
use kap_util::IndexVec;
use thiserror::Error;

use crate::grammar::{production_to_string, productions};
use crate::nonterminal::{NonTerminal, ALL};
use crate::sets::{FirstSets, FollowSets};
use crate::symbol::{Production, Symbol};

/// A grammar build-time defect: two alternatives of the same non-terminal
/// both claim the same lookahead terminal.
#[derive(Debug, Error)]
#[error("grammar is not LL(1): <{nonterminal}> has two productions under lookahead {terminal} ({existing} vs {incoming})")]
pub struct TableConflict {
    pub nonterminal: NonTerminal,
    pub terminal: TokenKind,
    pub existing: String,
    pub incoming: String,
}

pub struct ParseTable {
    cells: IndexVec<NonTerminal, IndexMap<TokenKind, Production>>,
}

impl ParseTable {
    pub fn build(first: &FirstSets, follow: &FollowSets) -> Result<Self, TableConflict> {
        let mut cells: IndexVec<NonTerminal, IndexMap<TokenKind, Production>> = IndexVec::new();
        for _ in ALL.iter() {
            cells.push(IndexMap::new());
        }

        for &a in ALL.iter() {
            for &p in productions(a) {
                if p.is_empty() {
                    for &term in follow.get(a) {
                        set_cell(&mut cells, a, term, p)?;
                    }
                    continue;
                }

                let mut nullable = true;
                for &sym in p {
                    match sym {
                        Symbol::Terminal(term) => {
                            set_cell(&mut cells, a, term, p)?;
                            nullable = false;
                            break;
                        }
                        Symbol::NonTerminal(b) => {
                            for &term in first.terminals(b) {
                                set_cell(&mut cells, a, term, p)?;
                            }
                            if !first.is_nullable(b) {
                                nullable = false;
                                break;
                            }
                        }
                    }
                }

                if nullable {
                    for &term in follow.get(a) {
                        set_cell(&mut cells, a, term, p)?;
                    }
                }
            }
        }

        Ok(Self { cells })
    }

    pub fn get(&self, nt: NonTerminal, lookahead: TokenKind) -> Option<Production> {
        self.cells[nt].get(&lookahead).copied()
    }
}

fn set_cell(
    cells: &mut IndexVec<NonTerminal, IndexMap<TokenKind, Production>>,
    nt: NonTerminal,
    terminal: TokenKind,
    production: Production,
) -> Result<(), TableConflict> {
    match cells[nt].get(&terminal) {
        Some(existing) if *existing != production => Err(TableConflict {
            nonterminal: nt,
            terminal,
            existing: production_to_string(existing),
            incoming: production_to_string(production),
        }),
        _ => {
            cells[nt].insert(terminal, production);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_without_conflict() {
        let first = FirstSets::build();
        let follow = FollowSets::build(&first);
        assert!(ParseTable::build(&first, &follow).is_ok());
    }

    #[test]
    fn start_table_entry_points_at_prog() {
        let first = FirstSets::build();
        let follow = FollowSets::build(&first);
        let table = ParseTable::build(&first, &follow).unwrap();
        let entry = table.get(NonTerminal::START, TokenKind::Class);
        assert!(entry.is_some());
        let entry = table.get(NonTerminal::START, TokenKind::Main);
        assert!(entry.is_some());
    }

    #[test]
    fn factor_dispatches_on_leading_token() {
        let first = FirstSets::build();
        let follow = FollowSets::build(&first);
        let table = ParseTable::build(&first, &follow).unwrap();
        assert!(table.get(NonTerminal::factor, TokenKind::IntNum).is_some());
        assert!(table.get(NonTerminal::factor, TokenKind::Id).is_some());
        assert!(table.get(NonTerminal::factor, TokenKind::Do).is_none());
    }
}
