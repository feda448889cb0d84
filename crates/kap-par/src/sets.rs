//! FIRST/FOLLOW fixed-point computation (§4.F), run once at grammar
//! construction and treated as immutable afterward.

use indexmap::IndexSet;
use kap_lex::TokenKind;
use kap_util::IndexVec;

use crate::grammar::productions;
use crate::nonterminal::{NonTerminal, ALL};
use crate::symbol::Symbol;

/// FIRST(A) for every non-terminal A, split into the terminal set and a
/// separate nullability flag rather than a tagged epsilon member of the
/// set itself.
pub struct FirstSets {
    terminals: IndexVec<NonTerminal, IndexSet<TokenKind>>,
    nullable: IndexVec<NonTerminal, bool>,
}

impl FirstSets {
    pub fn build() -> Self {
        let mut terminals: IndexVec<NonTerminal, IndexSet<TokenKind>> = IndexVec::new();
        let mut nullable: IndexVec<NonTerminal, bool> = IndexVec::new();
        for _ in ALL.iter() {
            terminals.push(IndexSet::new());
            nullable.push(false);
        }

        let mut changed = true;
        while changed {
            changed = false;

            for &a in ALL.iter() {
                for &p in productions(a) {
                    if p.is_empty() {
                        changed |= !std::mem::replace(&mut nullable[a], true);
                        continue;
                    }

                    let mut all_nullable = true;
                    for &sym in p {
                        match sym {
                            Symbol::Terminal(kind) => {
                                changed |= terminals[a].insert(kind);
                                all_nullable = false;
                                break;
                            }
                            Symbol::NonTerminal(b) => {
                                let additions: Vec<TokenKind> =
                                    terminals[b].iter().copied().collect();
                                for kind in additions {
                                    changed |= terminals[a].insert(kind);
                                }
                                if !nullable[b] {
                                    all_nullable = false;
                                    break;
                                }
                            }
                        }
                    }

                    if all_nullable {
                        changed |= !std::mem::replace(&mut nullable[a], true);
                    }
                }
            }
        }

        Self { terminals, nullable }
    }

    pub fn terminals(&self, nt: NonTerminal) -> &IndexSet<TokenKind> {
        &self.terminals[nt]
    }

    pub fn is_nullable(&self, nt: NonTerminal) -> bool {
        self.nullable[nt]
    }

    /// FIRST of a whole right-hand side: terminals reachable before the
    /// first non-nullable symbol, plus whether the entire sequence is
    /// nullable (every symbol nullable, or the sequence is empty).
    pub fn first_of_sequence(&self, seq: &[Symbol]) -> (IndexSet<TokenKind>, bool) {
        let mut out = IndexSet::new();
        for &sym in seq {
            match sym {
                Symbol::Terminal(kind) => {
                    out.insert(kind);
                    return (out, false);
                }
                Symbol::NonTerminal(b) => {
                    out.extend(self.terminals[b].iter().copied());
                    if !self.nullable[b] {
                        return (out, false);
                    }
                }
            }
        }
        (out, true)
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        for &nt in ALL.iter() {
            out.push_str(&format!("FIRST(<{}>)= [", nt.name()));
            let mut parts: Vec<String> =
                self.terminals[nt].iter().map(|t| format_terminal(*t)).collect();
            if self.nullable[nt] {
                parts.push("EPSILON".to_string());
            }
            out.push_str(&parts.join(", "));
            out.push_str("]\n");
        }
        out
    }
}

/// FOLLOW(A) for every non-terminal A. Seeded with `FOLLOW(START) = {$}`.
pub struct FollowSets {
    sets: IndexVec<NonTerminal, IndexSet<TokenKind>>,
}

impl FollowSets {
    pub fn build(first: &FirstSets) -> Self {
        let mut sets: IndexVec<NonTerminal, IndexSet<TokenKind>> = IndexVec::new();
        for _ in ALL.iter() {
            sets.push(IndexSet::new());
        }
        sets[NonTerminal::START].insert(TokenKind::Eof);

        let mut changed = true;
        while changed {
            changed = false;

            for &a in ALL.iter() {
                for &p in productions(a) {
                    for i in 0..p.len() {
                        let Symbol::NonTerminal(b) = p[i] else { continue };

                        let (suffix_first, suffix_nullable) = first.first_of_sequence(&p[i + 1..]);
                        for kind in suffix_first {
                            changed |= sets[b].insert(kind);
                        }

                        if suffix_nullable {
                            let a_follow: Vec<TokenKind> = sets[a].iter().copied().collect();
                            for kind in a_follow {
                                changed |= sets[b].insert(kind);
                            }
                        }
                    }
                }
            }
        }

        Self { sets }
    }

    pub fn get(&self, nt: NonTerminal) -> &IndexSet<TokenKind> {
        &self.sets[nt]
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        for &nt in ALL.iter() {
            out.push_str(&format!("FOLLOW(<{}>)= [", nt.name()));
            let parts: Vec<String> = self.sets[nt].iter().map(|t| format_terminal(*t)).collect();
            out.push_str(&parts.join(", "));
            out.push_str("]\n");
        }
        out
    }
}

fn format_terminal(kind: TokenKind) -> String {
    if kind == TokenKind::Eof {
        kind.as_str().to_string()
    } else {
        format!("'{}'", kind.as_str())
    }
}
