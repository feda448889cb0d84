//! `ID` pattern matcher and keyword promotion (§4.C, §4.D).

use crate::token::TokenKind;

/// Prefix-anchored match for `ID`: `letter (letter | digit | _)*`.
/// Letters are `[A-Za-z]`; no Unicode identifiers (§1 Non-goals).
pub fn match_id(s: &[u8]) -> usize {
    match s.first() {
        Some(c) if c.is_ascii_alphabetic() => {
            let mut n = 1;
            while s.get(n).is_some_and(|b| b.is_ascii_alphanumeric() || *b == b'_') {
                n += 1;
            }
            n
        }
        _ => 0,
    }
}

/// Looks an `ID` lexeme up in the keyword table. A hit promotes the token's
/// kind to the keyword's; the lexeme itself is unchanged.
pub fn keyword_kind(lexeme: &[u8]) -> Option<TokenKind> {
    Some(match lexeme {
        b"if" => TokenKind::If,
        b"then" => TokenKind::Then,
        b"else" => TokenKind::Else,
        b"while" => TokenKind::While,
        b"class" => TokenKind::Class,
        b"integer" => TokenKind::Integer,
        b"float" => TokenKind::Float,
        b"do" => TokenKind::Do,
        b"end" => TokenKind::End,
        b"public" => TokenKind::Public,
        b"private" => TokenKind::Private,
        b"or" => TokenKind::Or,
        b"and" => TokenKind::And,
        b"not" => TokenKind::Not,
        b"read" => TokenKind::Read,
        b"write" => TokenKind::Write,
        b"return" => TokenKind::Return,
        b"inherits" => TokenKind::Inherits,
        b"local" => TokenKind::Local,
        b"void" => TokenKind::Void,
        b"main" => TokenKind::Main,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_basic() {
        assert_eq!(match_id(b"foo123_bar baz"), 10);
    }

    #[test]
    fn id_single_letter() {
        assert_eq!(match_id(b"a"), 1);
    }

    #[test]
    fn id_cannot_start_with_digit() {
        assert_eq!(match_id(b"1abc"), 0);
    }

    #[test]
    fn id_cannot_start_with_underscore() {
        assert_eq!(match_id(b"_abc"), 0);
    }

    #[test]
    fn keyword_hit() {
        assert_eq!(keyword_kind(b"class"), Some(TokenKind::Class));
        assert_eq!(keyword_kind(b"inherits"), Some(TokenKind::Inherits));
    }

    #[test]
    fn keyword_miss_is_plain_id() {
        assert_eq!(keyword_kind(b"classroom"), None);
    }
}
