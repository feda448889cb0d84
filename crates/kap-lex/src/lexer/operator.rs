//! Operator/punctuator table (§4.D): walked in declared order, first prefix
//! match wins. Ordered by descending lexeme length so `==` beats `=`, `<=`
//! beats `<`, `<>` (which shares a first byte with `<`) is listed before
//! `<`, `::` before `:`, and `>=` before `>`.

use crate::token::TokenKind;

const OPERATORS: &[(&[u8], TokenKind)] = &[
    (b"==", TokenKind::Equal),
    (b"<>", TokenKind::NotEqual),
    (b"<=", TokenKind::LessEqual),
    (b">=", TokenKind::GreaterEqual),
    (b"::", TokenKind::DoubleColon),
    (b"<", TokenKind::LessThan),
    (b">", TokenKind::GreaterThan),
    (b"+", TokenKind::Plus),
    (b"-", TokenKind::Minus),
    (b"*", TokenKind::Multiply),
    (b"/", TokenKind::Divide),
    (b"=", TokenKind::Assign),
    (b"(", TokenKind::OpenParen),
    (b")", TokenKind::CloseParen),
    (b"{", TokenKind::OpenBrace),
    (b"}", TokenKind::CloseBrace),
    (b"[", TokenKind::OpenBracket),
    (b"]", TokenKind::CloseBracket),
    (b";", TokenKind::Semicolon),
    (b",", TokenKind::Comma),
    (b".", TokenKind::Dot),
    (b":", TokenKind::Colon),
];

/// Returns the first operator in the table whose spelling is a prefix of
/// `s`, along with its byte length.
pub fn match_operator(s: &[u8]) -> Option<(usize, TokenKind)> {
    OPERATORS
        .iter()
        .find(|(spelling, _)| s.starts_with(spelling))
        .map(|(spelling, kind)| (spelling.len(), *kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_beats_assign() {
        assert_eq!(match_operator(b"==x"), Some((2, TokenKind::Equal)));
    }

    #[test]
    fn not_equal_beats_less_than() {
        assert_eq!(match_operator(b"<>x"), Some((2, TokenKind::NotEqual)));
    }

    #[test]
    fn less_equal_beats_less_than() {
        assert_eq!(match_operator(b"<=x"), Some((2, TokenKind::LessEqual)));
    }

    #[test]
    fn double_colon_beats_colon() {
        assert_eq!(match_operator(b"::x"), Some((2, TokenKind::DoubleColon)));
    }

    #[test]
    fn priority_sequence() {
        let input = b"<= < <> <==";
        let mut ops = Vec::new();
        let mut s: &[u8] = input;
        loop {
            while s.first() == Some(&b' ') {
                s = &s[1..];
            }
            if s.is_empty() {
                break;
            }
            let (len, kind) = match_operator(s).unwrap();
            ops.push(kind);
            s = &s[len..];
        }
        assert_eq!(
            ops,
            vec![
                TokenKind::LessEqual,
                TokenKind::LessThan,
                TokenKind::NotEqual,
                TokenKind::LessEqual,
                TokenKind::Assign,
            ]
        );
    }

    #[test]
    fn no_match() {
        assert_eq!(match_operator(b"@"), None);
    }
}
