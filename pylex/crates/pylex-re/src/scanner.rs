//! Lexical analysis of rule files.
//!
//! [`RegexScanner`] turns the bytes of a rule file into [`RegexToken`]s.
//! Every byte that is not a metacharacter is a symbol of the alphabet;
//! escape sequences and bracketed classes are resolved here so the parser
//! only sees symbols and byte sets.

use std::io::Write;

use crate::byteset::ByteSet;
use crate::cursor::{Cursor, Position};
use crate::error::{ReError, ReResult};
use crate::token::RegexToken;

/// Maps the letter after `\` to the control byte it names.
fn escape_to_byte(letter: u8) -> Option<u8> {
    match letter {
        b'0' => Some(0x00),
        b'a' => Some(0x07),
        b'b' => Some(0x08),
        b't' => Some(b'\t'),
        b'n' => Some(b'\n'),
        b'v' => Some(0x0b),
        b'f' => Some(0x0c),
        b'r' => Some(b'\r'),
        _ => None,
    }
}

/// A scanner over the bytes of a rule file.
///
/// # Example
///
/// ```
/// use pylex_re::{RegexScanner, RegexToken};
///
/// let mut scanner = RegexScanner::new(b"a*\n");
/// assert_eq!(scanner.lex().unwrap(), RegexToken::Symbol(b'a'));
/// assert_eq!(scanner.lex().unwrap(), RegexToken::Star);
/// assert_eq!(scanner.lex().unwrap(), RegexToken::Eol);
/// assert_eq!(scanner.lex().unwrap(), RegexToken::Eof);
/// ```
pub struct RegexScanner<'a> {
    /// Byte cursor over the rule source.
    cursor: Cursor<'a>,

    /// Optional sink receiving a log of every lexed token.
    log: Option<&'a mut dyn Write>,

    /// Position where the most recent token started.
    token_start: Position,
}

impl<'a> RegexScanner<'a> {
    /// Creates a scanner over `source`.
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(source),
            log: None,
            token_start: Position { line: 1, column: 1 },
        }
    }

    /// Creates a scanner that also writes every token it produces to `log`.
    ///
    /// Tokens are separated by spaces; `EOL` and `EOF` end a log line.
    pub fn with_log(source: &'a [u8], log: &'a mut dyn Write) -> Self {
        Self {
            log: Some(log),
            ..Self::new(source)
        }
    }

    /// Position where the most recently lexed token started.
    pub fn token_start(&self) -> Position {
        self.token_start
    }

    /// Lexes a single token.
    ///
    /// At end of input this returns [`RegexToken::Eof`], and keeps doing so
    /// on every later call.
    pub fn lex(&mut self) -> ReResult<RegexToken> {
        self.token_start = self.cursor.position();

        let token = match self.cursor.bump() {
            None => RegexToken::Eof,
            Some(b'\n') => RegexToken::Eol,
            Some(b'*') => RegexToken::Star,
            Some(b'+') => RegexToken::Plus,
            Some(b'|') => RegexToken::Pipe,
            Some(b'(') => RegexToken::LParen,
            Some(b')') => RegexToken::RParen,
            Some(b'\\') => self.lex_escape_sequence()?,
            Some(b'[') => self.lex_char_class()?,
            Some(byte) => RegexToken::Symbol(byte),
        };

        if let Some(log) = self.log.as_mut() {
            let end = if token.is_end() { "\n" } else { " " };
            write!(log, "{}{}", token, end)?;
        }

        Ok(token)
    }

    /// Lexes an escape sequence; the backslash is already consumed.
    fn lex_escape_sequence(&mut self) -> ReResult<RegexToken> {
        match self.cursor.bump() {
            None => Err(ReError::TrailingBackslash {
                at: self.token_start,
            }),
            Some(letter) => Ok(RegexToken::Symbol(escape_to_byte(letter).unwrap_or(letter))),
        }
    }

    /// Lexes a character class; the opening bracket is already consumed.
    ///
    /// A `]` right after `[` or `[^` is literal, as is a `-` at either end
    /// of the class. Bytes inside a class are never escapes.
    fn lex_char_class(&mut self) -> ReResult<RegexToken> {
        let mut members = ByteSet::new();

        let mut current = self.cursor.bump();
        let inverted = current == Some(b'^');
        if inverted {
            current = self.cursor.bump();
        }

        if current == Some(b']') {
            members.insert(b']');
            current = self.cursor.bump();
        }

        let mut range_start: Option<u8> = None;
        let mut previous: Option<u8> = None;

        loop {
            let byte = match current {
                None => {
                    return Err(ReError::UnmatchedBracket {
                        at: self.token_start,
                    })
                }
                Some(b']') => break,
                Some(byte) => byte,
            };

            if byte == b'-' {
                match previous {
                    Some(prev) => range_start = Some(prev),
                    None => members.insert(b'-'),
                }
            } else if let Some(start) = range_start.take() {
                if byte < start {
                    return Err(ReError::InvalidRangeEnd {
                        at: self.cursor.position(),
                    });
                }
                members.insert_range(start, byte);
            } else {
                members.insert(byte);
            }

            previous = Some(byte);
            current = self.cursor.bump();
        }

        if previous == Some(b'-') {
            if let Some(start) = range_start {
                members.insert(start);
            }
            members.insert(b'-');
        }

        if inverted {
            Ok(RegexToken::CharClass(members.complement()))
        } else {
            Ok(RegexToken::CharClass(members))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(source: &[u8]) -> Vec<RegexToken> {
        let mut scanner = RegexScanner::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = scanner.lex().unwrap();
            if token == RegexToken::Eof {
                break;
            }
            tokens.push(token);
        }
        tokens
    }

    fn class(source: &[u8]) -> ByteSet {
        match RegexScanner::new(source).lex().unwrap() {
            RegexToken::CharClass(set) => set,
            other => panic!("Expected CharClass, got {:?}", other),
        }
    }

    #[test]
    fn test_eof_repeats() {
        let mut scanner = RegexScanner::new(b"");
        assert_eq!(scanner.lex().unwrap(), RegexToken::Eof);
        assert_eq!(scanner.lex().unwrap(), RegexToken::Eof);
        assert_eq!(scanner.lex().unwrap(), RegexToken::Eof);
    }

    #[test]
    fn test_eol() {
        assert_eq!(lex_all(b"\n\n"), vec![RegexToken::Eol, RegexToken::Eol]);
    }

    #[test]
    fn test_chars() {
        assert_eq!(
            lex_all(b"abc"),
            vec![
                RegexToken::Symbol(b'a'),
                RegexToken::Symbol(b'b'),
                RegexToken::Symbol(b'c'),
            ]
        );
    }

    #[test]
    fn test_metacharacters() {
        assert_eq!(
            lex_all(b"*+|()"),
            vec![
                RegexToken::Star,
                RegexToken::Plus,
                RegexToken::Pipe,
                RegexToken::LParen,
                RegexToken::RParen,
            ]
        );
    }

    #[test]
    fn test_parens_unbalanced_still_lex() {
        assert_eq!(
            lex_all(b")(("),
            vec![RegexToken::RParen, RegexToken::LParen, RegexToken::LParen]
        );
    }

    #[test]
    fn test_escape_sequences() {
        let expected: Vec<_> = b"\0\x07\x08\t\n\x0b\x0c\r\\"
            .iter()
            .map(|&b| RegexToken::Symbol(b))
            .collect();
        assert_eq!(lex_all(br"\0\a\b\t\n\v\f\r\\"), expected);
    }

    #[test]
    fn test_escape_metachars() {
        let expected: Vec<_> = b"*+|()[".iter().map(|&b| RegexToken::Symbol(b)).collect();
        assert_eq!(lex_all(br"\*\+\|\(\)\["), expected);
    }

    #[test]
    fn test_trailing_backslash() {
        let mut scanner = RegexScanner::new(b"\\");
        assert!(matches!(
            scanner.lex(),
            Err(ReError::TrailingBackslash { .. })
        ));
    }

    #[test]
    fn test_char_class_simple() {
        let set = class(b"[abc]");
        assert_eq!(set, b"abc".iter().copied().collect());
    }

    #[test]
    fn test_char_class_range() {
        assert_eq!(class(b"[a-z]"), ByteSet::range(b'a', b'z'));
        assert_eq!(
            class(b"[a-cx-z]"),
            ByteSet::range(b'a', b'c').union(&ByteSet::range(b'x', b'z'))
        );
    }

    #[test]
    fn test_char_class_inverted() {
        let set = class(b"[^a]");
        assert_eq!(set.len(), 255);
        assert!(!set.contains(b'a'));
        assert!(set.contains(b'\n'));
        assert!(set.contains(0xff));
    }

    #[test]
    fn test_char_class_leading_bracket_is_literal() {
        assert_eq!(class(b"[]a]"), b"]a".iter().copied().collect());
        assert_eq!(class(b"[^]]"), ByteSet::single(b']').complement());
    }

    #[test]
    fn test_char_class_leading_and_trailing_hyphen() {
        assert_eq!(class(b"[-a]"), b"-a".iter().copied().collect());
        assert_eq!(class(b"[a-]"), b"a-".iter().copied().collect());
    }

    #[test]
    fn test_char_class_hyphen_after_bracket() {
        assert_eq!(class(b"[]-]"), b"]-".iter().copied().collect());
    }

    #[test]
    fn test_char_class_no_escapes() {
        assert_eq!(class(br"[\t]"), b"\\t".iter().copied().collect());
    }

    #[test]
    fn test_char_class_invalid_range() {
        let mut scanner = RegexScanner::new(b"[z-a]");
        assert!(matches!(scanner.lex(), Err(ReError::InvalidRangeEnd { .. })));
    }

    #[test]
    fn test_char_class_unmatched() {
        for source in [&b"["[..], &b"[^"[..], &b"[abc"[..], &b"[]"[..]] {
            let mut scanner = RegexScanner::new(source);
            assert!(
                matches!(scanner.lex(), Err(ReError::UnmatchedBracket { .. })),
                "source {:?}",
                source
            );
        }
    }

    #[test]
    fn test_token_log() {
        let mut log = Vec::new();
        {
            let mut scanner = RegexScanner::with_log(b"a|b\n", &mut log);
            while scanner.lex().unwrap() != RegexToken::Eof {}
        }
        assert_eq!(
            String::from_utf8(log).unwrap(),
            "SYMBOL('a') PIPE SYMBOL('b') EOL\nEOF\n"
        );
    }

    #[test]
    fn test_token_start_position() {
        let mut scanner = RegexScanner::new(b"a\nbc");
        scanner.lex().unwrap();
        scanner.lex().unwrap();
        scanner.lex().unwrap();
        assert_eq!(scanner.token_start(), Position { line: 2, column: 1 });
        scanner.lex().unwrap();
        assert_eq!(scanner.token_start(), Position { line: 2, column: 2 });
    }
}
