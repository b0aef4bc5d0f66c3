//! Table scanners as token sources.

use std::io::BufRead;

use pylex_fa::Scanner;

use crate::token::{Token, TokenSource};

/// A lexical error ends the stream like end of input does; the error is
/// logged so the two can still be told apart from stderr.
impl<R: BufRead> TokenSource for Scanner<R> {
    type Lexeme = Vec<u8>;

    fn next_token(&mut self) -> Option<Token> {
        match self.scan() {
            Ok(Some(token)) => {
                tracing::trace!(category = token.category, len = token.lexeme.len(), "token");
                Some(Token::new(token.category, token.lexeme))
            }
            Ok(None) => {
                tracing::debug!(offset = self.offset(), "end of input");
                None
            }
            Err(error) => {
                tracing::warn!(%error, "stopping at lexical error");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_tokens;
    use pylex_fa::compile;
    use pylex_re::parse_rules;

    fn scanner(rules: &[u8], input: &'static [u8]) -> Scanner<&'static [u8]> {
        Scanner::new(compile(&parse_rules(rules).unwrap(), true).unwrap(), input)
    }

    #[test]
    fn test_yields_scanned_tokens() {
        let mut source = scanner(b"[a-z]+\n[0-9]+", b"ab12");
        assert_eq!(source.next_token(), Some(Token::new(1, b"ab".to_vec())));
        assert_eq!(source.next_token(), Some(Token::new(2, b"12".to_vec())));
        assert_eq!(source.next_token(), None);
    }

    #[test]
    fn test_lexical_error_is_sentinel() {
        let mut source = scanner(b"a", b"a?a");
        assert!(source.next_token().is_some());
        assert_eq!(source.next_token(), None);
    }

    #[test]
    fn test_renders_until_error() {
        let mut out = Vec::new();
        let lines = render_tokens(scanner(b"[a-z]+\n ", b"ab cd !ef"), &mut out).unwrap();
        assert_eq!(lines, 4);
        assert_eq!(out, b"1: 'ab'\n2: ' '\n1: 'cd'\n2: ' '\n");
    }
}
