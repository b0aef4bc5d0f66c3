//! Syntactic analysis of rule files.
//!
//! Grammar, one rule per line:
//!
//! ```text
//! top           ::= (regex? EOL)* EOF
//! regex         ::= alternation
//! alternation   ::= concatenation ('|' alternation)?
//! concatenation ::= postfix concatenation?
//! postfix       ::= term ('*' | '+')?
//! term          ::= SYMBOL | CHARCLASS | '(' regex ')'
//! ```

use crate::ast::Regex;
use crate::error::{ReError, ReResult};
use crate::scanner::RegexScanner;
use crate::token::RegexToken;

/// Recursive-descent parser over a [`RegexScanner`].
pub struct RegexParser<'a> {
    scanner: RegexScanner<'a>,
    current: RegexToken,
}

impl<'a> RegexParser<'a> {
    /// Creates a parser reading tokens from `scanner`.
    pub fn new(scanner: RegexScanner<'a>) -> Self {
        Self {
            scanner,
            current: RegexToken::Eof,
        }
    }

    fn consume_token(&mut self) -> ReResult<()> {
        self.current = self.scanner.lex()?;
        Ok(())
    }

    /// Parses a newline-delimited list of rules. Empty lines are skipped.
    ///
    /// # Example
    ///
    /// ```
    /// use pylex_re::{Regex, RegexParser, RegexScanner};
    ///
    /// let rules = RegexParser::new(RegexScanner::new(b"A\n\nB*")).parse_top_level().unwrap();
    /// assert_eq!(rules, vec![Regex::Symbol(b'A'), Regex::kleene(Regex::Symbol(b'B'))]);
    /// ```
    pub fn parse_top_level(mut self) -> ReResult<Vec<Regex>> {
        let mut rules = Vec::new();

        self.consume_token()?;

        while self.current != RegexToken::Eof {
            if self.current != RegexToken::Eol {
                let rule = self.parse_regex()?;

                if !self.current.is_end() {
                    return Err(ReError::JunkAfterRegex {
                        at: self.scanner.token_start(),
                    });
                }

                rules.push(rule);
            }

            // Eat the EOL (EOF just repeats).
            self.consume_token()?;
        }

        Ok(rules)
    }

    fn parse_regex(&mut self) -> ReResult<Regex> {
        self.parse_alternation()
    }

    fn parse_term(&mut self) -> ReResult<Regex> {
        match self.current {
            RegexToken::Symbol(byte) => {
                self.consume_token()?;
                Ok(Regex::Symbol(byte))
            }
            RegexToken::CharClass(set) => {
                self.consume_token()?;
                Ok(Regex::Class(set))
            }
            RegexToken::LParen => self.parse_parenthetical(),
            _ => Err(ReError::ExpectedTerm {
                at: self.scanner.token_start(),
            }),
        }
    }

    fn parse_parenthetical(&mut self) -> ReResult<Regex> {
        debug_assert_eq!(self.current, RegexToken::LParen);
        self.consume_token()?;

        let regex = self.parse_regex()?;

        if self.current != RegexToken::RParen {
            return Err(ReError::UnmatchedParen {
                at: self.scanner.token_start(),
            });
        }
        self.consume_token()?;

        Ok(regex)
    }

    fn parse_postfix(&mut self) -> ReResult<Regex> {
        let term = self.parse_term()?;

        match self.current {
            RegexToken::Star => {
                self.consume_token()?;
                Ok(Regex::kleene(term))
            }
            RegexToken::Plus => {
                self.consume_token()?;
                Ok(Regex::plus(term))
            }
            _ => Ok(term),
        }
    }

    fn parse_concatenation(&mut self) -> ReResult<Regex> {
        let lhs = self.parse_postfix()?;

        if matches!(
            self.current,
            RegexToken::Symbol(_) | RegexToken::CharClass(_) | RegexToken::LParen
        ) {
            let rhs = self.parse_concatenation()?;
            Ok(Regex::concatenation(lhs, rhs))
        } else {
            Ok(lhs)
        }
    }

    fn parse_alternation(&mut self) -> ReResult<Regex> {
        let lhs = self.parse_concatenation()?;

        if self.current == RegexToken::Pipe {
            self.consume_token()?;
            let rhs = self.parse_alternation()?;
            Ok(Regex::alternation(lhs, rhs))
        } else {
            Ok(lhs)
        }
    }
}

/// Parses a whole rule file.
pub fn parse_rules(source: &[u8]) -> ReResult<Vec<Regex>> {
    RegexParser::new(RegexScanner::new(source)).parse_top_level()
}
