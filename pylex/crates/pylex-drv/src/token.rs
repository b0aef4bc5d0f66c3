//! Tokens and the capability that produces them.

/// A classified fragment of input.
///
/// The lexeme type is generic so tests can observe when a token's storage
/// is released; real sources use owned byte vectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<L = Vec<u8>> {
    /// Opaque category code chosen by the source.
    pub category: i32,
    /// The bytes that formed the token; may be empty or contain NUL.
    pub lexeme: L,
}

impl<L> Token<L> {
    pub fn new(category: i32, lexeme: L) -> Self {
        Self { category, lexeme }
    }
}

/// Something that yields tokens one at a time.
///
/// Each call hands the caller exclusive ownership of one token. `None` means
/// no further token is available, either because the input is exhausted or
/// because the source hit a lexical error; the two are not distinguished.
pub trait TokenSource {
    /// Storage of a lexeme.
    type Lexeme: AsRef<[u8]>;

    /// Produces the next token, or `None` when the stream is over.
    fn next_token(&mut self) -> Option<Token<Self::Lexeme>>;
}

impl<S: TokenSource + ?Sized> TokenSource for &mut S {
    type Lexeme = S::Lexeme;

    fn next_token(&mut self) -> Option<Token<Self::Lexeme>> {
        (**self).next_token()
    }
}
