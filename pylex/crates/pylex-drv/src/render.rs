//! The render loop.

use std::io::{self, Write};

use crate::escape::write_escaped;
use crate::token::TokenSource;

/// Renders every token of `source` to `out`, one line each:
///
/// ```text
/// <category>: '<escaped lexeme>'
/// ```
///
/// Stops at the first `None` and returns the number of lines written. Each
/// token is dropped before the next one is requested. Only write errors on
/// `out` are reported.
pub fn render_tokens<S, W>(mut source: S, out: &mut W) -> io::Result<usize>
where
    S: TokenSource,
    W: Write + ?Sized,
{
    let mut lines = 0;

    while let Some(token) = source.next_token() {
        write!(out, "{}: ", token.category)?;
        write_escaped(out, token.lexeme.as_ref())?;
        out.write_all(b"\n")?;
        lines += 1;
    }

    out.flush()?;
    tracing::debug!(lines, "token stream ended");
    Ok(lines)
}
