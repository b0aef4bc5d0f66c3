//! Canonical single-line rendering of arbitrary bytes.
//!
//! Every byte maps to exactly one fragment, independent of its neighbours:
//!
//! | byte                              | fragment             |
//! |-----------------------------------|----------------------|
//! | `00 07 08 09 0a 0b 0c 0d`         | `\0 \a \b \t \n \v \f \r` |
//! | `5c` (backslash)                  | `\\`                 |
//! | `20..=7e`                         | the byte itself      |
//! | anything else                     | `\x` + two lowercase hex digits |
//!
//! The whole rendering is wrapped in single quotes. A quote inside the
//! lexeme is printed as is, so rendered lines cannot always be parsed back.

use std::fmt;
use std::io::{self, Write};

/// Opening and closing delimiter.
pub const QUOTE: u8 = b'\'';

const HEX: &[u8; 16] = b"0123456789abcdef";

/// The fragment for one byte: 1, 2 or 4 ASCII characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteEscape {
    buf: [u8; 4],
    len: u8,
}

impl ByteEscape {
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII is ever stored.
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    fn short(a: u8) -> Self {
        Self {
            buf: [a, 0, 0, 0],
            len: 1,
        }
    }

    fn pair(letter: u8) -> Self {
        Self {
            buf: [b'\\', letter, 0, 0],
            len: 2,
        }
    }

    fn hex(byte: u8) -> Self {
        Self {
            buf: [
                b'\\',
                b'x',
                HEX[(byte >> 4) as usize],
                HEX[(byte & 0x0f) as usize],
            ],
            len: 4,
        }
    }
}

/// Escapes a single byte.
pub fn escape_byte(byte: u8) -> ByteEscape {
    match byte {
        0x00 => ByteEscape::pair(b'0'),
        0x07 => ByteEscape::pair(b'a'),
        0x08 => ByteEscape::pair(b'b'),
        b'\t' => ByteEscape::pair(b't'),
        b'\n' => ByteEscape::pair(b'n'),
        0x0b => ByteEscape::pair(b'v'),
        0x0c => ByteEscape::pair(b'f'),
        b'\r' => ByteEscape::pair(b'r'),
        b'\\' => ByteEscape::pair(b'\\'),
        0x20..=0x7e => ByteEscape::short(byte),
        _ => ByteEscape::hex(byte),
    }
}

/// Displays a byte slice in its quoted, escaped form.
///
/// ```
/// use pylex_drv::Escaped;
///
/// assert_eq!(Escaped(b"it's\n").to_string(), r"'it's\n'");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Escaped<'a>(pub &'a [u8]);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("'")?;
        for &byte in self.0 {
            f.write_str(escape_byte(byte).as_str())?;
        }
        f.write_str("'")
    }
}

/// Writes the quoted, escaped form of `bytes` to `out`.
pub fn write_escaped<W: Write + ?Sized>(out: &mut W, bytes: &[u8]) -> io::Result<()> {
    out.write_all(&[QUOTE])?;
    for &byte in bytes {
        out.write_all(escape_byte(byte).as_bytes())?;
    }
    out.write_all(&[QUOTE])
}

/// Returns the quoted, escaped form of `bytes`.
pub fn escape(bytes: &[u8]) -> String {
    Escaped(bytes).to_string()
}
