//! Greedy table-driven scanner.
//!
//! Each call to [`Scanner::scan`] follows the table from the start state as
//! far as the input allows, then backs up to the last accepting position.
//! Bytes read past that point are pushed back and seen again by the next
//! call.

use std::collections::VecDeque;
use std::io::{self, BufRead};

use crate::error::ScanError;
use crate::table::ScannerTable;
use crate::Category;

/// One recognized token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedToken {
    /// Rule number that matched.
    pub category: Category,
    /// The matched bytes, never empty.
    pub lexeme: Vec<u8>,
}

/// Scans a byte stream with a [`ScannerTable`].
pub struct Scanner<R> {
    table: ScannerTable,
    input: R,
    pushback: VecDeque<u8>,
    offset: u64,
}

impl<R: BufRead> Scanner<R> {
    /// Creates a scanner reading from `input`.
    pub fn new(table: ScannerTable, input: R) -> Self {
        Self {
            table,
            input,
            pushback: VecDeque::new(),
            offset: 0,
        }
    }

    /// Byte offset of the next token.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// The table driving this scanner.
    pub fn table(&self) -> &ScannerTable {
        &self.table
    }

    /// Scans the longest token at the current position.
    ///
    /// Returns `Ok(None)` once the input is exhausted. On
    /// [`ScanError::NoMatch`] the offending bytes stay unread, so scanning
    /// again reports the same error.
    pub fn scan(&mut self) -> Result<Option<ScannedToken>, ScanError> {
        let mut lexeme = Vec::new();
        let mut state = 0;
        let mut last_accept: Option<(usize, Category)> = None;

        while let Some(byte) = self.read_byte()? {
            lexeme.push(byte);
            match self.table.next_state(state, byte) {
                Some(next) => state = next,
                None => break,
            }
            if let Some(category) = self.table.accepting(state) {
                last_accept = Some((lexeme.len(), category));
            }
        }

        if lexeme.is_empty() {
            return Ok(None);
        }

        match last_accept {
            Some((length, category)) => {
                let rest = lexeme.split_off(length);
                self.unread(rest);
                self.offset += length as u64;
                Ok(Some(ScannedToken { category, lexeme }))
            }
            None => {
                let byte = lexeme[0];
                self.unread(lexeme);
                Err(ScanError::NoMatch {
                    offset: self.offset,
                    byte,
                })
            }
        }
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(byte) = self.pushback.pop_front() {
            return Ok(Some(byte));
        }

        loop {
            match self.input.fill_buf() {
                Ok([]) => return Ok(None),
                Ok(buf) => {
                    let byte = buf[0];
                    self.input.consume(1);
                    return Ok(Some(byte));
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn unread(&mut self, bytes: Vec<u8>) {
        for byte in bytes.into_iter().rev() {
            self.pushback.push_front(byte);
        }
    }
}

impl<R: BufRead> Iterator for Scanner<R> {
    type Item = Result<ScannedToken, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.scan().transpose()
    }
}
