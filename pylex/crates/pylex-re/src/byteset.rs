//! Sets of input bytes.
//!
//! The scanner alphabet is every byte value `0..=255`. Character classes and
//! automaton transitions are both expressed as a [`ByteSet`], a 256-bit
//! bitmap.

use std::fmt;

/// A set of byte values.
///
/// # Example
///
/// ```
/// use pylex_re::ByteSet;
///
/// let digits = ByteSet::range(b'0', b'9');
/// assert!(digits.contains(b'7'));
/// assert!(!digits.contains(b'a'));
/// assert_eq!(digits.len(), 10);
/// assert_eq!(digits.complement().len(), 246);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ByteSet {
    bits: [u64; 4],
}

impl ByteSet {
    /// The empty set.
    pub const EMPTY: ByteSet = ByteSet { bits: [0; 4] };

    /// The full alphabet.
    pub const FULL: ByteSet = ByteSet {
        bits: [u64::MAX; 4],
    };

    /// Creates an empty set.
    pub fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set holding exactly `byte`.
    pub fn single(byte: u8) -> Self {
        let mut set = Self::EMPTY;
        set.insert(byte);
        set
    }

    /// Creates the inclusive range `start..=end`. Empty if `end < start`.
    pub fn range(start: u8, end: u8) -> Self {
        let mut set = Self::EMPTY;
        set.insert_range(start, end);
        set
    }

    /// Adds `byte` to the set.
    #[inline]
    pub fn insert(&mut self, byte: u8) {
        self.bits[usize::from(byte >> 6)] |= 1 << (byte & 63);
    }

    /// Adds every byte in `start..=end`.
    pub fn insert_range(&mut self, start: u8, end: u8) {
        for byte in start..=end {
            self.insert(byte);
        }
    }

    /// Returns true if `byte` is in the set.
    #[inline]
    pub fn contains(&self, byte: u8) -> bool {
        self.bits[usize::from(byte >> 6)] & (1 << (byte & 63)) != 0
    }

    /// Number of bytes in the set.
    pub fn len(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns true if the set holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&w| w == 0)
    }

    /// Every byte not in this set.
    pub fn complement(&self) -> Self {
        let mut bits = self.bits;
        for word in &mut bits {
            *word = !*word;
        }
        Self { bits }
    }

    /// Bytes in either set.
    pub fn union(&self, other: &ByteSet) -> Self {
        let mut bits = self.bits;
        for (word, other) in bits.iter_mut().zip(other.bits) {
            *word |= other;
        }
        Self { bits }
    }

    /// Iterates over the members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(move |&b| self.contains(b))
    }

    /// Groups the members into maximal inclusive runs.
    pub fn ranges(&self) -> Vec<(u8, u8)> {
        let mut ranges: Vec<(u8, u8)> = Vec::new();
        for byte in self.iter() {
            match ranges.last_mut() {
                Some((_, end)) if end.checked_add(1) == Some(byte) => *end = byte,
                _ => ranges.push((byte, byte)),
            }
        }
        ranges
    }
}

impl FromIterator<u8> for ByteSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = ByteSet::EMPTY;
        for byte in iter {
            set.insert(byte);
        }
        set
    }
}

/// Renders the set in class syntax, e.g. `[0-9_a-z]`.
impl fmt::Display for ByteSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (start, end) in self.ranges() {
            write!(f, "{}", start.escape_ascii())?;
            if end > start {
                write!(f, "-{}", end.escape_ascii())?;
            }
        }
        f.write_str("]")
    }
}

impl fmt::Debug for ByteSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteSet({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains_every_word() {
        let mut set = ByteSet::new();
        for byte in [0u8, 63, 64, 127, 128, 191, 192, 255] {
            set.insert(byte);
            assert!(set.contains(byte));
        }
        assert_eq!(set.len(), 8);
        assert!(!set.contains(1));
    }

    #[test]
    fn test_complement_of_empty_is_full() {
        assert_eq!(ByteSet::EMPTY.complement(), ByteSet::FULL);
        assert_eq!(ByteSet::FULL.len(), 256);
        assert!(ByteSet::FULL.complement().is_empty());
    }

    #[test]
    fn test_reversed_range_is_empty() {
        assert!(ByteSet::range(b'z', b'a').is_empty());
    }

    #[test]
    fn test_ranges_merge_adjacent_bytes() {
        let set: ByteSet = b"abcxz_".iter().copied().collect();
        assert_eq!(
            set.ranges(),
            vec![(b'_', b'_'), (b'a', b'c'), (b'x', b'x'), (b'z', b'z')]
        );
    }

    #[test]
    fn test_ranges_reach_255() {
        let set = ByteSet::range(250, 255);
        assert_eq!(set.ranges(), vec![(250, 255)]);
    }

    #[test]
    fn test_display() {
        let set = ByteSet::range(b'0', b'9').union(&ByteSet::single(b'\n'));
        assert_eq!(set.to_string(), "[\\n0-9]");
    }
}
