//! 5-bit word type and the Bech32 character set.

use crate::error::Bech32Error;

/// The 32-symbol Bech32 alphabet, indexed by word value.
pub const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Reverse lookup from lowercase ASCII to word value; -1 for non-members.
const CHARSET_REV: [i8; 128] = {
    let mut rev = [-1i8; 128];
    let mut i = 0;
    while i < CHARSET.len() {
        rev[CHARSET[i] as usize] = i as i8;
        i += 1;
    }
    rev
};

/// A 5-bit value (0..32), one symbol of a Bech32 data part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Word(u8);

impl Word {
    pub const ZERO: Word = Word(0);

    /// Returns `None` if `value` does not fit in 5 bits.
    pub const fn new(value: u8) -> Option<Self> {
        if value < 32 {
            Some(Word(value))
        } else {
            None
        }
    }

    /// Keeps only the low 5 bits of `value`.
    pub const fn from_u8_masked(value: u8) -> Self {
        Word(value & 0x1f)
    }

    pub const fn to_u8(self) -> u8 {
        self.0
    }

    /// The charset symbol for this word (always lowercase).
    pub fn to_char(self) -> char {
        CHARSET[self.0 as usize] as char
    }

    /// Looks up a lowercase charset symbol.
    pub fn from_char(c: char) -> Option<Self> {
        if !c.is_ascii() {
            return None;
        }
        match CHARSET_REV[c as usize] {
            -1 => None,
            v => Some(Word(v as u8)),
        }
    }
}

impl TryFrom<u8> for Word {
    type Error = Bech32Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Word::new(value).ok_or(Bech32Error::InvalidWord(value))
    }
}

impl From<Word> for u8 {
    fn from(w: Word) -> u8 {
        w.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charset_round_trip() {
        for v in 0..32u8 {
            let w = Word::new(v).unwrap();
            assert_eq!(Word::from_char(w.to_char()), Some(w));
        }
    }

    #[test]
    fn test_excluded_symbols() {
        // '1', 'b', 'i', 'o' are not in the alphabet
        for c in ['1', 'b', 'i', 'o', 'Q', '\u{e9}'] {
            assert_eq!(Word::from_char(c), None);
        }
    }

    #[test]
    fn test_out_of_range() {
        assert!(Word::new(32).is_none());
        assert_eq!(Word::try_from(40u8), Err(Bech32Error::InvalidWord(40)));
        assert_eq!(Word::from_u8_masked(0xff).to_u8(), 31);
    }
}
