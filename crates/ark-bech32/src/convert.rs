//! Bit-group repacking between bytes and 5-bit words.

use crate::error::Bech32Error;
use crate::word::Word;

/// Regroup `data` from `from`-bit units into `to`-bit units, MSB first.
///
/// With `pad`, a trailing partial group is filled with zero bits. Without it,
/// leftover bits must number fewer than `from` and be all zero.
pub fn convert_bits(data: &[u8], from: u32, to: u32, pad: bool) -> Result<Vec<u8>, Bech32Error> {
    debug_assert!((1..=8).contains(&from) && (1..=8).contains(&to));

    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let maxv: u32 = (1 << to) - 1;
    let max_acc: u32 = (1 << (from + to - 1)) - 1;
    let mut out = Vec::with_capacity((data.len() * from as usize).div_ceil(to as usize));

    for &value in data {
        if (value as u32) >> from != 0 {
            return Err(Bech32Error::InvalidWord(value));
        }
        acc = ((acc << from) | value as u32) & max_acc;
        bits += from;
        while bits >= to {
            bits -= to;
            out.push(((acc >> bits) & maxv) as u8);
        }
    }

    if pad {
        if bits > 0 {
            out.push(((acc << (to - bits)) & maxv) as u8);
        }
    } else if bits >= from || ((acc << (to - bits)) & maxv) != 0 {
        return Err(Bech32Error::InvalidPadding);
    }

    Ok(out)
}

/// Repack bytes into 5-bit words, zero-padding the last word.
pub fn bytes_to_words(bytes: &[u8]) -> Vec<Word> {
    let mut words = Vec::with_capacity((bytes.len() * 8).div_ceil(5));
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;

    for &b in bytes {
        acc = (acc << 8) | b as u32;
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            words.push(Word::from_u8_masked((acc >> bits) as u8));
        }
        acc &= (1 << bits) - 1;
    }
    if bits > 0 {
        words.push(Word::from_u8_masked((acc << (5 - bits)) as u8));
    }

    words
}

/// Repack 5-bit words into bytes.
///
/// Fails with [`Bech32Error::InvalidPadding`] when the padding is not a
/// clean zero tail shorter than one word.
pub fn words_to_bytes(words: &[Word]) -> Result<Vec<u8>, Bech32Error> {
    let raw: Vec<u8> = words.iter().map(|w| w.to_u8()).collect();
    convert_bits(&raw, 5, 8, false)
}
