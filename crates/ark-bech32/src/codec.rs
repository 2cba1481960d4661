//! String-level encoder and decoder.
//!
//! Assembles `hrp ‖ '1' ‖ data ‖ checksum` and splits it back apart. The
//! maximum total length is always supplied by the caller: formats with long
//! payloads raise it above the conventional [`DEFAULT_MAX_LENGTH`].

use crate::checksum::{create_checksum, detect_variant, verify_checksum, Variant, CHECKSUM_LEN};
use crate::convert::words_to_bytes;
use crate::error::Bech32Error;
use crate::hrp::{expand_hrp, validate_hrp};
use crate::word::Word;

/// Separator between the human-readable part and the data part.
pub const SEPARATOR: char = '1';

/// Length limit from BIP-173, suitable for segwit-sized payloads.
pub const DEFAULT_MAX_LENGTH: usize = 90;

/// Result of a successful decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// Lowercase human-readable part.
    pub hrp: String,
    /// Data words with the checksum stripped.
    pub data: Vec<Word>,
}

impl Decoded {
    /// Repack the data words into bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Bech32Error> {
        words_to_bytes(&self.data)
    }
}

/// Encode `data` under `hrp`. The output is always lowercase.
pub fn encode(hrp: &str, data: &[Word], max_length: usize, variant: Variant) -> Result<String, Bech32Error> {
    validate_hrp(hrp)?;

    let len = hrp.len() + 1 + data.len() + CHECKSUM_LEN;
    if len > max_length {
        return Err(Bech32Error::LengthExceeded { len, max: max_length });
    }

    let hrp = hrp.to_ascii_lowercase();
    let checksum = create_checksum(&expand_hrp(&hrp), data, variant);

    let mut out = String::with_capacity(len);
    out.push_str(&hrp);
    out.push(SEPARATOR);
    out.extend(data.iter().chain(checksum.iter()).map(|w| w.to_char()));
    Ok(out)
}

/// Decode `s`, requiring a checksum of the given `variant`.
pub fn decode(s: &str, max_length: usize, variant: Variant) -> Result<Decoded, Bech32Error> {
    let (hrp, mut words) = split(s, max_length)?;
    if !verify_checksum(&expand_hrp(&hrp), &words, variant) {
        return Err(Bech32Error::ChecksumMismatch);
    }
    words.truncate(words.len() - CHECKSUM_LEN);
    Ok(Decoded { hrp, data: words })
}

/// Decode `s` accepting either variant, reporting which one matched.
pub fn decode_any(s: &str, max_length: usize) -> Result<(Decoded, Variant), Bech32Error> {
    let (hrp, mut words) = split(s, max_length)?;
    let variant = detect_variant(&expand_hrp(&hrp), &words).ok_or(Bech32Error::ChecksumMismatch)?;
    words.truncate(words.len() - CHECKSUM_LEN);
    Ok((Decoded { hrp, data: words }, variant))
}

/// Validate the string shape and return the lowercase HRP and the data
/// words including the checksum.
fn split(s: &str, max_length: usize) -> Result<(String, Vec<Word>), Bech32Error> {
    if s.len() > max_length {
        return Err(Bech32Error::LengthExceeded { len: s.len(), max: max_length });
    }

    let mut has_lower = false;
    let mut has_upper = false;
    for (pos, ch) in s.char_indices() {
        if !matches!(ch, '!'..='~') {
            return Err(Bech32Error::InvalidChar { ch, pos });
        }
        has_lower |= ch.is_ascii_lowercase();
        has_upper |= ch.is_ascii_uppercase();
    }
    if has_lower && has_upper {
        return Err(Bech32Error::MixedCase);
    }

    // Only ASCII from here on, so byte offsets are char offsets.
    let lower = s.to_ascii_lowercase();
    let sep = lower.rfind(SEPARATOR).ok_or(Bech32Error::NoSeparator)?;
    let data_part = &lower[sep + 1..];
    if data_part.len() < CHECKSUM_LEN {
        return Err(Bech32Error::NoSeparator);
    }

    let hrp = &lower[..sep];
    if hrp.is_empty() {
        return Err(Bech32Error::InvalidHrp);
    }

    let words = data_part
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let pos = sep + 1 + i;
            Word::from_char(c).ok_or(Bech32Error::InvalidChar { ch: s.as_bytes()[pos] as char, pos })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok((hrp.to_string(), words))
}
