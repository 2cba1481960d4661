//! Human-readable part rules.

use crate::error::Bech32Error;
use crate::word::Word;

/// Lowest and highest byte allowed in a human-readable part.
const HRP_MIN_CHAR: u8 = 33;
const HRP_MAX_CHAR: u8 = 126;

/// Expand `hrp` into checksum input: high bits of every char, a zero word,
/// then low bits of every char.
pub fn expand_hrp(hrp: &str) -> Vec<Word> {
    let bytes = hrp.as_bytes();
    let mut out = Vec::with_capacity(bytes.len() * 2 + 1);
    out.extend(bytes.iter().map(|&c| Word::from_u8_masked(c >> 5)));
    out.push(Word::ZERO);
    out.extend(bytes.iter().map(|&c| Word::from_u8_masked(c & 0x1f)));
    out
}

/// Check that `hrp` is non-empty printable ASCII in a single case.
pub fn validate_hrp(hrp: &str) -> Result<(), Bech32Error> {
    if hrp.is_empty() {
        return Err(Bech32Error::InvalidHrp);
    }

    let mut has_lower = false;
    let mut has_upper = false;
    for &c in hrp.as_bytes() {
        if !(HRP_MIN_CHAR..=HRP_MAX_CHAR).contains(&c) {
            return Err(Bech32Error::InvalidHrp);
        }
        has_lower |= c.is_ascii_lowercase();
        has_upper |= c.is_ascii_uppercase();
    }

    if has_lower && has_upper {
        return Err(Bech32Error::InvalidHrp);
    }
    Ok(())
}
