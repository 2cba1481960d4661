//! BCH checksum over GF(32) for Bech32 and Bech32m.

use crate::word::Word;

/// Number of checksum words appended to every data part.
pub const CHECKSUM_LEN: usize = 6;

const GENERATORS: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];

/// Checksum variant. The two differ only in the final XOR constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// BIP-173.
    Bech32,
    /// BIP-350.
    Bech32m,
}

impl Variant {
    pub const fn constant(self) -> u32 {
        match self {
            Variant::Bech32 => 1,
            Variant::Bech32m => 0x2bc830a3,
        }
    }
}

/// Polynomial residue of `values`, 30-bit accumulator starting at 1.
pub fn polymod<I>(values: I) -> u32
where
    I: IntoIterator<Item = Word>,
{
    let mut chk: u32 = 1;
    for v in values {
        let top = chk >> 25;
        chk = ((chk & 0x01ff_ffff) << 5) ^ v.to_u8() as u32;
        for (i, g) in GENERATORS.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= g;
            }
        }
    }
    chk
}

/// Compute the six checksum words for `hrp_expanded ++ data`.
pub fn create_checksum(hrp_expanded: &[Word], data: &[Word], variant: Variant) -> [Word; CHECKSUM_LEN] {
    let values = hrp_expanded
        .iter()
        .chain(data)
        .copied()
        .chain(std::iter::repeat(Word::ZERO).take(CHECKSUM_LEN));
    let pm = polymod(values) ^ variant.constant();

    let mut out = [Word::ZERO; CHECKSUM_LEN];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = Word::from_u8_masked((pm >> (5 * (5 - i))) as u8);
    }
    out
}

/// True when `data_with_checksum` carries a valid checksum for `variant`.
pub fn verify_checksum(hrp_expanded: &[Word], data_with_checksum: &[Word], variant: Variant) -> bool {
    residue(hrp_expanded, data_with_checksum) == variant.constant()
}

/// Which variant, if any, the trailing checksum was computed with.
pub fn detect_variant(hrp_expanded: &[Word], data_with_checksum: &[Word]) -> Option<Variant> {
    match residue(hrp_expanded, data_with_checksum) {
        r if r == Variant::Bech32.constant() => Some(Variant::Bech32),
        r if r == Variant::Bech32m.constant() => Some(Variant::Bech32m),
        _ => None,
    }
}

fn residue(hrp_expanded: &[Word], data_with_checksum: &[Word]) -> u32 {
    polymod(hrp_expanded.iter().chain(data_with_checksum).copied())
}
