#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::checksum::Variant;
    use crate::codec::{decode, decode_any, encode};
    use crate::convert::{bytes_to_words, words_to_bytes};
    use crate::error::Bech32Error;
    use crate::word::{Word, CHARSET};

    const MAX: usize = 1023;

    fn variant() -> impl Strategy<Value = Variant> {
        prop_oneof![Just(Variant::Bech32), Just(Variant::Bech32m)]
    }

    fn hrp() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9]{0,9}"
    }

    proptest! {
        #[test]
        fn test_repack_round_trip(bytes in prop::collection::vec(any::<u8>(), 0..200)) {
            let words = bytes_to_words(&bytes);
            prop_assert_eq!(words.len(), (bytes.len() * 8).div_ceil(5));
            prop_assert_eq!(words_to_bytes(&words).unwrap(), bytes);
        }

        #[test]
        fn test_encode_decode_round_trip(
            hrp in hrp(),
            raw in prop::collection::vec(0u8..32, 0..300),
            variant in variant(),
        ) {
            let data: Vec<Word> = raw.into_iter().map(Word::from_u8_masked).collect();
            let s = encode(&hrp, &data, MAX, variant).unwrap();
            prop_assert_eq!(s.len(), hrp.len() + 1 + data.len() + 6);

            let decoded = decode(&s, MAX, variant).unwrap();
            prop_assert_eq!(&decoded.hrp, &hrp);
            prop_assert_eq!(&decoded.data, &data);

            let (_, detected) = decode_any(&s, MAX).unwrap();
            prop_assert_eq!(detected, variant);
        }

        /// Any single substitution in the data part must be caught.
        #[test]
        fn test_single_substitution_detected(
            hrp in hrp(),
            raw in prop::collection::vec(0u8..32, 0..120),
            index in any::<prop::sample::Index>(),
            delta in 1u8..32,
            variant in variant(),
        ) {
            let data: Vec<Word> = raw.into_iter().map(Word::from_u8_masked).collect();
            let s = encode(&hrp, &data, MAX, variant).unwrap();

            let data_start = hrp.len() + 1;
            let pos = data_start + index.index(s.len() - data_start);
            let original = Word::from_char(s.as_bytes()[pos] as char).unwrap();
            let replacement = CHARSET[((original.to_u8() + delta) % 32) as usize] as char;

            let mut mutated = s.into_bytes();
            mutated[pos] = replacement as u8;
            let mutated = String::from_utf8(mutated).unwrap();

            prop_assert_eq!(decode(&mutated, MAX, variant), Err(Bech32Error::ChecksumMismatch));
        }

        #[test]
        fn test_mixed_case_rejected(
            raw in prop::collection::vec(0u8..32, 1..40),
            index in any::<prop::sample::Index>(),
        ) {
            let data: Vec<Word> = raw.into_iter().map(Word::from_u8_masked).collect();
            let s = encode("ark", &data, MAX, Variant::Bech32m).unwrap();

            let letters: Vec<usize> = s
                .char_indices()
                .filter(|(_, c)| c.is_ascii_lowercase())
                .map(|(i, _)| i)
                .collect();
            let pos = letters[index.index(letters.len())];

            let mut mixed = s.into_bytes();
            mixed[pos] = mixed[pos].to_ascii_uppercase();
            let mixed = String::from_utf8(mixed).unwrap();

            prop_assert_eq!(decode(&mixed, MAX, Variant::Bech32m), Err(Bech32Error::MixedCase));
        }

        #[test]
        fn test_decode_never_panics(s in "\\PC{0,120}") {
            let _ = decode(&s, MAX, Variant::Bech32m);
            let _ = decode_any(&s, 90);
        }
    }
}
