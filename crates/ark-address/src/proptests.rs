//! Property-based tests for the address layer.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use ark_bech32::word::CHARSET;
    use ark_bech32::{bytes_to_words, codec, Variant, Word};

    use crate::address::{ArkAddress, ARK_MAX_LENGTH, PAYLOAD_LEN};
    use crate::error::{AddressError, ErrorKind};
    use crate::key::XOnlyKey;
    use crate::network::Network;
    use crate::{decode_address, encode_address};

    fn network() -> impl Strategy<Value = Network> {
        prop_oneof![Just(Network::Mainnet), Just(Network::Testnet)]
    }

    proptest! {
        #[test]
        fn test_payload_round_trip(
            server in any::<[u8; 32]>(),
            output in any::<[u8; 32]>(),
            network in network(),
        ) {
            let addr = ArkAddress::new(network, XOnlyKey::new(server), XOnlyKey::new(output));
            let s = addr.encode().unwrap();
            prop_assert_eq!(s.len(), network.hrp().len() + 1 + 104 + 6);

            let back = decode_address(&s).unwrap();
            prop_assert_eq!(back, addr);
            prop_assert_eq!(back.is_testnet(), network.is_testnet());
            prop_assert_eq!(back.payload().len(), PAYLOAD_LEN);
        }

        #[test]
        fn test_hex_entry_point_round_trip(
            output in any::<[u8; 32]>(),
            server_x in any::<[u8; 32]>(),
            odd in any::<bool>(),
            is_testnet in any::<bool>(),
        ) {
            let script = format!("5120{}", hex::encode(output));
            let server = format!("{}{}", if odd { "03" } else { "02" }, hex::encode(server_x));

            let addr = decode_address(&encode_address(&script, &server, is_testnet).unwrap()).unwrap();
            prop_assert_eq!(addr.output_key().as_bytes(), &output);
            prop_assert_eq!(addr.server_key().as_bytes(), &server_x);
            prop_assert_eq!(addr.is_testnet(), is_testnet);
        }

        #[test]
        fn test_single_substitution_is_checksum_mismatch(
            server in any::<[u8; 32]>(),
            output in any::<[u8; 32]>(),
            network in network(),
            index in any::<prop::sample::Index>(),
            delta in 1u8..32,
        ) {
            let s = ArkAddress::new(network, XOnlyKey::new(server), XOnlyKey::new(output)).encode().unwrap();
            let start = network.hrp().len() + 1;
            let pos = start + index.index(s.len() - start);

            let original = Word::from_char(s.as_bytes()[pos] as char).unwrap();
            let mut mutated = s.into_bytes();
            mutated[pos] = CHARSET[((original.to_u8() + delta) % 32) as usize];
            let mutated = String::from_utf8(mutated).unwrap();

            prop_assert_eq!(decode_address(&mutated).unwrap_err().kind(), ErrorKind::ChecksumMismatch);
        }

        #[test]
        fn test_nonzero_version_rejected(
            version in 1u8..=255,
            keys in prop::collection::vec(any::<u8>(), 64),
        ) {
            let mut payload = vec![version];
            payload.extend_from_slice(&keys);
            let s = codec::encode("ark", &bytes_to_words(&payload), ARK_MAX_LENGTH, Variant::Bech32m).unwrap();
            prop_assert_eq!(decode_address(&s), Err(AddressError::UnsupportedVersion(version)));
        }

        #[test]
        fn test_wrong_script_prefix_rejected(
            prefix in "[0-9a-f]{4}",
            key in any::<[u8; 32]>(),
        ) {
            prop_assume!(prefix != "5120");
            let script = format!("{prefix}{}", hex::encode(key));
            let err = encode_address(&script, &format!("02{}", "22".repeat(32)), false).unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::InvalidScript);
        }
    }
}
