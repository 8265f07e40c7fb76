mod common;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use deposit_address::{
        compute_aux_data_v0, evm_deposit_segwit_addr, evm_deposit_segwit_pubkey,
        evm_deposit_tweak, pubkey_to_segwit_addr, secp256k1::PublicKey, tweak_public_key,
        Network, Tweaker,
    };

    use crate::common::utils::{self, pubkey_from_secret, sha256, EvmDepositInputs};

    #[test]
    fn aux_data_vectors() {
        let testdata = utils::read_file();

        for case in testdata.aux_data {
            let referrer_id = hex::decode(&case.referrer_id).unwrap();
            let got = compute_aux_data_v0(case.nonce, &referrer_id).unwrap();
            assert_eq!(hex::encode(got), case.expected, "{}", case.comment);

            // the same referrer passed as hex
            let got = compute_aux_data_v0(case.nonce, &format!("0x{}", case.referrer_id)).unwrap();
            assert_eq!(hex::encode(got), case.expected, "{}", case.comment);
        }
    }

    #[test]
    fn segwit_tweak_vectors() {
        let chain = utils::read_file().segwit_tweak;

        let mut state = sha256(chain.seed.as_bytes());
        let pk = pubkey_from_secret(&state);

        for expected in chain.expected {
            state = sha256(&state);

            let tweaked = tweak_public_key(&pk.serialize(), &state).unwrap();
            assert_eq!(hex::encode(tweaked), expected);
        }
    }

    #[test]
    fn evm_deposit_vectors() {
        let chain = utils::read_file().evm_deposit;

        let mut state = sha256(chain.seed.as_bytes());
        let pk = pubkey_from_secret(&state);
        let tweaker = Tweaker::from_public_key(pk);

        for expected in chain.expected {
            let inputs = EvmDepositInputs::next(&mut state);

            let tweak = evm_deposit_tweak(
                &inputs.contract,
                &inputs.wallet,
                &inputs.chain_id,
                &inputs.aux_data,
            )
            .unwrap();
            assert_eq!(hex::encode(tweak), expected.tweak);

            let tweaked = evm_deposit_segwit_pubkey(
                &pk.serialize(),
                &inputs.contract,
                &inputs.wallet,
                &inputs.chain_id,
                &inputs.aux_data,
            )
            .unwrap();
            assert_eq!(hex::encode(tweaked), expected.pubkey);

            let address = evm_deposit_segwit_addr(
                &pk.serialize_uncompressed(),
                &inputs.contract,
                &inputs.wallet,
                &inputs.chain_id,
                &inputs.aux_data,
                Some(chain.network),
            )
            .unwrap();
            assert_eq!(address, expected.address);

            let derived = tweaker.derive_segwit(&tweak, chain.network).unwrap();
            assert_eq!(derived.address, expected.address);
            assert_eq!(hex::encode(derived.tweaked_public_key.serialize()), expected.pubkey);
        }
    }

    #[test]
    fn evm_deposit_accepts_hex_inputs() {
        let chain = utils::read_file().evm_deposit;

        let mut state = sha256(chain.seed.as_bytes());
        let pk = pubkey_from_secret(&state);
        let inputs = EvmDepositInputs::next(&mut state);

        let address = evm_deposit_segwit_addr(
            &format!("0x{}", hex::encode(pk.serialize())),
            &format!("0x{}", hex::encode(inputs.contract)),
            &hex::encode(inputs.wallet),
            &format!("0x{}", hex::encode(inputs.chain_id)),
            &hex::encode(inputs.aux_data),
            Some(chain.network),
        )
        .unwrap();

        assert_eq!(address, chain.expected[0].address);
    }

    #[test]
    fn addresses_match_rust_bitcoin() {
        let chain = utils::read_file().evm_deposit;

        for expected in chain.expected.iter().take(8) {
            let tweaked = PublicKey::from_str(&expected.pubkey).unwrap();

            let reference = bitcoin::Address::p2wpkh(
                &bitcoin::PublicKey::new(tweaked),
                bitcoin::Network::Signet,
            )
            .unwrap();

            assert_eq!(
                pubkey_to_segwit_addr(&tweaked, Network::Signet).unwrap(),
                reference.to_string()
            );
            assert_eq!(
                pubkey_to_segwit_addr(&tweaked, Network::Mainnet).unwrap(),
                bitcoin::Address::p2wpkh(&bitcoin::PublicKey::new(tweaked), bitcoin::Network::Bitcoin)
                    .unwrap()
                    .to_string()
            );
        }
    }

    #[test]
    fn end_to_end_is_deterministic() {
        let pk = "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
        let contract = "0x8236a87084f8b84306f72007f36f2618a5634494";
        let wallet = "0x57f9672ba603251c9c03b36cabdbbca7ca8cfcf4";
        let chain_id = "0x0000000000000000000000000000000000000000000000000000000000000001";
        let aux_data = compute_aux_data_v0(0, &[0u8; 32]).unwrap();

        let first =
            evm_deposit_segwit_addr(pk, contract, wallet, chain_id, &aux_data, Some(Network::Testnet))
                .unwrap();
        let second =
            evm_deposit_segwit_addr(pk, contract, wallet, chain_id, &aux_data, Some(Network::Testnet))
                .unwrap();

        assert_eq!(first, second);
        assert!(first.starts_with("tb1q"));
        // hrp, separator, 33 base32 chars of program and version, 6 checksum chars
        assert_eq!(first.len(), 42);

        let (hrp, data, variant) = bech32::decode(&first).unwrap();
        assert_eq!(hrp, "tb");
        assert_eq!(variant, bech32::Variant::Bech32);
        assert_eq!(data[0].to_u8(), 0);
    }
}
