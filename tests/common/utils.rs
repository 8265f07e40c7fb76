use std::{fs::File, io::Read};

use deposit_address::bitcoin_hashes::{sha256, Hash};
use deposit_address::secp256k1::{PublicKey, Secp256k1, SecretKey};
use serde_json::from_str;

use super::structs::TestData;

pub fn read_file() -> TestData {
    let mut file = File::open("tests/resources/deposit_vectors.json").unwrap();
    let mut contents = String::new();
    file.read_to_string(&mut contents).unwrap();
    from_str(&contents).unwrap()
}

pub fn sha256(data: &[u8]) -> [u8; 32] {
    sha256::Hash::hash(data).to_byte_array()
}

pub fn pubkey_from_secret(secret: &[u8; 32]) -> PublicKey {
    let secp = Secp256k1::new();
    SecretKey::from_slice(secret).unwrap().public_key(&secp)
}

/// Inputs of one EVM deposit vector, generated from a running hash.
pub struct EvmDepositInputs {
    pub contract: [u8; 20],
    pub wallet: [u8; 20],
    pub chain_id: [u8; 32],
    pub aux_data: [u8; 32],
}

impl EvmDepositInputs {
    /// Derive the next inputs and advance `state`.
    ///
    /// The chain id is the first 8 bytes of the third hash, as a big-endian
    /// integer padded to 32 bytes.
    pub fn next(state: &mut [u8; 32]) -> Self {
        let v1 = sha256(state);
        let v2 = sha256(&v1);
        let v3 = sha256(&v2);
        let v4 = sha256(&v3);
        *state = v4;

        let mut contract = [0u8; 20];
        contract.copy_from_slice(&v1[..20]);
        let mut wallet = [0u8; 20];
        wallet.copy_from_slice(&v2[..20]);
        let mut chain_id = [0u8; 32];
        chain_id[24..].copy_from_slice(&v3[..8]);

        EvmDepositInputs {
            contract,
            wallet,
            chain_id,
            aux_data: v4,
        }
    }
}
