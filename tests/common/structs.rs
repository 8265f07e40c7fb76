use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TestData {
    pub aux_data: Vec<AuxDataCase>,
    pub segwit_tweak: SegwitTweakChain,
    pub evm_deposit: EvmDepositChain,
}

#[derive(Debug, Deserialize)]
pub struct AuxDataCase {
    pub comment: String,
    pub nonce: u32,
    pub referrer_id: String,
    pub expected: String,
}

/// Tweaked keys for a base key derived from `sha256(seed)`, where the n-th
/// tweak is the (n+1)-fold sha256 of that secret.
#[derive(Debug, Deserialize)]
pub struct SegwitTweakChain {
    pub seed: String,
    pub expected: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct EvmDepositChain {
    pub seed: String,
    pub network: deposit_address::Network,
    pub expected: Vec<EvmDepositExpected>,
}

#[derive(Debug, Deserialize)]
pub struct EvmDepositExpected {
    pub tweak: String,
    pub pubkey: String,
    pub address: String,
}
