use crate::Error;
use bitcoin_hashes::{sha256t_hash_newtype, Hash, HashEngine};
use secp256k1::{PublicKey, Scalar};

sha256t_hash_newtype! {
    pub(crate) struct DepositAuxTag = hash_str("LombardDepositAux");

    /// Tagged hash with tag \"LombardDepositAux\".
    ///
    /// This is used for computing the aux data commitment.
    #[hash_newtype(forward)]
    pub(crate) struct DepositAuxHash(_);

    pub(crate) struct DepositAddrTag = hash_str("LombardDepositAddr");

    /// Tagged hash with tag \"LombardDepositAddr\".
    ///
    /// This is used for computing the deposit tweak bytes.
    #[hash_newtype(forward)]
    pub(crate) struct DepositAddrHash(_);

    pub(crate) struct SegwitTweakTag = hash_str("SegwitTweak");

    /// Tagged hash with tag \"SegwitTweak\".
    ///
    /// This hash is turned into the scalar added to the base public key.
    #[hash_newtype(forward)]
    pub(crate) struct SegwitTweakHash(_);
}

impl DepositAuxHash {
    pub(crate) fn from_nonce_and_referrer(version: u8, nonce: u32, referrer_id: &[u8]) -> Self {
        let mut eng = DepositAuxHash::engine();
        eng.input(&[version]);
        eng.input(&nonce.to_be_bytes());
        eng.input(referrer_id);
        DepositAuxHash::from_engine(eng)
    }
}

impl DepositAddrHash {
    pub(crate) fn from_evm_fields(
        aux_data: &[u8; 32],
        chain_tag: u8,
        chain_id: &[u8; 32],
        contract: &[u8; 20],
        wallet: &[u8; 20],
    ) -> Self {
        let mut eng = DepositAddrHash::engine();
        eng.input(aux_data);
        eng.input(&[chain_tag]);
        eng.input(chain_id);
        eng.input(contract);
        eng.input(wallet);
        DepositAddrHash::from_engine(eng)
    }
}

impl SegwitTweakHash {
    pub(crate) fn from_pubkey_and_tweak(pk: &PublicKey, tweak: &[u8; 32]) -> Self {
        let mut eng = SegwitTweakHash::engine();
        eng.input(&pk.serialize());
        eng.input(tweak);
        SegwitTweakHash::from_engine(eng)
    }

    pub(crate) fn to_scalar(self) -> crate::Result<Scalar> {
        scalar_from_digest(self.to_byte_array())
    }
}

/// Read a digest as a big-endian integer and require `0 < value < n`.
///
/// Failure happens with probability around 2^-128 for a hash output.
pub(crate) fn scalar_from_digest(digest: [u8; 32]) -> crate::Result<Scalar> {
    let scalar = Scalar::from_be_bytes(digest)?;
    if scalar == Scalar::ZERO {
        return Err(Error::InvalidTweak("tweak value is zero".to_owned()));
    }

    Ok(scalar)
}
