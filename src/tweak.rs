//! Public key tweaking.
//!
//! A 32-byte tweak is bound to a base public key by hashing both under the
//! `SegwitTweak` tag. The resulting scalar `t` gives the tweaked key
//! `PK + t * G`, where `G` is the secp256k1 generator.
use secp256k1::{PublicKey, Scalar, Secp256k1};
use tracing::debug;

use crate::address::{pubkey_to_segwit_addr, Network};
use crate::input::{decode_field, fixed_width, parse_public_key, HexInput};
use crate::utils::hash::SegwitTweakHash;
use crate::{Error, Result};

/// Size of the tweak bytes fed into [`compute_tweak_scalar`].
pub const TWEAK_SIZE: usize = 32;

/// Size of a compressed SEC1 public key.
pub const COMPRESSED_PUBKEY_SIZE: usize = 33;

/// Compute the tweak scalar for `pk` from a 32-byte tweak.
///
/// The scalar is `taggedHash("SegwitTweak", pk || tweak)` read as a
/// big-endian integer, where `pk` is the 33-byte compressed serialization.
///
/// # Errors
///
/// * [`Error::InvalidInput`] if `tweak` is not exactly 32 bytes.
/// * [`Error::InvalidTweak`] if the digest is zero or not below the curve
///   order. This has probability around 2^-128.
pub fn compute_tweak_scalar(pk: &PublicKey, tweak: &[u8]) -> Result<Scalar> {
    let tweak: [u8; TWEAK_SIZE] = fixed_width(tweak, "tweak")?;

    SegwitTweakHash::from_pubkey_and_tweak(pk, &tweak).to_scalar()
}

/// Compute `pk + scalar * G`.
///
/// # Errors
///
/// Returns [`Error::InvalidTweak`] if the sum is the point at infinity.
pub fn apply_tweak(pk: &PublicKey, scalar: &Scalar) -> Result<PublicKey> {
    let secp = Secp256k1::verification_only();

    pk.add_exp_tweak(&secp, scalar)
        .map_err(|e| Error::InvalidTweak(format!("tweaked key is not a valid point: {}", e)))
}

/// Tweak an already parsed public key.
pub fn tweak_parsed_public_key(pk: &PublicKey, tweak: &[u8]) -> Result<PublicKey> {
    let scalar = compute_tweak_scalar(pk, tweak)?;
    apply_tweak(pk, &scalar)
}

/// Compute a tweak and apply it to the specified public key.
///
/// `pk` may be compressed or uncompressed SEC1, as bytes or hex. The tweak
/// must be exactly 32 bytes. Returns the 33-byte compressed tweaked key.
pub fn tweak_public_key<'a>(
    pk: impl Into<HexInput<'a>>,
    tweak: impl Into<HexInput<'a>>,
) -> Result<[u8; COMPRESSED_PUBKEY_SIZE]> {
    let pk = parse_public_key(pk)?;
    let tweak = decode_field(tweak.into(), "tweak")?;

    Ok(tweak_parsed_public_key(&pk, &tweak)?.serialize())
}

/// A tweaked deposit key together with its segwit address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerivedDeposit {
    pub address: String,
    pub tweaked_public_key: PublicKey,
}

/// Derives deposit keys and addresses from a single base public key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tweaker {
    public_key: PublicKey,
}

impl Tweaker {
    pub fn new<'a>(public_key: impl Into<HexInput<'a>>) -> Result<Self> {
        let public_key = parse_public_key(public_key)?;
        debug!(%public_key, "created tweaker");

        Ok(Tweaker { public_key })
    }

    pub fn from_public_key(public_key: PublicKey) -> Self {
        Tweaker { public_key }
    }

    /// The untweaked base key.
    pub fn public_key(&self) -> PublicKey {
        self.public_key
    }

    /// Derive a deposit public key from 32 tweak bytes.
    pub fn derive_pubkey(&self, tweak: &[u8]) -> Result<PublicKey> {
        tweak_parsed_public_key(&self.public_key, tweak)
    }

    /// Derive a deposit public key from 32 tweak bytes, then its P2WPKH address.
    pub fn derive_segwit(&self, tweak: &[u8], network: Network) -> Result<DerivedDeposit> {
        let tweaked_public_key = self.derive_pubkey(tweak)?;
        let address = pubkey_to_segwit_addr(&tweaked_public_key, network)?;

        Ok(DerivedDeposit {
            address,
            tweaked_public_key,
        })
    }
}
