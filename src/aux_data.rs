//! Auxiliary data committed to by every deposit address.
//!
//! Aux data is chain-agnostic: it binds a nonce and an optional referrer id
//! into a single 32-byte value that is later fed into the deposit tweak.
use bitcoin_hashes::Hash;

use crate::input::{decode_field, HexInput};
use crate::utils::hash::DepositAuxHash;
use crate::{Error, Result};

/// Version byte prefixed to v0 aux data.
pub const DEPOSIT_AUX_V0: u8 = 0;

/// Largest referrer id accepted by [`compute_aux_data_v0`].
pub const MAX_REFERRER_ID_SIZE: usize = 256;

/// Size of the aux data value.
pub const AUX_DATA_SIZE: usize = 32;

/// Compute v0 aux data for a nonce and referrer id.
///
/// This is defined as
///
/// ```text
/// taggedHash("LombardDepositAux", 0x00 || nonce || referrer_id)
/// ```
///
/// where `nonce` is serialized as 4 big-endian bytes and `referrer_id` is
/// appended as-is, without padding or a length prefix.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `referrer_id` is not valid hex or is
/// longer than [`MAX_REFERRER_ID_SIZE`] bytes.
pub fn compute_aux_data_v0<'a>(
    nonce: u32,
    referrer_id: impl Into<HexInput<'a>>,
) -> Result<[u8; AUX_DATA_SIZE]> {
    let referrer_id = decode_field(referrer_id.into(), "referrer id")?;

    if referrer_id.len() > MAX_REFERRER_ID_SIZE {
        return Err(Error::InvalidInput(format!(
            "referrer id too long (got {}, want not greater than {})",
            referrer_id.len(),
            MAX_REFERRER_ID_SIZE
        )));
    }

    Ok(DepositAuxHash::from_nonce_and_referrer(DEPOSIT_AUX_V0, nonce, &referrer_id).to_byte_array())
}
