//! EVM deposit tweaks, public keys and addresses.
//!
//! A deposit address commits to the minting instruction through the tweak
//!
//! ```text
//! taggedHash("LombardDepositAddr", aux_data || evm_tag || chain_id || contract || wallet)
//! ```
//!
//! Every field has a fixed width, so no length prefixes are needed. The
//! tweak is then applied to the base key (see [`crate::tweak`]) and the
//! tweaked key is encoded as a P2WPKH address.
use core::fmt;
use std::str::FromStr;

use bitcoin_hashes::Hash;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::address::{pubkey_to_segwit_addr, Network};
use crate::aux_data::AUX_DATA_SIZE;
use crate::input::{decode_field, fixed_width, parse_public_key, HexInput};
use crate::tweak::{tweak_parsed_public_key, COMPRESSED_PUBKEY_SIZE, TWEAK_SIZE};
use crate::utils::hash::DepositAddrHash;
use crate::{Error, Result};

/// Chain family tag for EVM destinations.
pub const EVM_TAG: u8 = 0;

pub const CHAIN_ID_SIZE: usize = 32;

pub const EVM_ADDRESS_SIZE: usize = 20;

/// Destination chain family of a deposit.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BlockchainType {
    Evm,
}

impl From<BlockchainType> for &str {
    fn from(value: BlockchainType) -> Self {
        match value {
            BlockchainType::Evm => "evm",
        }
    }
}

impl fmt::Display for BlockchainType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str((*self).into())
    }
}

impl FromStr for BlockchainType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "evm" => Ok(BlockchainType::Evm),
            _ => Err(Error::InvalidInput(format!(
                "unsupported blockchain type: {}",
                s
            ))),
        }
    }
}

/// Compute the tweak bytes for an EVM deposit address.
///
/// * `contract` is the 20-byte address of the token contract on the target chain.
/// * `wallet` is the 20-byte EVM address that receives the minted tokens.
/// * `chain_id` is the target chain id as 32 big-endian bytes.
/// * `aux_data` is the 32-byte value from [`crate::compute_aux_data_v0`].
///
/// All inputs are decoded before any length is checked. Lengths are checked
/// in the order contract, wallet, aux data, chain id.
pub fn evm_deposit_tweak<'a>(
    contract: impl Into<HexInput<'a>>,
    wallet: impl Into<HexInput<'a>>,
    chain_id: impl Into<HexInput<'a>>,
    aux_data: impl Into<HexInput<'a>>,
) -> Result<[u8; TWEAK_SIZE]> {
    let contract = decode_field(contract.into(), "contract")?;
    let wallet = decode_field(wallet.into(), "wallet")?;
    let chain_id = decode_field(chain_id.into(), "chain id")?;
    let aux_data = decode_field(aux_data.into(), "aux data")?;

    let contract: [u8; EVM_ADDRESS_SIZE] = fixed_width(&contract, "contract")?;
    let wallet: [u8; EVM_ADDRESS_SIZE] = fixed_width(&wallet, "wallet")?;
    let aux_data: [u8; AUX_DATA_SIZE] = fixed_width(&aux_data, "aux data")?;
    let chain_id: [u8; CHAIN_ID_SIZE] = fixed_width(&chain_id, "chain id")?;

    let tweak =
        DepositAddrHash::from_evm_fields(&aux_data, EVM_TAG, &chain_id, &contract, &wallet)
            .to_byte_array();
    trace!(tweak = %hex::encode(tweak), "computed evm deposit tweak");

    Ok(tweak)
}

/// Compute the tweak bytes for a deposit, dispatching on the destination chain family.
pub fn calc_tweak_bytes(
    blockchain_type: BlockchainType,
    chain_id: &[u8; CHAIN_ID_SIZE],
    to_address: &[u8],
    lbtc_address: &[u8],
    aux_data: &[u8],
) -> Result<[u8; TWEAK_SIZE]> {
    match blockchain_type {
        BlockchainType::Evm => {
            if lbtc_address.len() != EVM_ADDRESS_SIZE {
                return Err(Error::InvalidInput(format!(
                    "bad lbtc address (got {} bytes, expected {})",
                    lbtc_address.len(),
                    EVM_ADDRESS_SIZE
                )));
            }
            if to_address.len() != EVM_ADDRESS_SIZE {
                return Err(Error::InvalidInput(format!(
                    "bad to address (got {} bytes, expected {})",
                    to_address.len(),
                    EVM_ADDRESS_SIZE
                )));
            }

            evm_deposit_tweak(lbtc_address, to_address, chain_id, aux_data)
        }
    }
}

/// Compute the segwit public key for an EVM deposit.
///
/// `pk` is the base (untweaked) key, compressed or uncompressed. See
/// [`evm_deposit_tweak`] for the other arguments. Returns the 33-byte
/// compressed tweaked key.
pub fn evm_deposit_segwit_pubkey<'a>(
    pk: impl Into<HexInput<'a>>,
    contract: impl Into<HexInput<'a>>,
    wallet: impl Into<HexInput<'a>>,
    chain_id: impl Into<HexInput<'a>>,
    aux_data: impl Into<HexInput<'a>>,
) -> Result<[u8; COMPRESSED_PUBKEY_SIZE]> {
    let tweak = evm_deposit_tweak(contract, wallet, chain_id, aux_data)?;
    let pk = parse_public_key(pk)?;

    Ok(tweak_parsed_public_key(&pk, &tweak)?.serialize())
}

/// Compute the segwit deposit address for an EVM deposit.
///
/// Arguments are as for [`evm_deposit_segwit_pubkey`]. Mainnet is used when
/// `network` is `None`.
pub fn evm_deposit_segwit_addr<'a>(
    pk: impl Into<HexInput<'a>>,
    contract: impl Into<HexInput<'a>>,
    wallet: impl Into<HexInput<'a>>,
    chain_id: impl Into<HexInput<'a>>,
    aux_data: impl Into<HexInput<'a>>,
    network: Option<Network>,
) -> Result<String> {
    let network = network.unwrap_or_default();

    let tweak = evm_deposit_tweak(contract, wallet, chain_id, aux_data)?;
    let pk = parse_public_key(pk)?;
    let tweaked = tweak_parsed_public_key(&pk, &tweak)?;

    let address = pubkey_to_segwit_addr(&tweaked, network)?;
    debug!(%network, %address, "derived evm deposit address");

    Ok(address)
}
