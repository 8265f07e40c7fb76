//! Native segwit (P2WPKH) address encoding.
use core::fmt;
use std::str::FromStr;

use bech32::{u5, ToBase32, Variant};
use bitcoin_hashes::{hash160, Hash};
use secp256k1::PublicKey;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

const WITNESS_VERSION_0: u8 = 0;

/// The bitcoin network a deposit address is encoded for.
///
/// Testnet and Signet share the `tb` prefix.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
    Signet,
    Regtest,
}

impl Network {
    /// Human-readable part of segwit addresses on this network.
    pub fn hrp(self) -> &'static str {
        match self {
            Network::Mainnet => "bc",
            Network::Testnet | Network::Signet => "tb",
            Network::Regtest => "bcrt",
        }
    }
}

impl From<Network> for &str {
    fn from(value: Network) -> Self {
        match value {
            Network::Mainnet => "bitcoin", // same string as rust-bitcoin
            Network::Testnet => "testnet",
            Network::Signet => "signet",
            Network::Regtest => "regtest",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str((*self).into())
    }
}

impl TryFrom<&str> for Network {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        let res = match value {
            "bitcoin" | "mainnet" | "main" => Self::Mainnet, // core style too
            "testnet" | "test" => Self::Testnet,
            "signet" => Self::Signet,
            "regtest" => Self::Regtest,
            _ => return Err(Error::InvalidNetwork(value.to_string())),
        };
        Ok(res)
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Network::try_from(s)
    }
}

/// Encode the P2WPKH address of `pk` for `network`.
///
/// The witness program is `hash160(pk)` over the 33-byte compressed key.
pub fn pubkey_to_segwit_addr(pk: &PublicKey, network: Network) -> Result<String> {
    let pk_hash = hash160::Hash::hash(&pk.serialize());

    let mut data = vec![u5::try_from_u8(WITNESS_VERSION_0)?];
    data.extend(pk_hash.to_byte_array().to_base32());

    Ok(bech32::encode(network.hrp(), data, Variant::Bech32)?)
}
