//! Deterministic segwit deposit addresses bound to cross-chain mint instructions.
//!
//! A deposit address is derived from a base public key and the public data of
//! a minting instruction (destination chain, token contract, receiving wallet
//! and aux data). Anyone holding the same inputs recomputes the same address.
//!
//! ```text
//! (nonce, referrer_id)                      -> aux data      compute_aux_data_v0
//! (contract, wallet, chain_id, aux data)    -> tweak         evm_deposit_tweak
//! (pk, tweak)                               -> tweaked key   tweak_public_key
//! tweaked key                               -> P2WPKH        pubkey_to_segwit_addr
//! ```
mod error;

pub mod address;
pub mod aux_data;
pub mod deposit;
pub mod input;
pub mod tweak;
pub(crate) mod utils;

pub use bitcoin_hashes;
pub use secp256k1;

pub use crate::address::{pubkey_to_segwit_addr, Network};
pub use crate::aux_data::compute_aux_data_v0;
pub use crate::deposit::{
    calc_tweak_bytes, evm_deposit_segwit_addr, evm_deposit_segwit_pubkey, evm_deposit_tweak,
    BlockchainType,
};
pub use crate::error::Error;
pub use crate::input::{parse_public_key, HexInput};
pub use crate::tweak::{
    apply_tweak, compute_tweak_scalar, tweak_public_key, DerivedDeposit, Tweaker,
};

pub type Result<T> = std::result::Result<T, Error>;
