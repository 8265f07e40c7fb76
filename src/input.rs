//! Hex-or-bytes inputs accepted at every public entry point.
//!
//! Callers may hand over raw bytes or a hex string (optionally `0x`-prefixed).
//! Both are normalized to raw bytes before any length check runs, so passing
//! a value either way yields the same result.
use std::borrow::Cow;

use secp256k1::PublicKey;

use crate::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HexInput<'a> {
    Hex(&'a str),
    Bytes(&'a [u8]),
}

impl<'a> HexInput<'a> {
    /// Normalize to raw bytes. Byte inputs are borrowed verbatim.
    pub fn to_bytes(self) -> Result<Cow<'a, [u8]>> {
        match self {
            HexInput::Bytes(bytes) => Ok(Cow::Borrowed(bytes)),
            HexInput::Hex(s) => {
                let s = s.strip_prefix("0x").unwrap_or(s);
                Ok(Cow::Owned(hex::decode(s)?))
            }
        }
    }
}

impl<'a> From<&'a str> for HexInput<'a> {
    fn from(s: &'a str) -> Self {
        HexInput::Hex(s)
    }
}

impl<'a> From<&'a String> for HexInput<'a> {
    fn from(s: &'a String) -> Self {
        HexInput::Hex(s.as_str())
    }
}

impl<'a> From<&'a [u8]> for HexInput<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        HexInput::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for HexInput<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        HexInput::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for HexInput<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        HexInput::Bytes(bytes.as_slice())
    }
}

/// Decode a field, naming it in the error if the hex is malformed.
pub(crate) fn decode_field<'a>(input: HexInput<'a>, field: &str) -> Result<Cow<'a, [u8]>> {
    input
        .to_bytes()
        .map_err(|e| Error::InvalidInput(format!("{}: {}", field, e)))
}

/// Check that `bytes` is exactly `N` long and copy it out.
pub(crate) fn fixed_width<const N: usize>(bytes: &[u8], field: &str) -> Result<[u8; N]> {
    bytes.try_into().map_err(|_| {
        Error::InvalidInput(format!(
            "wrong size for {} (got {}, want {})",
            field,
            bytes.len(),
            N
        ))
    })
}

/// Parse a SEC1 public key, compressed (33 bytes) or uncompressed (65 bytes).
pub fn parse_public_key<'a>(pk: impl Into<HexInput<'a>>) -> Result<PublicKey> {
    let bytes = decode_field(pk.into(), "public key")?;

    Ok(PublicKey::from_slice(&bytes)?)
}
