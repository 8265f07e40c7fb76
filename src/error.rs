use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A field has the wrong length or failed to decode from hex.
    InvalidInput(String),
    /// Public key bytes do not decode to a secp256k1 point.
    InvalidKey(String),
    /// The tweak digest is not a usable scalar, or tweaking hit the point at infinity.
    InvalidTweak(String),
    /// The segwit encoder refused a tweaked key.
    AddressEncoding(String),
    InvalidNetwork(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Error::InvalidKey(msg) => write!(f, "Invalid public key: {}", msg),
            Error::InvalidTweak(msg) => write!(f, "Invalid tweak: {}", msg),
            Error::AddressEncoding(msg) => write!(f, "Address encoding failed: {}", msg),
            Error::InvalidNetwork(msg) => write!(f, "Invalid network: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<hex::FromHexError> for Error {
    fn from(e: hex::FromHexError) -> Self {
        Error::InvalidInput(e.to_string())
    }
}

impl From<bech32::Error> for Error {
    fn from(e: bech32::Error) -> Self {
        Error::AddressEncoding(e.to_string())
    }
}

impl From<secp256k1::Error> for Error {
    fn from(e: secp256k1::Error) -> Self {
        Error::InvalidKey(e.to_string())
    }
}

impl From<secp256k1::scalar::OutOfRangeError> for Error {
    fn from(e: secp256k1::scalar::OutOfRangeError) -> Self {
        Error::InvalidTweak(e.to_string())
    }
}
