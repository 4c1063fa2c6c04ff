//! Errors for loading base keys and deriving location keys.

use std::{io, str};

use nodekey_primitives::Location;
use thiserror::Error;

/// Error while reading or parsing a base key file.
#[derive(Debug, Error)]
pub enum KeyFileError {
    /// The file could not be read.
    #[error("could not read key file: {0}")]
    Io(#[from] io::Error),

    /// The file is neither PEM nor valid hex.
    #[error("invalid hex key: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// The key is wider than a secp256k1 scalar.
    #[error("key must be at most 32 bytes, got {0} bytes")]
    TooLong(usize),

    /// A PEM key file that is not UTF-8 text.
    #[error("PEM key file is not UTF-8: {0}")]
    NotUtf8(#[from] str::Utf8Error),

    /// The PEM file does not hold a SEC1 `EC PRIVATE KEY` for secp256k1.
    #[error("invalid SEC1 private key: {0}")]
    Sec1(k256::elliptic_curve::Error),

    /// The bytes are zero or not below the curve order.
    #[error("not a valid secp256k1 secret key: {0}")]
    InvalidScalar(#[from] secp256k1::Error),
}

/// Error while tweaking a base key for a location.
#[derive(Debug, Error)]
pub enum DeriveError {
    /// The reduced tweak does not fit a curve scalar.
    #[error("tweak for {0} is not below the curve order")]
    TweakOutOfRange(Location),

    /// The tweaked scalar is not a valid secret key.
    #[error("tweaked key for {location} is not a valid secret key: {source}")]
    InvalidDerivedKey {
        /// The location being derived.
        location: Location,
        /// The library error.
        source: secp256k1::Error,
    },
}
