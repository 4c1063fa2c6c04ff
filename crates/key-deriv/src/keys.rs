//! Base key files.

use std::{fs, path::Path, str};

use secp256k1::{constants::SECRET_KEY_SIZE, SecretKey};
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{errors::KeyFileError, scalar::left_pad};

const PEM_PREFIX: &[u8] = b"-----BEGIN";

/// The secp256k1 key a family of location keys is derived from.
///
/// Key files hold either the hex encoding of the scalar (optionally `0x`-prefixed, surrounding
/// whitespace ignored) or a PEM `EC PRIVATE KEY` block. Values shorter than 32 bytes are
/// left-padded with zeros.
#[derive(Debug, Clone)]
pub struct BaseKey(SecretKey);

impl BaseKey {
    /// Reads and parses the key file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, KeyFileError> {
        let path = path.as_ref();
        let contents = fs::read(path)?;
        debug!(path = %path.display(), len = contents.len(), "read key file");

        Self::parse(&contents)
    }

    /// Parses the contents of a key file.
    pub fn parse(contents: &[u8]) -> Result<Self, KeyFileError> {
        let bytes = match contents.trim_ascii_start().starts_with(PEM_PREFIX) {
            true => parse_pem(contents)?,
            false => parse_hex(contents)?,
        };

        Ok(Self(SecretKey::from_slice(&bytes)?))
    }

    /// Wraps an existing secret key.
    pub const fn from_secret_key(key: SecretKey) -> Self {
        Self(key)
    }

    /// The underlying secret key.
    pub const fn secret_key(&self) -> &SecretKey {
        &self.0
    }
}

fn parse_hex(contents: &[u8]) -> Result<[u8; SECRET_KEY_SIZE], KeyFileError> {
    let text = contents.trim_ascii();
    let text = text.strip_prefix(b"0x").unwrap_or(text);

    left_pad(&hex::decode(text)?)
}

fn parse_pem(contents: &[u8]) -> Result<[u8; SECRET_KEY_SIZE], KeyFileError> {
    let key = k256::SecretKey::from_sec1_pem(str::from_utf8(contents.trim_ascii_start())?)
        .map_err(KeyFileError::Sec1)?;

    left_pad(&key.to_bytes())
}

// Manual Drop implementation to zeroize keys on drop.
impl Drop for BaseKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl Zeroize for BaseKey {
    #[inline]
    fn zeroize(&mut self) {
        // NOTE: `SecretKey::non_secure_erase` writes `1`s to the memory.
        self.0.non_secure_erase();
    }
}

impl ZeroizeOnDrop for BaseKey {}
