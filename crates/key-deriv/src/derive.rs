//! Location tweaks and the per-location keys derived with them.
//!
//! A location key is the base scalar multiplied by a tweak modulo the group order, where the
//! tweak is the Keccak-256 hash of the location's canonical name reduced modulo the order. The
//! tweak depends on nothing but that name, so keys do not depend on the order in which locations
//! are visited.
//!
//! # Usage
//!
//! ```rust,ignore
//! use nodekey_key_deriv::{derive_key, BaseKey};
//! use nodekey_primitives::Location;
//!
//! let base = BaseKey::load("nodekey")?;
//! let key = derive_key(&base, &Location::zone(0, 1))?;
//! println!("{}", key.node_id());
//! ```

use std::ops::Deref;

use ethnum::U256;
use nodekey_primitives::{Location, NodeId};
use secp256k1::{Scalar, SecretKey};
use sha3::{Digest, Keccak256};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    errors::DeriveError,
    identity::node_id,
    keys::BaseKey,
    scalar::{encode_scalar, reduce_be_bytes},
};

/// Keccak-256 digest of `bytes`.
pub fn keccak256(bytes: &[u8]) -> [u8; 32] {
    Keccak256::digest(bytes).into()
}

/// The tweak of `location` as an integer below the group order.
pub fn location_tweak_value(location: &Location) -> U256 {
    reduce_be_bytes(keccak256(location.name().as_bytes()))
}

/// The tweak of `location` as a curve scalar.
pub fn location_tweak(location: &Location) -> Result<Scalar, DeriveError> {
    Scalar::from_be_bytes(encode_scalar(location_tweak_value(location)))
        .map_err(|_| DeriveError::TweakOutOfRange(*location))
}

/// Derives the key of `location` from `base`.
///
/// A [`BaseKey`] is already a non-zero scalar below the group order, so its reduction is the
/// identity. The product is rejected if it is zero, which only happens when the tweak is.
pub fn derive_key(base: &BaseKey, location: &Location) -> Result<DerivedKey, DeriveError> {
    let tweak = location_tweak(location)?;

    let key = base
        .secret_key()
        .mul_tweak(&tweak)
        .map_err(|source| DeriveError::InvalidDerivedKey {
            location: *location,
            source,
        })?;

    Ok(DerivedKey {
        location: *location,
        key,
    })
}

impl BaseKey {
    /// Derives the key of `location`, see [`derive_key`].
    pub fn derive(&self, location: &Location) -> Result<DerivedKey, DeriveError> {
        derive_key(self, location)
    }
}

/// The secret key of one location.
///
/// This type can only be constructed via [`derive_key`].
/// Implements [`Deref<Target = SecretKey>`] for access to the key.
#[derive(Debug)]
pub struct DerivedKey {
    location: Location,
    key: SecretKey,
}

impl DerivedKey {
    /// The location this key belongs to.
    pub const fn location(&self) -> &Location {
        &self.location
    }

    /// The public fingerprint of this key.
    pub fn node_id(&self) -> NodeId {
        node_id(&self.key)
    }
}

impl Deref for DerivedKey {
    type Target = SecretKey;

    fn deref(&self) -> &Self::Target {
        &self.key
    }
}

impl Drop for DerivedKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl Zeroize for DerivedKey {
    #[inline]
    fn zeroize(&mut self) {
        self.key.non_secure_erase();
    }
}

impl ZeroizeOnDrop for DerivedKey {}
