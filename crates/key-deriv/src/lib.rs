//! Location key derivation for nodekey.
//!
//! This crate loads a base secp256k1 key from a key file and tweaks it into one key per location
//! of the node hierarchy, together with the public node identity of each derived key.
//!
//! # Usage
//!
//! ```rust,ignore
//! use nodekey_key_deriv::BaseKey;
//! use nodekey_primitives::Topology;
//!
//! let base = BaseKey::load("203.0.113.5/nodekey")?;
//! for location in Topology::default().locations() {
//!     let key = base.derive(&location)?;
//!     println!("{location}: {}", key.node_id());
//! }
//! ```

pub mod derive;
pub mod errors;
pub mod identity;
mod keys;
pub mod scalar;

pub use derive::{derive_key, location_tweak, DerivedKey};
pub use errors::{DeriveError, KeyFileError};
pub use identity::{enode, node_id};
pub use keys::BaseKey;
