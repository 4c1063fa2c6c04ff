//! Scalar helpers for the secp256k1 group order.

use ethnum::U256;
use secp256k1::constants::{self, SECRET_KEY_SIZE};

use crate::errors::KeyFileError;

/// The order `n` of the secp256k1 group.
pub const CURVE_ORDER: U256 = {
    let bytes = constants::CURVE_ORDER;
    let mut hi = [0u8; 16];
    let mut lo = [0u8; 16];
    let mut i = 0;
    while i < 16 {
        hi[i] = bytes[i];
        lo[i] = bytes[i + 16];
        i += 1;
    }
    U256::from_words(u128::from_be_bytes(hi), u128::from_be_bytes(lo))
};

/// Reduces `value` modulo [`CURVE_ORDER`].
pub fn reduce(value: U256) -> U256 {
    value % CURVE_ORDER
}

/// Interprets 32 big-endian bytes as an integer and reduces it modulo [`CURVE_ORDER`].
pub fn reduce_be_bytes(bytes: [u8; SECRET_KEY_SIZE]) -> U256 {
    reduce(U256::from_be_bytes(bytes))
}

/// Encodes a scalar as exactly 32 big-endian bytes; small values keep their leading zeros.
pub fn encode_scalar(value: U256) -> [u8; SECRET_KEY_SIZE] {
    value.to_be_bytes()
}

/// Left-pads a big-endian integer of at most 32 bytes to exactly 32 bytes.
pub fn left_pad(bytes: &[u8]) -> Result<[u8; SECRET_KEY_SIZE], KeyFileError> {
    if bytes.len() > SECRET_KEY_SIZE {
        return Err(KeyFileError::TooLong(bytes.len()));
    }

    let mut out = [0u8; SECRET_KEY_SIZE];
    out[SECRET_KEY_SIZE - bytes.len()..].copy_from_slice(bytes);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use secp256k1::SecretKey;

    use super::*;

    #[test]
    fn reduction_wraps_at_the_order() {
        assert_eq!(reduce(CURVE_ORDER), U256::ZERO);
        assert_eq!(reduce(CURVE_ORDER + U256::new(5)), U256::new(5));
        assert_eq!(reduce(U256::MAX), U256::MAX - CURVE_ORDER);
        assert_eq!(reduce(CURVE_ORDER - U256::ONE), CURVE_ORDER - U256::ONE);
    }

    #[test]
    fn short_scalars_are_zero_padded() {
        // 30 significant bytes
        let value = U256::from_be_bytes({
            let mut b = [0x11u8; 32];
            b[0] = 0;
            b[1] = 0;
            b
        });
        let encoded = encode_scalar(value);

        assert_eq!(encoded.len(), 32);
        assert_eq!(&encoded[..2], &[0, 0]);
        assert_eq!(&encoded[2..], &[0x11; 30]);
        assert!(SecretKey::from_slice(&encoded).is_ok());

        assert_eq!(encode_scalar(U256::ONE)[31], 1);
        assert!(encode_scalar(U256::ONE)[..31].iter().all(|b| *b == 0));
    }

    #[test]
    fn left_pad_keeps_the_value() {
        let padded = left_pad(&[0xaa; 30]).unwrap();
        assert_eq!(&padded[..2], &[0, 0]);
        assert_eq!(&padded[2..], &[0xaa; 30]);

        assert_eq!(left_pad(&[]).unwrap(), [0u8; 32]);
        assert_eq!(left_pad(&[7u8; 32]).unwrap(), [7u8; 32]);
        assert!(matches!(left_pad(&[1u8; 33]), Err(KeyFileError::TooLong(33))));
    }
}
