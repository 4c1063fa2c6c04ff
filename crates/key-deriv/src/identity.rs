//! Public node identities of secret keys.

use nodekey_primitives::{Enode, NodeId, NODE_ID_LEN};
use secp256k1::{PublicKey, SecretKey, SECP256K1};

/// The node id of `key`: its uncompressed public key without the leading `0x04` byte.
pub fn node_id(key: &SecretKey) -> NodeId {
    let encoded = PublicKey::from_secret_key(SECP256K1, key).serialize_uncompressed();

    let mut id = [0u8; NODE_ID_LEN];
    id.copy_from_slice(&encoded[1..]);
    NodeId::new(id)
}

/// The enode locator of `key` reachable at `ip`.
pub fn enode(key: &SecretKey, ip: impl Into<String>) -> Enode {
    Enode::new(node_id(key), ip)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_node_id() {
        // 1 * G
        let one = SecretKey::from_slice(&{
            let mut b = [0u8; 32];
            b[31] = 1;
            b
        })
        .unwrap();

        assert_eq!(
            node_id(&one).to_string(),
            "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798\
             483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"
        );
    }

    #[test]
    fn enode_uses_the_given_address() {
        let key = SecretKey::from_slice(&[0x42; 32]).unwrap();
        let enode = enode(&key, "10.0.0.7");

        assert_eq!(enode.ip(), "10.0.0.7");
        assert_eq!(enode.id(), &node_id(&key));
        assert!(enode.to_string().starts_with("enode://"));
    }
}
