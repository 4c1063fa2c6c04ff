//! The public identity of a node and its enode locator.

use std::fmt;

/// Length of a node id: an uncompressed secp256k1 point without its `0x04` prefix.
pub const NODE_ID_LEN: usize = 64;

/// The public-key fingerprint of a node, i.e. the `X || Y` coordinates of its public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId([u8; NODE_ID_LEN]);

impl NodeId {
    /// Wraps the raw coordinates.
    pub const fn new(bytes: [u8; NODE_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// The raw coordinates.
    pub const fn as_bytes(&self) -> &[u8; NODE_ID_LEN] {
        &self.0
    }
}

impl From<[u8; NODE_ID_LEN]> for NodeId {
    fn from(value: [u8; NODE_ID_LEN]) -> Self {
        Self(value)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({self})")
    }
}

/// A node id paired with the address it is reachable at.
///
/// The address is taken verbatim, it is not required to be a well-formed IP.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Enode {
    id: NodeId,
    ip: String,
}

impl Enode {
    /// Creates a locator for `id` at `ip`.
    pub fn new(id: NodeId, ip: impl Into<String>) -> Self {
        Self { id, ip: ip.into() }
    }

    /// The node id.
    pub const fn id(&self) -> &NodeId {
        &self.id
    }

    /// The address part.
    pub fn ip(&self) -> &str {
        &self.ip
    }

    /// The locator as a line of a bootnode list: quoted, followed by a comma and a newline.
    pub fn bootnode_entry(&self) -> String {
        format!("\"{self}\",\n")
    }
}

impl fmt::Display for Enode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "enode://{}@{}", self.id, self.ip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_id() -> NodeId {
        let mut bytes = [0u8; NODE_ID_LEN];
        bytes[0] = 0xab;
        bytes[NODE_ID_LEN - 1] = 0x01;
        NodeId::new(bytes)
    }

    #[test]
    fn node_id_is_lower_hex() {
        let rendered = sample_id().to_string();

        assert_eq!(rendered.len(), 2 * NODE_ID_LEN);
        assert!(rendered.starts_with("ab00"));
        assert!(rendered.ends_with("0001"));
        assert!(rendered
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn enode_formats() {
        let enode = Enode::new(sample_id(), "203.0.113.5");
        let expected = format!("enode://{}@203.0.113.5", sample_id());

        assert_eq!(enode.to_string(), expected);
        assert_eq!(enode.bootnode_entry(), format!("\"{expected}\",\n"));
        assert_eq!(enode.ip(), "203.0.113.5");
    }

    #[test]
    fn address_is_not_validated() {
        let enode = Enode::new(sample_id(), "not an ip");
        assert!(enode.to_string().ends_with("@not an ip"));
    }
}
