//! This crate contains the types shared by the key-derivation crate and the tools: the tiers and
//! locations of the node hierarchy, the topology that bounds them and the public identity of a
//! node.
//!
//! It lies at the bottom of the crate-hierarchy in this workspace i.e., it does not depend on any
//! other crate in this workspace.

pub mod enode;
pub mod errors;
pub mod location;
pub mod topology;

pub use enode::{Enode, NodeId, NODE_ID_LEN};
pub use errors::LocationError;
pub use location::{Location, Tier};
pub use topology::Topology;
