//! Crate includes reusable utils shared by the nodekey binaries.
//! Such as initializing the tracing framework.

pub mod logging;
