//! Proof module: canonical JSON and domain-separated hashing.
//!
//! Nothing else in the kernel depends on `proof`.

pub mod canon;
pub mod hash;
