//! Proof utilities: canonical JSON and domain-separated content hashing.
//!
//! Used by the search layer to give every decision report a stable digest.

pub mod canon;
pub mod hash;
