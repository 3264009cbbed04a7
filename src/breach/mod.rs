//! Breach corpus lookups using the k-anonymity range protocol.
//!
//! This module provides:
//! - SHA-1 prefix/suffix splitting and range-body parsing (`protocol`)
//! - The `RangeSource` transport seam and its HTTPS implementation,
//!   plus the `BreachOracle` that never fails its caller (`client`)

pub mod client;
pub mod protocol;

pub use client::{BreachCheckResult, BreachOracle, HttpRangeSource, RangeSource};
pub use protocol::{find_suffix_count, PasswordHash, PREFIX_LEN};
