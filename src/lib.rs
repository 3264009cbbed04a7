pub mod breach;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod engine;
pub mod errors;
pub mod generator;
pub mod health;
pub mod strength;
pub mod vault;

pub use engine::VaultSecurityEngine;
pub use errors::{Result, VaultGuardError};
