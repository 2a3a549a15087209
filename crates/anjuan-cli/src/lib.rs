//! anjuan-cli library root.
//!
//! Re-exports internal modules so integration tests can exercise them
//! directly (e.g. settings round-trips) without going through the binary.

pub mod commands;
pub mod config;
pub mod opener;
pub mod prompt;
