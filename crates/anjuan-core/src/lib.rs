//! anjuan-core
//!
//! Pure domain types, identity-number parsing, case numbering, and the
//! folder/file naming conventions. No filesystem dependency; this is the
//! shared vocabulary of the anjuan system.

pub mod casenum;
pub mod error;
pub mod fields;
pub mod identity;
pub mod models;
pub mod naming;
