//! anjuan-store
//!
//! Local persistence: the JSON case index and the single-column reference
//! lists. Everything is read whole and rewritten atomically. There is no
//! locking; last writer wins.

pub mod error;
pub mod index;
pub mod reference;
