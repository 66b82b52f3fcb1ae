//! Persistence Module
//!
//! Whole-state snapshot persistence. The store is serialized in one piece
//! after every mutation and read back in one piece at startup; there is no
//! incremental storage engine and no schema migration.

pub mod snapshot;
