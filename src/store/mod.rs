//! Entity Store Module
//!
//! Implements the in-memory state layer of the board: the entity graph of
//! users, articles and comments plus the id counters that feed creation.
//!
//! ## Core Concepts
//! - **Slot maps**: Deleted articles and comments leave a tombstone behind,
//!   so an id is never handed out twice and a deleted slot stays
//!   distinguishable from one that never existed.
//! - **Single owner**: The store performs no cross-entity validation and no
//!   locking of its own. The domain operation layer is its only writer.
//! - **Snapshot shape**: `EntityStore` serializes field-for-field into the
//!   snapshot file, tombstones included.

pub mod memory;
pub mod types;
