//! Content Board Service Library
//!
//! Core modules of the board service; the binary executable (`main.rs`)
//! wires them together and serves them over HTTP.
//!
//! ## Architecture Modules
//! Four loosely coupled subsystems:
//!
//! - **`store`**: The in-memory state layer. Holds the entity graph (users,
//!   articles, comments) in tombstoning slot maps together with the
//!   monotonic id counters.
//! - **`ops`**: The domain operation layer. One handler per resource
//!   action, validating input before mutating the store, plus the voting
//!   engine shared by articles and comments.
//! - **`routing`**: The dispatch layer. Collapses raw request paths into
//!   route patterns and maps `(method, pattern)` pairs onto domain
//!   operations; also hosts the Axum transport bridge.
//! - **`persistence`**: The snapshot layer. Loads the store at startup and
//!   rewrites the whole state after every mutation.

pub mod ops;
pub mod persistence;
pub mod routing;
pub mod store;
