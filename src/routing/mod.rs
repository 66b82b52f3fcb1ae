//! Routing Module
//!
//! Maps incoming `(method, path)` pairs onto domain operations.
//!
//! ## Core Concepts
//! - **Normalization**: A concrete path collapses into a route pattern
//!   (`/articles/7/upvote` -> `/articles/:id/upvote`) through a fixed
//!   positional precedence; the matcher assumes one URL shape per resource
//!   family and is deliberately not general-purpose.
//! - **Dispatch**: The pattern selects a per-method table of operation
//!   function pointers. Anything unmatched (route or method) is a 400 with
//!   an empty body, never a 404.
//! - **Transport bridge**: `handlers` adapts the Axum server to the core:
//!   it materializes the body, parses JSON where the method carries one,
//!   runs the dispatch under the store lock and triggers the snapshot
//!   side effect after mutations.

pub mod handlers;
pub mod router;

#[cfg(test)]
mod tests;
