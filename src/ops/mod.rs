//! Domain Operations Module
//!
//! One operation per resource action, all sharing the same signature so the
//! route table can hold them as plain function pointers.
//!
//! ## Responsibilities
//! - **Validation**: Every operation checks its path captures and payload
//!   before touching the store; a failed check returns a status code and
//!   leaves the state untouched.
//! - **Mutation**: Creates, updates and deletes keep the entity graph
//!   consistent (owner id lists, comment cascades).
//! - **Voting**: Articles and comments share one vote engine operating on
//!   their voter lists.
//!
//! ## Submodules
//! - **`users`**: Get-or-create and profile lookup.
//! - **`articles`**: CRUD and votes for articles, including cascade delete.
//! - **`comments`**: CRUD and votes for comments.
//! - **`vote`**: The voter-list engine shared by both entity kinds.
//! - **`types`**: Request payloads, response envelopes, `Outcome`.

pub mod articles;
pub mod comments;
pub mod types;
pub mod users;
pub mod vote;
