//! Voter-list engine shared by articles and comments.
//!
//! Both entity kinds carry an `upvoted_by` and a `downvoted_by` list; the
//! engine keeps a voter in at most one of the two. Repeating the same vote
//! changes nothing. A vote is reversed only by casting the opposite one.

use crate::store::types::{Article, Comment};

/// Anything that can be voted on: exposes the two voter lists.
pub trait Votable {
    fn upvoted_by_mut(&mut self) -> &mut Vec<String>;
    fn downvoted_by_mut(&mut self) -> &mut Vec<String>;
}

impl Votable for Article {
    fn upvoted_by_mut(&mut self) -> &mut Vec<String> {
        &mut self.upvoted_by
    }

    fn downvoted_by_mut(&mut self) -> &mut Vec<String> {
        &mut self.downvoted_by
    }
}

impl Votable for Comment {
    fn upvoted_by_mut(&mut self) -> &mut Vec<String> {
        &mut self.upvoted_by
    }

    fn downvoted_by_mut(&mut self) -> &mut Vec<String> {
        &mut self.downvoted_by
    }
}

/// Moves the voter out of the downvote list if present, then records the
/// upvote once. Idempotent.
pub fn upvote<T: Votable>(item: &mut T, voter: &str) {
    remove_vote(item.downvoted_by_mut(), voter);
    add_vote(item.upvoted_by_mut(), voter);
}

/// Symmetric inverse of [`upvote`].
pub fn downvote<T: Votable>(item: &mut T, voter: &str) {
    remove_vote(item.upvoted_by_mut(), voter);
    add_vote(item.downvoted_by_mut(), voter);
}

fn add_vote(list: &mut Vec<String>, voter: &str) {
    if !list.iter().any(|name| name == voter) {
        list.push(voter.to_string());
    }
}

fn remove_vote(list: &mut Vec<String>, voter: &str) {
    if let Some(position) = list.iter().position(|name| name == voter) {
        list.remove(position);
    }
}
