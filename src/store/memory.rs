use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::types::{Article, Comment, Slot, User};

fn initial_id() -> u64 {
    1
}

/// The whole in-memory state of the board.
///
/// Also the snapshot format: the struct serializes field-for-field into the
/// persistence file, so a missing snapshot key falls back to its empty
/// default and the counters fall back to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityStore {
    #[serde(default)]
    users: HashMap<String, User>,
    #[serde(default)]
    articles: HashMap<u64, Slot<Article>>,
    #[serde(default)]
    comments: HashMap<u64, Slot<Comment>>,
    #[serde(default = "initial_id")]
    next_article_id: u64,
    #[serde(default = "initial_id")]
    next_comment_id: u64,
}

impl EntityStore {
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
            articles: HashMap::new(),
            comments: HashMap::new(),
            next_article_id: 1,
            next_comment_id: 1,
        }
    }

    // --- Users ---

    pub fn user(&self, username: &str) -> Option<&User> {
        self.users.get(username)
    }

    pub fn user_mut(&mut self, username: &str) -> Option<&mut User> {
        self.users.get_mut(username)
    }

    pub fn insert_user(&mut self, user: User) {
        self.users.insert(user.username.clone(), user);
    }

    // --- Articles ---

    /// Hands out the next article id. Ids are minted once and never reused,
    /// even after the article is deleted.
    pub fn allocate_article_id(&mut self) -> u64 {
        let id = self.next_article_id;
        self.next_article_id += 1;
        id
    }

    pub fn article(&self, id: u64) -> Option<&Article> {
        self.articles.get(&id).and_then(Slot::live)
    }

    pub fn article_mut(&mut self, id: u64) -> Option<&mut Article> {
        self.articles.get_mut(&id).and_then(Slot::live_mut)
    }

    pub fn insert_article(&mut self, article: Article) {
        self.articles.insert(article.id, Slot::Live(article));
    }

    pub fn tombstone_article(&mut self, id: u64) -> Option<Article> {
        self.articles.get_mut(&id).and_then(Slot::bury)
    }

    /// Live articles ordered by id descending, newest first.
    pub fn articles_newest_first(&self) -> Vec<&Article> {
        let mut articles: Vec<&Article> = self.articles.values().filter_map(Slot::live).collect();
        articles.sort_by(|a, b| b.id.cmp(&a.id));
        articles
    }

    // --- Comments ---

    pub fn allocate_comment_id(&mut self) -> u64 {
        let id = self.next_comment_id;
        self.next_comment_id += 1;
        id
    }

    pub fn comment(&self, id: u64) -> Option<&Comment> {
        self.comments.get(&id).and_then(Slot::live)
    }

    pub fn comment_mut(&mut self, id: u64) -> Option<&mut Comment> {
        self.comments.get_mut(&id).and_then(Slot::live_mut)
    }

    pub fn insert_comment(&mut self, comment: Comment) {
        self.comments.insert(comment.id, Slot::Live(comment));
    }

    pub fn tombstone_comment(&mut self, id: u64) -> Option<Comment> {
        self.comments.get_mut(&id).and_then(Slot::bury)
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}
