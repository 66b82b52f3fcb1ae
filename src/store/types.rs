use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// A board member. The username doubles as the primary key; there is no
/// surrogate id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub article_ids: Vec<u64>,
    pub comment_ids: Vec<u64>,
}

impl User {
    pub fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
            article_ids: Vec::new(),
            comment_ids: Vec::new(),
        }
    }
}

/// A posted article. The two voter lists are mutually exclusive per
/// username; the vote engine maintains that invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: u64,
    pub title: String,
    pub url: String,
    pub username: String,
    pub comment_ids: Vec<u64>,
    pub upvoted_by: Vec<String>,
    pub downvoted_by: Vec<String>,
}

impl Article {
    pub fn new(id: u64, title: &str, url: &str, username: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            url: url.to_string(),
            username: username.to_string(),
            comment_ids: Vec::new(),
            upvoted_by: Vec::new(),
            downvoted_by: Vec::new(),
        }
    }
}

/// A comment attached to exactly one article and one author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub body: String,
    pub username: String,
    pub article_id: u64,
    pub upvoted_by: Vec<String>,
    pub downvoted_by: Vec<String>,
}

impl Comment {
    pub fn new(id: u64, body: &str, username: &str, article_id: u64) -> Self {
        Self {
            id,
            body: body.to_string(),
            username: username.to_string(),
            article_id,
            upvoted_by: Vec::new(),
            downvoted_by: Vec::new(),
        }
    }
}

/// Liveness marker for an entity slot.
///
/// Deletion swaps `Live` for `Tombstone` instead of removing the map entry,
/// which keeps freed ids unusable and survives snapshot round-trips: a
/// tombstone serializes as JSON `null`, a live slot as the entity itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot<T> {
    Live(T),
    Tombstone,
}

impl<T> Slot<T> {
    pub fn live(&self) -> Option<&T> {
        match self {
            Slot::Live(value) => Some(value),
            Slot::Tombstone => None,
        }
    }

    pub fn live_mut(&mut self) -> Option<&mut T> {
        match self {
            Slot::Live(value) => Some(value),
            Slot::Tombstone => None,
        }
    }

    /// Replaces a live slot with a tombstone, handing back the entity.
    /// Tombstoning an already dead slot yields nothing.
    pub fn bury(&mut self) -> Option<T> {
        match std::mem::replace(self, Slot::Tombstone) {
            Slot::Live(value) => Some(value),
            Slot::Tombstone => None,
        }
    }
}

impl<T: Serialize> Serialize for Slot<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Slot::Live(value) => value.serialize(serializer),
            Slot::Tombstone => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Slot<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<T>::deserialize(deserializer)?;
        Ok(value.map_or(Slot::Tombstone, Slot::Live))
    }
}
