use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::store::types::{Article, Comment, User};

/// What a domain operation hands back to the transport layer: an HTTP
/// status plus an optional JSON body.
#[derive(Debug)]
pub struct Outcome {
    pub status: StatusCode,
    pub body: Option<Value>,
}

impl Outcome {
    pub fn status(status: StatusCode) -> Self {
        Self { status, body: None }
    }

    pub fn json<T: Serialize>(status: StatusCode, body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => Self {
                status,
                body: Some(value),
            },
            Err(err) => {
                tracing::error!("Failed to serialize response body: {}", err);
                Self::status(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }

    pub fn bad_request() -> Self {
        Self::status(StatusCode::BAD_REQUEST)
    }

    pub fn not_found() -> Self {
        Self::status(StatusCode::NOT_FOUND)
    }
}

/// Named captures pulled out of the request path by the route table.
#[derive(Debug, Default)]
pub struct RouteParams(HashMap<String, String>);

impl RouteParams {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        self.0.insert(name.to_string(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// The numeric `:id` capture. Unparsable and zero values both count as
    /// malformed identifiers.
    pub fn id(&self) -> Option<u64> {
        self.get("id")
            .and_then(|raw| raw.parse().ok())
            .filter(|id| *id != 0)
    }

    pub fn username(&self) -> Option<&str> {
        self.get("username")
    }
}

/// Deserializes a request payload into a typed view of it. Anything that
/// does not fit the expected shape is treated as missing.
pub fn parse_payload<'de, T: Deserialize<'de>>(payload: Option<&'de Value>) -> Option<T> {
    payload.and_then(|value| T::deserialize(value).ok())
}

/// A usable string field: present and non-empty. Empty strings count as
/// missing everywhere in the wire contract.
pub fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

// --- Request payloads ---

/// Body shape shared by get-or-create and the vote operations, which all
/// carry a bare `username`.
#[derive(Debug, Deserialize)]
pub struct UsernamePayload {
    pub username: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ArticlePayload {
    pub article: Option<ArticleInput>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ArticleInput {
    pub title: Option<String>,
    pub url: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CommentPayload {
    pub comment: Option<CommentInput>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentInput {
    pub body: Option<String>,
    pub username: Option<String>,
    pub article_id: Option<u64>,
}

// --- Response envelopes ---

#[derive(Debug, Serialize)]
pub struct UserEnvelope<'a> {
    pub user: &'a User,
}

/// Profile response: the user plus their articles and comments resolved
/// from the id lists.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile<'a> {
    pub user: &'a User,
    pub user_articles: Vec<&'a Article>,
    pub user_comments: Vec<&'a Comment>,
}

#[derive(Debug, Serialize)]
pub struct ArticlesEnvelope<'a> {
    pub articles: Vec<&'a Article>,
}

#[derive(Debug, Serialize)]
pub struct ArticleEnvelope<'a> {
    pub article: &'a Article,
}

/// Read view of an article with its comments resolved. The `comments`
/// field exists only on this response, never in the store or snapshot.
#[derive(Debug, Serialize)]
pub struct ArticleWithComments<'a> {
    #[serde(flatten)]
    pub article: &'a Article,
    pub comments: Vec<&'a Comment>,
}

#[derive(Debug, Serialize)]
pub struct ArticleViewEnvelope<'a> {
    pub article: ArticleWithComments<'a>,
}

#[derive(Debug, Serialize)]
pub struct CommentEnvelope<'a> {
    pub comment: &'a Comment,
}
