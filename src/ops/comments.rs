use axum::http::StatusCode;
use serde_json::Value;

use super::types::{
    CommentEnvelope, CommentPayload, Outcome, RouteParams, UsernamePayload, non_empty,
    parse_payload,
};
use super::vote;
use crate::store::memory::EntityStore;
use crate::store::types::Comment;

/// `POST /comments` — requires a non-empty `body`, an existing `username`
/// and a live `articleId`. The new comment is appended to both the author's
/// and the article's comment lists.
pub fn create_comment(
    store: &mut EntityStore,
    _params: &RouteParams,
    payload: Option<&Value>,
) -> Outcome {
    let Some(input) = parse_payload::<CommentPayload>(payload).and_then(|req| req.comment) else {
        return Outcome::bad_request();
    };
    let (Some(body), Some(username)) = (non_empty(&input.body), non_empty(&input.username)) else {
        return Outcome::bad_request();
    };
    let Some(article_id) = input.article_id.filter(|id| *id != 0) else {
        return Outcome::bad_request();
    };
    if store.user(username).is_none() || store.article(article_id).is_none() {
        return Outcome::bad_request();
    }

    let id = store.allocate_comment_id();
    let comment = Comment::new(id, body, username, article_id);
    let outcome = Outcome::json(StatusCode::CREATED, &CommentEnvelope { comment: &comment });

    if let Some(author) = store.user_mut(username) {
        author.comment_ids.push(id);
    }
    if let Some(article) = store.article_mut(article_id) {
        article.comment_ids.push(id);
    }
    store.insert_comment(comment);

    outcome
}

/// `PUT /comments/:id` — replaces `body` only when the incoming field is
/// present and non-empty.
pub fn update_comment(
    store: &mut EntityStore,
    params: &RouteParams,
    payload: Option<&Value>,
) -> Outcome {
    let input = parse_payload::<CommentPayload>(payload).and_then(|req| req.comment);
    let (Some(id), Some(input)) = (params.id(), input) else {
        return Outcome::bad_request();
    };
    let Some(comment) = store.comment_mut(id) else {
        return Outcome::not_found();
    };

    if let Some(body) = non_empty(&input.body) {
        comment.body = body.to_string();
    }

    Outcome::json(StatusCode::OK, &CommentEnvelope { comment })
}

/// `DELETE /comments/:id` — tombstones the comment and unlinks it from its
/// author and article. Deleting an absent comment is a 404, unlike the
/// article variant; the difference is part of the wire contract.
pub fn delete_comment(
    store: &mut EntityStore,
    params: &RouteParams,
    _payload: Option<&Value>,
) -> Outcome {
    let Some(comment) = params.id().and_then(|id| store.tombstone_comment(id)) else {
        return Outcome::not_found();
    };

    if let Some(author) = store.user_mut(&comment.username) {
        author.comment_ids.retain(|id| *id != comment.id);
    }
    if let Some(article) = store.article_mut(comment.article_id) {
        article.comment_ids.retain(|id| *id != comment.id);
    }

    Outcome::status(StatusCode::NO_CONTENT)
}

/// `PUT /comments/:id/upvote`
pub fn upvote_comment(
    store: &mut EntityStore,
    params: &RouteParams,
    payload: Option<&Value>,
) -> Outcome {
    vote_on_comment(store, params, payload, vote::upvote)
}

/// `PUT /comments/:id/downvote`
pub fn downvote_comment(
    store: &mut EntityStore,
    params: &RouteParams,
    payload: Option<&Value>,
) -> Outcome {
    vote_on_comment(store, params, payload, vote::downvote)
}

fn vote_on_comment(
    store: &mut EntityStore,
    params: &RouteParams,
    payload: Option<&Value>,
    cast: fn(&mut Comment, &str),
) -> Outcome {
    let request: Option<UsernamePayload> = parse_payload(payload);
    let voter = request.as_ref().and_then(|req| non_empty(&req.username));
    let (Some(id), Some(voter)) = (params.id(), voter) else {
        return Outcome::bad_request();
    };
    if store.user(voter).is_none() {
        return Outcome::bad_request();
    }
    let Some(comment) = store.comment_mut(id) else {
        return Outcome::bad_request();
    };

    cast(comment, voter);

    Outcome::json(StatusCode::OK, &CommentEnvelope { comment })
}
