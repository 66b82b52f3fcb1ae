use axum::http::StatusCode;
use serde_json::Value;

use super::types::{
    ArticleEnvelope, ArticlePayload, ArticleViewEnvelope, ArticleWithComments, ArticlesEnvelope,
    Outcome, RouteParams, UsernamePayload, non_empty, parse_payload,
};
use super::vote;
use crate::store::memory::EntityStore;
use crate::store::types::Article;

/// `GET /articles` — every live article, newest first.
pub fn list_articles(
    store: &mut EntityStore,
    _params: &RouteParams,
    _payload: Option<&Value>,
) -> Outcome {
    Outcome::json(
        StatusCode::OK,
        &ArticlesEnvelope {
            articles: store.articles_newest_first(),
        },
    )
}

/// `GET /articles/:id` — one article with its comments resolved.
pub fn get_article(
    store: &mut EntityStore,
    params: &RouteParams,
    _payload: Option<&Value>,
) -> Outcome {
    let Some(id) = params.id() else {
        return Outcome::bad_request();
    };
    let Some(article) = store.article(id) else {
        return Outcome::not_found();
    };

    let comments = article
        .comment_ids
        .iter()
        .filter_map(|comment_id| store.comment(*comment_id))
        .collect();

    Outcome::json(
        StatusCode::OK,
        &ArticleViewEnvelope {
            article: ArticleWithComments { article, comments },
        },
    )
}

/// `POST /articles` — requires `title`, `url` and an existing `username`.
/// The new article starts with empty comment and voter lists and is
/// appended to its owner's article list.
pub fn create_article(
    store: &mut EntityStore,
    _params: &RouteParams,
    payload: Option<&Value>,
) -> Outcome {
    let Some(input) = parse_payload::<ArticlePayload>(payload).and_then(|req| req.article) else {
        return Outcome::bad_request();
    };
    let (Some(title), Some(url), Some(username)) = (
        non_empty(&input.title),
        non_empty(&input.url),
        non_empty(&input.username),
    ) else {
        return Outcome::bad_request();
    };
    if store.user(username).is_none() {
        return Outcome::bad_request();
    }

    let id = store.allocate_article_id();
    let article = Article::new(id, title, url, username);
    let outcome = Outcome::json(StatusCode::CREATED, &ArticleEnvelope { article: &article });

    if let Some(owner) = store.user_mut(username) {
        owner.article_ids.push(id);
    }
    store.insert_article(article);

    outcome
}

/// `PUT /articles/:id` — merges the incoming article into the saved one.
/// `title` and `url` are replaced only when the incoming field is present
/// and non-empty; everything else is untouched.
pub fn update_article(
    store: &mut EntityStore,
    params: &RouteParams,
    payload: Option<&Value>,
) -> Outcome {
    let input = parse_payload::<ArticlePayload>(payload).and_then(|req| req.article);
    let (Some(id), Some(input)) = (params.id(), input) else {
        return Outcome::bad_request();
    };
    let Some(article) = store.article_mut(id) else {
        return Outcome::not_found();
    };

    if let Some(title) = non_empty(&input.title) {
        article.title = title.to_string();
    }
    if let Some(url) = non_empty(&input.url) {
        article.url = url.to_string();
    }

    Outcome::json(StatusCode::OK, &ArticleEnvelope { article })
}

/// `DELETE /articles/:id` — tombstones the article and cascades over its
/// comments: each one is tombstoned and unlinked from its author, and the
/// article leaves its owner's list. Deleting an absent article is a 400,
/// unlike the comment variant; the difference is part of the wire contract.
pub fn delete_article(
    store: &mut EntityStore,
    params: &RouteParams,
    _payload: Option<&Value>,
) -> Outcome {
    let Some(article) = params.id().and_then(|id| store.tombstone_article(id)) else {
        return Outcome::bad_request();
    };

    for comment_id in &article.comment_ids {
        if let Some(comment) = store.tombstone_comment(*comment_id) {
            if let Some(author) = store.user_mut(&comment.username) {
                author.comment_ids.retain(|id| id != comment_id);
            }
        }
    }
    if let Some(owner) = store.user_mut(&article.username) {
        owner.article_ids.retain(|id| *id != article.id);
    }

    Outcome::status(StatusCode::NO_CONTENT)
}

/// `PUT /articles/:id/upvote`
pub fn upvote_article(
    store: &mut EntityStore,
    params: &RouteParams,
    payload: Option<&Value>,
) -> Outcome {
    vote_on_article(store, params, payload, vote::upvote)
}

/// `PUT /articles/:id/downvote`
pub fn downvote_article(
    store: &mut EntityStore,
    params: &RouteParams,
    payload: Option<&Value>,
) -> Outcome {
    vote_on_article(store, params, payload, vote::downvote)
}

fn vote_on_article(
    store: &mut EntityStore,
    params: &RouteParams,
    payload: Option<&Value>,
    cast: fn(&mut Article, &str),
) -> Outcome {
    let request: Option<UsernamePayload> = parse_payload(payload);
    let voter = request.as_ref().and_then(|req| non_empty(&req.username));
    let (Some(id), Some(voter)) = (params.id(), voter) else {
        return Outcome::bad_request();
    };
    if store.user(voter).is_none() {
        return Outcome::bad_request();
    }
    let Some(article) = store.article_mut(id) else {
        return Outcome::bad_request();
    };

    cast(article, voter);

    Outcome::json(StatusCode::OK, &ArticleEnvelope { article })
}
