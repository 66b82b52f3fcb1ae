use axum::http::StatusCode;
use serde_json::Value;

use super::types::{
    Outcome, RouteParams, UserEnvelope, UserProfile, UsernamePayload, non_empty, parse_payload,
};
use crate::store::memory::EntityStore;
use crate::store::types::User;

/// `POST /users` — returns the existing user, or creates an empty one.
/// Asking for the same username twice yields the same user: 201 on the
/// first call, 200 afterwards.
pub fn get_or_create_user(
    store: &mut EntityStore,
    _params: &RouteParams,
    payload: Option<&Value>,
) -> Outcome {
    let request: Option<UsernamePayload> = parse_payload(payload);
    let Some(username) = request.as_ref().and_then(|req| non_empty(&req.username)) else {
        return Outcome::bad_request();
    };

    if let Some(user) = store.user(username) {
        return Outcome::json(StatusCode::OK, &UserEnvelope { user });
    }

    let user = User::new(username);
    let outcome = Outcome::json(StatusCode::CREATED, &UserEnvelope { user: &user });
    store.insert_user(user);
    outcome
}

/// `GET /users/:username` — the user plus their live articles and comments.
pub fn get_user(store: &mut EntityStore, params: &RouteParams, _payload: Option<&Value>) -> Outcome {
    let Some(username) = params.username() else {
        return Outcome::bad_request();
    };
    let Some(user) = store.user(username) else {
        return Outcome::not_found();
    };

    let user_articles = user
        .article_ids
        .iter()
        .filter_map(|id| store.article(*id))
        .collect();
    let user_comments = user
        .comment_ids
        .iter()
        .filter_map(|id| store.comment(*id))
        .collect();

    Outcome::json(
        StatusCode::OK,
        &UserProfile {
            user,
            user_articles,
            user_comments,
        },
    )
}
