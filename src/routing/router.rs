use axum::http::Method;
use serde_json::Value;
use std::collections::HashMap;

use crate::ops::types::{Outcome, RouteParams};
use crate::ops::{articles, comments, users};
use crate::store::memory::EntityStore;

/// A domain operation reachable from the route table.
pub type Operation = fn(&mut EntityStore, &RouteParams, Option<&Value>) -> Outcome;

/// Fixed table from normalized route pattern to per-method operations.
pub struct RouteTable {
    routes: HashMap<&'static str, HashMap<Method, Operation>>,
}

impl RouteTable {
    pub fn new() -> Self {
        let mut routes: HashMap<&'static str, HashMap<Method, Operation>> = HashMap::new();

        routes.insert(
            "/users",
            HashMap::from([(Method::POST, users::get_or_create_user as Operation)]),
        );
        routes.insert(
            "/users/:username",
            HashMap::from([(Method::GET, users::get_user as Operation)]),
        );
        routes.insert(
            "/articles",
            HashMap::from([
                (Method::GET, articles::list_articles as Operation),
                (Method::POST, articles::create_article as Operation),
            ]),
        );
        routes.insert(
            "/articles/:id",
            HashMap::from([
                (Method::GET, articles::get_article as Operation),
                (Method::PUT, articles::update_article as Operation),
                (Method::DELETE, articles::delete_article as Operation),
            ]),
        );
        routes.insert(
            "/articles/:id/upvote",
            HashMap::from([(Method::PUT, articles::upvote_article as Operation)]),
        );
        routes.insert(
            "/articles/:id/downvote",
            HashMap::from([(Method::PUT, articles::downvote_article as Operation)]),
        );
        routes.insert(
            "/comments",
            HashMap::from([(Method::POST, comments::create_comment as Operation)]),
        );
        routes.insert(
            "/comments/:id",
            HashMap::from([
                (Method::PUT, comments::update_comment as Operation),
                (Method::DELETE, comments::delete_comment as Operation),
            ]),
        );
        routes.insert(
            "/comments/:id/upvote",
            HashMap::from([(Method::PUT, comments::upvote_comment as Operation)]),
        );
        routes.insert(
            "/comments/:id/downvote",
            HashMap::from([(Method::PUT, comments::downvote_comment as Operation)]),
        );

        Self { routes }
    }

    /// Resolves `(method, path)` to exactly one domain operation and runs
    /// it against the store. Unmatched routes and methods yield 400 with an
    /// empty body.
    pub fn dispatch(
        &self,
        store: &mut EntityStore,
        method: &Method,
        path: &str,
        payload: Option<&Value>,
    ) -> Outcome {
        let Some(pattern) = normalize_path(path) else {
            return Outcome::bad_request();
        };
        let Some(operation) = self
            .routes
            .get(pattern.as_str())
            .and_then(|methods| methods.get(method))
        else {
            return Outcome::bad_request();
        };

        let params = capture_params(&pattern, path);
        operation(store, &params, payload)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapses a concrete path into its route pattern.
///
/// Precedence is positional and fixed: segment count first, then the
/// `upvote`/`downvote` literal in third position, then the `users` literal,
/// then the `:id` default. The order decides dispatch for ambiguous paths
/// and must not change.
pub(crate) fn normalize_path(path: &str) -> Option<String> {
    let segments: Vec<&str> = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    match segments.as_slice() {
        [] => None,
        [first] => Some(format!("/{}", first)),
        [first, _, action, ..] if *action == "upvote" || *action == "downvote" => {
            Some(format!("/{}/:id/{}", first, action))
        }
        ["users", ..] => Some("/users/:username".to_string()),
        [first, ..] => Some(format!("/{}/:id", first)),
    }
}

/// Walks pattern and path segments in lockstep; every `:name` pattern
/// segment captures the path segment at its position.
pub(crate) fn capture_params(pattern: &str, path: &str) -> RouteParams {
    let mut params = RouteParams::new();
    let pattern_segments = pattern.split('/').filter(|segment| !segment.is_empty());
    let path_segments = path.split('/').filter(|segment| !segment.is_empty());

    for (pattern_segment, path_segment) in pattern_segments.zip(path_segments) {
        if let Some(name) = pattern_segment.strip_prefix(':') {
            params.insert(name, path_segment);
        }
    }

    params
}
