//! Routing Tests
//!
//! Validates path normalization precedence, capture extraction and the
//! unmatched-route contract. End-to-end dispatch over a live listener is
//! covered by the integration tests.

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::routing::router::{RouteTable, capture_params, normalize_path};
    use crate::store::memory::EntityStore;

    // ============================================================
    // NORMALIZATION PRECEDENCE
    // ============================================================

    #[test]
    fn test_single_segment_paths_are_collection_routes() {
        assert_eq!(normalize_path("/users").as_deref(), Some("/users"));
        assert_eq!(normalize_path("/articles").as_deref(), Some("/articles"));
        assert_eq!(normalize_path("/articles/").as_deref(), Some("/articles"));
    }

    #[test]
    fn test_vote_literal_outranks_the_users_literal() {
        assert_eq!(
            normalize_path("/articles/12/upvote").as_deref(),
            Some("/articles/:id/upvote")
        );
        assert_eq!(
            normalize_path("/comments/3/downvote").as_deref(),
            Some("/comments/:id/downvote")
        );
        // The vote check runs before the `users` check, so this collapses
        // into a pattern the table does not contain.
        assert_eq!(
            normalize_path("/users/alice/upvote").as_deref(),
            Some("/users/:id/upvote")
        );
    }

    #[test]
    fn test_users_paths_capture_a_username() {
        assert_eq!(
            normalize_path("/users/alice").as_deref(),
            Some("/users/:username")
        );
        assert_eq!(
            normalize_path("/users/alice/extra").as_deref(),
            Some("/users/:username")
        );
    }

    #[test]
    fn test_everything_else_captures_an_id() {
        assert_eq!(
            normalize_path("/articles/12").as_deref(),
            Some("/articles/:id")
        );
        assert_eq!(
            normalize_path("/comments/abc").as_deref(),
            Some("/comments/:id")
        );
        assert_eq!(normalize_path("/unknown/1").as_deref(), Some("/unknown/:id"));
    }

    #[test]
    fn test_empty_path_matches_nothing() {
        assert_eq!(normalize_path("/"), None);
        assert_eq!(normalize_path(""), None);
    }

    // ============================================================
    // CAPTURES
    // ============================================================

    #[test]
    fn test_captures_are_positional_and_named() {
        let params = capture_params("/articles/:id/upvote", "/articles/12/upvote");
        assert_eq!(params.get("id"), Some("12"));
        assert_eq!(params.id(), Some(12));

        let params = capture_params("/users/:username", "/users/alice");
        assert_eq!(params.username(), Some("alice"));

        let params = capture_params("/articles/:id", "/articles/zero");
        assert_eq!(params.id(), None, "Non-numeric capture is a malformed id");

        let params = capture_params("/articles/:id", "/articles/0");
        assert_eq!(params.id(), None, "Zero is a malformed id");
    }

    // ============================================================
    // DISPATCH
    // ============================================================

    #[test]
    fn test_dispatch_reaches_the_domain_operation() {
        let table = RouteTable::new();
        let mut store = EntityStore::new();

        let payload = json!({ "username": "alice" });
        let outcome = table.dispatch(&mut store, &Method::POST, "/users", Some(&payload));
        assert_eq!(outcome.status, StatusCode::CREATED);

        let outcome = table.dispatch(&mut store, &Method::GET, "/users/alice", None);
        assert_eq!(outcome.status, StatusCode::OK);
        assert_eq!(outcome.body.unwrap()["user"]["username"], "alice");
    }

    #[test]
    fn test_unmatched_route_is_bad_request_not_not_found() {
        let table = RouteTable::new();
        let mut store = EntityStore::new();

        for path in ["/", "/nope", "/nope/1", "/users/alice/upvote"] {
            let outcome = table.dispatch(&mut store, &Method::GET, path, None);
            assert_eq!(outcome.status, StatusCode::BAD_REQUEST, "Path: {}", path);
            assert!(outcome.body.is_none(), "Unmatched routes carry no body");
        }
    }

    #[test]
    fn test_unmatched_method_is_bad_request() {
        let table = RouteTable::new();
        let mut store = EntityStore::new();

        let outcome = table.dispatch(&mut store, &Method::GET, "/users", None);
        assert_eq!(outcome.status, StatusCode::BAD_REQUEST, "GET /users has no operation");

        let outcome = table.dispatch(&mut store, &Method::DELETE, "/users/alice", None);
        assert_eq!(outcome.status, StatusCode::BAD_REQUEST);

        let outcome = table.dispatch(&mut store, &Method::POST, "/articles/1/upvote", None);
        assert_eq!(outcome.status, StatusCode::BAD_REQUEST, "Votes are PUT only");
    }
}
