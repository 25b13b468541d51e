//! Route table for the todo server.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::{middleware, Router};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::ports::SessionStore;

use super::handlers::{
    add_todo, clear_session, complete_all, create_list, delete_list, delete_todo, edit_list_form,
    fallback, health, home, new_list_form, rename_list, toggle_todo, view_list, view_lists,
};
use super::middleware::session_middleware;

/// Shared application state: the session store and cookie settings.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SessionStore>,
    pub cookie_name: String,
}

/// Build the application router.
///
/// Routes:
/// - `GET /` - redirect to the collection view
/// - `GET /lists` - all lists
/// - `GET /lists/new` - creation form
/// - `POST /lists` - create a list
/// - `GET /lists/:id` - list detail
/// - `GET /lists/:id/edit` - rename form
/// - `POST /lists/:id` - rename a list
/// - `POST /lists/:id/delete` - delete a list
/// - `POST /lists/:id/todos` - add a todo
/// - `POST /lists/:id/todos/:todo_id` - toggle a todo
/// - `POST /lists/:id/todos/:todo_id/delete` - delete a todo
/// - `POST /lists/:id/todo_all` - complete every todo
/// - `GET /clear` - wipe the session
/// - `GET /health` - liveness probe
///
/// Anything else redirects to `/lists`.
pub fn app_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/lists", get(view_lists).post(create_list))
        .route("/lists/new", get(new_list_form))
        .route("/lists/:id", get(view_list).post(rename_list))
        .route("/lists/:id/edit", get(edit_list_form))
        .route("/lists/:id/delete", post(delete_list))
        .route("/lists/:id/todos", post(add_todo))
        .route("/lists/:id/todos/:todo_id", post(toggle_todo))
        .route("/lists/:id/todos/:todo_id/delete", post(delete_todo))
        .route("/lists/:id/todo_all", post(complete_all))
        .route("/clear", get(clear_session))
        .route("/health", get(health))
        .fallback(fallback)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionStore;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn test_router() -> Router {
        let state = AppState {
            store: Arc::new(InMemorySessionStore::new(Duration::from_secs(3600))),
            cookie_name: "listkeeper_session".to_string(),
        };
        app_router(state, Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_root_redirects_to_lists() {
        let response = test_router()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/lists");
    }

    #[tokio::test]
    async fn test_unmatched_route_redirects_to_lists() {
        let response = test_router()
            .oneshot(Request::get("/nope/nothing").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/lists");
    }

    #[tokio::test]
    async fn test_health_is_ok() {
        let response = test_router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_first_response_sets_session_cookie() {
        let response = test_router()
            .oneshot(Request::get("/lists").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(cookie.starts_with("listkeeper_session="));
        assert!(cookie.contains("HttpOnly"));
    }
}
