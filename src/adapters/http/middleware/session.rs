//! Session middleware: resolves the browser cookie to a session id.
//!
//! ```text
//! Request → session_middleware → injects SessionId into extensions
//!                                        ↓
//!                  Handlers load/save the snapshot through the store
//! ```
//!
//! A fresh id is generated when the cookie is missing or unparsable, and
//! the `Set-Cookie` header is appended to the response in that case. The
//! store itself is untouched here; a session only materialises once a
//! handler saves its snapshot.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::domain::session::SessionId;

use super::super::routes::AppState;

/// Layer function wired with [`axum::middleware::from_fn_with_state`].
pub async fn session_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let existing: Option<SessionId> = jar
        .get(&state.cookie_name)
        .and_then(|cookie| cookie.value().parse().ok());

    let (id, is_new) = match existing {
        Some(id) => (id, false),
        None => (SessionId::new(), true),
    };

    request.extensions_mut().insert(id);
    let response = next.run(request).await;

    if is_new {
        let cookie = Cookie::build((state.cookie_name.clone(), id.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build();
        (jar.add(cookie), response).into_response()
    } else {
        response
    }
}
