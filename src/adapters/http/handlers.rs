//! HTTP handlers: load the session snapshot, validate, mutate, then
//! render or redirect.
//!
//! Every branch terminates in a render or a redirect; domain errors
//! become flash messages, never error statuses. Requests carrying the
//! `X-Requested-With: XMLHttpRequest` marker get the AJAX-shaped
//! responses (plain-text target path or 204) instead of redirects.

use axum::extract::{Extension, Form, Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

use crate::domain::session::{Flash, SessionData, SessionId};
use crate::domain::todos::{ListBoard, TodoError};

use super::routes::AppState;
use super::views;

// ─────────────────────────────────────────────────────────────────────────
// Form bodies
// ─────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateListForm {
    #[serde(default)]
    pub list_name: String,
}

#[derive(Debug, Deserialize)]
pub struct RenameListForm {
    #[serde(default)]
    pub new_list_name: String,
}

#[derive(Debug, Deserialize)]
pub struct AddTodoForm {
    #[serde(default)]
    pub todo: String,
}

#[derive(Debug, Deserialize)]
pub struct ToggleTodoForm {
    /// Exactly `"true"` marks the todo complete; anything else, including
    /// an absent field, marks it incomplete.
    #[serde(default)]
    pub completed: String,
}

// ─────────────────────────────────────────────────────────────────────────
// Session plumbing
// ─────────────────────────────────────────────────────────────────────────

/// Load the session snapshot, starting fresh if missing or expired.
async fn load_session(state: &AppState, id: SessionId) -> SessionData {
    match state.store.load(id).await {
        Ok(Some(data)) => data,
        Ok(None) => SessionData::new(),
        Err(error) => {
            tracing::error!(%id, %error, "session load failed, starting empty");
            SessionData::new()
        }
    }
}

/// Persist the snapshot. A failed save is logged and the response still
/// goes out; the next request simply sees older state.
async fn save_session(state: &AppState, id: SessionId, data: SessionData) {
    if let Err(error) = state.store.save(id, data).await {
        tracing::error!(%id, %error, "session save failed");
    }
}

fn is_ajax(headers: &HeaderMap) -> bool {
    headers
        .get("x-requested-with")
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.eq_ignore_ascii_case("XMLHttpRequest"))
}

/// Flash the error on the session and bounce to the all-lists view.
async fn flash_and_redirect_to_lists(
    state: &AppState,
    id: SessionId,
    mut session: SessionData,
    error: TodoError,
) -> Response {
    session.flash_error(error.to_string());
    save_session(state, id, session).await;
    Redirect::to("/lists").into_response()
}

fn list_path(index: usize) -> String {
    format!("/lists/{index}")
}

// ─────────────────────────────────────────────────────────────────────────
// Navigation and liveness
// ─────────────────────────────────────────────────────────────────────────

/// GET /
pub async fn home() -> Redirect {
    Redirect::to("/lists")
}

/// Unmatched routes degrade to the collection view instead of a 404 page.
pub async fn fallback() -> Redirect {
    Redirect::to("/lists")
}

/// GET /health
pub async fn health() -> impl IntoResponse {
    axum::Json(serde_json::json!({ "status": "ok" }))
}

// ─────────────────────────────────────────────────────────────────────────
// List collection
// ─────────────────────────────────────────────────────────────────────────

/// GET /lists
pub async fn view_lists(
    State(state): State<AppState>,
    Extension(id): Extension<SessionId>,
) -> Html<String> {
    let mut session = load_session(&state, id).await;
    let flash = session.take_flash();
    let page = views::lists_page(session.lists.lists(), &flash);
    save_session(&state, id, session).await;
    Html(page)
}

/// GET /lists/new
pub async fn new_list_form(
    State(state): State<AppState>,
    Extension(id): Extension<SessionId>,
) -> Html<String> {
    let mut session = load_session(&state, id).await;
    let flash = session.take_flash();
    let page = views::new_list_page(&flash, "");
    save_session(&state, id, session).await;
    Html(page)
}

/// POST /lists
pub async fn create_list(
    State(state): State<AppState>,
    Extension(id): Extension<SessionId>,
    Form(form): Form<CreateListForm>,
) -> Response {
    let mut session = load_session(&state, id).await;
    match session.lists.create(&form.list_name) {
        Ok(()) => {
            session.flash_success("List created successfully.");
            save_session(&state, id, session).await;
            Redirect::to("/lists").into_response()
        }
        Err(error) => {
            let page = views::new_list_page(&Flash::error(error.to_string()), &form.list_name);
            save_session(&state, id, session).await;
            Html(page).into_response()
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────
// Single list
// ─────────────────────────────────────────────────────────────────────────

/// GET /lists/:id
pub async fn view_list(
    State(state): State<AppState>,
    Extension(id): Extension<SessionId>,
    Path(list_id): Path<String>,
) -> Response {
    let mut session = load_session(&state, id).await;
    let index = match session.lists.resolve(&list_id) {
        Ok(index) => index,
        Err(error) => return flash_and_redirect_to_lists(&state, id, session, error).await,
    };
    let flash = session.take_flash();
    let page = views::list_page(index, &session.lists.lists()[index], &flash);
    save_session(&state, id, session).await;
    Html(page).into_response()
}

/// GET /lists/:id/edit
pub async fn edit_list_form(
    State(state): State<AppState>,
    Extension(id): Extension<SessionId>,
    Path(list_id): Path<String>,
) -> Response {
    let mut session = load_session(&state, id).await;
    let index = match session.lists.resolve(&list_id) {
        Ok(index) => index,
        Err(error) => return flash_and_redirect_to_lists(&state, id, session, error).await,
    };
    let flash = session.take_flash();
    let list = &session.lists.lists()[index];
    let page = views::edit_list_page(index, list, &flash, &list.name);
    save_session(&state, id, session).await;
    Html(page).into_response()
}

/// POST /lists/:id
pub async fn rename_list(
    State(state): State<AppState>,
    Extension(id): Extension<SessionId>,
    Path(list_id): Path<String>,
    Form(form): Form<RenameListForm>,
) -> Response {
    let mut session = load_session(&state, id).await;
    let index = match session.lists.resolve(&list_id) {
        Ok(index) => index,
        Err(error) => return flash_and_redirect_to_lists(&state, id, session, error).await,
    };
    match session.lists.rename(index, &form.new_list_name) {
        Ok(()) => {
            session.flash_success("List name has been updated.");
            save_session(&state, id, session).await;
            Redirect::to(&list_path(index)).into_response()
        }
        Err(error) => {
            let list = &session.lists.lists()[index];
            let page = views::edit_list_page(
                index,
                list,
                &Flash::error(error.to_string()),
                &form.new_list_name,
            );
            save_session(&state, id, session).await;
            Html(page).into_response()
        }
    }
}

/// POST /lists/:id/delete
pub async fn delete_list(
    State(state): State<AppState>,
    Extension(id): Extension<SessionId>,
    Path(list_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let mut session = load_session(&state, id).await;
    let index = match session.lists.resolve(&list_id) {
        Ok(index) => index,
        Err(error) => return flash_and_redirect_to_lists(&state, id, session, error).await,
    };
    match session.lists.delete(index) {
        Ok(name) => {
            session.flash_success(format!("\"{name}\" has been deleted."));
            save_session(&state, id, session).await;
            if is_ajax(&headers) {
                "/lists".into_response()
            } else {
                Redirect::to("/lists").into_response()
            }
        }
        Err(error) => flash_and_redirect_to_lists(&state, id, session, error).await,
    }
}

// ─────────────────────────────────────────────────────────────────────────
// Todos
// ─────────────────────────────────────────────────────────────────────────

/// POST /lists/:id/todos
pub async fn add_todo(
    State(state): State<AppState>,
    Extension(id): Extension<SessionId>,
    Path(list_id): Path<String>,
    Form(form): Form<AddTodoForm>,
) -> Response {
    let mut session = load_session(&state, id).await;
    let index = match session.lists.resolve(&list_id) {
        Ok(index) => index,
        Err(error) => return flash_and_redirect_to_lists(&state, id, session, error).await,
    };
    let outcome = session
        .lists
        .get_mut(index)
        .and_then(|list| list.add_todo(&form.todo));
    match outcome {
        Ok(()) => {
            session.flash_success("Todo item was successfully added.");
            save_session(&state, id, session).await;
            Redirect::to(&list_path(index)).into_response()
        }
        Err(error) => {
            let page = views::list_page(
                index,
                &session.lists.lists()[index],
                &Flash::error(error.to_string()),
            );
            save_session(&state, id, session).await;
            Html(page).into_response()
        }
    }
}

/// POST /lists/:id/todos/:todo_id/delete
pub async fn delete_todo(
    State(state): State<AppState>,
    Extension(id): Extension<SessionId>,
    Path((list_id, todo_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    let mut session = load_session(&state, id).await;
    let index = match session.lists.resolve(&list_id) {
        Ok(index) => index,
        Err(error) => return flash_and_redirect_to_lists(&state, id, session, error).await,
    };
    // A stale or malformed todo id means the item is already gone
    let removed = ListBoard::parse_index(&todo_id)
        .map_err(|_| TodoError::TodoNotFound)
        .and_then(|todo_index| session.lists.get_mut(index)?.remove_todo(todo_index));
    match removed {
        Ok(_) => {
            if is_ajax(&headers) {
                save_session(&state, id, session).await;
                StatusCode::NO_CONTENT.into_response()
            } else {
                session.flash_success("Todo item was successfully deleted.");
                save_session(&state, id, session).await;
                Redirect::to(&list_path(index)).into_response()
            }
        }
        Err(error) => {
            // Soft error: 200 re-render of the updated list, no mutation
            let page = views::list_page(
                index,
                &session.lists.lists()[index],
                &Flash::error(error.to_string()),
            );
            save_session(&state, id, session).await;
            Html(page).into_response()
        }
    }
}

/// POST /lists/:id/todos/:todo_id
pub async fn toggle_todo(
    State(state): State<AppState>,
    Extension(id): Extension<SessionId>,
    Path((list_id, todo_id)): Path<(String, String)>,
    Form(form): Form<ToggleTodoForm>,
) -> Response {
    let mut session = load_session(&state, id).await;
    let index = match session.lists.resolve(&list_id) {
        Ok(index) => index,
        Err(error) => return flash_and_redirect_to_lists(&state, id, session, error).await,
    };
    let completed = form.completed == "true";
    let outcome = ListBoard::parse_index(&todo_id)
        .map_err(|_| TodoError::TodoNotFound)
        .and_then(|todo_index| {
            let todo = session
                .lists
                .get_mut(index)?
                .set_completed(todo_index, completed)?;
            Ok((todo.name.clone(), todo.state_label()))
        });
    match outcome {
        Ok((name, state_label)) => {
            session.flash_success(format!("\"{name}\" has been marked as {state_label}."));
        }
        Err(error) => {
            session.flash_error(error.to_string());
        }
    }
    save_session(&state, id, session).await;
    Redirect::to(&list_path(index)).into_response()
}

/// POST /lists/:id/todo_all
pub async fn complete_all(
    State(state): State<AppState>,
    Extension(id): Extension<SessionId>,
    Path(list_id): Path<String>,
) -> Response {
    let mut session = load_session(&state, id).await;
    let index = match session.lists.resolve(&list_id) {
        Ok(index) => index,
        Err(error) => return flash_and_redirect_to_lists(&state, id, session, error).await,
    };
    match session.lists.get_mut(index) {
        Ok(list) => {
            list.complete_all();
            session.flash_success("All todos have been updated.");
            save_session(&state, id, session).await;
            Redirect::to(&list_path(index)).into_response()
        }
        Err(error) => flash_and_redirect_to_lists(&state, id, session, error).await,
    }
}

// ─────────────────────────────────────────────────────────────────────────
// Session reset
// ─────────────────────────────────────────────────────────────────────────

/// GET /clear
pub async fn clear_session(
    State(state): State<AppState>,
    Extension(id): Extension<SessionId>,
    headers: HeaderMap,
) -> Response {
    if let Err(error) = state.store.remove(id).await {
        tracing::error!(%id, %error, "session clear failed");
    }
    let mut session = SessionData::new();
    session.flash_success("All lists deleted.");
    save_session(&state, id, session).await;
    if is_ajax(&headers) {
        "/lists".into_response()
    } else {
        Redirect::to("/lists").into_response()
    }
}
