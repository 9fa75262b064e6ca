use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::error::ApiError;

use super::dto::{CreateTodo, ListTodosQuery, Todo, UpdateTodo};
use super::upstream::UserCheck;
use super::TodosState;

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "service": "todos" }))
}

#[instrument(skip(state))]
pub async fn list_todos(
    State(state): State<TodosState>,
    Query(q): Query<ListTodosQuery>,
) -> Json<Vec<Todo>> {
    Json(state.store.list(q.user_id.as_deref()))
}

#[instrument(skip(state, payload))]
pub async fn create_todo(
    State(state): State<TodosState>,
    Json(payload): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let (Some(title), Some(user_id)) = (payload.title, payload.user_id) else {
        warn!("create todo rejected, missing title or user_id");
        return Err(ApiError::validation("Title and user_id are required"));
    };

    // Reject only a confirmed absence; an unreachable users service must
    // never block the write.
    match state.users.check(&user_id).await {
        UserCheck::Absent => return Err(ApiError::NotFound("User")),
        UserCheck::Found | UserCheck::Inconclusive => {}
    }

    let todo = Todo::new(title, payload.description.unwrap_or_default(), user_id);
    state.store.insert(todo.clone());

    info!(todo_id = %todo.id, user_id = %todo.user_id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

#[instrument(skip(state))]
pub async fn get_todo(
    State(state): State<TodosState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&id)?;
    state.store.get(&id).map(Json).ok_or(ApiError::NotFound("Todo"))
}

#[instrument(skip(state, body))]
pub async fn update_todo(
    State(state): State<TodosState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&id)?;
    if state.store.get(&id).is_none() {
        return Err(ApiError::NotFound("Todo"));
    }
    let patch = parse_patch(&body)?;

    let todo = state.store.update(&id, patch).ok_or(ApiError::NotFound("Todo"))?;
    info!(todo_id = %id, "updated todo");
    Ok(Json(todo))
}

#[instrument(skip(state))]
pub async fn delete_todo(
    State(state): State<TodosState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id)?;
    if !state.store.remove(&id) {
        return Err(ApiError::NotFound("Todo"));
    }
    info!(todo_id = %id, "deleted todo");
    Ok(Json(json!({ "message": "Todo deleted" })))
}

/// Ids are opaque strings on the wire. A string that cannot name any stored
/// record is simply an unknown id, not a malformed request.
fn parse_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::NotFound("Todo"))
}

fn parse_patch(body: &Value) -> Result<UpdateTodo, ApiError> {
    match body.as_object() {
        Some(map) if !map.is_empty() => serde_json::from_value(body.clone())
            .map_err(|_| ApiError::validation("Invalid update payload")),
        _ => Err(ApiError::validation("No data provided")),
    }
}
