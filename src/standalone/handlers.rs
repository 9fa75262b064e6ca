use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::{info, instrument};

use crate::error::ApiError;

use super::dto::TodoItem;
use super::store::TodoDb;

#[instrument(skip(db))]
pub async fn list_todos(State(db): State<TodoDb>) -> Json<Vec<TodoItem>> {
    Json(db.list())
}

#[instrument(skip(db, item))]
pub async fn create_todo(
    State(db): State<TodoDb>,
    Json(item): Json<TodoItem>,
) -> (StatusCode, Json<TodoItem>) {
    db.push(item.clone());
    info!(todo_id = item.id, "created todo");
    (StatusCode::CREATED, Json(item))
}

#[instrument(skip(db))]
pub async fn get_todo(
    State(db): State<TodoDb>,
    Path(id): Path<i64>,
) -> Result<Json<TodoItem>, ApiError> {
    db.find(id).map(Json).ok_or(ApiError::NotFound("Todo"))
}

#[instrument(skip(db, item))]
pub async fn update_todo(
    State(db): State<TodoDb>,
    Path(id): Path<i64>,
    Json(item): Json<TodoItem>,
) -> Result<Json<TodoItem>, ApiError> {
    let replaced = db.replace(id, item).ok_or(ApiError::NotFound("Todo"))?;
    info!(todo_id = id, "updated todo");
    Ok(Json(replaced))
}

#[instrument(skip(db))]
pub async fn delete_todo(
    State(db): State<TodoDb>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    if !db.remove(id) {
        return Err(ApiError::NotFound("Todo"));
    }
    info!(todo_id = id, "deleted todo");
    Ok(Json(json!({ "message": "Todo deleted" })))
}
