use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::error::ApiError;

use super::dto::{CreateUser, UpdateUser, User};
use super::store::UserStore;

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "service": "users" }))
}

#[instrument(skip(store))]
pub async fn list_users(State(store): State<UserStore>) -> Json<Vec<User>> {
    Json(store.list())
}

#[instrument(skip(store, payload))]
pub async fn create_user(
    State(store): State<UserStore>,
    Json(payload): Json<CreateUser>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let (Some(name), Some(email)) = (payload.name, payload.email) else {
        warn!("create user rejected, missing name or email");
        return Err(ApiError::validation("Name and email are required"));
    };

    let user = User::new(name, email);
    store.insert(user.clone());

    info!(user_id = %user.id, "created user");
    Ok((StatusCode::CREATED, Json(user)))
}

#[instrument(skip(store))]
pub async fn get_user(
    State(store): State<UserStore>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(&id)?;
    store.get(&id).map(Json).ok_or(ApiError::NotFound("User"))
}

#[instrument(skip(store, body))]
pub async fn update_user(
    State(store): State<UserStore>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(&id)?;
    if store.get(&id).is_none() {
        return Err(ApiError::NotFound("User"));
    }
    let patch = parse_patch(&body)?;

    let user = store.update(&id, patch).ok_or(ApiError::NotFound("User"))?;
    info!(user_id = %id, "updated user");
    Ok(Json(user))
}

#[instrument(skip(store))]
pub async fn delete_user(
    State(store): State<UserStore>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id)?;
    if !store.remove(&id) {
        return Err(ApiError::NotFound("User"));
    }
    info!(user_id = %id, "deleted user");
    Ok(Json(json!({ "message": "User deleted" })))
}

/// Ids are opaque strings on the wire. A string that cannot name any stored
/// record is simply an unknown id, not a malformed request.
fn parse_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::NotFound("User"))
}

/// Empty bodies are rejected outright; unknown fields are silently dropped
/// when the raw object is narrowed to the typed patch.
fn parse_patch(body: &Value) -> Result<UpdateUser, ApiError> {
    match body.as_object() {
        Some(map) if !map.is_empty() => serde_json::from_value(body.clone())
            .map_err(|_| ApiError::validation("Invalid update payload")),
        _ => Err(ApiError::validation("No data provided")),
    }
}
