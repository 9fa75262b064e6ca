//! The standalone todo API: no health route, no user association, and the
//! client supplies the identifier. Records live in an ordered sequence, so
//! every id-keyed operation is a linear scan over insertion order.

mod dto;
pub mod handlers;
mod store;

pub use dto::TodoItem;
pub use store::TodoDb;

use axum::{
    routing::{get, put},
    Router,
};

pub fn router() -> Router<TodoDb> {
    Router::new()
        .route("/todos", get(handlers::list_todos).post(handlers::create_todo))
        .route(
            "/todos/:id",
            put(handlers::update_todo)
                .get(handlers::get_todo)
                .delete(handlers::delete_todo),
        )
}
