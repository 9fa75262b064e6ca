mod dto;
pub mod handlers;
mod store;
pub mod upstream;

pub use dto::{CreateTodo, Todo, UpdateTodo};
pub use store::TodoStore;
pub use upstream::{UserCheck, UserDirectory};

use axum::{
    routing::{get, put},
    Router,
};

#[derive(Clone)]
pub struct TodosState {
    pub store: TodoStore,
    pub users: UserDirectory,
}

pub fn router() -> Router<TodosState> {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/todos", get(handlers::list_todos).post(handlers::create_todo))
        .route(
            "/todos/:id",
            put(handlers::update_todo)
                .get(handlers::get_todo)
                .delete(handlers::delete_todo),
        )
}
