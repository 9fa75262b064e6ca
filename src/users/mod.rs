mod dto;
pub mod handlers;
mod store;

pub use dto::{CreateUser, UpdateUser, User};
pub use store::UserStore;

use axum::{
    routing::{get, put},
    Router,
};

pub fn router() -> Router<UserStore> {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/users", get(handlers::list_users).post(handlers::create_user))
        .route(
            "/users/:id",
            put(handlers::update_user)
                .get(handlers::get_user)
                .delete(handlers::delete_user),
        )
}
