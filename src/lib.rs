pub mod app;
pub mod config;
pub mod error;
pub mod standalone;
pub mod todos;
pub mod users;
