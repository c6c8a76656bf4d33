#![doc = "The `daily_progress` library crate."]
#![doc = ""]
#![doc = "Authentication, the tracked collections, routing configuration and"]
#![doc = "error handling for the daily progress tracker backend. The binary"]
#![doc = "(`main.rs`) reads the configuration and runs the HTTP server."]

pub mod app;
pub mod auth;
pub mod collections;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod scheduler;
pub mod state;
pub mod store;

pub use app::build_app;
pub use error::AppError;
pub use state::AppState;
