pub mod auth;
pub mod habits;
pub mod health;
pub mod logs;
pub mod summary;
pub mod tasks;

use actix_web::web;
use uuid::Uuid;

use crate::error::AppError;

/// Registers every `/api` route. `AuthMiddleware` is applied by the caller.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .service(
        web::scope("/auth")
            .service(auth::login)
            .service(auth::register),
    )
    .service(
        web::scope("/habits")
            .service(habits::get_habits)
            .service(habits::create_habit)
            .service(habits::reset_habits)
            .service(habits::mark_habit_done),
    )
    .service(
        web::scope("/tasks")
            .service(tasks::get_tasks)
            .service(tasks::create_task)
            .service(tasks::complete_task),
    )
    .service(
        web::scope("/logs")
            .service(logs::get_logs)
            .service(logs::create_log),
    )
    .service(summary::get_summary);
}

/// Parses an id from the path. Anything that is not an id cannot name an
/// existing item, so it is reported as `not_found`.
pub(crate) fn parse_id(raw: &str, not_found: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(not_found.to_string()))
}
