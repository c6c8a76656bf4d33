use crate::{
    auth::AuthenticatedUserId,
    error::AppError,
    models::TaskInput,
    routes::parse_id,
    state::AppState,
};
use actix_web::{get, post, put, web, HttpResponse, Responder};
use log::debug;
use validator::Validate;

/// Lists every task in the order they were added.
#[get("")]
pub async fn get_tasks(
    state: web::Data<AppState>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    debug!("user {} listing tasks", user.0);
    Ok(HttpResponse::Ok().json(state.tasks.list()?))
}

/// Creates an open task.
///
/// ## Responses:
/// - `201 Created`: The new task.
/// - `400 Bad Request`: Blank or overly long title.
#[post("")]
pub async fn create_task(
    state: web::Data<AppState>,
    task_data: web::Json<TaskInput>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;
    let task = state.tasks.add(&task_data.title)?;
    debug!("user {} created task {}", user.0, task.id);
    Ok(HttpResponse::Created().json(task))
}

/// Marks a task completed. Completing it again is harmless.
///
/// ## Responses:
/// - `200 OK`: The task.
/// - `404 Not Found`: `{"message": "Task not found"}`.
#[put("/{id}/complete")]
pub async fn complete_task(
    state: web::Data<AppState>,
    task_id: web::Path<String>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let id = parse_id(&task_id, "Task not found")?;
    let task = state.tasks.complete(id)?;
    debug!("user {} completed task {}", user.0, task.id);
    Ok(HttpResponse::Ok().json(task))
}
