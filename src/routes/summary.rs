use crate::{auth::AuthenticatedUserId, collections::Summary, error::AppError, state::AppState};
use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;

/// Done and pending counts, hours, mood and streak for the dashboard.
#[get("/summary")]
pub async fn get_summary(
    state: web::Data<AppState>,
    _user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let habits = state.habits.list()?;
    let tasks = state.tasks.list()?;
    let logs = state.logs.list()?;
    let summary = Summary::from_items(&habits, &tasks, &logs, Utc::now().date_naive());
    Ok(HttpResponse::Ok().json(summary))
}
