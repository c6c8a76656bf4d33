use crate::{
    auth::{AuthenticatedUserId, MessageResponse},
    error::AppError,
    models::HabitInput,
    routes::parse_id,
    state::AppState,
};
use actix_web::{get, post, put, web, HttpResponse, Responder};
use log::debug;
use validator::Validate;

/// Lists every habit in the order they were added.
#[get("")]
pub async fn get_habits(
    state: web::Data<AppState>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    debug!("user {} listing habits", user.0);
    Ok(HttpResponse::Ok().json(state.habits.list()?))
}

/// Creates a habit with `streak = 0` and `doneToday = false`.
///
/// ## Responses:
/// - `201 Created`: The new habit.
/// - `400 Bad Request`: Blank or overly long title.
#[post("")]
pub async fn create_habit(
    state: web::Data<AppState>,
    habit_data: web::Json<HabitInput>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    habit_data.validate()?;
    let habit = state.habits.add(&habit_data.title)?;
    debug!("user {} created habit {}", user.0, habit.id);
    Ok(HttpResponse::Created().json(habit))
}

/// Clears `doneToday` on every habit.
#[put("/reset")]
pub async fn reset_habits(
    state: web::Data<AppState>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    state.habits.reset_daily()?;
    debug!("user {} reset habits", user.0);
    Ok(HttpResponse::Ok().json(MessageResponse::new("Daily reset done")))
}

/// Marks a habit done for today.
///
/// ## Responses:
/// - `200 OK`: The habit. Unchanged when it was already done today.
/// - `404 Not Found`: `{"message": "Habit not found"}`.
#[put("/{id}/done")]
pub async fn mark_habit_done(
    state: web::Data<AppState>,
    habit_id: web::Path<String>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let id = parse_id(&habit_id, "Habit not found")?;
    let habit = state.habits.mark_done(id)?;
    debug!("user {} marked habit {} done", user.0, habit.id);
    Ok(HttpResponse::Ok().json(habit))
}
