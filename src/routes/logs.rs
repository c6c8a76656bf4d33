use crate::{auth::AuthenticatedUserId, error::AppError, models::DailyLogInput, state::AppState};
use actix_web::{get, post, web, HttpResponse, Responder};
use chrono::Utc;
use log::debug;
use validator::Validate;

/// Lists every daily log entry in the order it was recorded.
#[get("")]
pub async fn get_logs(
    state: web::Data<AppState>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    debug!("user {} listing daily logs", user.0);
    Ok(HttpResponse::Ok().json(state.logs.list()?))
}

/// Records hours worked, notes and mood for a day.
///
/// ## Responses:
/// - `201 Created`: The new entry.
/// - `400 Bad Request`: Negative hours, mood outside 1-5, overly long notes
///   or a date after today.
#[post("")]
pub async fn create_log(
    state: web::Data<AppState>,
    log_data: web::Json<DailyLogInput>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    log_data.validate()?;
    let log = state.logs.add(&log_data, Utc::now().date_naive())?;
    debug!("user {} recorded daily log {}", user.0, log.id);
    Ok(HttpResponse::Created().json(log))
}
