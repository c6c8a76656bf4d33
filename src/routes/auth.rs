use crate::{
    auth::{LoginRequest, MessageResponse, RegisterRequest},
    error::AppError,
    state::AppState,
};
use actix_web::{post, web, HttpResponse, Responder};
use validator::Validate;

/// Register a new user
///
/// Creates the account and acknowledges it. No token is issued; the client
/// logs in afterwards.
///
/// ## Responses:
/// - `200 OK`: `{"message": "User registered successfully"}`.
/// - `400 Bad Request`: Missing fields or the email is already registered.
/// - `500 Internal Server Error`: Hashing or storage failure.
#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    register_data.validate()?;

    state
        .authenticator
        .register(&register_data.email, &register_data.password)
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("User registered successfully")))
}

/// Login user
///
/// ## Responses:
/// - `200 OK`: `{"token": "...", "user": {"id": "...", "email": "..."}}`.
/// - `400 Bad Request`: Missing fields.
/// - `401 Unauthorized`: `{"message": "Invalid credentials"}` for an unknown
///   email and for a wrong password alike.
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    login_data.validate()?;

    let response = state
        .authenticator
        .login(&login_data.email, &login_data.password)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}
