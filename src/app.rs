//! The HTTP application shared by the binary and the integration tests.

use actix_cors::Cors;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error,
};

use crate::auth::AuthMiddleware;
use crate::routes::{self, health};
use crate::state::AppState;

/// Builds the full application: CORS, request logging, `/health`, and the
/// `/api` scope behind the token gate.
pub fn build_app(
    state: AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<impl MessageBody>,
        Config = (),
        InitError = (),
        Error = Error,
    >,
> {
    let gate = AuthMiddleware::new(state.authenticator.clone());

    App::new()
        .app_data(web::Data::new(state))
        .wrap(
            Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600),
        )
        .wrap(Logger::default())
        .service(health::health)
        .service(web::scope("/api").wrap(gate).configure(routes::config))
}
