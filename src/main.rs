use actix_web::HttpServer;
use log::{info, warn};
use std::io;
use tokio_util::sync::CancellationToken;

use daily_progress::{build_app, config::Config, scheduler, AppState};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|e| {
        log::error!("invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    let state = AppState::from_config(&config).map_err(|e| {
        log::error!("failed to build application state: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    let cancel = CancellationToken::new();
    let reset_task = config
        .daily_reset_enabled
        .then(|| scheduler::spawn_daily_reset(state.habits.clone(), cancel.clone()));

    info!("Starting server at {}", config.server_url());
    let result = HttpServer::new(move || build_app(state.clone()))
        .bind((config.server_host.as_str(), config.server_port))?
        .run()
        .await;

    cancel.cancel();
    if let Some(handle) = reset_task {
        if let Err(e) = handle.await {
            warn!("daily reset scheduler ended abnormally: {}", e);
        }
    }
    result
}
