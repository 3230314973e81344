//! Taco Motor HTTP server.
//!
//! Reads `TACO_MOTOR_*` settings, starts logging, opens the catalog database
//! and serves the catalog API until interrupted.

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use log::{error, info};
use std::process::ExitCode;
use tacomotor_api::{configure, AppState, ServerConfig};
use tacomotor_core::db::ConnectionSource;
use tacomotor_core::{init_logging, logging_status};

fn main() -> ExitCode {
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("tacomotor_server: {err}");
            return ExitCode::from(2);
        }
    };

    if let Err(err) = init_logging(&config.log_level, config.log_dir.as_deref()) {
        eprintln!("tacomotor_server: {err}");
        return ExitCode::from(2);
    }

    match actix_web::rt::System::new().block_on(serve(config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=server_exit module=server status=error error={err}");
            ExitCode::FAILURE
        }
    }
}

async fn serve(config: ServerConfig) -> Result<(), String> {
    let source = ConnectionSource::open(&config.db_path)
        .map_err(|err| format!("failed to open `{}`: {err}", config.db_path.display()))?;
    let state = web::Data::new(
        AppState::new(source, config.reset).map_err(|err| format!("catalog not ready: {err}"))?,
    );

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .configure(configure)
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    let server = server
        .bind((config.host.as_str(), config.port))
        .map_err(|err| format!("failed to bind {}:{}: {err}", config.host, config.port))?;
    let log_target = match logging_status() {
        Some((_, Some(dir))) => dir.display().to_string(),
        _ => "stderr".to_string(),
    };
    info!(
        "event=server_start module=server status=ok host={} port={} db_path={} seed_on_reset={} log_target={log_target}",
        config.host,
        config.port,
        config.db_path.display(),
        config.reset.seed_demo_data
    );

    server
        .run()
        .await
        .map_err(|err| format!("server stopped with error: {err}"))?;
    info!("event=server_stop module=server status=ok");
    Ok(())
}
