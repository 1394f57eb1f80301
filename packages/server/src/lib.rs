#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the GreenGrid application.
//!
//! Serves the ward vulnerability REST API and the static frontend. Every
//! request is answered by a pure engine function over the on-disk dataset
//! — there is no database and no shared mutable state, so each worker can
//! process requests independently (at the cost of re-running the pipeline
//! per call).

mod handlers;
pub mod interactive;

use std::path::PathBuf;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};

/// Default location of the weather + population dataset.
pub const DEFAULT_DATA_PATH: &str = "data/weather_data_with_population.csv";

/// Shared application state.
pub struct AppState {
    /// Location of the source dataset, re-read on every query.
    pub data_path: PathBuf,
}

/// Starts the GreenGrid API server.
///
/// Resolves the dataset path and bind address from the environment
/// (`GREENGRID_DATA_PATH`, `BIND_ADDR`, `PORT`) and starts the Actix-Web
/// HTTP server. A missing dataset is logged but not fatal — queries
/// degrade to empty results until the file appears.
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let data_path = std::env::var("GREENGRID_DATA_PATH")
        .map_or_else(|_| PathBuf::from(DEFAULT_DATA_PATH), PathBuf::from);
    if !data_path.exists() {
        log::warn!(
            "Dataset not found at {}; queries will return empty results",
            data_path.display()
        );
    }

    let state = web::Data::new(AppState { data_path });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/ward-risk/current", web::get().to(handlers::current_risk))
                    .route(
                        "/ward-details/{ward_no}",
                        web::get().to(handlers::ward_details),
                    )
                    .route("/forecast/{ward_no}", web::get().to(handlers::ward_forecast)),
            )
            // Serve frontend static files (production)
            .service(Files::new("/", "app/dist").index_file("index.html"))
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
