use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};
use clap::{Arg, Command};
use std::path::Path;
use std::sync::Arc;
use std::time::SystemTime;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use trivia_api::config::AppConfig;
use trivia_api::database::Database;
use trivia_api::error::AppResult;
use trivia_api::handlers::AppState;
use trivia_api::routes::configure_routes;

#[actix_web::main]
async fn main() -> AppResult<()> {
    // Parse command line arguments
    let matches = Command::new("trivia-api")
        .version(env!("CARGO_PKG_VERSION"))
        .about("REST backend for a trivia-question web application")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to configuration file")
                .value_name("FILE"),
        )
        .get_matches();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("trivia_api=info".parse().unwrap()))
        .init();

    tracing::info!("Starting trivia API server");

    // Load configuration
    let config = match matches.get_one::<String>("config") {
        Some(path) => AppConfig::load_from_file(Path::new(path))?,
        None => AppConfig::load()?,
    };

    // Initialize database
    let database = Arc::new(Database::new(&config.database.path)?);
    tracing::info!("Database initialized at {:?}", config.database.path);

    let seeded = database.seed_default_categories()?;
    if seeded > 0 {
        tracing::info!("Seeded {seeded} default categories");
    }

    let app_state = web::Data::new(AppState {
        database,
        start_time: SystemTime::now(),
    });

    // Start HTTP server
    let server_addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Starting HTTP server on {}", server_addr);

    HttpServer::new(move || {
        // Fixed, static CORS policy applied to every response.
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "PUT", "POST", "DELETE", "OPTIONS"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION]);

        App::new()
            .app_data(app_state.clone())
            .wrap(Logger::default())
            .wrap(cors)
            .configure(configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await?;

    Ok(())
}
