use std::io;
use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};
use log::{error, info};

use review_analyzer::api;
use review_analyzer::config::Config;
use review_analyzer::engine::QueryEngine;
use review_analyzer::sentiment::LexiconScorer;
use review_analyzer::store::ReviewStore;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = Config::from_env();

    // Seed data is required; an unreadable file is fatal.
    let store = ReviewStore::load_csv(&config.reviews_csv)
        .await
        .map_err(|e| {
            error!("{}", e);
            io::Error::new(io::ErrorKind::InvalidData, e.to_string())
        })?;

    let engine = web::Data::new(QueryEngine::new(
        Arc::new(store),
        Arc::new(LexiconScorer::new()),
    ));

    let (host, port) = config.bind_address();
    info!("Listening on {}:{}...", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(engine.clone())
            .wrap(middleware::Logger::default())
            .configure(api::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
