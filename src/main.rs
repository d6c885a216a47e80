mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod utils;

use actix_web::{middleware, web, App, HttpServer};
use config::Config;
use db::postgres::PgStore;
use db::Store;
use dotenv::dotenv;
use log::{error, info};
use std::process;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env().unwrap_or_else(|err| {
        error!("Invalid configuration: {}", err);
        process::exit(1);
    });

    // Initialize the database pool
    let pool = match db::create_pool(&config.database).await {
        Ok(pool) => pool,
        Err(err) => {
            error!("Failed to connect to the database: {}", err);
            process::exit(1);
        }
    };
    info!("Connected to the database");

    let store: Arc<dyn Store> = Arc::new(PgStore::new(pool));
    let store = web::Data::from(store);

    info!("Starting server at {}", config.bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(store.clone())
            .configure(handlers::configure)
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
