use demo_boost::{configure, LastUpdate};

use actix_web::web::Data;
use actix_web::{App, HttpServer};
use chrono::Local;
use log::info;

use std::env;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let addr = env::var("BIND_ADDR").unwrap_or_else(|_| "localhost:8080".to_string());
    let last_update = Data::new(LastUpdate::new(Local::now()));

    info!("Starting on http://{}", addr);
    HttpServer::new(move || {
        App::new()
            .app_data(last_update.clone())
            .configure(configure)
    })
    .bind(addr)?
    .run()
    .await
}
