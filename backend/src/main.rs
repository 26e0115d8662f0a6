mod config;
mod error;
mod services;
mod store;

use crate::config::Config;
use crate::store::{seed, Db};
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;
use std::io;
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::from_env().map_err(io::Error::other)?;
    let url = config.url();

    let db = Db::open(&config.database_path).map_err(io::Error::other)?;
    db.with(|conn| {
        seed::default_request_states(conn)?;
        if config.seed_sample_data {
            seed::sample_data(conn)?;
        }
        Ok(())
    })
    .map_err(io::Error::other)?;

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                log::warn!("Could not open a browser at {url}: {e}");
            }
        });
    }

    info!("Server running at {}", url);

    if !config.allowed_origins.is_empty() {
        info!("Cross-origin API access allowed for {}", config.allowed_origins.join(", "));
    }

    let json_limit = config.json_limit;
    let allowed_origins = config.allowed_origins.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(services::cors(&allowed_origins))
            .app_data(services::json_config(json_limit))
            .app_data(web::Data::new(db.clone()))
            .configure(services::configure)
            .default_service(web::route().to(services::embedded::process))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
