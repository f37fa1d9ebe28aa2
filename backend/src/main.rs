mod config;
mod contributions;
mod error;
mod location;
mod services;
mod state;
mod store;

use crate::config::Config;
use crate::location::ip::IpLocator;
use crate::state::AppState;
use crate::store::ContributionStore;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use env_logger::Env;
use log::info;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::parse();

    let store = ContributionStore::open(&config.database).map_err(io::Error::other)?;
    let locator = IpLocator::new(config.ip_lookup_url.clone(), config.ip_lookup_timeout())
        .map_err(io::Error::other)?;
    let state = AppState::new(store, locator, config.max_upload_bytes());

    // Base64 inflates embedded files by a third; leave room for the metadata.
    let json_limit = config.max_upload_bytes() / 3 * 4 + 64 * 1024;

    let (host, port) = config.bind_addr();
    info!("Server running at http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(json_limit))
            .app_data(web::Data::new(state.clone()))
            .service(services::location::configure_routes())
            .service(services::contributions::configure_routes())
            .service(services::temples::configure_routes())
            .service(services::map::configure_routes())
            .service(services::stats::configure_routes())
    })
    .bind((host, port))?
    .run()
    .await
}
