mod config;
mod proxy;
mod routes;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use config::GatewayConfig;
use proxy::UpstreamClient;
use routes::configure_routes;
use std::env;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Ok(current_dir) = env::current_dir() {
        log::info!("Current working directory: {}", current_dir.display());
    } else {
        log::error!("Failed to get the current working directory.");
    }

    let config = GatewayConfig::from_env().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    let upstream = UpstreamClient::new(config.upstream_url.clone(), config.upstream_timeout)
        .map_err(|e| {
            log::error!("Failed to create upstream client: {}", e);
            std::io::Error::other(e)
        })?;

    log::info!("Forwarding API calls to {}", upstream.base_url());
    log::info!("Serving dashboard from {}", config.frontend_dir);
    log::info!("Starting server on {}", config.bind_address);

    let frontend_dir = config.frontend_dir.clone();
    let max_body_bytes = config.max_body_bytes;

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec![
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600),
            )
            .app_data(web::Data::new(upstream.clone()))
            .configure(|cfg| configure_routes(cfg, frontend_dir.clone(), max_body_bytes))
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
