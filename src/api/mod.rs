pub mod config;
pub mod handlers;
pub mod models;

use actix_web::{web, App, HttpServer};
use anyhow::Result;
use tracing::{error, info};

use self::config::ApiConfig;
use self::handlers::{health_check, query_url_handler, redirect_handler, view_url_handler};

/// Registers the URL endpoints on an actix app
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/redirect").route(web::get().to(redirect_handler)))
        .service(web::resource("/urls/view").route(web::post().to(view_url_handler)))
        .service(web::resource("/urls/query").route(web::post().to(query_url_handler)))
        .service(web::resource("/health").route(web::get().to(health_check)));
}

/// Starts the HTTP server and runs until it is shut down
pub async fn start_server(host: &str, port: u16, config: ApiConfig) -> Result<()> {
    info!("Starting URL service on {}:{}", host, port);
    let config_data = web::Data::new(config);

    let server_result = HttpServer::new(move || {
        App::new()
            .app_data(config_data.clone())
            .configure(configure)
    })
    .bind((host, port))
    .map_err(|e| {
        error!("Failed to bind to {}:{}: {}", host, port, e);
        e
    })?
    .run()
    .await;

    if let Err(e) = server_result {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown complete");
    Ok(())
}
