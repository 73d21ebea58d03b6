/*!
 * Web surface: the single translator page plus a small JSON API.
 *
 * - `GET /` renders the page; selector changes resubmit it
 * - `POST /translate` runs a translation and re-renders
 * - `POST /history/{id}/delete` deletes a row and re-renders
 * - `/api/...` exposes the same operations as JSON
 */

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;

use crate::app_config::Config;
use crate::app_controller::Controller;

pub mod handlers;
pub mod render;

/// Shared state handed to every request
pub struct AppState {
    pub controller: Controller,
    /// Model id shown by the health endpoint
    pub model_name: String,
}

/// Register all routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::index)
        .service(handlers::translate_form)
        .service(handlers::delete_form)
        .service(
            web::scope("/api")
                .service(handlers::api_translate)
                .service(handlers::api_history)
                .service(handlers::api_delete)
                .service(handlers::api_health),
        );
}

/// Serve the page until the process is stopped
pub async fn run_server(config: &Config, controller: Controller) -> std::io::Result<()> {
    let state = web::Data::new(AppState {
        controller,
        model_name: config.model.name.clone(),
    });
    let (host, port) = config.bind_address();

    info!("Translator listening on http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
