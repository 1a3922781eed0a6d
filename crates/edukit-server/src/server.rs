use std::io;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};

use crate::config::RelayConfig;
use crate::handlers;
use crate::middleware::TracingMiddleware;
use crate::state::AppState;

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::health::handler))
        .route("/generate", web::post().to(handlers::generate::handler));
}

pub async fn run_server(config: RelayConfig) -> io::Result<()> {
    let bind_addr = config.bind_addr();
    tracing::info!(
        "Initializing relay with model: {}, base URL: {}, timeout: {:?}",
        config.model,
        config.base_url,
        config.timeout
    );

    let state = web::Data::new(AppState::from_config(&config));

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Cors::permissive())
            .wrap(TracingMiddleware)
            .configure(app_config)
    });

    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    tracing::info!("Starting Edu-Kit relay on http://{}", bind_addr);

    server.bind(&bind_addr)?.run().await
}
