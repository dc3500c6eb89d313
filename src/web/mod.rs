mod handlers;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;

/// Register the API routes. The service holds no state; every request is
/// recomputed from its body.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/project", web::post().to(handlers::project))
        .route("/api/sweep", web::post().to(handlers::sweep))
        .route("/api/export", web::post().to(handlers::export))
        .route("/api/defaults", web::get().to(handlers::defaults));
}

pub async fn start_server(port: u16) -> std::io::Result<()> {
    tracing::info!(port, "starting maintenance forecast server");
    println!("Starting Maintenance Forecast server on http://localhost:{port}");

    HttpServer::new(|| {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .configure(routes)
    })
    .bind(("127.0.0.1", port))?
    .run()
    .await
}
