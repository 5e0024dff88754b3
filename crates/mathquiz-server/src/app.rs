use crate::{AppConfig, routes};
use axum::{Extension, Router, middleware};
use http::{HeaderValue, Method, header};
use sea_orm::DatabaseConnection;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub(crate) fn create_app(
    app_config: AppConfig,
    frontend_url: &str,
    expose_error_details: bool,
    seaorm_pool: DatabaseConnection,
) -> anyhow::Result<Router> {
    let cors = CorsLayer::new()
        .allow_origin(frontend_url.trim_end_matches('/').parse::<HeaderValue>()?)
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE, header::ORIGIN])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let mut app = Router::new()
        .merge(routes::openapi::create_router())
        .merge(routes::stats::create_router())
        .merge(routes::quiz::create_router())
        .merge(routes::questions::create_router());

    if expose_error_details {
        tracing::info!("error responses include details");
        app = app.layer(middleware::map_response(routes::error::expose_error_details));
    }

    // Router layers are called bottom to top
    let app = app
        .layer(cors)
        .layer(Extension(app_config))
        .layer(Extension(seaorm_pool))
        .layer(TraceLayer::new_for_http())
        .with_state(());
    Ok(app)
}
