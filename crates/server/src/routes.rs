use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::file::submissions::FormStore;

pub mod admin;
pub mod forms;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: form endpoints, admin data, health, and
/// the static site as the fallback.
pub fn build_router(store: Arc<FormStore>, cors: CorsLayer, public_dir: &str) -> Router {
    let static_dir = ServeDir::new(public_dir)
        .fallback(ServeFile::new(format!("{}/index.html", public_dir)));

    let public = Router::new().route("/health", get(health));

    let api = Router::new()
        .route("/api/contact", post(forms::submit_contact))
        .route("/api/volunteer", post(forms::submit_volunteer))
        .route("/api/newsletter", post(forms::subscribe_newsletter));

    let admin_routes = Router::new().route("/admin/data", get(admin::form_data));

    public
        .merge(api)
        .merge(admin_routes)
        .fallback_service(static_dir)
        .with_state(store)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
