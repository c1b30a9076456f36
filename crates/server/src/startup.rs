use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use service::{file::submissions::FormStore, runtime};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(3000);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Load the data and static site directories from configs or env vars
fn load_storage_dirs() -> (String, String) {
    match configs::load_default() {
        Ok(cfg) => (cfg.storage.data_dir, cfg.storage.public_dir),
        Err(_) => (
            env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()),
            env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".to_string()),
        ),
    }
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let (data_dir, public_dir) = load_storage_dirs();
    runtime::ensure_env(&public_dir, &data_dir).await?;

    // File-backed stores for the three form collections
    let store = FormStore::new(&data_dir).await?;

    // Build router
    let cors = build_cors();
    let app: Router = routes::build_router(Arc::clone(&store), cors, &public_dir);

    // Bind and serve
    let addr = load_bind_addr()?;
    info!(%addr, %data_dir, "starting form backend");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
