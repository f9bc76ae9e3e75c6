use ad_intake::config::{AppState, Config};
use ad_intake::services::s3_service::S3Service;
use ad_intake::services::slack_service::SlackService;
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = match Config::init() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("❌ Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!("🚀 Starting ad intake ({} form)...", cfg.form_variant);

    // 1. Setup Services
    let s3_service = S3Service::new(&cfg).await;
    let slack_service = SlackService::new(&cfg);
    tracing::info!("🪣 Image bucket: {}", cfg.s3_bucket_name);

    // 2. Build App State
    let state = AppState {
        config: cfg.clone(),
        storage: Arc::new(s3_service),
        slack_service,
    };

    // 3. Initialize Router
    let app = ad_intake::build_app(state);

    // 4. Start Server
    let addr_str = format!("{}:{}", cfg.server_host, cfg.server_port);
    let addr: SocketAddr = match addr_str.parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!("❌ Invalid listen address {}: {}", addr_str, e);
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("🔥 Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("🎯 Server ready! Listening on http://{}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
    }
}
