pub mod api;
pub mod dashboards;
pub mod routes;
pub mod shared;
pub mod system;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::http::{header, Method};
    use axum::middleware;
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::{ServeDir, ServeFile};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Log directory next to the build artifacts
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| {
                // Keep transport noise out of the application log
                "info,reqwest=warn,hyper=warn".into()
            }),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    shared::config::initialize()?;
    let config = shared::config::get();
    tracing::info!("Record source: {}", config.source.base_url);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    // Frontend bundle (trunk build output), SPA fallback to index.html
    let frontend = ServeDir::new("dist").fallback(ServeFile::new("dist/index.html"));

    let app = routes::configure_routes()
        .fallback_service(frontend)
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Sales dashboard backend listening on {}", addr);
            listener
        }
        Err(e) => {
            tracing::error!("Cannot bind {}: {}", addr, e);
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
