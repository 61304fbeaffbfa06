use axum::{routing::get, Router};

use crate::api::handlers;

/// All application routes
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Sales overview dashboard
        .route(
            "/api/sales/dashboard",
            get(handlers::sales_overview::get_dashboard),
        )
        .route(
            "/api/sales/sellers",
            get(handlers::sales_overview::get_sellers),
        )
}
