use axum::{extract::Query, http::StatusCode, Json};
use contracts::dashboards::sales_overview::dto::{
    SalesDashboardRequest, SalesDashboardResponse, SellersRequest,
};

use crate::dashboards::sales_overview::service;

/// GET /api/sales/dashboard?regiao=sudeste&ano=2021&vendedores=a,b
pub async fn get_dashboard(
    Query(request): Query<SalesDashboardRequest>,
) -> Result<Json<SalesDashboardResponse>, StatusCode> {
    tracing::info!(
        "Sales dashboard: regiao='{}' ano='{}' vendedores='{}'",
        request.regiao,
        request.ano,
        request.vendedores
    );

    match service::get_dashboard(request).await {
        Ok(response) => {
            tracing::info!(
                "Sales dashboard: {} records, {} states, {} months",
                response.records.len(),
                response.state_revenue.len(),
                response.monthly_revenue.len()
            );
            Ok(Json(response))
        }
        Err(e) => {
            tracing::error!("Sales dashboard: failed to build response: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/sales/sellers?regiao=sudeste&ano=2021
pub async fn get_sellers(
    Query(request): Query<SellersRequest>,
) -> Result<Json<Vec<String>>, StatusCode> {
    match service::get_sellers(request).await {
        Ok(sellers) => {
            tracing::info!("Sales dashboard: returning {} sellers", sellers.len());
            Ok(Json(sellers))
        }
        Err(e) => {
            tracing::error!("Sales dashboard: failed to list sellers: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
