use contracts::dashboards::sales_overview::dto::SalesDashboardResponse;
use gloo_net::http::Request;

const API_BASE: &str = "/api/sales";

/// Fetch the full dashboard payload for the current filters.
pub async fn get_dashboard(
    regiao: &str,
    ano: &str,
    vendedores: &str,
) -> Result<SalesDashboardResponse, String> {
    let url = format!(
        "{}/dashboard?regiao={}&ano={}&vendedores={}",
        API_BASE,
        urlencoding::encode(regiao),
        urlencoding::encode(ano),
        urlencoding::encode(vendedores)
    );

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: SalesDashboardResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}

/// Fetch the seller options for the sidebar multi-select.
pub async fn get_sellers(regiao: &str, ano: &str) -> Result<Vec<String>, String> {
    let url = format!(
        "{}/sellers?regiao={}&ano={}",
        API_BASE,
        urlencoding::encode(regiao),
        urlencoding::encode(ano)
    );

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: Vec<String> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
