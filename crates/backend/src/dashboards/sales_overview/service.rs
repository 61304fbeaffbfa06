use anyhow::Result;
use contracts::dashboards::sales_overview::dto::{
    SaleRecordRow, SalesDashboardRequest, SalesDashboardResponse, SellersRequest,
};
use contracts::domain::sale::{SaleRecord, BR_DATE_FORMAT};
use contracts::shared::locale;

use super::aggregate;
use crate::shared::source::products_api_client::ProductsApiClient;

/// One full dashboard pass: fetch, filter, aggregate, format.
///
/// Each pass owns its record batch exclusively and the result is discarded
/// after the response is sent; nothing carries over between runs.
pub async fn get_dashboard(request: SalesDashboardRequest) -> Result<SalesDashboardResponse> {
    let client = ProductsApiClient::from_config();
    let records = client.fetch(&request.regiao, &request.ano).await?;
    let records = filter_by_sellers(records, &request.vendedores);

    Ok(SalesDashboardResponse {
        summary: aggregate::summary(&records),
        state_revenue: aggregate::revenue_by_state(&records),
        monthly_revenue: aggregate::revenue_by_month(&records),
        category_revenue: aggregate::revenue_by_category(&records),
        state_count: aggregate::count_by_state(&records),
        monthly_count: aggregate::count_by_month(&records),
        category_count: aggregate::count_by_category(&records),
        sellers: aggregate::sellers(&records),
        records: record_rows(&records),
    })
}

/// Seller options for the sidebar multi-select under the current
/// region/year filter.
pub async fn get_sellers(request: SellersRequest) -> Result<Vec<String>> {
    let client = ProductsApiClient::from_config();
    let records = client.fetch(&request.regiao, &request.ano).await?;
    Ok(aggregate::distinct_sellers(&records))
}

/// The seller restriction is applied in memory after the fetch; the remote
/// endpoint only filters by region and year.
fn filter_by_sellers(records: Vec<SaleRecord>, vendedores: &str) -> Vec<SaleRecord> {
    let selected: Vec<&str> = vendedores
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    if selected.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|r| selected.contains(&r.seller.as_str()))
        .collect()
}

/// Detail-grid rows: the record verbatim, price replaced by its formatted
/// string.
fn record_rows(records: &[SaleRecord]) -> Vec<SaleRecordRow> {
    records
        .iter()
        .map(|r| SaleRecordRow {
            purchase_date: r.purchase_date.format(BR_DATE_FORMAT).to_string(),
            price_formatted: locale::format_currency(r.price),
            state: r.state.clone(),
            region: r.region.clone(),
            category: r.category.clone(),
            seller: r.seller.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sale(seller: &str) -> SaleRecord {
        SaleRecord {
            purchase_date: NaiveDate::from_ymd_opt(2021, 6, 1).unwrap(),
            price: 10.0,
            state: "SP".to_string(),
            region: "Sudeste".to_string(),
            category: "livros".to_string(),
            seller: seller.to_string(),
            lat: -22.19,
            lon: -48.79,
        }
    }

    #[test]
    fn empty_seller_filter_keeps_everything() {
        let records = vec![sale("Ana"), sale("Bruno")];
        assert_eq!(filter_by_sellers(records, "").len(), 2);
    }

    #[test]
    fn seller_filter_keeps_only_selected() {
        let records = vec![sale("Ana"), sale("Bruno"), sale("Ana"), sale("Carla")];
        let filtered = filter_by_sellers(records, "Ana,Carla");
        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().all(|r| r.seller != "Bruno"));
    }

    #[test]
    fn seller_filter_trims_whitespace() {
        let records = vec![sale("Ana"), sale("Bruno")];
        let filtered = filter_by_sellers(records, " Ana , ");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].seller, "Ana");
    }

    #[test]
    fn grid_rows_carry_formatted_price_and_wire_date() {
        let records = vec![sale("Ana")];
        let rows = record_rows(&records);
        assert_eq!(rows[0].purchase_date, "01/06/2021");
        assert_eq!(rows[0].price_formatted, "R$ 10,00");
    }
}
