use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Query filters for the sales dashboard.
///
/// Values mirror the remote products endpoint convention: empty string means
/// "no restriction" for both `regiao` and `ano`. `vendedores` is a
/// comma-separated list of seller names, empty for all sellers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalesDashboardRequest {
    #[serde(default)]
    pub regiao: String,
    #[serde(default)]
    pub ano: String,
    #[serde(default)]
    pub vendedores: String,
}

/// Query filters for the seller list (the sidebar multi-select options).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SellersRequest {
    #[serde(default)]
    pub regiao: String,
    #[serde(default)]
    pub ano: String,
}

/// Full dashboard payload: scalar summary, the six derived tables and the
/// raw filtered record set for the detail grid. Rebuilt from scratch on
/// every request, never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesDashboardResponse {
    pub summary: SalesSummary,
    pub state_revenue: Vec<StateRow>,
    pub monthly_revenue: Vec<MonthRow>,
    pub category_revenue: Vec<CategoryRow>,
    pub state_count: Vec<StateRow>,
    pub monthly_count: Vec<MonthRow>,
    pub category_count: Vec<CategoryRow>,
    pub sellers: Vec<SellerRow>,
    pub records: Vec<SaleRecordRow>,
}

/// Scalar metrics shown in the metric tiles of every tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesSummary {
    pub total_revenue: f64,
    /// `total_revenue` through the currency formatter
    pub revenue_formatted: String,
    pub sale_count: u64,
    /// `sale_count` through the magnitude formatter
    pub count_formatted: String,
}

/// Per-state aggregate with the state's fixed coordinates joined in,
/// sorted descending by `value`. Used for both the revenue table and its
/// count analogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateRow {
    pub state: String,
    pub lat: f64,
    pub lon: f64,
    pub value: f64,
    pub formatted: String,
}

/// Per-month aggregate, truncated to the month boundary so the same month
/// of different years stays separate. Chronological order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthRow {
    /// First day of the group's month
    pub month: NaiveDate,
    /// Year of the group, used as the chart series key
    pub year: i32,
    /// English month name, used as the chart axis label
    pub month_name: String,
    pub value: f64,
    pub formatted: String,
}

/// Per-category aggregate, sorted descending by `value`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRow {
    pub category: String,
    pub value: f64,
    pub formatted: String,
}

/// Per-seller aggregate. Revenue and sale count are computed in one pass;
/// the top-N charts slice this table by either metric independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SellerRow {
    pub seller: String,
    pub revenue: f64,
    pub sale_count: u64,
    pub revenue_formatted: String,
}

/// One raw record as shown in the detail grid, with the price column
/// replaced by its formatted string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleRecordRow {
    pub purchase_date: String,
    pub price_formatted: String,
    pub state: String,
    pub region: String,
    pub category: String,
    pub seller: String,
}
