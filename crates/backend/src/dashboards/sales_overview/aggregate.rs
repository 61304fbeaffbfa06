//! Derived-table construction for the sales dashboard.
//!
//! Every function takes the filtered record batch and builds one table from
//! scratch; nothing is updated incrementally. Grouping preserves first
//! occurrence order and all sorts are stable, so equal totals keep the
//! input order across runs.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use contracts::dashboards::sales_overview::dto::{
    CategoryRow, MonthRow, SalesSummary, SellerRow, StateRow,
};
use contracts::domain::sale::SaleRecord;
use contracts::shared::locale;

/// Scalar totals shown in the metric tiles.
pub fn summary(records: &[SaleRecord]) -> SalesSummary {
    let total_revenue: f64 = records.iter().map(|r| r.price).sum();
    let sale_count = records.len() as u64;

    SalesSummary {
        total_revenue,
        revenue_formatted: locale::format_currency(total_revenue),
        sale_count,
        count_formatted: locale::format_magnitude(sale_count as f64),
    }
}

/// Revenue per state with coordinates joined in, descending by revenue.
pub fn revenue_by_state(records: &[SaleRecord]) -> Vec<StateRow> {
    let totals = accumulate(records, |r| r.state.clone(), |r| r.price);
    join_state_rows(records, totals, locale::format_currency)
}

/// Sale count per state with coordinates joined in, descending by count.
pub fn count_by_state(records: &[SaleRecord]) -> Vec<StateRow> {
    let totals = accumulate(records, |r| r.state.clone(), |_| 1.0);
    join_state_rows(records, totals, |value| locale::format_count(value as u64))
}

/// Revenue per calendar month, chronological.
pub fn revenue_by_month(records: &[SaleRecord]) -> Vec<MonthRow> {
    month_rows(records, |r| r.price, locale::format_currency)
}

/// Sale count per calendar month, chronological.
pub fn count_by_month(records: &[SaleRecord]) -> Vec<MonthRow> {
    month_rows(records, |_| 1.0, |value| locale::format_count(value as u64))
}

/// Revenue per product category, descending by revenue.
pub fn revenue_by_category(records: &[SaleRecord]) -> Vec<CategoryRow> {
    let totals = accumulate(records, |r| r.category.clone(), |r| r.price);
    category_rows(totals, locale::format_currency)
}

/// Sale count per product category, descending by count.
pub fn count_by_category(records: &[SaleRecord]) -> Vec<CategoryRow> {
    let totals = accumulate(records, |r| r.category.clone(), |_| 1.0);
    category_rows(totals, |value| locale::format_count(value as u64))
}

/// Revenue and sale count per seller, computed in one pass and sorted
/// descending by revenue. The top-N charts slice this table by either
/// metric, so both live on the same row.
pub fn sellers(records: &[SaleRecord]) -> Vec<SellerRow> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut rows: Vec<SellerRow> = Vec::new();

    for record in records {
        match index.get(&record.seller) {
            Some(&i) => {
                rows[i].revenue += record.price;
                rows[i].sale_count += 1;
            }
            None => {
                index.insert(record.seller.clone(), rows.len());
                rows.push(SellerRow {
                    seller: record.seller.clone(),
                    revenue: record.price,
                    sale_count: 1,
                    revenue_formatted: String::new(),
                });
            }
        }
    }

    sort_descending(&mut rows, |row| row.revenue);
    for row in rows.iter_mut() {
        row.revenue_formatted = locale::format_currency(row.revenue);
    }
    rows
}

/// Distinct seller names for the sidebar multi-select, alphabetical.
pub fn distinct_sellers(records: &[SaleRecord]) -> Vec<String> {
    let mut sellers: Vec<String> = Vec::new();
    for record in records {
        if !sellers.contains(&record.seller) {
            sellers.push(record.seller.clone());
        }
    }
    sellers.sort();
    sellers
}

/// Folds `value` per `key`, keeping groups in first-occurrence order.
fn accumulate<K, V>(records: &[SaleRecord], key: K, value: V) -> Vec<(String, f64)>
where
    K: Fn(&SaleRecord) -> String,
    V: Fn(&SaleRecord) -> f64,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, f64)> = Vec::new();

    for record in records {
        let k = key(record);
        match index.get(&k) {
            Some(&i) => groups[i].1 += value(record),
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, value(record)));
            }
        }
    }
    groups
}

/// First (lat, lon) pair seen per state; later conflicting pairs are
/// ignored, matching the dataset invariant of one pair per state.
fn state_coordinates(records: &[SaleRecord]) -> HashMap<String, (f64, f64)> {
    let mut coords = HashMap::new();
    for record in records {
        coords
            .entry(record.state.clone())
            .or_insert((record.lat, record.lon));
    }
    coords
}

/// Joins per-state totals with their coordinates. A state without a
/// coordinate pair is dropped from map views rather than failing the run.
fn join_state_rows(
    records: &[SaleRecord],
    totals: Vec<(String, f64)>,
    format: impl Fn(f64) -> String,
) -> Vec<StateRow> {
    let coords = state_coordinates(records);
    let mut rows: Vec<StateRow> = totals
        .into_iter()
        .filter_map(|(state, value)| {
            coords.get(&state).map(|&(lat, lon)| StateRow {
                formatted: format(value),
                state,
                lat,
                lon,
                value,
            })
        })
        .collect();

    sort_descending(&mut rows, |row| row.value);
    rows
}

fn category_rows(totals: Vec<(String, f64)>, format: impl Fn(f64) -> String) -> Vec<CategoryRow> {
    let mut rows: Vec<CategoryRow> = totals
        .into_iter()
        .map(|(category, value)| CategoryRow {
            formatted: format(value),
            category,
            value,
        })
        .collect();

    sort_descending(&mut rows, |row| row.value);
    rows
}

/// Groups by month boundary, not month-of-year: January 2021 and January
/// 2022 are distinct groups. Output is chronological regardless of the
/// year series split used for chart coloring.
fn month_rows(
    records: &[SaleRecord],
    value: impl Fn(&SaleRecord) -> f64,
    format: impl Fn(f64) -> String,
) -> Vec<MonthRow> {
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();
    let mut rows: Vec<MonthRow> = Vec::new();

    for record in records {
        let month = truncate_to_month(record.purchase_date);
        match index.get(&month) {
            Some(&i) => rows[i].value += value(record),
            None => {
                index.insert(month, rows.len());
                rows.push(MonthRow {
                    month,
                    year: month.year(),
                    month_name: month.format("%B").to_string(),
                    value: value(record),
                    formatted: String::new(),
                });
            }
        }
    }

    rows.sort_by_key(|row| row.month);
    for row in rows.iter_mut() {
        row.formatted = format(row.value);
    }
    rows
}

fn truncate_to_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

/// Stable descending sort, so tied groups keep first-occurrence order.
fn sort_descending<T>(rows: &mut [T], value: impl Fn(&T) -> f64) {
    rows.sort_by(|a, b| {
        value(b)
            .partial_cmp(&value(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale(state: &str, price: f64) -> SaleRecord {
        sale_on(state, price, "01/06/2021")
    }

    fn sale_on(state: &str, price: f64, date: &str) -> SaleRecord {
        let (lat, lon) = match state {
            "SP" => (-22.19, -48.79),
            "RJ" => (-22.25, -42.66),
            "BA" => (-13.29, -41.71),
            _ => (-15.78, -47.92),
        };
        SaleRecord {
            purchase_date: NaiveDate::parse_from_str(date, "%d/%m/%Y").unwrap(),
            price,
            state: state.to_string(),
            region: "Sudeste".to_string(),
            category: "livros".to_string(),
            seller: "Ana Souza".to_string(),
            lat,
            lon,
        }
    }

    #[test]
    fn state_revenue_sums_and_sorts_descending() {
        let records = vec![sale("SP", 100.0), sale("SP", 50.0), sale("RJ", 200.0)];

        let rows = revenue_by_state(&records);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].state, "RJ");
        assert_eq!(rows[0].value, 200.0);
        assert_eq!(rows[1].state, "SP");
        assert_eq!(rows[1].value, 150.0);

        let total = summary(&records);
        assert_eq!(total.revenue_formatted, "R$ 350,00");
    }

    #[test]
    fn state_tables_hold_each_distinct_state_once() {
        let records = vec![
            sale("SP", 10.0),
            sale("RJ", 20.0),
            sale("SP", 30.0),
            sale("BA", 40.0),
            sale("RJ", 50.0),
        ];

        for rows in [revenue_by_state(&records), count_by_state(&records)] {
            let mut states: Vec<&str> = rows.iter().map(|r| r.state.as_str()).collect();
            states.sort();
            assert_eq!(states, vec!["BA", "RJ", "SP"]);
        }
    }

    #[test]
    fn state_join_keeps_first_coordinate_pair() {
        let mut records = vec![sale("SP", 10.0), sale("SP", 20.0)];
        records[1].lat = 0.0;
        records[1].lon = 0.0;

        let rows = revenue_by_state(&records);
        assert_eq!(rows[0].lat, -22.19);
        assert_eq!(rows[0].lon, -48.79);
    }

    #[test]
    fn category_revenue_preserves_grand_total() {
        let mut records = vec![sale("SP", 12.5), sale("RJ", 87.5), sale("BA", 100.0)];
        records[0].category = "livros".to_string();
        records[1].category = "brinquedos".to_string();
        records[2].category = "livros".to_string();

        let rows = revenue_by_category(&records);
        let grouped: f64 = rows.iter().map(|r| r.value).sum();
        let raw: f64 = records.iter().map(|r| r.price).sum();
        assert_eq!(grouped, raw);
    }

    #[test]
    fn count_tables_preserve_record_count() {
        let mut records = vec![
            sale_on("SP", 10.0, "05/01/2021"),
            sale_on("RJ", 20.0, "10/02/2021"),
            sale_on("SP", 30.0, "15/02/2021"),
        ];
        records[1].category = "eletronicos".to_string();

        for total in [
            count_by_state(&records).iter().map(|r| r.value).sum::<f64>(),
            count_by_month(&records).iter().map(|r| r.value).sum::<f64>(),
            count_by_category(&records)
                .iter()
                .map(|r| r.value)
                .sum::<f64>(),
        ] {
            assert_eq!(total, records.len() as f64);
        }
    }

    #[test]
    fn months_of_different_years_stay_separate() {
        let records = vec![
            sale_on("SP", 100.0, "15/01/2021"),
            sale_on("SP", 200.0, "20/01/2022"),
            sale_on("SP", 50.0, "28/01/2021"),
        ];

        let rows = revenue_by_month(&records);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].year, 2021);
        assert_eq!(rows[0].month_name, "January");
        assert_eq!(rows[0].value, 150.0);
        assert_eq!(rows[1].year, 2022);
        assert_eq!(rows[1].value, 200.0);
    }

    #[test]
    fn months_are_chronological_not_value_ordered() {
        let records = vec![
            sale_on("SP", 10.0, "01/03/2021"),
            sale_on("SP", 500.0, "01/01/2021"),
            sale_on("SP", 100.0, "01/02/2021"),
        ];

        let months: Vec<u32> = revenue_by_month(&records)
            .iter()
            .map(|r| r.month.month())
            .collect();
        assert_eq!(months, vec![1, 2, 3]);
    }

    #[test]
    fn sellers_fold_revenue_and_count_in_one_pass() {
        let mut records = vec![sale("SP", 100.0), sale("RJ", 200.0), sale("SP", 50.0)];
        records[0].seller = "Ana Souza".to_string();
        records[1].seller = "Bruno Lima".to_string();
        records[2].seller = "Ana Souza".to_string();

        let rows = sellers(&records);
        assert_eq!(rows.len(), 2);
        // Descending by revenue: Bruno 200 > Ana 150
        assert_eq!(rows[0].seller, "Bruno Lima");
        assert_eq!(rows[0].sale_count, 1);
        assert_eq!(rows[1].seller, "Ana Souza");
        assert_eq!(rows[1].revenue, 150.0);
        assert_eq!(rows[1].sale_count, 2);
        assert_eq!(rows[1].revenue_formatted, "R$ 150,00");
    }

    #[test]
    fn distinct_sellers_are_alphabetical() {
        let mut records = vec![sale("SP", 1.0), sale("SP", 1.0), sale("SP", 1.0)];
        records[0].seller = "Carlos".to_string();
        records[1].seller = "Ana".to_string();
        records[2].seller = "Carlos".to_string();

        assert_eq!(distinct_sellers(&records), vec!["Ana", "Carlos"]);
    }

    #[test]
    fn equal_totals_keep_input_order() {
        let mut records = vec![sale("SP", 75.0), sale("RJ", 75.0), sale("BA", 75.0)];
        records[0].category = "papelaria".to_string();
        records[1].category = "livros".to_string();
        records[2].category = "brinquedos".to_string();

        let rows = revenue_by_category(&records);
        let order: Vec<&str> = rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(order, vec!["papelaria", "livros", "brinquedos"]);
    }

    #[test]
    fn empty_input_yields_empty_tables_and_zero_summary() {
        let records: Vec<SaleRecord> = Vec::new();

        assert!(revenue_by_state(&records).is_empty());
        assert!(revenue_by_month(&records).is_empty());
        assert!(revenue_by_category(&records).is_empty());
        assert!(count_by_state(&records).is_empty());
        assert!(count_by_month(&records).is_empty());
        assert!(count_by_category(&records).is_empty());
        assert!(sellers(&records).is_empty());

        let total = summary(&records);
        assert_eq!(total.total_revenue, 0.0);
        assert_eq!(total.sale_count, 0);
        assert_eq!(total.revenue_formatted, "R$ 0,00");
        assert_eq!(total.count_formatted, "0,00 mil");
    }
}
