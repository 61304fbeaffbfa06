pub mod sales_overview;

pub use sales_overview::ui::dashboard::SalesDashboard;
