use crate::dashboards::sales_overview::ui::dashboard::SalesDashboard;
use crate::layout::filters::DashboardFilters;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the session-wide filter state to the whole app via context.
    provide_context(DashboardFilters::new());

    view! {
        <SalesDashboard />
    }
}
