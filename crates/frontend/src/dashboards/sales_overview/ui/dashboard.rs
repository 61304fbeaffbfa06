use contracts::dashboards::sales_overview::dto::{SalesDashboardResponse, SellerRow};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, Spinner};

use crate::dashboards::sales_overview::api;
use crate::dashboards::sales_overview::ui::charts::{BarChart, GeoScatter, HBarChart, LineChart};
use crate::dashboards::sales_overview::ui::records_grid::RecordsGrid;
use crate::layout::filters::DashboardFilters;
use crate::layout::sidebar::Sidebar;

/// Sales dashboard page: sidebar filters, three tabs and the detail grid.
///
/// Every filter change triggers one full pass — fetch, aggregate (server
/// side), render. A new interaction simply supersedes the previous
/// response; nothing is cached between passes.
#[component]
pub fn SalesDashboard() -> impl IntoView {
    let filters =
        use_context::<DashboardFilters>().expect("DashboardFilters context not found");

    // Data state
    let (data, set_data) = signal(None::<SalesDashboardResponse>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (vendedores_disponiveis, set_vendedores_disponiveis) =
        signal(Vec::<String>::new());

    let active_tab = RwSignal::new("receita");
    let qtd_vendedores = RwSignal::new(5usize);

    // Reload the seller options when region or year change
    Effect::new(move |_| {
        let regiao = filters.regiao_query();
        let ano = filters.ano_query();
        spawn_local(async move {
            match api::get_sellers(&regiao, &ano).await {
                Ok(vendedores) => set_vendedores_disponiveis.set(vendedores),
                Err(e) => log::error!("Failed to load seller options: {}", e),
            }
        });
    });

    // One full dashboard pass per filter change
    Effect::new(move |_| {
        let regiao = filters.regiao_query();
        let ano = filters.ano_query();
        let vendedores = filters.vendedores_query();
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::get_dashboard(&regiao, &ano, &vendedores).await {
                Ok(response) => {
                    set_data.set(Some(response));
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    });

    view! {
        <div class="dashboard">
            <Sidebar vendedores_disponiveis=vendedores_disponiveis />

            <main class="dashboard__main">
                <h1 class="dashboard__title">"DASHBOARD DE VENDAS 🛒"</h1>

                <div class="dashboard__tabs">
                    <Button
                        appearance=move || {
                            if active_tab.get() == "receita" {
                                ButtonAppearance::Primary
                            } else {
                                ButtonAppearance::Subtle
                            }
                        }
                        on_click=move |_| active_tab.set("receita")
                    >
                        "Receita"
                    </Button>
                    <Button
                        appearance=move || {
                            if active_tab.get() == "vendas" {
                                ButtonAppearance::Primary
                            } else {
                                ButtonAppearance::Subtle
                            }
                        }
                        on_click=move |_| active_tab.set("vendas")
                    >
                        "Quantidade de vendas"
                    </Button>
                    <Button
                        appearance=move || {
                            if active_tab.get() == "vendedores" {
                                ButtonAppearance::Primary
                            } else {
                                ButtonAppearance::Subtle
                            }
                        }
                        on_click=move |_| active_tab.set("vendedores")
                    >
                        "Vendedores"
                    </Button>
                </div>

                {move || {
                    if loading.get() {
                        return view! {
                            <div class="dashboard__loading">
                                <Spinner />
                                <span>"Carregando dados..."</span>
                            </div>
                        }
                        .into_any();
                    }
                    if let Some(err) = error.get() {
                        return view! {
                            <div class="dashboard__error">
                                <strong>"⚠ Erro: "</strong>
                                {err}
                            </div>
                        }
                        .into_any();
                    }
                    match data.get() {
                        Some(response) => match active_tab.get() {
                            "vendas" => view! { <CountTab response=response /> }.into_any(),
                            "vendedores" => {
                                view! {
                                    <SellersTab
                                        response=response
                                        qtd_vendedores=qtd_vendedores
                                    />
                                }
                                .into_any()
                            }
                            _ => view! { <RevenueTab response=response /> }.into_any(),
                        },
                        None => {
                            view! {
                                <div class="dashboard__empty">"Sem dados para exibir."</div>
                            }
                            .into_any()
                        }
                    }
                }}

                {move || {
                    data.get()
                        .map(|response| view! { <RecordsGrid records=response.records /> })
                }}
            </main>
        </div>
    }
}

#[component]
fn MetricTile(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="metric">
            <span class="metric__label">{label}</span>
            <span class="metric__value">{value}</span>
        </div>
    }
}

/// "Receita" tab: revenue map, monthly lines and the two revenue bar charts.
#[component]
fn RevenueTab(response: SalesDashboardResponse) -> impl IntoView {
    let top_estados: Vec<(String, f64, String)> = response
        .state_revenue
        .iter()
        .take(5)
        .map(|r| (r.state.clone(), r.value, r.formatted.clone()))
        .collect();
    let categorias: Vec<(String, f64, String)> = response
        .category_revenue
        .iter()
        .map(|r| (r.category.clone(), r.value, r.formatted.clone()))
        .collect();

    view! {
        <div class="dashboard__columns">
            <div class="dashboard__column">
                <MetricTile label="Receita" value=response.summary.revenue_formatted.clone() />
                <GeoScatter rows=response.state_revenue.clone() title="Receita por estado" />
                <BarChart bars=top_estados title="Top estados (receita)" />
            </div>
            <div class="dashboard__column">
                <MetricTile
                    label="Quantidade de vendas"
                    value=response.summary.count_formatted.clone()
                />
                <LineChart rows=response.monthly_revenue.clone() title="Receita mensal" />
                <BarChart bars=categorias title="Receita por categoria" />
            </div>
        </div>
    }
}

/// "Quantidade de vendas" tab: count analogues of the revenue panels.
#[component]
fn CountTab(response: SalesDashboardResponse) -> impl IntoView {
    let top_estados: Vec<(String, f64, String)> = response
        .state_count
        .iter()
        .take(5)
        .map(|r| (r.state.clone(), r.value, r.formatted.clone()))
        .collect();
    let categorias: Vec<(String, f64, String)> = response
        .category_count
        .iter()
        .map(|r| (r.category.clone(), r.value, r.formatted.clone()))
        .collect();

    view! {
        <div class="dashboard__columns">
            <div class="dashboard__column">
                <MetricTile label="Receita" value=response.summary.revenue_formatted.clone() />
                <GeoScatter rows=response.state_count.clone() title="Vendas por estado" />
                <BarChart bars=top_estados title="Top 5 estados" />
            </div>
            <div class="dashboard__column">
                <MetricTile
                    label="Quantidade de vendas"
                    value=response.summary.count_formatted.clone()
                />
                <LineChart
                    rows=response.monthly_count.clone()
                    title="Quantidade de vendas mensal"
                />
                <BarChart bars=categorias title="Vendas por categoria" />
            </div>
        </div>
    }
}

/// "Vendedores" tab: top-N rankings by revenue and by sale count. The
/// seller table arrives sorted by revenue; the count ranking re-sorts a
/// copy, so both slices stay independent.
#[component]
fn SellersTab(
    response: SalesDashboardResponse,
    qtd_vendedores: RwSignal<usize>,
) -> impl IntoView {
    let summary = response.summary.clone();
    let sellers = response.sellers;

    view! {
        <div class="dashboard__sellers">
            <label class="dashboard__topn">
                "Quantidade de vendedores"
                <input
                    type="number"
                    min="2"
                    max="10"
                    prop:value=move || qtd_vendedores.get().to_string()
                    on:input=move |ev| {
                        if let Ok(qtd) = event_target_value(&ev).parse::<usize>() {
                            qtd_vendedores.set(qtd.clamp(2, 10));
                        }
                    }
                />
            </label>

            {move || {
                let qtd = qtd_vendedores.get();

                let por_receita: Vec<(String, f64, String)> = sellers
                    .iter()
                    .take(qtd)
                    .map(|r| (r.seller.clone(), r.revenue, r.revenue_formatted.clone()))
                    .collect();

                let mut por_vendas: Vec<&SellerRow> = sellers.iter().collect();
                por_vendas.sort_by(|a, b| b.sale_count.cmp(&a.sale_count));
                let por_vendas: Vec<(String, f64, String)> = por_vendas
                    .into_iter()
                    .take(qtd)
                    .map(|r| {
                        (
                            r.seller.clone(),
                            r.sale_count as f64,
                            r.sale_count.to_string(),
                        )
                    })
                    .collect();

                view! {
                    <div class="dashboard__columns">
                        <div class="dashboard__column">
                            <MetricTile
                                label="Receita"
                                value=summary.revenue_formatted.clone()
                            />
                            <HBarChart
                                bars=por_receita
                                title=format!("Top {} vendedores (receita)", qtd)
                            />
                        </div>
                        <div class="dashboard__column">
                            <MetricTile
                                label="Quantidade de vendas"
                                value=summary.count_formatted.clone()
                            />
                            <HBarChart
                                bars=por_vendas
                                title=format!("Top {} vendedores (quantidade de vendas)", qtd)
                            />
                        </div>
                    </div>
                }
            }}
        </div>
    }
}
