use leptos::prelude::*;
use std::collections::HashSet;

/// The six fixed region options; "Brasil" selects the whole country.
pub const REGIOES: [&str; 6] = [
    "Brasil",
    "Centro-Oeste",
    "Nordeste",
    "Norte",
    "Sudeste",
    "Sul",
];

/// Year range covered by the dataset, driven by the sidebar slider.
pub const ANO_MIN: i32 = 2020;
pub const ANO_MAX: i32 = 2023;

/// Session-wide filter state, provided once at the app root.
///
/// Initialized to the defaults (all regions, whole period, no seller
/// restriction) and mutated only by sidebar input. Never persisted; a page
/// reload starts over.
#[derive(Clone, Copy)]
pub struct DashboardFilters {
    pub regiao: RwSignal<String>,
    /// "Dados de todo o período": while on, the year slider is ignored
    pub todos_anos: RwSignal<bool>,
    pub ano: RwSignal<i32>,
    pub vendedores: RwSignal<HashSet<String>>,
}

impl DashboardFilters {
    pub fn new() -> Self {
        Self {
            regiao: RwSignal::new("Brasil".to_string()),
            todos_anos: RwSignal::new(true),
            ano: RwSignal::new(ANO_MIN),
            vendedores: RwSignal::new(HashSet::new()),
        }
    }

    /// Region query value: empty for the whole country.
    pub fn regiao_query(&self) -> String {
        let regiao = self.regiao.get();
        if regiao == "Brasil" {
            String::new()
        } else {
            regiao
        }
    }

    /// Year query value: empty while the whole period is selected.
    pub fn ano_query(&self) -> String {
        if self.todos_anos.get() {
            String::new()
        } else {
            self.ano.get().to_string()
        }
    }

    /// Comma-separated seller restriction, sorted for a stable query string.
    pub fn vendedores_query(&self) -> String {
        let mut selected: Vec<String> = self.vendedores.get().into_iter().collect();
        selected.sort();
        selected.join(",")
    }
}

impl Default for DashboardFilters {
    fn default() -> Self {
        Self::new()
    }
}
