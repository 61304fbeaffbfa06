use leptos::prelude::*;
use thaw::*;

use crate::layout::filters::{DashboardFilters, ANO_MAX, ANO_MIN, REGIOES};

/// Filter sidebar: region select, period toggle + year slider and the
/// seller multi-select. Every control writes straight into the shared
/// `DashboardFilters` signals; the dashboard reloads on any change.
#[component]
pub fn Sidebar(#[prop(into)] vendedores_disponiveis: Signal<Vec<String>>) -> impl IntoView {
    let filters =
        use_context::<DashboardFilters>().expect("DashboardFilters context not found");

    view! {
        <aside class="sidebar">
            <h2 class="sidebar__title">"Filtros"</h2>

            <div class="sidebar__field">
                <label class="sidebar__label">"Região"</label>
                <Select value=filters.regiao>
                    {REGIOES
                        .iter()
                        .map(|regiao| view! { <option value=*regiao>{*regiao}</option> })
                        .collect_view()}
                </Select>
            </div>

            <div class="sidebar__field">
                <Checkbox checked=filters.todos_anos label="Dados de todo o período" />
            </div>

            <Show when=move || !filters.todos_anos.get()>
                <div class="sidebar__field">
                    <label class="sidebar__label">
                        {move || format!("Ano: {}", filters.ano.get())}
                    </label>
                    <input
                        type="range"
                        class="sidebar__slider"
                        min=ANO_MIN
                        max=ANO_MAX
                        step="1"
                        prop:value=move || filters.ano.get().to_string()
                        on:input=move |ev| {
                            if let Ok(ano) = event_target_value(&ev).parse::<i32>() {
                                filters.ano.set(ano);
                            }
                        }
                    />
                </div>
            </Show>

            <div class="sidebar__field">
                <label class="sidebar__label">"Vendedores"</label>
                {move || {
                    let selecionados = filters.vendedores.get();
                    vendedores_disponiveis
                        .get()
                        .into_iter()
                        .map(|vendedor| {
                            let marcado = selecionados.contains(&vendedor);
                            let nome = vendedor.clone();
                            view! {
                                <label class="sidebar__vendedor">
                                    <input
                                        type="checkbox"
                                        prop:checked=marcado
                                        on:change=move |_| {
                                            filters
                                                .vendedores
                                                .update(|set| {
                                                    if !set.remove(&nome) {
                                                        set.insert(nome.clone());
                                                    }
                                                });
                                        }
                                    />
                                    <span>{vendedor}</span>
                                </label>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </aside>
    }
}
