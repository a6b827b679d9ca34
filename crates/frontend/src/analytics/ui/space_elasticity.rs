use std::cmp::Ordering;

use contracts::analytics::SpaceRow;
use leptos::prelude::*;

use crate::analytics::store::use_analytics;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, sort_list, Sortable};

impl Sortable for SpaceRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "category" => self.category.cmp(&other.category),
            "sales_pct" => self
                .sales_pct
                .partial_cmp(&other.sales_pct)
                .unwrap_or(Ordering::Equal),
            "current_meters" => self
                .current_meters
                .partial_cmp(&other.current_meters)
                .unwrap_or(Ordering::Equal),
            "recommended_meters" => self
                .recommended_meters
                .partial_cmp(&other.recommended_meters)
                .unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        }
    }
}

#[derive(Clone)]
struct SortState {
    field: &'static str,
    ascending: bool,
}

/// Shelf-space allocation: current versus recommended linear meters per
/// category, with an on-demand recalculation.
#[component]
pub fn SpaceElasticityPage() -> impl IntoView {
    let analytics = use_analytics();

    let sort = RwSignal::new(SortState {
        field: "sales_pct",
        ascending: false,
    });

    let rows = move || {
        let mut table = analytics
            .space_elasticity
            .get()
            .map(|s| s.table)
            .unwrap_or_default();
        let state = sort.get();
        sort_list(&mut table, state.field, state.ascending);
        table
    };

    let (recalculating, set_recalculating) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let on_recalculate = move |_| {
        if recalculating.get() {
            return;
        }
        set_recalculating.set(true);
        set_error.set(None);

        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = analytics.recalculate_space_elasticity().await {
                log::error!("Space elasticity recalculation failed: {}", e);
                set_error.set(Some(e));
            }
            set_recalculating.set(false);
        });
    };

    let on_sort = move |field: &'static str| {
        sort.update(|state| {
            if state.field == field {
                state.ascending = !state.ascending;
            } else {
                state.field = field;
                state.ascending = false;
            }
        });
    };

    let header = move |label: &'static str, field: &'static str| {
        let indicator = move || {
            let state = sort.get();
            get_sort_indicator(state.field, field, state.ascending)
        };
        let class = move || get_sort_class(sort.get().field, field);
        view! {
            <th on:click=move |_| on_sort(field)>
                {label}
                <span class=class>{indicator}</span>
            </th>
        }
    };

    view! {
        <div class="page space-elasticity-page">
            <header class="page__header">
                <h1>"Space elasticity"</h1>
                <button
                    class="btn-secondary"
                    on:click=on_recalculate
                    disabled=move || recalculating.get()
                >
                    {move || if recalculating.get() {
                        "Recalculating..."
                    } else {
                        "Recalculate"
                    }}
                </button>
            </header>

            <Show when=move || error.get().is_some()>
                <div class="error-message">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        {header("Category", "category")}
                        {header("Sales %", "sales_pct")}
                        {header("Current (m)", "current_meters")}
                        {header("Recommended (m)", "recommended_meters")}
                        <th>"Δ (m)"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || rows().into_iter().map(|row| {
                        let delta = row.recommended_meters - row.current_meters;
                        let delta_class = if delta >= 0.0 {
                            "numeric delta--gain"
                        } else {
                            "numeric delta--loss"
                        };
                        view! {
                            <tr>
                                <td>{row.category}</td>
                                <td class="numeric">
                                    {format!("{:.2}%", row.sales_pct * 100.0)}
                                </td>
                                <td class="numeric">{format!("{:.1}", row.current_meters)}</td>
                                <td class="numeric">
                                    {format!("{:.1}", row.recommended_meters)}
                                </td>
                                <td class=delta_class>{format!("{:+.1}", delta)}</td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>

            <Show when=move || rows().is_empty()>
                <p class="empty-state">"No space allocation data for this scope."</p>
            </Show>
        </div>
    }
}
