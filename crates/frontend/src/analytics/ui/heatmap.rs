use leptos::prelude::*;

use crate::analytics::store::use_analytics;

/// Store heatmap: traffic and performance per floor zone
#[component]
pub fn HeatmapPage() -> impl IntoView {
    let analytics = use_analytics();

    view! {
        <div class="page heatmap-page">
            <header class="page__header">
                <h1>"Store heatmap"</h1>
                <Show when=move || analytics.is_loading.get()>
                    <span class="page__loading">"Refreshing..."</span>
                </Show>
            </header>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Zone"</th>
                        <th>"Position"</th>
                        <th>"Traffic score"</th>
                        <th>"Performance"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || analytics.heatmap_zones.get().into_iter().map(|zone| {
                        let badge_style = format!("background-color: {};", zone.color);
                        view! {
                            <tr>
                                <td>{zone.zone_name}</td>
                                <td class="numeric">
                                    {format!("({:.0}, {:.0})", zone.x, zone.y)}
                                </td>
                                <td class="numeric">{format!("{:.1}", zone.traffic_score)}</td>
                                <td>
                                    <span class="zone-badge" style=badge_style>
                                        {zone.performance}
                                    </span>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>

            <Show when=move || analytics.heatmap_zones.get().is_empty()>
                <p class="empty-state">"No heatmap data for this scope."</p>
            </Show>
        </div>
    }
}
