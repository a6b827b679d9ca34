use leptos::prelude::*;

use crate::analytics::store::use_analytics;
use crate::analytics::summary::pct_points;
use crate::shared::components::StatCard;

/// Overview page: headline KPIs for the active store and date window
#[component]
pub fn DashboardPage() -> impl IntoView {
    let analytics = use_analytics();

    let total_skus = Signal::derive(move || {
        analytics
            .tail_analysis
            .get()
            .map(|t| t.summary.total_skus.to_string())
    });

    let total_sales = Signal::derive(move || {
        analytics
            .sales_summary
            .get()
            .map(|s| format!("{:.2}", s.total_sales_value))
    });

    let avg_per_sku = Signal::derive(move || {
        analytics
            .sales_summary
            .get()
            .map(|s| format!("{:.2}", s.avg_sales_per_sku))
    });

    let tail_share = Signal::derive(move || {
        analytics
            .tail_analysis
            .get()
            .map(|t| format!("{}%", pct_points(t.summary.tail_sales_share)))
    });

    view! {
        <div class="page dashboard-page">
            <header class="page__header">
                <h1>"Dashboard"</h1>
                <Show when=move || analytics.is_loading.get()>
                    <span class="page__loading">"Refreshing..."</span>
                </Show>
            </header>

            <div class="stat-grid">
                <StatCard
                    label="Total SKUs".to_string()
                    value=total_skus
                />
                <StatCard
                    label="Total sales value".to_string()
                    value=total_sales
                />
                <StatCard
                    label="Avg sales per SKU".to_string()
                    value=avg_per_sku
                />
                <StatCard
                    label="Tail sales share".to_string()
                    value=tail_share
                    footnote=Signal::derive(move || {
                        analytics.tail_analysis.get().map(|t| {
                            format!(
                                "{}% of SKUs are tail products",
                                pct_points(t.summary.tail_pct)
                            )
                        })
                    })
                />
            </div>
        </div>
    }
}
