use chrono::Utc;
use contracts::analytics::TailRow;
use contracts::enums::Classification;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::analytics::pipeline::{
    self, category_breakdown, classification_counts, export_rows, filtered_rows,
    unique_categories, SortDirection, SortField, TailQuery,
};
use crate::analytics::store::use_analytics;
use crate::analytics::summary::pct_points;
use crate::shared::components::PaginationControls;
use crate::shared::export::download_csv;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator};

/// Short-lived feedback after an export attempt
#[derive(Debug, Clone, PartialEq)]
struct ExportNotice {
    message: String,
    is_error: bool,
}

fn export_notice(outcome: Result<(), String>, count: usize) -> ExportNotice {
    match outcome {
        Ok(()) => ExportNotice {
            message: format!("{} products exported", count),
            is_error: false,
        },
        Err(e) => ExportNotice {
            message: e,
            is_error: true,
        },
    }
}

/// Tail analysis: assortment classification table with filtering, sorting,
/// pagination and CSV export.
#[component]
pub fn TailAnalysisPage() -> impl IntoView {
    let analytics = use_analytics();
    let query = RwSignal::new(TailQuery::default());

    let all_rows = Signal::derive(move || {
        analytics
            .tail_analysis
            .get()
            .map(|t| t.table)
            .unwrap_or_default()
    });

    // Filtered and sorted set; pagination slices from this, export dumps it
    // in full.
    let filtered = Memo::new(move |_| filtered_rows(&all_rows.get(), &query.get()));
    let total_pages = Signal::derive(move || pipeline::page_count(filtered.get().len()));
    let total_count = Signal::derive(move || filtered.get().len());
    let page_rows =
        Signal::derive(move || pipeline::paginate(&filtered.get(), query.get().page));

    let categories = Signal::derive(move || unique_categories(&all_rows.get()));

    let (exporting, set_exporting) = signal(false);
    let (notice, set_notice) = signal(None::<ExportNotice>);

    let on_export = move |_| {
        if exporting.get() {
            return;
        }
        set_exporting.set(true);
        set_notice.set(None);

        wasm_bindgen_futures::spawn_local(async move {
            // Brief pause so the spinner is visible on fast exports
            TimeoutFuture::new(500).await;

            let rows = export_rows(&filtered.get_untracked());
            let count = rows.len();
            let filename = format!("tail-analysis-{}", Utc::now().format("%Y-%m-%d"));
            let outcome = download_csv(&rows, &filename);
            if let Err(e) = &outcome {
                log::error!("CSV export failed: {}", e);
            }
            let current = export_notice(outcome, count);
            set_notice.set(Some(current.clone()));
            set_exporting.set(false);

            // Auto-dismiss, unless a newer export has replaced the notice
            TimeoutFuture::new(3000).await;
            set_notice.update(|n| {
                if n.as_ref() == Some(&current) {
                    *n = None;
                }
            });
        });
    };

    let sort_header = move |label: &'static str, field: SortField| {
        let indicator = move || {
            let q = query.get();
            get_sort_indicator(
                q.sort_field.as_str(),
                field.as_str(),
                q.sort_direction == SortDirection::Asc,
            )
        };
        let class = move || get_sort_class(query.get().sort_field.as_str(), field.as_str());
        view! {
            <th on:click=move |_| query.update(|q| q.toggle_sort(field))>
                {label}
                <span class=class>{indicator}</span>
            </th>
        }
    };

    view! {
        <div class="page tail-analysis-page">
            <header class="page__header">
                <h1>"Tail analysis"</h1>
                <Show when=move || analytics.is_loading.get()>
                    <span class="page__loading">"Refreshing..."</span>
                </Show>
            </header>

            <TailSummaryCards />

            <div class="table-toolbar">
                <input
                    type="search"
                    class="table-toolbar__search"
                    placeholder="Search by SKU, product or category"
                    prop:value=move || query.get().search
                    on:input=move |ev| {
                        query.update(|q| q.set_search(event_target_value(&ev)))
                    }
                />

                <select
                    class="table-toolbar__select"
                    on:change=move |ev| {
                        query.update(|q| q.set_category(event_target_value(&ev)))
                    }
                >
                    <option value="all" selected=move || query.get().category == "all">
                        "All categories"
                    </option>
                    {move || categories.get().into_iter().map(|name| {
                        let value = name.clone();
                        let is_selected = {
                            let value = value.clone();
                            move || query.get().category == value
                        };
                        view! {
                            <option value=value selected=is_selected>{name}</option>
                        }
                    }).collect_view()}
                </select>

                <select
                    class="table-toolbar__select"
                    on:change=move |ev| {
                        query.update(|q| q.set_classification(event_target_value(&ev)))
                    }
                >
                    <option
                        value="all"
                        selected=move || query.get().classification == "all"
                    >
                        "All classifications"
                    </option>
                    {Classification::all().into_iter().map(|class| {
                        let code = class.as_str();
                        view! {
                            <option
                                value=code
                                selected=move || query.get().classification == code
                            >
                                {class.label()}
                            </option>
                        }
                    }).collect_view()}
                </select>

                <button
                    class="btn-secondary"
                    on:click=on_export
                    disabled=move || exporting.get()
                >
                    {move || if exporting.get() { "Exporting..." } else { "Export CSV" }}
                </button>
            </div>

            {move || notice.get().map(|n| {
                let class = if n.is_error {
                    "export-notice export-notice--error"
                } else {
                    "export-notice export-notice--success"
                };
                view! { <div class=class>{n.message}</div> }
            })}

            <table class="data-table">
                <thead>
                    <tr>
                        {sort_header("SKU", SortField::Sku)}
                        {sort_header("Product", SortField::Name)}
                        {sort_header("Category", SortField::Category)}
                        {sort_header("Sales %", SortField::SalesPercentage)}
                        <th>"Classification"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || page_rows.get().into_iter().map(|row| view! {
                        <TailTableRow row=row />
                    }).collect_view()}
                </tbody>
            </table>

            <Show when=move || total_count.get() == 0>
                <p class="empty-state">"No products match the current filters."</p>
            </Show>

            <PaginationControls
                current_page=Signal::derive(move || query.get().page)
                total_pages=total_pages
                total_count=total_count
                on_page_change=Callback::new(move |page| query.update(|q| q.page = page))
            />

            <CategoryBreakdownTable all_rows=all_rows />
        </div>
    }
}

#[component]
fn TailTableRow(row: TailRow) -> impl IntoView {
    let badge_class = format!(
        "classification-badge classification-badge--{}",
        row.classification.as_str()
    );
    view! {
        <tr>
            <td>{row.sku}</td>
            <td>{row.product_name}</td>
            <td>{row.category}</td>
            <td class="numeric">{format!("{:.2}%", row.sales_pct * 100.0)}</td>
            <td>
                <span class=badge_class>{row.classification.label()}</span>
            </td>
        </tr>
    }
}

/// KPI strip above the table: SKU shares, tail sales share and the Pareto
/// headline.
#[component]
fn TailSummaryCards() -> impl IntoView {
    let analytics = use_analytics();

    let summary = move || analytics.tail_analysis.get().map(|t| t.summary);
    let chart = move || analytics.tail_analysis.get().map(|t| t.chart);

    let counts = move || {
        analytics
            .tail_analysis
            .get()
            .map(|t| classification_counts(&t.table))
            .unwrap_or_default()
    };

    let pareto = move || {
        match (summary(), chart()) {
            (Some(s), Some(c)) => format!(
                "{}% of SKUs drive {}% of sales",
                pct_points(s.core_pct),
                pct_points(c.core_sales_share),
            ),
            _ => "—".to_string(),
        }
    };

    view! {
        <div class="summary-cards">
            <div class="summary-card summary-card--core">
                <p class="summary-card__label">"Core"</p>
                <p class="summary-card__value">
                    {move || summary()
                        .map(|s| format!("{}%", pct_points(s.core_pct)))
                        .unwrap_or_else(|| "—".to_string())}
                </p>
                <p class="summary-card__footnote">
                    {move || format!("{} products", counts().core)}
                </p>
            </div>
            <div class="summary-card summary-card--average">
                <p class="summary-card__label">"Average"</p>
                <p class="summary-card__value">
                    {move || summary()
                        .map(|s| format!("{}%", pct_points(s.average_pct)))
                        .unwrap_or_else(|| "—".to_string())}
                </p>
                <p class="summary-card__footnote">
                    {move || format!("{} products", counts().average)}
                </p>
            </div>
            <div class="summary-card summary-card--tail">
                <p class="summary-card__label">"Tail"</p>
                <p class="summary-card__value">
                    {move || summary()
                        .map(|s| format!("{}%", pct_points(s.tail_pct)))
                        .unwrap_or_else(|| "—".to_string())}
                </p>
                <p class="summary-card__footnote">
                    {move || summary()
                        .map(|s| format!(
                            "{}% of sales",
                            pct_points(s.tail_sales_share)
                        ))
                        .unwrap_or_default()}
                </p>
            </div>
            <div class="summary-card summary-card--insight">
                <p class="summary-card__label">"Pareto"</p>
                <p class="summary-card__value">{pareto}</p>
            </div>
        </div>
    }
}

#[component]
fn CategoryBreakdownTable(all_rows: Signal<Vec<TailRow>>) -> impl IntoView {
    let breakdown = move || {
        let rows = all_rows.get();
        category_breakdown(&unique_categories(&rows), &rows)
    };

    view! {
        <section class="category-breakdown">
            <h2>"By category"</h2>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Category"</th>
                        <th>"Core"</th>
                        <th>"Average"</th>
                        <th>"Tail"</th>
                        <th>"Total"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || breakdown().into_iter().map(|entry| view! {
                        <tr>
                            <td>{entry.name}</td>
                            <td class="numeric">{entry.core}</td>
                            <td class="numeric">{entry.average}</td>
                            <td class="numeric">{entry.tail}</td>
                            <td class="numeric">{entry.total}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </section>
    }
}
