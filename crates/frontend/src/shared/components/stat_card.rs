use leptos::prelude::*;

/// Small KPI card: label, primary value, optional footnote
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Formatted value (None = loading / no data yet)
    #[prop(into)]
    value: Signal<Option<String>>,
    /// Optional footnote below the value
    #[prop(into, optional)]
    footnote: Signal<Option<String>>,
) -> impl IntoView {
    let formatted = move || value.get().unwrap_or_else(|| "—".to_string());

    let footnote_view = move || {
        footnote
            .get()
            .map(|text| view! { <p class="stat-card__footnote">{text}</p> })
    };

    view! {
        <div class="stat-card">
            <p class="stat-card__label">{label}</p>
            <p class="stat-card__value">{formatted}</p>
            {footnote_view}
        </div>
    }
}
