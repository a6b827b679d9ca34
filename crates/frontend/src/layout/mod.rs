//! Application shell: sidebar navigation plus the header carrying the global
//! filter scope (store and date range) and the session controls.

use leptos::prelude::*;

use crate::analytics::scope::DateRange;
use crate::analytics::store::use_analytics;
use crate::analytics::ui::dashboard::DashboardPage;
use crate::analytics::ui::heatmap::HeatmapPage;
use crate::analytics::ui::space_elasticity::SpaceElasticityPage;
use crate::analytics::ui::tail_analysis::TailAnalysisPage;
use crate::system::auth::context::use_session;
use crate::usecases::import_sales::ImportSalesPage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    TailAnalysis,
    SpaceElasticity,
    Heatmap,
    ImportSales,
}

impl Page {
    fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::TailAnalysis => "Tail analysis",
            Page::SpaceElasticity => "Space elasticity",
            Page::Heatmap => "Heatmap",
            Page::ImportSales => "Import sales",
        }
    }

    fn all() -> Vec<Page> {
        vec![
            Page::Dashboard,
            Page::TailAnalysis,
            Page::SpaceElasticity,
            Page::Heatmap,
            Page::ImportSales,
        ]
    }
}

#[component]
pub fn AppShell() -> impl IntoView {
    let (active_page, set_active_page) = signal(Page::Dashboard);

    view! {
        <div class="app-shell">
            <Sidebar active_page=active_page on_navigate=Callback::new(move |page| {
                set_active_page.set(page)
            }) />
            <div class="app-shell__main">
                <Header />
                <main class="app-shell__content">
                    {move || match active_page.get() {
                        Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                        Page::TailAnalysis => view! { <TailAnalysisPage /> }.into_any(),
                        Page::SpaceElasticity => {
                            view! { <SpaceElasticityPage /> }.into_any()
                        }
                        Page::Heatmap => view! { <HeatmapPage /> }.into_any(),
                        Page::ImportSales => view! { <ImportSalesPage /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}

#[component]
fn Sidebar(
    #[prop(into)] active_page: Signal<Page>,
    on_navigate: Callback<Page>,
) -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">"ShelfIQ"</div>
            <nav class="sidebar__nav">
                {Page::all().into_iter().map(|page| {
                    view! {
                        <button
                            class=move || if active_page.get() == page {
                                "sidebar__link sidebar__link--active"
                            } else {
                                "sidebar__link"
                            }
                            on:click=move |_| on_navigate.run(page)
                        >
                            {page.title()}
                        </button>
                    }
                }).collect_view()}
            </nav>
        </aside>
    }
}

/// Header: the global scope selectors and the session block. Changing either
/// select updates the filter scope, which triggers a full refetch.
#[component]
fn Header() -> impl IntoView {
    let session = use_session();
    let analytics = use_analytics();

    let user_name = move || {
        session
            .user
            .get()
            .map(|u| u.name)
            .unwrap_or_default()
    };

    view! {
        <header class="app-header">
            <div class="app-header__scope">
                <select
                    class="app-header__select"
                    on:change=move |ev| analytics.set_store(event_target_value(&ev))
                >
                    {move || {
                        let active = analytics.filters.get().store_id;
                        analytics.stores.get().into_iter().map(|store| {
                            let id = store.id.to_string();
                            let is_selected = id == active;
                            view! {
                                <option value=id selected=is_selected>{store.name}</option>
                            }
                        }).collect_view()
                    }}
                </select>

                <select
                    class="app-header__select"
                    on:change=move |ev| {
                        let code = event_target_value(&ev);
                        analytics.set_date_range(DateRange::from_code_or_default(&code));
                    }
                >
                    {move || {
                        let active = analytics.filters.get().date_range;
                        DateRange::all().into_iter().map(|range| {
                            view! {
                                <option
                                    value=range.as_str()
                                    selected=range == active
                                >
                                    {range.label()}
                                </option>
                            }
                        }).collect_view()
                    }}
                </select>
            </div>

            <div class="app-header__session">
                <span class="app-header__user">{user_name}</span>
                <button class="btn-link" on:click=move |_| session.logout()>
                    "Sign out"
                </button>
            </div>
        </header>
    }
}
