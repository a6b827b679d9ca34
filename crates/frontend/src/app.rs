use crate::analytics::store::AnalyticsStore;
use crate::layout::AppShell;
use crate::system::auth::context::SessionStore;
use crate::system::auth::guard::RequireAuth;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn App() -> impl IntoView {
    // Session and analytics stores are the only two owners of shared state;
    // everything below obtains them through context.
    let session = SessionStore::new();
    session.bootstrap();
    provide_context(session);

    let analytics = AnalyticsStore::new();
    provide_context(analytics);

    // Load the store/category catalogs once; this also seeds the scope's
    // store id from the first store.
    Effect::new(move |_| {
        spawn_local(async move {
            if let Err(e) = analytics.load_reference_data().await {
                log::error!("Failed to load reference data: {}", e);
            }
        });
    });

    // Refetch the four analytics resources whenever the filter scope changes.
    Effect::new(move |_| {
        let scope = analytics.filters.get();
        if scope.store_id.is_empty() {
            return;
        }
        spawn_local(async move {
            if let Err(e) = analytics.apply_filters().await {
                log::error!("Analytics refresh failed: {}", e);
            }
        });
    });

    view! {
        <RequireAuth>
            <AppShell />
        </RequireAuth>
    }
}
