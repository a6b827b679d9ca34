//! Context-provided store holding the reference catalog, the four analytics
//! payloads and the active filter scope.
//!
//! Fetching and state transitions are kept apart: the async methods only
//! gather data, while `apply_batch`/`apply_recalc` decide what gets
//! published. Scope batches are sequenced by a generation counter; the
//! space-elasticity recalculation does not advance it, so a recalc can never
//! supersede a scope refresh that is still current.

use chrono::Utc;
use contracts::analytics::{
    HeatmapResponse, HeatmapZone, SpaceElasticityResponse, TailAnalysisResponse,
};
use contracts::catalog::{Category, Store};
use contracts::sales::SaleRecord;
use futures::join;
use leptos::prelude::*;

use crate::analytics::scope::{DateRange, FilterScope};
use crate::analytics::summary::{derive_sales_summary, SalesSummary};
use crate::shared::api;

/// All four payloads of one scoped fetch, applied together or not at all
#[derive(Debug, Clone, PartialEq)]
pub struct ScopedBatch {
    pub tail: TailAnalysisResponse,
    pub space: SpaceElasticityResponse,
    pub heatmap: HeatmapResponse,
    pub sales: Vec<SaleRecord>,
}

async fn fetch_batch(query: &str) -> Result<ScopedBatch, String> {
    let tail_url = format!("/analytics/tail?{}", query);
    let space_url = format!("/analytics/space?{}", query);
    let heatmap_url = format!("/analytics/heatmap?{}", query);
    let sales_url = format!("/sales?{}", query);
    let (tail, space, heatmap, sales) = join!(
        api::get::<TailAnalysisResponse>(&tail_url),
        api::get::<SpaceElasticityResponse>(&space_url),
        api::get::<HeatmapResponse>(&heatmap_url),
        api::get::<Vec<SaleRecord>>(&sales_url),
    );
    Ok(ScopedBatch {
        tail: tail?,
        space: space?,
        heatmap: heatmap?,
        sales: sales?,
    })
}

#[derive(Clone, Copy)]
pub struct AnalyticsStore {
    pub stores: RwSignal<Vec<Store>>,
    pub categories: RwSignal<Vec<Category>>,
    pub tail_analysis: RwSignal<Option<TailAnalysisResponse>>,
    pub space_elasticity: RwSignal<Option<SpaceElasticityResponse>>,
    pub heatmap_zones: RwSignal<Vec<HeatmapZone>>,
    pub sales_summary: RwSignal<Option<SalesSummary>>,
    pub filters: RwSignal<FilterScope>,
    pub is_loading: RwSignal<bool>,
    /// Sequence counter for scope batches. Only the latest batch may publish
    /// its results.
    generation: StoredValue<u64>,
}

impl AnalyticsStore {
    pub fn new() -> Self {
        Self {
            stores: RwSignal::new(Vec::new()),
            categories: RwSignal::new(Vec::new()),
            tail_analysis: RwSignal::new(None),
            space_elasticity: RwSignal::new(None),
            heatmap_zones: RwSignal::new(Vec::new()),
            sales_summary: RwSignal::new(None),
            filters: RwSignal::new(FilterScope::default()),
            is_loading: RwSignal::new(false),
            generation: StoredValue::new(0),
        }
    }

    /// Start a new scope batch: advance the sequence and raise the loading
    /// flag. Any batch started earlier becomes stale.
    fn begin_batch(&self) -> u64 {
        self.generation.update_value(|g| *g += 1);
        self.is_loading.set(true);
        self.generation.get_value()
    }

    fn is_current(&self, batch: u64) -> bool {
        self.generation.get_value() == batch
    }

    /// Load the store and category catalogs. The active store id is seeded
    /// from the first store in the list.
    pub async fn load_reference_data(&self) -> Result<(), String> {
        let (stores, categories) = join!(
            api::get::<Vec<Store>>("/stores"),
            api::get::<Vec<Category>>("/categories"),
        );
        let stores = stores?;
        let categories = categories?;

        if let Some(first) = stores.first() {
            let id = first.id.to_string();
            self.filters.update(|f| f.store_id = id);
        }
        self.stores.set(stores);
        self.categories.set(categories);
        Ok(())
    }

    pub fn set_store(&self, store_id: String) {
        self.filters.update(|f| f.store_id = store_id);
    }

    pub fn set_date_range(&self, range: DateRange) {
        self.filters.update(|f| f.date_range = range);
    }

    /// Fetch all four analytics payloads for the active scope in one batch.
    /// Results of a batch superseded by a newer one are discarded.
    pub async fn apply_filters(&self) -> Result<(), String> {
        let batch = self.begin_batch();
        let query = self.filters.get_untracked().query_string(Utc::now());
        let fetched = fetch_batch(&query).await;
        self.apply_batch(batch, fetched)
    }

    /// Publish a fetched batch, all four resources together, unless a newer
    /// batch has started in the meantime.
    fn apply_batch(&self, batch: u64, fetched: Result<ScopedBatch, String>) -> Result<(), String> {
        // Each call clears the flag it set, even when superseded.
        self.is_loading.set(false);

        let data = fetched?;
        if !self.is_current(batch) {
            return Ok(());
        }

        let summary = derive_sales_summary(&data.sales, data.tail.summary.total_skus);
        self.sales_summary.set(Some(summary));
        self.tail_analysis.set(Some(data.tail));
        self.space_elasticity.set(Some(data.space));
        self.heatmap_zones.set(data.heatmap.zones);
        Ok(())
    }

    /// Re-run the space elasticity computation for the active scope. The
    /// response is returned to the caller and also published to the store,
    /// unless the scope moved on while the recalc was in flight.
    pub async fn recalculate_space_elasticity(
        &self,
    ) -> Result<SpaceElasticityResponse, String> {
        // Snapshot, not a bump: the recalc belongs to the current scope and
        // must not invalidate a scope batch racing alongside it.
        let snapshot = self.generation.get_value();
        self.is_loading.set(true);

        let query = self.filters.get_untracked().query_string(Utc::now());
        let fetched =
            api::get::<SpaceElasticityResponse>(&format!("/analytics/space?{}", query)).await;
        self.apply_recalc(snapshot, fetched)
    }

    fn apply_recalc(
        &self,
        snapshot: u64,
        fetched: Result<SpaceElasticityResponse, String>,
    ) -> Result<SpaceElasticityResponse, String> {
        self.is_loading.set(false);

        let response = fetched?;
        if self.is_current(snapshot) {
            self.space_elasticity.set(Some(response.clone()));
        }
        Ok(response)
    }
}

impl Default for AnalyticsStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_analytics() -> AnalyticsStore {
    use_context::<AnalyticsStore>().expect("AnalyticsStore not found in context")
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::analytics::{
        SpaceChart, SpaceRow, TailAnalysisSummary, TailChart,
    };

    fn space_response(meters: f64) -> SpaceElasticityResponse {
        SpaceElasticityResponse {
            table: vec![SpaceRow {
                category: "Dairy".to_string(),
                sales_pct: 0.4,
                current_meters: meters,
                recommended_meters: meters + 1.0,
            }],
            chart: SpaceChart {
                current: Vec::new(),
                recommended: Vec::new(),
            },
        }
    }

    fn sample_batch(total_skus: i64, revenue: f64) -> ScopedBatch {
        ScopedBatch {
            tail: TailAnalysisResponse {
                summary: TailAnalysisSummary {
                    total_skus,
                    core_pct: 0.2,
                    average_pct: 0.3,
                    tail_pct: 0.5,
                    tail_sales_share: 0.05,
                },
                table: Vec::new(),
                chart: TailChart {
                    core_sales_share: 0.8,
                    average_sales_share: 0.15,
                    tail_sales_share: 0.05,
                },
            },
            space: space_response(4.0),
            heatmap: HeatmapResponse { zones: Vec::new() },
            sales: vec![SaleRecord {
                id: 1,
                product_id: 1,
                store_id: 1,
                date: "2024-03-01T00:00:00".to_string(),
                units_sold: 2,
                revenue,
            }],
        }
    }

    #[test]
    fn test_batch_applies_all_resources_together() {
        let store = AnalyticsStore::new();
        let batch = store.begin_batch();
        assert!(store.is_loading.get_untracked());

        store.apply_batch(batch, Ok(sample_batch(10, 100.0))).unwrap();

        assert!(!store.is_loading.get_untracked());
        assert!(store.tail_analysis.get_untracked().is_some());
        assert!(store.space_elasticity.get_untracked().is_some());
        let summary = store.sales_summary.get_untracked().unwrap();
        assert_eq!(summary.total_sales_value, 100.0);
        assert_eq!(summary.avg_sales_per_sku, 10.0);
    }

    #[test]
    fn test_superseded_batch_is_discarded() {
        let store = AnalyticsStore::new();
        let first = store.begin_batch();
        let second = store.begin_batch();

        store.apply_batch(first, Ok(sample_batch(10, 100.0))).unwrap();
        assert!(store.tail_analysis.get_untracked().is_none());
        assert!(store.sales_summary.get_untracked().is_none());

        store.apply_batch(second, Ok(sample_batch(20, 200.0))).unwrap();
        let tail = store.tail_analysis.get_untracked().unwrap();
        assert_eq!(tail.summary.total_skus, 20);
    }

    #[test]
    fn test_failed_batch_clears_loading_and_keeps_previous_data() {
        let store = AnalyticsStore::new();
        let batch = store.begin_batch();
        store.apply_batch(batch, Ok(sample_batch(10, 100.0))).unwrap();

        let batch = store.begin_batch();
        let result = store.apply_batch(batch, Err("Request failed with status 500".to_string()));

        assert!(result.is_err());
        assert!(!store.is_loading.get_untracked());
        let tail = store.tail_analysis.get_untracked().unwrap();
        assert_eq!(tail.summary.total_skus, 10);
        assert!(store.sales_summary.get_untracked().is_some());
    }

    #[test]
    fn test_recalculation_does_not_supersede_a_scope_batch() {
        let store = AnalyticsStore::new();
        // Scope refresh in flight when a recalculation starts.
        let batch = store.begin_batch();
        let snapshot = store.generation.get_value();

        // The scope batch still lands.
        store.apply_batch(batch, Ok(sample_batch(10, 100.0))).unwrap();
        let tail = store.tail_analysis.get_untracked().unwrap();
        assert_eq!(tail.summary.total_skus, 10);

        // And so does the recalculation, since the scope has not moved on.
        let response = store.apply_recalc(snapshot, Ok(space_response(9.0))).unwrap();
        assert_eq!(response.table[0].current_meters, 9.0);
        let published = store.space_elasticity.get_untracked().unwrap();
        assert_eq!(published.table[0].current_meters, 9.0);
    }

    #[test]
    fn test_recalculation_from_an_old_scope_is_not_published() {
        let store = AnalyticsStore::new();
        let batch = store.begin_batch();
        store.apply_batch(batch, Ok(sample_batch(10, 100.0))).unwrap();

        // Recalc starts, then the scope changes underneath it.
        let snapshot = store.generation.get_value();
        let batch = store.begin_batch();
        store.apply_batch(batch, Ok(sample_batch(20, 200.0))).unwrap();

        let response = store.apply_recalc(snapshot, Ok(space_response(9.0))).unwrap();
        assert_eq!(response.table[0].current_meters, 9.0);
        // The shared signal keeps the newer scope's data.
        let published = store.space_elasticity.get_untracked().unwrap();
        assert_ne!(published.table[0].current_meters, 9.0);
    }
}
