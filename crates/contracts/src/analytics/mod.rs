//! Analytics payloads returned by the backend (`/analytics/*`).
//!
//! The server computes the classification and aggregates; the client only
//! consumes them, so these types mirror the wire shapes one to one.

use serde::{Deserialize, Serialize};

use crate::enums::Classification;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TailAnalysisSummary {
    pub total_skus: i64,
    /// SKU-share fractions in 0..=1
    pub core_pct: f64,
    pub average_pct: f64,
    pub tail_pct: f64,
    pub tail_sales_share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TailRow {
    pub sku: String,
    pub product_name: String,
    pub category: String,
    /// Sales-share fraction in 0..=1
    pub sales_pct: f64,
    pub classification: Classification,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TailChart {
    pub core_sales_share: f64,
    pub average_sales_share: f64,
    pub tail_sales_share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TailAnalysisResponse {
    pub summary: TailAnalysisSummary,
    pub table: Vec<TailRow>,
    pub chart: TailChart,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceRow {
    pub category: String,
    pub sales_pct: f64,
    pub current_meters: f64,
    pub recommended_meters: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceChartPoint {
    pub category: String,
    pub meters: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceChart {
    pub current: Vec<SpaceChartPoint>,
    pub recommended: Vec<SpaceChartPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceElasticityResponse {
    pub table: Vec<SpaceRow>,
    pub chart: SpaceChart,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapZone {
    pub zone_name: String,
    pub x: f64,
    pub y: f64,
    pub traffic_score: f64,
    pub performance: String,
    pub color: String,
}

/// Servers may omit `zones` entirely; treat that as an empty map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapResponse {
    #[serde(default)]
    pub zones: Vec<HeatmapZone>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heatmap_zones_default_to_empty() {
        let parsed: HeatmapResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.zones.is_empty());
    }

    #[test]
    fn test_tail_row_classification_parses_from_wire() {
        let json = r#"{
            "sku": "SKU-1",
            "product_name": "Olive oil 1L",
            "category": "Pantry",
            "sales_pct": 0.031,
            "classification": "core"
        }"#;
        let row: TailRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.classification, Classification::Core);
    }
}
