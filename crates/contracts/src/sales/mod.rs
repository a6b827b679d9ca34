use serde::{Deserialize, Serialize};

/// One raw sales transaction (`GET /sales`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub id: i64,
    pub product_id: i64,
    pub store_id: i64,
    pub date: String,
    pub units_sold: i64,
    #[serde(default)]
    pub revenue: f64,
}

/// Import job record returned by `POST /imports` and the status endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportJob {
    pub id: i64,
    #[serde(rename = "type")]
    pub job_type: String,
    pub status: String,
    #[serde(default)]
    pub original_filename: Option<String>,
    #[serde(default)]
    pub total_rows: Option<i64>,
    #[serde(default)]
    pub processed_rows: Option<i64>,
    #[serde(default)]
    pub error_count: Option<i64>,
}
