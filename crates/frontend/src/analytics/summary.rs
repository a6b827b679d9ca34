//! Client-side derivations over the raw analytics payloads.

use contracts::sales::SaleRecord;

/// Composite metric derived from the raw sales collection and the SKU count
/// reported by the tail analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalesSummary {
    pub total_sales_value: f64,
    pub avg_sales_per_sku: f64,
}

/// `Σ revenue` and `Σ revenue / total_skus`; the average is 0 when there are
/// no SKUs.
pub fn derive_sales_summary(sales: &[SaleRecord], total_skus: i64) -> SalesSummary {
    let total_sales_value: f64 = sales.iter().map(|sale| sale.revenue).sum();
    let avg_sales_per_sku = if total_skus > 0 {
        total_sales_value / total_skus as f64
    } else {
        0.0
    };
    SalesSummary {
        total_sales_value,
        avg_sales_per_sku,
    }
}

/// Convert a 0..=1 fraction to rounded percentage points
pub fn pct_points(fraction: f64) -> i64 {
    (fraction * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale(revenue: f64) -> SaleRecord {
        SaleRecord {
            id: 0,
            product_id: 0,
            store_id: 1,
            date: "2024-03-01T00:00:00".to_string(),
            units_sold: 1,
            revenue,
        }
    }

    #[test]
    fn test_totals_and_average() {
        let summary = derive_sales_summary(&[sale(100.0), sale(50.0)], 2);
        assert_eq!(summary.total_sales_value, 150.0);
        assert_eq!(summary.avg_sales_per_sku, 75.0);
    }

    #[test]
    fn test_zero_skus_yields_zero_average() {
        let summary = derive_sales_summary(&[sale(100.0)], 0);
        assert_eq!(summary.total_sales_value, 100.0);
        assert_eq!(summary.avg_sales_per_sku, 0.0);
    }

    #[test]
    fn test_empty_sales() {
        let summary = derive_sales_summary(&[], 10);
        assert_eq!(summary.total_sales_value, 0.0);
        assert_eq!(summary.avg_sales_per_sku, 0.0);
    }

    #[test]
    fn test_pct_points_rounds() {
        assert_eq!(pct_points(0.2), 20);
        assert_eq!(pct_points(0.3), 30);
        assert_eq!(pct_points(0.5), 50);
        assert_eq!(pct_points(0.666), 67);
        assert_eq!(pct_points(0.0), 0);
    }
}
