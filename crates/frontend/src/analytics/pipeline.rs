//! View pipeline for the tail-analysis table: filter → sort → paginate, plus
//! the export projection and the full-dataset summary widgets. Everything
//! here is a pure function of (rows, query), recomputed on every change.

use std::cmp::Ordering;

use contracts::analytics::TailRow;
use contracts::enums::Classification;

use crate::shared::export::CsvExportable;

pub const PAGE_SIZE: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Sku,
    Name,
    Category,
    SalesPercentage,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Sku => "sku",
            SortField::Name => "name",
            SortField::Category => "category",
            SortField::SalesPercentage => "salesPercentage",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Per-page query state over the tail table. Any filter or sort change
/// snaps the page back to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct TailQuery {
    pub search: String,
    /// "all" or a category name
    pub category: String,
    /// "all" or a classification code
    pub classification: String,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    /// 1-based
    pub page: usize,
}

impl Default for TailQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: "all".to_string(),
            classification: "all".to_string(),
            sort_field: SortField::SalesPercentage,
            sort_direction: SortDirection::Desc,
            page: 1,
        }
    }
}

impl TailQuery {
    pub fn set_search(&mut self, text: String) {
        self.search = text;
        self.page = 1;
    }

    pub fn set_category(&mut self, category: String) {
        self.category = category;
        self.page = 1;
    }

    pub fn set_classification(&mut self, classification: String) {
        self.classification = classification;
        self.page = 1;
    }

    /// Clicking the active column flips the direction; a new column starts
    /// descending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_direction = match self.sort_direction {
                SortDirection::Asc => SortDirection::Desc,
                SortDirection::Desc => SortDirection::Asc,
            };
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Desc;
        }
        self.page = 1;
    }
}

/// Keep rows matching the free-text search (SKU, name or category,
/// case-insensitive) and the category/classification selections.
pub fn filter_rows(rows: &[TailRow], query: &TailQuery) -> Vec<TailRow> {
    let needle = query.search.to_lowercase();
    let classification = Classification::from_code(&query.classification);
    rows.iter()
        .filter(|row| {
            (needle.is_empty()
                || row.sku.to_lowercase().contains(&needle)
                || row.product_name.to_lowercase().contains(&needle)
                || row.category.to_lowercase().contains(&needle))
                && (query.category == "all" || row.category == query.category)
                && (query.classification == "all"
                    || classification == Some(row.classification))
        })
        .cloned()
        .collect()
}

/// Sort in place by the selected field; string fields lexicographically,
/// the sales percentage numerically.
pub fn sort_rows(rows: &mut [TailRow], field: SortField, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let cmp = match field {
            SortField::Sku => a.sku.cmp(&b.sku),
            SortField::Name => a.product_name.cmp(&b.product_name),
            SortField::Category => a.category.cmp(&b.category),
            SortField::SalesPercentage => {
                a.sales_pct.partial_cmp(&b.sales_pct).unwrap_or(Ordering::Equal)
            }
        };
        match direction {
            SortDirection::Asc => cmp,
            SortDirection::Desc => cmp.reverse(),
        }
    });
}

/// Filtered and sorted set, before pagination. This is also what export
/// operates on.
pub fn filtered_rows(rows: &[TailRow], query: &TailQuery) -> Vec<TailRow> {
    let mut filtered = filter_rows(rows, query);
    sort_rows(&mut filtered, query.sort_field, query.sort_direction);
    filtered
}

pub fn page_count(filtered_len: usize) -> usize {
    filtered_len.div_ceil(PAGE_SIZE)
}

/// Slice out one 15-row page (1-based). Pages past the end are empty.
pub fn paginate(rows: &[TailRow], page: usize) -> Vec<TailRow> {
    let page = page.max(1);
    let start = (page - 1) * PAGE_SIZE;
    if start >= rows.len() {
        return Vec::new();
    }
    rows[start..(start + PAGE_SIZE).min(rows.len())].to_vec()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassificationCounts {
    pub core: usize,
    pub average: usize,
    pub tail: usize,
}

/// Counts over the full (unfiltered) table
pub fn classification_counts(rows: &[TailRow]) -> ClassificationCounts {
    let mut counts = ClassificationCounts::default();
    for row in rows {
        match row.classification {
            Classification::Core => counts.core += 1,
            Classification::Average => counts.average += 1,
            Classification::Tail => counts.tail += 1,
        }
    }
    counts
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    pub name: String,
    pub core: usize,
    pub average: usize,
    pub tail: usize,
    pub total: usize,
}

/// Per-category classification counts over the full table
pub fn category_breakdown(category_names: &[String], rows: &[TailRow]) -> Vec<CategoryBreakdown> {
    category_names
        .iter()
        .map(|name| {
            let mut entry = CategoryBreakdown {
                name: name.clone(),
                core: 0,
                average: 0,
                tail: 0,
                total: 0,
            };
            for row in rows.iter().filter(|r| &r.category == name) {
                entry.total += 1;
                match row.classification {
                    Classification::Core => entry.core += 1,
                    Classification::Average => entry.average += 1,
                    Classification::Tail => entry.tail += 1,
                }
            }
            entry
        })
        .collect()
}

/// Category names in order of first appearance
pub fn unique_categories(rows: &[TailRow]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for row in rows {
        if !names.contains(&row.category) {
            names.push(row.category.clone());
        }
    }
    names
}

/// One exported product row, with display formatting applied
#[derive(Debug, Clone, PartialEq)]
pub struct TailExportRow {
    pub sku: String,
    pub product_name: String,
    pub category: String,
    pub sales_pct_display: String,
    pub classification_label: &'static str,
}

impl From<&TailRow> for TailExportRow {
    fn from(row: &TailRow) -> Self {
        Self {
            sku: row.sku.clone(),
            product_name: row.product_name.clone(),
            category: row.category.clone(),
            sales_pct_display: format!("{:.2}", row.sales_pct * 100.0),
            classification_label: row.classification.label(),
        }
    }
}

impl CsvExportable for TailExportRow {
    fn headers() -> Vec<&'static str> {
        vec!["SKU", "Product Name", "Category", "Sales %", "Classification"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.sku.clone(),
            self.product_name.clone(),
            self.category.clone(),
            self.sales_pct_display.clone(),
            self.classification_label.to_string(),
        ]
    }
}

/// Project the filtered (pre-pagination) set into export rows
pub fn export_rows(filtered: &[TailRow]) -> Vec<TailExportRow> {
    filtered.iter().map(TailExportRow::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(sku: &str, name: &str, category: &str, pct: f64, class: Classification) -> TailRow {
        TailRow {
            sku: sku.to_string(),
            product_name: name.to_string(),
            category: category.to_string(),
            sales_pct: pct,
            classification: class,
        }
    }

    fn sample_rows() -> Vec<TailRow> {
        vec![
            row("SKU-003", "Almond milk", "Dairy", 0.010, Classification::Average),
            row("SKU-001", "Whole milk", "Dairy", 0.042, Classification::Core),
            row("SKU-004", "Rice crackers", "Snacks", 0.001, Classification::Tail),
            row("SKU-002", "Dark chocolate", "Snacks", 0.030, Classification::Core),
        ]
    }

    #[test]
    fn test_search_matches_sku_name_and_category_case_insensitive() {
        let rows = sample_rows();
        let mut query = TailQuery::default();

        query.set_search("MILK".to_string());
        let hits = filter_rows(&rows, &query);
        assert_eq!(hits.len(), 2);

        query.set_search("snacks".to_string());
        let hits = filter_rows(&rows, &query);
        assert_eq!(hits.len(), 2);

        query.set_search("sku-004".to_string());
        let hits = filter_rows(&rows, &query);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].sku, "SKU-004");
    }

    #[test]
    fn test_category_and_classification_filters_combine() {
        let rows = sample_rows();
        let mut query = TailQuery::default();
        query.set_category("Snacks".to_string());
        query.set_classification("core".to_string());
        let hits = filter_rows(&rows, &query);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].sku, "SKU-002");
    }

    #[test]
    fn test_unrecognized_classification_code_matches_nothing() {
        let rows = sample_rows();
        let mut query = TailQuery::default();
        query.set_classification("premium".to_string());
        assert!(filter_rows(&rows, &query).is_empty());
    }

    #[test]
    fn test_pipeline_is_deterministic() {
        let rows = sample_rows();
        let query = TailQuery::default();
        let first = filtered_rows(&rows, &query);
        let second = filtered_rows(&rows, &query);
        assert_eq!(first, second);
    }

    #[test]
    fn test_descending_is_reverse_of_ascending() {
        let mut asc = sample_rows();
        sort_rows(&mut asc, SortField::SalesPercentage, SortDirection::Asc);
        let mut desc = asc.clone();
        sort_rows(&mut desc, SortField::SalesPercentage, SortDirection::Desc);
        let reversed: Vec<TailRow> = asc.into_iter().rev().collect();
        assert_eq!(desc, reversed);
    }

    #[test]
    fn test_sort_by_string_fields() {
        let mut rows = sample_rows();
        sort_rows(&mut rows, SortField::Sku, SortDirection::Asc);
        let skus: Vec<&str> = rows.iter().map(|r| r.sku.as_str()).collect();
        assert_eq!(skus, vec!["SKU-001", "SKU-002", "SKU-003", "SKU-004"]);

        sort_rows(&mut rows, SortField::Name, SortDirection::Asc);
        assert_eq!(rows[0].product_name, "Almond milk");
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0), 0);
        assert_eq!(page_count(1), 1);
        assert_eq!(page_count(15), 1);
        assert_eq!(page_count(16), 2);
        assert_eq!(page_count(45), 3);
    }

    #[test]
    fn test_concatenated_pages_reconstruct_the_filtered_set() {
        let rows: Vec<TailRow> = (0..38)
            .map(|i| {
                row(
                    &format!("SKU-{:03}", i),
                    &format!("Product {}", i),
                    "Misc",
                    i as f64 / 100.0,
                    Classification::Average,
                )
            })
            .collect();

        let total = page_count(rows.len());
        assert_eq!(total, 3);

        let mut rebuilt = Vec::new();
        for page in 1..=total {
            let slice = paginate(&rows, page);
            assert!(slice.len() <= PAGE_SIZE);
            rebuilt.extend(slice);
        }
        assert_eq!(rebuilt, rows);
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let rows = sample_rows();
        assert!(paginate(&rows, 2).is_empty());
        assert_eq!(paginate(&rows, 1).len(), 4);
    }

    #[test]
    fn test_filter_and_sort_changes_reset_page() {
        let mut query = TailQuery {
            page: 4,
            ..TailQuery::default()
        };
        query.set_search("milk".to_string());
        assert_eq!(query.page, 1);

        query.page = 4;
        query.set_category("Dairy".to_string());
        assert_eq!(query.page, 1);

        query.page = 4;
        query.set_classification("tail".to_string());
        assert_eq!(query.page, 1);

        query.page = 4;
        query.toggle_sort(SortField::Sku);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_toggle_sort_new_field_starts_descending() {
        let mut query = TailQuery::default();
        query.toggle_sort(SortField::Sku);
        assert_eq!(query.sort_field, SortField::Sku);
        assert_eq!(query.sort_direction, SortDirection::Desc);

        query.toggle_sort(SortField::Sku);
        assert_eq!(query.sort_direction, SortDirection::Asc);

        query.toggle_sort(SortField::Sku);
        assert_eq!(query.sort_direction, SortDirection::Desc);
    }

    #[test]
    fn test_classification_counts_partition_the_table() {
        let rows = sample_rows();
        let counts = classification_counts(&rows);
        assert_eq!(counts.core, 2);
        assert_eq!(counts.average, 1);
        assert_eq!(counts.tail, 1);
        assert_eq!(counts.core + counts.average + counts.tail, rows.len());

        // The per-class filtered subsets are disjoint and cover the table.
        let mut query = TailQuery::default();
        let mut union = Vec::new();
        for class in Classification::all() {
            query.set_classification(class.as_str().to_string());
            union.extend(filter_rows(&rows, &query));
        }
        assert_eq!(union.len(), rows.len());
        for source in &rows {
            assert!(union.contains(source));
        }
    }

    #[test]
    fn test_category_breakdown() {
        let rows = sample_rows();
        let breakdown =
            category_breakdown(&["Dairy".to_string(), "Snacks".to_string()], &rows);
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].name, "Dairy");
        assert_eq!(breakdown[0].core, 1);
        assert_eq!(breakdown[0].average, 1);
        assert_eq!(breakdown[0].total, 2);
        assert_eq!(breakdown[1].tail, 1);
    }

    #[test]
    fn test_unique_categories_keep_first_appearance_order() {
        let rows = sample_rows();
        assert_eq!(
            unique_categories(&rows),
            vec!["Dairy".to_string(), "Snacks".to_string()]
        );
    }

    #[test]
    fn test_export_rows_formatting() {
        let rows = vec![
            row("A", "Product A", "Misc", 0.042, Classification::Core),
            row("B", "Product B", "Misc", 0.0011, Classification::Tail),
            row("C", "Product C", "Misc", 0.01, Classification::Average),
        ];
        let exported = export_rows(&rows);
        let labels: Vec<&str> = exported.iter().map(|r| r.classification_label).collect();
        assert_eq!(labels, vec!["Core", "Tail", "Average"]);
        assert_eq!(exported[0].sales_pct_display, "4.20");
        assert_eq!(exported[1].sales_pct_display, "0.11");
        assert_eq!(exported[2].sales_pct_display, "1.00");
    }
}
