//! Shared helpers for sortable tables
use std::cmp::Ordering;

/// Trait for row types that support sorting by a named field
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sort a list in place by the given field
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Sort indicator for a table header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS class for the indicator span
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(i64);

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "value" => self.0.cmp(&other.0),
                _ => Ordering::Equal,
            }
        }
    }

    #[test]
    fn test_sort_list_descending_reverses_ascending() {
        let mut items = vec![Row(2), Row(3), Row(1)];
        sort_list(&mut items, "value", true);
        let asc: Vec<i64> = items.iter().map(|r| r.0).collect();
        assert_eq!(asc, vec![1, 2, 3]);

        sort_list(&mut items, "value", false);
        let desc: Vec<i64> = items.iter().map(|r| r.0).collect();
        assert_eq!(desc, vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("sku", "sku", true), " ▲");
        assert_eq!(get_sort_indicator("sku", "sku", false), " ▼");
        assert_eq!(get_sort_indicator("sku", "name", true), " ⇅");
    }
}
