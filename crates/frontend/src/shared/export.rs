//! CSV export: builds the file content from typed rows and hands it to the
//! browser as a Blob download. The content assembly is pure so it can be
//! tested without a DOM.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Types that can be written out as CSV rows
pub trait CsvExportable {
    /// Column headers, in output order
    fn headers() -> Vec<&'static str>;

    /// One output row; must match `headers()` in length and order
    fn to_csv_row(&self) -> Vec<String>;
}

/// Assemble the full CSV text (header line + one line per row)
pub fn build_csv<T: CsvExportable>(rows: &[T]) -> String {
    let mut content = String::new();

    content.push_str(&T::headers().join(","));
    content.push('\n');

    for row in rows {
        let escaped: Vec<String> = row
            .to_csv_row()
            .iter()
            .map(|cell| escape_csv_cell(cell))
            .collect();
        content.push_str(&escaped.join(","));
        content.push('\n');
    }

    content
}

/// Quote a cell when it contains the separator, quotes or line breaks
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// Build the CSV and trigger a browser download as `<filename>.csv`
pub fn download_csv<T: CsvExportable>(rows: &[T], filename: &str) -> Result<(), String> {
    if rows.is_empty() {
        return Err("No rows to export".to_string());
    }

    let blob = create_csv_blob(&build_csv(rows))?;
    trigger_download(&blob, &format!("{}.csv", filename))
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&parts, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn trigger_download(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        name: String,
        note: String,
    }

    impl CsvExportable for Sample {
        fn headers() -> Vec<&'static str> {
            vec!["Name", "Note"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.name.clone(), self.note.clone()]
        }
    }

    #[test]
    fn test_build_csv_plain_cells() {
        let rows = vec![Sample {
            name: "SKU-1".into(),
            note: "ok".into(),
        }];
        assert_eq!(build_csv(&rows), "Name,Note\nSKU-1,ok\n");
    }

    #[test]
    fn test_cells_with_separator_or_quotes_are_quoted() {
        let rows = vec![Sample {
            name: "Milk, whole".into(),
            note: "the \"good\" one".into(),
        }];
        assert_eq!(
            build_csv(&rows),
            "Name,Note\n\"Milk, whole\",\"the \"\"good\"\" one\"\n"
        );
    }
}
