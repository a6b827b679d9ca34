use contracts::sales::ImportJob;
use web_sys::{File, FormData};

use crate::shared::api;

/// Upload a data file for ingestion. The server answers with the created
/// import job, which starts in the "pending" state.
pub async fn upload_file(
    file: &File,
    import_type: &str,
    user_id: i64,
) -> Result<ImportJob, String> {
    let form = FormData::new().map_err(|e| format!("Failed to create form data: {:?}", e))?;
    form.append_with_blob("file", file)
        .map_err(|e| format!("Failed to attach file: {:?}", e))?;
    form.append_with_str("import_type", import_type)
        .map_err(|e| format!("Failed to attach import type: {:?}", e))?;
    form.append_with_str("user_id", &user_id.to_string())
        .map_err(|e| format!("Failed to attach user id: {:?}", e))?;

    api::upload::<ImportJob>("/imports", form).await
}
