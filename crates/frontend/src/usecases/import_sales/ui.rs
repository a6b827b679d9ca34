use contracts::sales::ImportJob;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::system::auth::context::use_session;
use crate::usecases::import_sales::api;

/// Upload page for sales data files. The server ingests the file
/// asynchronously and reports progress through the returned import job.
#[component]
pub fn ImportSalesPage() -> impl IntoView {
    let session = use_session();

    // web_sys::File is not Send+Sync, keep it out of the signal graph
    let selected_file = StoredValue::new_local(None::<web_sys::File>);
    let (file_name, set_file_name) = signal(None::<String>);
    let (uploading, set_uploading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (last_job, set_last_job) = signal(None::<ImportJob>);

    let on_file_change = move |ev: leptos::ev::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok());
        let file = input.and_then(|i| i.files()).and_then(|list| list.get(0));
        set_file_name.set(file.as_ref().map(|f| f.name()));
        selected_file.set_value(file);
    };

    let on_upload = move |_| {
        if uploading.get() {
            return;
        }
        let Some(file) = selected_file.get_value() else {
            set_error.set(Some("Choose a file first.".to_string()));
            return;
        };
        let Some(user) = session.user.get() else {
            return;
        };

        set_uploading.set(true);
        set_error.set(None);

        wasm_bindgen_futures::spawn_local(async move {
            match api::upload_file(&file, "sales", user.id).await {
                Ok(job) => {
                    set_last_job.set(Some(job));
                    selected_file.set_value(None);
                    set_file_name.set(None);
                }
                Err(e) => {
                    log::error!("Sales import upload failed: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_uploading.set(false);
        });
    };

    view! {
        <div class="page import-sales-page">
            <header class="page__header">
                <h1>"Import sales"</h1>
            </header>

            <div class="import-form">
                <label class="import-form__file">
                    <input type="file" accept=".csv,.xlsx" on:change=on_file_change />
                    {move || file_name.get().unwrap_or_else(|| "Choose a file".to_string())}
                </label>
                <button
                    class="btn-primary"
                    on:click=on_upload
                    disabled=move || uploading.get()
                >
                    {move || if uploading.get() { "Uploading..." } else { "Upload" }}
                </button>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="error-message">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>

            {move || last_job.get().map(|job| view! {
                <div class="import-job-card">
                    <h2>"Import job #" {job.id}</h2>
                    <dl>
                        <dt>"File"</dt>
                        <dd>{job.original_filename.unwrap_or_default()}</dd>
                        <dt>"Status"</dt>
                        <dd>{job.status}</dd>
                        <dt>"Rows"</dt>
                        <dd>
                            {format!(
                                "{} of {} processed, {} errors",
                                job.processed_rows.unwrap_or(0),
                                job.total_rows.unwrap_or(0),
                                job.error_count.unwrap_or(0),
                            )}
                        </dd>
                    </dl>
                </div>
            })}
        </div>
    }
}
