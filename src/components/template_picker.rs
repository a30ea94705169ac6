//! Prompt-template dropdown with manual index loading.
//!
//! Selecting a template is local state only; nothing is fetched or ingested
//! until the user explicitly loads the template into the backend index.

#[cfg(test)]
#[path = "template_picker_test.rs"]
mod template_picker_test;

use leptos::prelude::*;

use crate::state::templates::TemplatesState;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::TemplateIngestData;

#[cfg(feature = "hydrate")]
use crate::net::{api, types::ApiResponse};

/// Status line shown after a successful template ingestion.
#[cfg(any(test, feature = "hydrate"))]
fn ingest_status_line(data: &TemplateIngestData) -> String {
    format!("Indexed {} chunks ({} upserts) from {}", data.chunks, data.upserts, data.doc_id)
}

/// Template selector plus the explicit ingest button.
#[component]
pub fn TemplatePicker() -> impl IntoView {
    let templates = expect_context::<RwSignal<TemplatesState>>();

    let ingest_pending = RwSignal::new(false);
    let ingest_status = RwSignal::new(None::<String>);

    let on_ingest = move |_| {
        if ingest_pending.get() {
            return;
        }
        let Some(template_id) = templates.get().selected else {
            return;
        };
        ingest_pending.set(true);
        ingest_status.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::ingest_template(&template_id).await {
                ApiResponse::Success { data, .. } => {
                    ingest_status.set(Some(ingest_status_line(&data)));
                }
                ApiResponse::Failure { error, trace_id } => {
                    log::warn!(
                        "template ingest failed: {} ({}, trace {trace_id})",
                        error.message,
                        error.code
                    );
                    ingest_status.set(Some(error.message));
                }
            }
            ingest_pending.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = template_id;
            ingest_pending.set(false);
        }
    };

    let can_ingest = move || !ingest_pending.get() && templates.get().selected.is_some();

    view! {
        <div class="template-picker">
            <label class="template-picker__label" for="template-select">
                "Prompt template"
            </label>
            <div class="template-picker__row">
                <select
                    id="template-select"
                    class="template-picker__select"
                    prop:value=move || templates.get().selected.unwrap_or_default()
                    on:change=move |ev| {
                        templates.update(|t| t.select(event_target_value(&ev)));
                        ingest_status.set(None);
                    }
                >
                    {move || {
                        templates
                            .get()
                            .items
                            .into_iter()
                            .map(|t| {
                                view! { <option value=t.template_id.clone()>{t.title.clone()}</option> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
                <button
                    class="btn template-picker__ingest"
                    on:click=on_ingest
                    disabled=move || !can_ingest()
                >
                    {move || if ingest_pending.get() { "Indexing..." } else { "Load into index" }}
                </button>
            </div>

            {move || {
                let state = templates.get();
                state
                    .selected_meta()
                    .cloned()
                    .map(|meta| {
                        view! {
                            <div class="template-picker__meta">
                                <p class="template-picker__current">{meta.title}</p>
                                {meta
                                    .description
                                    .map(|d| view! { <p class="template-picker__description">{d}</p> })}
                            </div>
                        }
                    })
            }}

            {move || {
                templates
                    .get()
                    .error
                    .map(|e| view! { <p class="template-picker__error">{e}</p> })
            }}

            {move || ingest_status.get().map(|s| view! { <p class="template-picker__status">{s}</p> })}
        </div>
    }
}
