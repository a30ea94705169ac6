//! Chat page: template picker, transcript, composer, backend status.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the single route. It fires the one-shot template and health
//! fetches on mount and owns the send flow: reducer `begin_send`, payload
//! build, one transport call, reducer resolve. The busy flag in
//! conversation state gates concurrent sends; failures surface as assistant
//! turns and are logged with their trace id.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use leptos::prelude::*;

use crate::components::message_input::MessageInput;
use crate::components::message_list::MessageList;
use crate::components::template_picker::TemplatePicker;
use crate::net::payload::{PayloadLimits, build_chat_payload};
use crate::state::conversation::ConversationState;
use crate::state::templates::TemplatesState;

#[cfg(feature = "hydrate")]
use crate::net::{api, types::ApiResponse};

/// Warn-level log line for a failed API operation.
#[cfg(any(test, feature = "hydrate"))]
fn failure_log_line(operation: &str, code: &str, message: &str, trace_id: &str) -> String {
    format!("{operation} failed: {message} ({code}, trace {trace_id})")
}

/// Header status line for the backend health probe.
fn backend_status_label(status: Option<&str>) -> String {
    match status {
        Some(status) => format!("backend: {status}"),
        None => "backend: unknown".to_owned(),
    }
}

/// Chat page — the whole application surface.
#[component]
pub fn ChatPage() -> impl IntoView {
    let conversation = expect_context::<RwSignal<ConversationState>>();
    let templates = expect_context::<RwSignal<TemplatesState>>();

    let health = RwSignal::new(None::<String>);

    // One-shot startup fetches: template list and health probe.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        templates.update(|t| t.loading = true);

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match api::list_templates().await {
                    ApiResponse::Success { data, .. } => templates.update(|t| t.loaded(data)),
                    ApiResponse::Failure { error, trace_id } => {
                        log::warn!("{}", failure_log_line("template list", &error.code, &error.message, &trace_id));
                        templates.update(|t| t.failed(error.message));
                    }
                }
            });
            leptos::task::spawn_local(async move {
                match api::get_health().await {
                    ApiResponse::Success { data, .. } => health.set(Some(data.status)),
                    ApiResponse::Failure { error, trace_id } => {
                        log::warn!("{}", failure_log_line("health check", &error.code, &error.message, &trace_id));
                        health.set(None);
                    }
                }
            });
        }
    });

    let on_send = Callback::new(move |text: String| {
        let Some(history) = conversation.try_update(|c| c.begin_send(&text)).flatten() else {
            return;
        };
        let payload = build_chat_payload(text.trim(), &history, PayloadLimits::default());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::post_chat(&payload).await {
                ApiResponse::Success { data, .. } => {
                    conversation.update(|c| c.resolve_success(data.answer, data.sources));
                }
                ApiResponse::Failure { error, trace_id } => {
                    log::warn!("{}", failure_log_line("chat", &error.code, &error.message, &trace_id));
                    conversation.update(|c| c.resolve_failure(error.server_message()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = payload;
    });

    view! {
        <div class="chat-page">
            <header class="chat-page__header">
                <h1 class="chat-page__title">"FutureNest Chat"</h1>
                <span class="chat-page__status">{move || backend_status_label(health.get().as_deref())}</span>
            </header>

            <TemplatePicker/>
            <MessageList/>
            <MessageInput on_send=on_send/>
        </div>
    }
}
