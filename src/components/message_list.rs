//! Conversation transcript with Markdown-rendered assistant replies.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the append-only turn list from shared conversation state. User
//! turns are plain text; assistant turns go through the sanitizing Markdown
//! pipeline before `inner_html` injection, with citation snippets listed
//! underneath.

#[cfg(test)]
#[path = "message_list_test.rs"]
mod message_list_test;

use leptos::prelude::*;

use crate::net::types::{ChatSource, Role};
use crate::state::conversation::ConversationState;
use crate::util::markdown::render_markdown;

/// Best-effort display label for a citation: article reference, else
/// document id, else source id.
fn source_label(source: &ChatSource) -> String {
    if let Some(reference) = source.article_reference.as_deref().filter(|r| !r.is_empty()) {
        return reference.to_owned();
    }
    if let Some(document_id) = source.document_id.as_deref().filter(|d| !d.is_empty()) {
        return format!("document {document_id}");
    }
    if let Some(id) = source.id.as_deref().filter(|i| !i.is_empty()) {
        return id.to_owned();
    }
    "source".to_owned()
}

fn score_label(score: f64) -> String {
    format!("{score:.2}")
}

/// Transcript panel. Keeps the newest turn scrolled into view.
#[component]
pub fn MessageList() -> impl IntoView {
    let conversation = expect_context::<RwSignal<ConversationState>>();

    let turns_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let state = conversation.get();
        let _ = state.turns.len();
        let _ = state.busy;

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = turns_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    view! {
        <div class="message-list" node_ref=turns_ref>
            {move || {
                let turns = conversation.get().turns;
                if turns.is_empty() {
                    return view! {
                        <div class="message-list__empty">"No messages yet"</div>
                    }
                        .into_any();
                }

                turns
                    .iter()
                    .map(|turn| {
                        let is_assistant = turn.role == Role::Assistant;
                        let content = turn.content.clone();
                        let sources = turn.sources.clone();

                        view! {
                            <div
                                class="message-list__turn"
                                class:message-list__turn--assistant=is_assistant
                                class:message-list__turn--user=!is_assistant
                            >
                                <div class="message-list__bubble">
                                    {if is_assistant {
                                        let rendered = render_markdown(&content);
                                        view! {
                                            <div class="message-list__markdown" inner_html=rendered></div>
                                        }
                                            .into_any()
                                    } else {
                                        view! { <span class="message-list__text">{content}</span> }.into_any()
                                    }}
                                </div>
                                {(!sources.is_empty())
                                    .then(|| {
                                        view! {
                                            <ul class="message-list__sources">
                                                {sources
                                                    .iter()
                                                    .map(|source| {
                                                        let label = source_label(source);
                                                        let score = source.score.map(score_label);
                                                        let snippet = source.snippet.clone().unwrap_or_default();
                                                        view! {
                                                            <li class="message-list__source">
                                                                <span class="message-list__source-label">{label}</span>
                                                                {score
                                                                    .map(|s| {
                                                                        view! {
                                                                            <span class="message-list__source-score">{s}</span>
                                                                        }
                                                                    })}
                                                                <span class="message-list__source-snippet">{snippet}</span>
                                                            </li>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </ul>
                                        }
                                    })}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}

            {move || {
                conversation
                    .get()
                    .busy
                    .then(|| view! { <div class="message-list__loading">"Thinking..."</div> })
            }}
        </div>
    }
}
