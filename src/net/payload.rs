//! Chat request construction with history trimming.
//!
//! DESIGN
//! ======
//! The backend bounds its own context window, but trimming client-side keeps
//! request bodies small and predictable: at most the last `max_turns` prior
//! turns, every string capped to its trailing `max_chars` characters. Pure
//! functions with no state or network access.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use super::types::{ChatRequest, HistoryTurn};

/// Default number of prior turns included in a chat request.
pub const DEFAULT_MAX_TURNS: usize = 3;

/// Default per-string character cap for message and history content.
pub const DEFAULT_MAX_CHARS: usize = 2000;

/// Trimming limits for [`build_chat_payload`].
#[derive(Clone, Copy, Debug)]
pub struct PayloadLimits {
    pub max_turns: usize,
    pub max_chars: usize,
}

impl Default for PayloadLimits {
    fn default() -> Self {
        Self {
            max_turns: DEFAULT_MAX_TURNS,
            max_chars: DEFAULT_MAX_CHARS,
        }
    }
}

/// Keep only the trailing `max_chars` characters of `text`.
///
/// Shorter strings pass through unchanged. Counts `char`s, so a multi-byte
/// code point is never split.
pub fn tail_truncate(text: &str, max_chars: usize) -> String {
    let len = text.chars().count();
    if len <= max_chars {
        return text.to_owned();
    }
    text.chars().skip(len - max_chars).collect()
}

/// Build a `POST /chat` body from the new message and the prior turns.
///
/// History keeps at most the last `max_turns` entries in their original
/// order; the message and every retained turn are tail-truncated to
/// `max_chars` characters. `doc_ids`/`top_k` are left unset; the backend
/// applies its own retrieval defaults.
pub fn build_chat_payload(message: &str, history: &[HistoryTurn], limits: PayloadLimits) -> ChatRequest {
    let window_start = history.len().saturating_sub(limits.max_turns);
    let history = history[window_start..]
        .iter()
        .map(|turn| HistoryTurn {
            role: turn.role,
            content: tail_truncate(&turn.content, limits.max_chars),
        })
        .collect();

    ChatRequest {
        message: tail_truncate(message, limits.max_chars),
        history,
        doc_ids: None,
        top_k: None,
    }
}
