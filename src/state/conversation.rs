//! Conversation state: the ordered turn list and the busy flag.
//!
//! DESIGN
//! ======
//! One owner for all conversation data, mutated only through the two-phase
//! send transition: `begin_send` appends the user turn optimistically and
//! raises `busy`; exactly one of `resolve_success`/`resolve_failure` later
//! appends the assistant turn and clears `busy`. Turns are append-only and
//! never mutated, so insertion order is chronological order.

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

use crate::net::types::{ChatSource, HistoryTurn, Role};

/// Fallback reply shown when a send fails without a usable server message.
pub const SEND_FAILED_FALLBACK: &str = "Something went wrong. Please try again.";

/// A single conversation turn. Immutable once appended.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatTurn {
    pub id: String,
    pub role: Role,
    pub content: String,
    /// Citations backing an assistant answer; always empty for user turns.
    pub sources: Vec<ChatSource>,
}

impl ChatTurn {
    fn user(content: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: Role::User,
            content,
            sources: Vec::new(),
        }
    }

    fn assistant(content: String, sources: Vec<ChatSource>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: Role::Assistant,
            content,
            sources,
        }
    }

    /// Wire form of this turn for request history.
    pub fn to_wire(&self) -> HistoryTurn {
        HistoryTurn {
            role: self.role,
            content: self.content.clone(),
        }
    }
}

/// Append-only turn list plus the busy flag gating sends.
#[derive(Clone, Debug, Default)]
pub struct ConversationState {
    pub turns: Vec<ChatTurn>,
    pub busy: bool,
}

impl ConversationState {
    /// First phase of a send: validate, append the user turn, raise `busy`.
    ///
    /// Returns the turns prior to the new message in wire form, ready for
    /// payload building. Returns `None`, with no state change, when the
    /// input is empty/whitespace-only or a send is already in flight.
    pub fn begin_send(&mut self, text: &str) -> Option<Vec<HistoryTurn>> {
        let text = text.trim();
        if text.is_empty() || self.busy {
            return None;
        }

        let prior: Vec<HistoryTurn> = self.turns.iter().map(ChatTurn::to_wire).collect();
        self.turns.push(ChatTurn::user(text.to_owned()));
        self.busy = true;
        Some(prior)
    }

    /// Second phase, success: append the assistant turn atomically and
    /// clear `busy`.
    pub fn resolve_success(&mut self, answer: String, sources: Vec<ChatSource>) {
        self.turns.push(ChatTurn::assistant(answer, sources));
        self.busy = false;
    }

    /// Second phase, failure: append an assistant turn carrying the server
    /// message when present, else the fixed fallback. Clears `busy`; a
    /// failed send never wedges the conversation.
    pub fn resolve_failure(&mut self, server_message: Option<String>) {
        let content = server_message
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| SEND_FAILED_FALLBACK.to_owned());
        self.turns.push(ChatTurn::assistant(content, Vec::new()));
        self.busy = false;
    }
}
