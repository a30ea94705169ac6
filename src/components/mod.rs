//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat surface while reading/writing shared state
//! from Leptos context providers; route-level orchestration stays in
//! `pages`.

pub mod message_input;
pub mod message_list;
pub mod template_picker;
