//! Networking modules for the chat backend HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `payload` trims outgoing chat requests, and
//! `types` defines the wire schema shared by both.

pub mod api;
pub mod payload;
pub mod types;
