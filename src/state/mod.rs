//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`conversation`, `templates`) so individual
//! components can depend on small focused models. Each state struct is
//! provided as an `RwSignal` context by the root `App` component and is
//! mutated only by its own handlers.

pub mod conversation;
pub mod templates;
