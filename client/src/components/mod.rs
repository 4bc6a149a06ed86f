//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components paint view descriptions produced by `quiz` (question panels,
//! score ring) and report clicks back to the owning page.

pub mod app_header;
pub mod question_panel;
pub mod score_ring;
pub mod submit_modal;
pub mod test_card;
