//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, location, markdown)
//! from page logic so pages stay small and the pure parts stay testable.

pub mod auth;
pub mod markdown;
pub mod nav;
pub mod storage;
