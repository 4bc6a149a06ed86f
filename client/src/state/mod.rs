//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern so pages depend on small focused models. The
//! test session itself lives in `quiz::TestSession` and is owned by the
//! runner page, not provided app-wide.

pub mod auth;
pub mod catalog;
