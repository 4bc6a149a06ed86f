//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (auth gate, REST calls, timers)
//! and delegates rendering details to `components`.

pub mod dashboard;
pub mod login;
pub mod results;
pub mod signup;
pub mod test_runner;
