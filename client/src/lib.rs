//! # client
//!
//! Leptos + WASM browser client for the test platform.
//!
//! Pages own route-level orchestration and REST calls; every rule about what
//! to show (question rendering, timer text, score labels, auth redirects)
//! comes from the shared `quiz` crate so it is tested natively. Browser-only
//! code sits behind the `csr` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Mount the application on `<body>` and wire browser logging.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
