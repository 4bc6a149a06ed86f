//! Dashboard page listing available tests.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing route. Fetches the test inventory once on mount;
//! a rejected token ends the session and the auth gate returns to login.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use quiz::auth::DASHBOARD_PATH;

use crate::components::app_header::AppHeader;
use crate::components::test_card::TestCard;
use crate::state::auth::AuthState;
use crate::state::catalog::CatalogState;
use crate::util::auth::install_auth_gate;

pub const EMPTY_CATALOG_MESSAGE: &str = "No tests available at the moment.";

/// Text shown in place of the card grid, if any.
pub fn catalog_notice(state: &CatalogState) -> Option<String> {
    if state.loading && state.items.is_empty() {
        return Some("Loading tests...".to_owned());
    }
    if let Some(error) = &state.error {
        return Some(error.clone());
    }
    state.items.is_empty().then(|| EMPTY_CATALOG_MESSAGE.to_owned())
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_auth_gate(DASHBOARD_PATH, auth, use_navigate());

    let catalog = RwSignal::new(CatalogState::default());

    if let Some(token) = auth.get_untracked().token {
        catalog.update(CatalogState::begin_load);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::fetch_tests(&token).await;
            let mut rejected = None;
            catalog.update(|s| rejected = s.finish_load(outcome));
            if rejected.is_some() {
                log::warn!("token rejected while listing tests");
                crate::util::auth::sign_out(auth);
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = token;
    }

    view! {
        <div class="dashboard-page">
            <AppHeader title="Available Tests".to_owned() />
            <main class="dashboard-main">
                <h1 class="dashboard-main__title">"Available Tests"</h1>
                {move || {
                    catalog
                        .with(catalog_notice)
                        .map(|notice| view! { <p class="dashboard-empty">{notice}</p> })
                }}
                <div class="test-grid">
                    <For
                        each=move || catalog.with(|s| s.items.clone())
                        key=|test| test.id.clone()
                        children=move |test| view! { <TestCard test=test /> }
                    />
                </div>
            </main>
        </div>
    }
}
