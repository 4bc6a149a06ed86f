//! Root application component with routing and the auth context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, results::ResultsPage, signup::SignupPage,
    test_runner::TestRunnerPage,
};
use crate::state::auth::AuthState;
use crate::util::storage::LocalStore;

/// Root application component.
///
/// Seeds the auth context from `localStorage` and sets up client-side
/// routing. Each page installs its own auth gate.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(AuthState::from_store(&LocalStore)));

    view! {
        <Title text="Test Portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("test") view=TestRunnerPage/>
                <Route path=StaticSegment("results") view=ResultsPage/>
            </Routes>
        </Router>
    }
}
