//! Top bar with the signed-in user and a logout button.

use leptos::prelude::*;
use quiz::auth::DASHBOARD_PATH;

use crate::state::auth::AuthState;
use crate::util::auth::sign_out;

#[component]
pub fn AppHeader(#[prop(optional)] title: Option<String>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <header class="app-header">
            <a class="app-header__brand" href=DASHBOARD_PATH>"Test Portal"</a>
            <span class="app-header__title">{title}</span>
            <span class="app-header__spacer"></span>
            <span class="app-header__user">{move || auth.with(AuthState::display_name)}</span>
            <button class="btn app-header__logout" on:click=move |_| sign_out(auth) title="Logout">
                "Logout"
            </button>
        </header>
    }
}
