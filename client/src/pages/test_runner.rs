//! Timed test runner page (`/test?id=...`).
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns one `quiz::TestSession` in a signal. Every click and every clock
//! tick goes through the session, and the screen is whatever
//! `quiz::view::render` says it is.
//!
//! CLOCK
//! =====
//! A `spawn_local` loop sleeps one second at a time and resyncs the session
//! from a wall-clock deadline, so a throttled background tab still expires on
//! time. The loop stops on cleanup or once the session leaves the answering
//! phases for good.
//!
//! ERROR HANDLING
//! ==============
//! A test that cannot be loaded alerts and returns to the dashboard. A
//! failed submission leaves the answers intact and offers a retry. A 401
//! anywhere ends the session.

#[cfg(test)]
#[path = "test_runner_test.rs"]
mod test_runner_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use quiz::TestSession;
use quiz::auth::DASHBOARD_PATH;
use quiz::types::{Credentials, SubmissionRequest};
use quiz::view::{RunnerView, render};

use crate::components::question_panel::QuestionPanel;
use crate::components::submit_modal::SubmitModal;
use crate::state::auth::AuthState;
use crate::util::auth::install_auth_gate;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load test. Please try again later.";

/// Route path; the test id travels in the query string.
const RUNNER_PATH: &str = "/test";

/// Whole seconds left before `deadline_ms`, floored and never negative.
pub fn remaining_until(deadline_ms: f64, now_ms: f64) -> u64 {
    let secs = ((deadline_ms - now_ms) / 1000.0).floor();
    if !secs.is_finite() || secs <= 0.0 {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = secs as u64;
    whole
}

/// The `id` query parameter, ignoring blanks.
pub fn requested_test_id(raw: Option<String>) -> Option<String> {
    raw.map(|id| id.trim().to_owned()).filter(|id| !id.is_empty())
}

pub fn submitting_text(auto: bool) -> &'static str {
    if auto { "Time is up! Submitting your answers..." } else { "Submitting your answers..." }
}

/// Send a claimed submission and apply the outcome to the session.
fn dispatch_submission(session: RwSignal<TestSession>, auth: RwSignal<AuthState>, request: SubmissionRequest) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let Some(token) = auth.get_untracked().token else {
            crate::util::auth::sign_out(auth);
            return;
        };
        log::info!("submitting {} answers for test {}", request.answers.len(), request.test_id);
        let outcome = crate::net::api::submit_test(&token, &request).await;
        if outcome.as_ref().is_err_and(quiz::ApiError::is_auth_failure) {
            crate::util::auth::sign_out(auth);
            return;
        }
        let receipt = outcome.as_ref().map(|r| r.submission_id.clone()).map_err(ToString::to_string);
        session.try_update(|s| s.complete_submit(outcome));
        match receipt {
            Ok(submission_id) => crate::util::nav::go(&quiz::endpoints::results_page(&submission_id)),
            Err(err) => log::warn!("submission failed: {err}"),
        }
    });
    #[cfg(not(feature = "csr"))]
    let _ = (session, auth, request);
}

/// Claim the submission slot for a user-initiated submit.
fn submit_now(session: RwSignal<TestSession>, auth: RwSignal<AuthState>) {
    if let Some(request) = session.try_update(|s| s.begin_submit(false)).flatten() {
        dispatch_submission(session, auth, request);
    }
}

#[component]
pub fn TestRunnerPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_auth_gate(RUNNER_PATH, auth, use_navigate());

    let query = use_query_map();
    let session = RwSignal::new(TestSession::default());

    let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
    let alive_cleanup = alive.clone();
    on_cleanup(move || alive_cleanup.store(false, std::sync::atomic::Ordering::Relaxed));

    let test_id = requested_test_id(query.with_untracked(|q| q.get("id")));
    let credentials = auth.with_untracked(AuthState::credentials);
    match (test_id, credentials) {
        (None, _) => crate::util::nav::go(DASHBOARD_PATH),
        (Some(_), None) => {}
        (Some(test_id), Some(Credentials { token, username })) => {
            #[cfg(feature = "csr")]
            leptos::task::spawn_local(async move {
                use std::sync::atomic::Ordering;

                let test = match crate::net::api::fetch_test(&token, &test_id).await {
                    Ok(test) => test,
                    Err(err) => {
                        if let Some(reason) = crate::util::auth::triage_failure(auth, &err) {
                            log::warn!("loading test {test_id} failed: {reason}");
                            crate::util::nav::alert(LOAD_FAILED_MESSAGE);
                            crate::util::nav::go(DASHBOARD_PATH);
                        }
                        return;
                    }
                };
                #[allow(clippy::cast_precision_loss)]
                let deadline = crate::util::nav::now_ms() + test.duration_secs() as f64 * 1000.0;
                log::info!("starting test {} ({} questions)", test.id, test.questions.len());
                if session.try_update(|s| s.load(test, username)).is_none() {
                    return;
                }

                loop {
                    gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
                    if !alive.load(Ordering::Relaxed) {
                        break;
                    }
                    let remaining = remaining_until(deadline, crate::util::nav::now_ms());
                    let Some(expired) = session.try_update(|s| s.sync_remaining(remaining)) else {
                        break;
                    };
                    if let Some(request) = expired {
                        log::info!("time expired, auto-submitting");
                        dispatch_submission(session, auth, request);
                    }
                    if session.with_untracked(|s| s.is_submitted() || s.is_input_locked()) {
                        break;
                    }
                }
            });
            #[cfg(not(feature = "csr"))]
            let _ = (test_id, token, username, alive);
        }
    }

    let on_cancel = Callback::new(move |()| {
        session.update(|s| {
            s.cancel_confirm();
        });
    });
    let on_confirm = Callback::new(move |()| submit_now(session, auth));

    view! {
        <div class="runner-page">
            {move || match session.with(render) {
                RunnerView::Loading => view! { <p class="runner-status">"Loading test..."</p> }.into_any(),
                RunnerView::Question(question) => view! { <QuestionPanel question=question session=session /> }.into_any(),
                RunnerView::Confirming { question, unanswered } => view! {
                    <QuestionPanel question=question session=session />
                    <SubmitModal unanswered=unanswered on_cancel=on_cancel on_confirm=on_confirm />
                }
                .into_any(),
                RunnerView::Submitting { auto } => {
                    view! { <p class="runner-status">{submitting_text(auto)}</p> }.into_any()
                }
                RunnerView::Submitted { .. } => {
                    view! { <p class="runner-status">"Submitted. Loading your results..."</p> }.into_any()
                }
                RunnerView::Failed { question, message } => {
                    let locked = session.with_untracked(TestSession::is_input_locked);
                    view! {
                        <QuestionPanel question=question session=session />
                        <div class="dialog-backdrop">
                            <div class="dialog" role="alertdialog">
                                <h2 class="dialog__title">"Submission failed"</h2>
                                <p class="dialog__body">{message}</p>
                                <div class="dialog__actions">
                                    <Show when=move || !locked>
                                        <button
                                            class="btn"
                                            on:click=move |_| session.update(|s| {
                                                s.resume();
                                            })
                                        >
                                            "Back to Test"
                                        </button>
                                    </Show>
                                    <button class="btn btn--primary" on:click=move |_| submit_now(session, auth)>
                                        "Retry"
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
