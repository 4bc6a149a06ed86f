//! Results page (`/results?id=...`): score ring, counts, weak topics and the
//! generated study plan.

#[cfg(test)]
#[path = "results_test.rs"]
mod results_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use quiz::auth::DASHBOARD_PATH;
use quiz::results::{ResultsView, StudyPlanView, WeakTopicsView};

use crate::components::app_header::AppHeader;
use crate::components::score_ring::ScoreCircle;
use crate::state::auth::AuthState;
use crate::util::auth::install_auth_gate;
use crate::util::markdown::render_markdown_html;

pub const RESULTS_FAILED_MESSAGE: &str = "Failed to load results. Please try again later.";

const RESULTS_PATH: &str = "/results";

/// Label/value rows of the summary table.
pub fn count_rows(view: &ResultsView) -> [(&'static str, u32); 4] {
    [
        ("Correct", view.correct),
        ("Incorrect", view.incorrect),
        ("Unattempted", view.unattempted),
        ("Total Questions", view.total),
    ]
}

fn weak_topics_block(topics: WeakTopicsView) -> AnyView {
    match topics {
        WeakTopicsView::None(message) => view! { <p class="results-muted">{message}</p> }.into_any(),
        WeakTopicsView::Topics(topics) => view! {
            <ul class="weak-topics">
                {topics
                    .into_iter()
                    .map(|topic| view! {
                        <li class="weak-topics__item">
                            <span class="badge badge--warning">{topic.subject}</span>
                            <span class="weak-topics__topic">{topic.topic}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
        }
        .into_any(),
    }
}

fn study_plan_block(plan: &StudyPlanView) -> AnyView {
    match plan {
        StudyPlanView::Markdown(markdown) => {
            let html = render_markdown_html(markdown);
            view! { <div class="study-plan markdown" inner_html=html></div> }.into_any()
        }
        StudyPlanView::Unavailable(message) => view! { <p class="results-muted">{*message}</p> }.into_any(),
    }
}

fn results_body(view: ResultsView) -> impl IntoView {
    let rows = count_rows(&view)
        .into_iter()
        .map(|(label, value)| view! {
            <tr>
                <th scope="row">{label}</th>
                <td>{value}</td>
            </tr>
        })
        .collect_view();
    let plan = study_plan_block(&view.study_plan);

    view! {
        <section class="results-summary">
            <ScoreCircle label=view.score_label ring=view.ring />
            <table class="results-counts">{rows}</table>
            <p class="results-date">"Completed " {crate::util::nav::today_label()}</p>
        </section>
        <section class="results-section">
            <h2>"Areas to Improve"</h2>
            {weak_topics_block(view.weak_topics)}
        </section>
        <section class="results-section">
            <h2>"Personalized Study Plan"</h2>
            {plan}
        </section>
        <a class="btn btn--primary" href=DASHBOARD_PATH>"Back to Dashboard"</a>
    }
}

#[component]
pub fn ResultsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_auth_gate(RESULTS_PATH, auth, use_navigate());

    let query = use_query_map();
    let results = RwSignal::new(None::<ResultsView>);

    let submission_id = query.with_untracked(|q| q.get("id")).filter(|id| !id.trim().is_empty());
    match (submission_id, auth.get_untracked().token) {
        (None, _) => crate::util::nav::go(DASHBOARD_PATH),
        (Some(_), None) => {}
        (Some(submission_id), Some(token)) => {
            #[cfg(feature = "csr")]
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_analysis(&token, &submission_id).await {
                    Ok(result) => {
                        results.try_set(Some(ResultsView::from_result(&result)));
                    }
                    Err(err) => {
                        if let Some(reason) = crate::util::auth::triage_failure(auth, &err) {
                            log::warn!("loading results for {submission_id} failed: {reason}");
                            crate::util::nav::alert(RESULTS_FAILED_MESSAGE);
                            crate::util::nav::go(DASHBOARD_PATH);
                        }
                    }
                }
            });
            #[cfg(not(feature = "csr"))]
            let _ = (submission_id, token);
        }
    }

    view! {
        <div class="results-page">
            <AppHeader title="Test Results".to_owned() />
            <main class="results-main">
                {move || match results.get() {
                    Some(view) => results_body(view).into_any(),
                    None => view! { <p class="results-muted">"Loading results..."</p> }.into_any(),
                }}
            </main>
        </div>
    }
}
