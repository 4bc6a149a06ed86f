//! Question card, option list, navigator and timer for the test runner.
//!
//! Paints a [`QuestionView`] and writes clicks straight back into the session
//! signal. Rejected operations (locked input, wrong phase) are logged and
//! otherwise ignored; the next render shows the unchanged state.

#[cfg(test)]
#[path = "question_panel_test.rs"]
mod question_panel_test;

use leptos::prelude::*;
use quiz::TestSession;
use quiz::view::{BubbleStatus, QuestionView};

pub fn bubble_class(status: BubbleStatus) -> &'static str {
    match status {
        BubbleStatus::Current => "nav-bubble nav-bubble--current",
        BubbleStatus::Answered => "nav-bubble nav-bubble--answered",
        BubbleStatus::Unanswered => "nav-bubble",
    }
}

pub fn option_class(selected: bool) -> &'static str {
    if selected { "option option--selected" } else { "option" }
}

fn select(session: RwSignal<TestSession>, option_id: &str) {
    session.update(|s| {
        if let Err(err) = s.select_option(option_id) {
            #[cfg(feature = "csr")]
            log::debug!("option ignored: {err}");
            #[cfg(not(feature = "csr"))]
            let _ = err;
        }
    });
}

fn jump(session: RwSignal<TestSession>, index: usize) {
    session.update(|s| {
        if let Err(err) = s.load_question(index) {
            #[cfg(feature = "csr")]
            log::debug!("navigation ignored: {err}");
            #[cfg(not(feature = "csr"))]
            let _ = err;
        }
    });
}

#[component]
pub fn QuestionPanel(question: QuestionView, session: RwSignal<TestSession>) -> impl IntoView {
    let disabled = question.input_disabled;

    let options = question
        .options
        .into_iter()
        .map(|option| {
            let id = option.id.clone();
            view! {
                <li>
                    <button
                        class=option_class(option.selected)
                        disabled=disabled
                        on:click=move |_| select(session, &id)
                    >
                        <span class="option__label">{option.label}</span>
                        <span class="option__text">{option.text}</span>
                    </button>
                </li>
            }
        })
        .collect_view();

    let bubbles = question
        .nav
        .into_iter()
        .map(|bubble| {
            let index = bubble.index;
            view! {
                <button class=bubble_class(bubble.status) disabled=disabled on:click=move |_| jump(session, index)>
                    {bubble.label}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="runner">
            <div class="runner__top">
                <h2 class="runner__title">{question.title}</h2>
                <span class="runner__timer">{question.timer_label}</span>
            </div>
            <div class="runner__body">
                <section class="question-card">
                    <p class="question-card__number">{question.number_label}</p>
                    <div class="question-card__badges">
                        <span class="badge badge--difficulty">{question.difficulty}</span>
                        <span class="badge badge--subject">{question.subject}</span>
                        <span class="badge badge--topic">{question.topic}</span>
                    </div>
                    <p class="question-card__text">{question.text}</p>
                    <ul class="question-card__options">{options}</ul>
                    <div class="question-card__nav">
                        <button
                            class="btn"
                            disabled=question.prev_disabled
                            on:click=move |_| session.update(|s| {
                                s.retreat();
                            })
                        >
                            "Previous"
                        </button>
                        <button
                            class="btn btn--primary"
                            disabled=disabled
                            on:click=move |_| session.update(|s| {
                                s.advance();
                            })
                        >
                            {question.next_label}
                        </button>
                    </div>
                </section>
                <aside class="navigator">
                    <h3 class="navigator__title">"Questions"</h3>
                    <div class="navigator__grid">{bubbles}</div>
                    <button
                        class="btn btn--danger navigator__submit"
                        disabled=disabled
                        on:click=move |_| session.update(|s| {
                            s.request_submit();
                        })
                    >
                        "Submit Test"
                    </button>
                </aside>
            </div>
        </div>
    }
}
