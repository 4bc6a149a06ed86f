//! Dashboard card for one available test.

#[cfg(test)]
#[path = "test_card_test.rs"]
mod test_card_test;

use leptos::prelude::*;
use quiz::endpoints::test_page;
use quiz::types::TestSummary;

/// Text shown on a card, derived from the summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardText {
    pub subjects: String,
    pub difficulty: String,
    pub duration: String,
    pub questions: String,
    pub href: String,
}

pub fn card_text(test: &TestSummary) -> CardText {
    CardText {
        subjects: test.subjects.join(", "),
        difficulty: test.difficulty.clone(),
        duration: format!("{} min", test.duration),
        questions: match test.total_questions {
            1 => "1 question".to_owned(),
            n => format!("{n} questions"),
        },
        href: test_page(&test.id),
    }
}

/// A card with badges and a "Start Test" link.
#[component]
pub fn TestCard(test: TestSummary) -> impl IntoView {
    let text = card_text(&test);
    view! {
        <div class="test-card">
            <div class="test-card__header">
                <h3 class="test-card__title">{test.title}</h3>
                <div class="test-card__badges">
                    <span class="badge badge--subjects">{text.subjects}</span>
                    <span class="badge badge--difficulty">{text.difficulty}</span>
                    <span class="badge badge--duration">{text.duration}</span>
                </div>
            </div>
            <div class="test-card__body">
                <p class="test-card__description">{test.description}</p>
                <div class="test-card__footer">
                    <span class="test-card__count">{text.questions}</span>
                    <a class="btn btn--primary" href=text.href>"Start Test"</a>
                </div>
            </div>
        </div>
    }
}
