//! Circular score indicator for the results page.

#[cfg(test)]
#[path = "score_ring_test.rs"]
mod score_ring_test;

use leptos::prelude::*;
use quiz::results::{SCORE_RING_RADIUS, ScoreRing};

/// SVG attribute text for a stroke length.
pub fn stroke_value(value: f64) -> String {
    format!("{value:.2}")
}

#[component]
pub fn ScoreCircle(label: String, ring: ScoreRing) -> impl IntoView {
    let radius = SCORE_RING_RADIUS.to_string();
    view! {
        <div class="score-ring">
            <svg viewBox="0 0 100 100" class="score-ring__svg" aria-hidden="true">
                <circle class="score-ring__track" cx="50" cy="50" r=radius.clone() fill="none" stroke-width="8"></circle>
                <circle
                    class="score-ring__value"
                    cx="50"
                    cy="50"
                    r=radius
                    fill="none"
                    stroke-width="8"
                    stroke-dasharray=stroke_value(ring.circumference)
                    stroke-dashoffset=stroke_value(ring.dash_offset)
                    transform="rotate(-90 50 50)"
                ></circle>
            </svg>
            <span class="score-ring__label">{label}</span>
        </div>
    }
}
