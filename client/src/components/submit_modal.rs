//! "Submit now?" confirmation dialog.

#[cfg(test)]
#[path = "submit_modal_test.rs"]
mod submit_modal_test;

use leptos::prelude::*;

pub fn unanswered_text(unanswered: usize) -> String {
    match unanswered {
        0 => "All questions are answered.".to_owned(),
        1 => "You have 1 unanswered question.".to_owned(),
        n => format!("You have {n} unanswered questions."),
    }
}

#[component]
pub fn SubmitModal(unanswered: usize, on_cancel: Callback<()>, on_confirm: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop">
            <div class="dialog" role="dialog" aria-modal="true">
                <h2 class="dialog__title">"Submit Test?"</h2>
                <p class="dialog__body">{unanswered_text(unanswered)}</p>
                <p class="dialog__body">"Once submitted, answers cannot be changed."</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                    <button class="btn btn--primary" on:click=move |_| on_confirm.run(())>"Submit"</button>
                </div>
            </div>
        </div>
    }
}
