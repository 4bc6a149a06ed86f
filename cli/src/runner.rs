//! Interactive terminal test runner.
//!
//! DESIGN
//! ======
//! The loop owns one `TestSession`. A one-second interval and stdin lines are
//! raced with `tokio::select!`; both arms mutate the same session, so the
//! session's single submission slot decides whether the clock or the user
//! submits. Screens are text renderings of `quiz::view::render`.

#[cfg(test)]
#[path = "runner_test.rs"]
mod runner_test;

use std::fmt::Write as _;
use std::time::Duration;

use quiz::types::SubmissionRequest;
use quiz::view::{BubbleStatus, QuestionView, RunnerView, format_hms, render};
use quiz::{ApiError, Phase, TestSession};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::api::ApiClient;
use crate::error::CliError;

pub const HELP: &str = "\
Commands:
  a, b, c, ...   select an option
  next / prev    move between questions
  <number>       jump to a question
  submit         open the submit prompt
  yes / no       confirm or cancel the submit prompt
  retry          resend a failed submission
  resume         keep answering after a failed submission
  help           show this list
  quit           leave without submitting";

/// One line of user input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Select(String),
    Next,
    Prev,
    Goto(usize),
    Submit,
    Confirm,
    Cancel,
    Retry,
    Resume,
    Help,
    Quit,
}

/// What the loop should do after applying a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Redraw,
    Send(SubmissionRequest),
    Message(String),
    Help,
    Quit,
}

/// Parse a typed line. Question numbers are 1-based.
pub fn parse_command(line: &str) -> Option<Command> {
    let word = line.trim().to_lowercase();
    let command = match word.as_str() {
        "next" => Command::Next,
        "prev" | "previous" => Command::Prev,
        "submit" => Command::Submit,
        "yes" => Command::Confirm,
        "no" => Command::Cancel,
        "retry" => Command::Retry,
        "resume" => Command::Resume,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => {
            if let Ok(number) = word.parse::<usize>() {
                return number.checked_sub(1).map(Command::Goto);
            }
            if word.len() == 1 && word.chars().all(|c| c.is_ascii_alphabetic()) {
                return Some(Command::Select(word));
            }
            return None;
        }
    };
    Some(command)
}

/// Apply a command to the session.
pub fn apply(session: &mut TestSession, command: Command) -> Step {
    match command {
        Command::Select(option) => outcome(session.select_option(&option)),
        Command::Next => {
            session.advance();
            Step::Redraw
        }
        Command::Prev => {
            session.retreat();
            Step::Redraw
        }
        Command::Goto(index) => outcome(session.load_question(index)),
        Command::Submit => {
            if session.request_submit() {
                Step::Redraw
            } else {
                Step::Message("Nothing to submit right now.".to_owned())
            }
        }
        Command::Confirm if session.phase() == &Phase::Confirming => claim(session),
        Command::Retry if matches!(session.phase(), Phase::Failed { .. }) => claim(session),
        Command::Confirm | Command::Retry => Step::Message("There is no pending submission.".to_owned()),
        Command::Cancel => {
            session.cancel_confirm();
            Step::Redraw
        }
        Command::Resume => {
            if session.resume() {
                Step::Redraw
            } else {
                Step::Message("Cannot resume; type `retry` to resend your answers.".to_owned())
            }
        }
        Command::Help => Step::Help,
        Command::Quit => Step::Quit,
    }
}

fn outcome(result: Result<(), quiz::SessionError>) -> Step {
    match result {
        Ok(()) => Step::Redraw,
        Err(err) => Step::Message(format!("Not allowed: {err}.")),
    }
}

fn claim(session: &mut TestSession) -> Step {
    match session.begin_submit(false) {
        Some(request) => Step::Send(request),
        None => Step::Message("A submission is already in progress.".to_owned()),
    }
}

/// Whether the countdown is worth printing at this value.
pub fn should_announce(remaining_secs: u64) -> bool {
    remaining_secs > 0 && (remaining_secs % 60 == 0 || remaining_secs <= 10)
}

fn push_question(out: &mut String, q: &QuestionView) {
    let _ = writeln!(out, "{}  [{}]", q.title, q.timer_label);
    let _ = writeln!(out, "{}  ({} | {} | {})", q.number_label, q.difficulty, q.subject, q.topic);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", q.text);
    let _ = writeln!(out);
    for option in &q.options {
        let mark = if option.selected { "(*)" } else { "( )" };
        let _ = writeln!(out, "  {mark} {} {}", option.label, option.text);
    }
    let nav: Vec<String> = q
        .nav
        .iter()
        .map(|b| match b.status {
            BubbleStatus::Current => format!("[{}]", b.label),
            BubbleStatus::Answered => format!("{}*", b.label),
            BubbleStatus::Unanswered => b.label.clone(),
        })
        .collect();
    let _ = writeln!(out);
    let _ = writeln!(out, "Questions: {}", nav.join(" "));
}

/// Text screen for a runner view.
pub fn render_text(view: &RunnerView) -> String {
    let mut out = String::new();
    match view {
        RunnerView::Loading => out.push_str("Loading test...\n"),
        RunnerView::Question(q) => {
            push_question(&mut out, q);
            let _ = writeln!(out, "({} / prev / submit / help)", q.next_label.to_lowercase());
        }
        RunnerView::Confirming { question, unanswered } => {
            push_question(&mut out, question);
            let _ = writeln!(out, "Submit now? {unanswered} unanswered. (yes / no)");
        }
        RunnerView::Submitting { auto: true } => out.push_str("Time is up! Submitting your answers...\n"),
        RunnerView::Submitting { auto: false } => out.push_str("Submitting your answers...\n"),
        RunnerView::Submitted { submission_id } => {
            let _ = writeln!(out, "Submitted. Submission id: {submission_id}");
        }
        RunnerView::Failed { question, message } => {
            push_question(&mut out, question);
            let _ = writeln!(out, "Submission failed: {message}");
            out.push_str("Type `retry` to resend or `resume` to keep answering.\n");
        }
    }
    out
}

/// Run the session until it is submitted (returns the submission id) or the
/// user quits or closes stdin (returns `None`).
///
/// # Errors
///
/// Returns [`CliError::SessionExpired`] when the token is rejected and
/// [`CliError::Input`] when stdin fails.
pub async fn run(client: &ApiClient, mut session: TestSession) -> Result<Option<String>, CliError> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut clock = tokio::time::interval(Duration::from_secs(1));
    clock.tick().await;

    print!("{}", render_text(&render(&session)));

    loop {
        let pending = tokio::select! {
            _ = clock.tick() => {
                let expired = session.tick();
                if expired.is_some() {
                    tracing::info!("time expired, auto-submitting");
                } else if session.clock_running() && should_announce(session.remaining_secs()) {
                    println!("Time remaining: {}", format_hms(session.remaining_secs()));
                }
                expired
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    return Ok(None);
                };
                let Some(command) = parse_command(&line) else {
                    println!("Unknown command. Type `help`.");
                    continue;
                };
                match apply(&mut session, command) {
                    Step::Send(request) => Some(request),
                    Step::Redraw => {
                        print!("{}", render_text(&render(&session)));
                        None
                    }
                    Step::Message(message) => {
                        println!("{message}");
                        None
                    }
                    Step::Help => {
                        println!("{HELP}");
                        None
                    }
                    Step::Quit => return Ok(None),
                }
            }
        };

        let Some(request) = pending else {
            continue;
        };
        print!("{}", render_text(&render(&session)));
        tracing::debug!(test_id = %request.test_id, answers = request.answers.len(), "submitting");
        let result = client.submit(&request).await;
        if result.as_ref().is_err_and(ApiError::is_auth_failure) {
            return Err(CliError::SessionExpired);
        }
        session.complete_submit(result);
        print!("{}", render_text(&render(&session)));
        if let Phase::Submitted { submission_id } = session.phase() {
            return Ok(Some(submission_id.clone()));
        }
    }
}
