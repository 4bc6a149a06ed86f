//! Terminal client for the test platform.
//!
//! Mirrors the browser flow: log in once (the token is kept in a JSON state
//! file), list tests, take one against the clock, and read the scored report.

mod api;
mod error;
mod report;
mod runner;
mod state_file;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use quiz::{ApiError, TestSession};
use quiz::auth::{LOGIN_FAILED_MESSAGE, registration_error_message, validate_login, validate_signup};
use quiz::results::ResultsView;
use quiz::store::{clear_credentials, load_credentials, save_credentials};
use quiz::types::Credentials;

use crate::api::ApiClient;
use crate::error::CliError;
use crate::state_file::{FileStore, default_state_file};

#[derive(Parser, Debug)]
#[command(name = "quiz-cli", about = "Take timed multiple-choice tests from the terminal")]
struct Cli {
    #[arg(long, env = "QUIZ_BASE_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,

    /// Where the login token is kept [default: $HOME/.quiz-portal/session.json]
    #[arg(long, env = "QUIZ_STATE_FILE")]
    state_file: Option<PathBuf>,

    #[arg(long, env = "QUIZ_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Exchange username and password for a token.
    Login {
        username: String,
        #[arg(long, env = "QUIZ_PASSWORD")]
        password: String,
    },
    /// Create an account.
    Register {
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "QUIZ_PASSWORD")]
        password: String,
        /// Repeat the password; defaults to `--password`.
        #[arg(long)]
        confirm_password: Option<String>,
    },
    /// Forget the stored token.
    Logout,
    /// List available tests.
    Tests,
    /// Take a test interactively.
    Take { test_id: String },
    /// Show the report for a submission.
    Results { submission_id: String },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = execute(Cli::parse()).await {
        eprintln!("{}", err.report());
        std::process::exit(1);
    }
}

async fn execute(cli: Cli) -> Result<(), CliError> {
    let mut store = FileStore::open(cli.state_file.unwrap_or_else(default_state_file))?;
    let client = ApiClient::new(&cli.base_url, Duration::from_secs(cli.timeout_secs))?;

    let result = match cli.command {
        Command::Login { username, password } => run_login(&client, &mut store, &username, &password).await,
        Command::Register { username, email, password, confirm_password } => {
            let confirm = confirm_password.unwrap_or_else(|| password.clone());
            run_register(&client, &username, &email, &password, &confirm).await
        }
        Command::Logout => run_logout(&mut store),
        Command::Tests => run_tests(&client, &store).await,
        Command::Take { test_id } => run_take(&client, &store, &test_id).await,
        Command::Results { submission_id } => run_results(&client, &store, &submission_id).await,
    };

    if matches!(result, Err(CliError::SessionExpired)) {
        tracing::info!(path = %store.path().display(), "clearing rejected token");
        clear_credentials(&mut store);
        store.flush()?;
    }
    result
}

fn signed_in(client: &ApiClient, store: &FileStore) -> Result<(ApiClient, Credentials), CliError> {
    let credentials = load_credentials(store).ok_or(CliError::NotLoggedIn)?;
    Ok((client.clone().with_token(credentials.token.clone()), credentials))
}

async fn run_login(client: &ApiClient, store: &mut FileStore, username: &str, password: &str) -> Result<(), CliError> {
    let (username, password) = validate_login(username, password).map_err(|m| CliError::Rejected(m.to_owned()))?;
    let response = match client.login(&username, &password).await {
        Ok(response) if !response.access_token.trim().is_empty() => response,
        Ok(_) | Err(ApiError::Unauthorized) => return Err(CliError::Rejected(LOGIN_FAILED_MESSAGE.to_owned())),
        Err(err) => return Err(CliError::Api(err)),
    };
    save_credentials(store, &Credentials { token: response.access_token, username: username.clone() });
    store.flush()?;
    println!("Logged in as {username}.");
    Ok(())
}

async fn run_register(
    client: &ApiClient,
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), CliError> {
    let request = validate_signup(username, email, password, confirm).map_err(|m| CliError::Rejected(m.to_owned()))?;
    match client.register(&request).await {
        Ok(user) => {
            println!("Registration successful. Log in with `quiz-cli login {}`.", user.username);
            Ok(())
        }
        Err(ApiError::Status { detail, .. }) => Err(CliError::Rejected(registration_error_message(detail.as_deref()))),
        Err(err) => Err(CliError::Api(err)),
    }
}

fn run_logout(store: &mut FileStore) -> Result<(), CliError> {
    clear_credentials(store);
    store.flush()?;
    println!("Logged out.");
    Ok(())
}

async fn run_tests(client: &ApiClient, store: &FileStore) -> Result<(), CliError> {
    let (client, _) = signed_in(client, store)?;
    let tests = client.tests().await.map_err(CliError::from_api)?;
    print!("{}", report::render_catalog(&tests));
    Ok(())
}

async fn run_take(client: &ApiClient, store: &FileStore, test_id: &str) -> Result<(), CliError> {
    let (client, credentials) = signed_in(client, store)?;
    let test = client.test(test_id).await.map_err(CliError::from_api)?;
    tracing::info!(test_id = %test.id, questions = test.questions.len(), "starting test");
    let session = TestSession::started(test, credentials.username);
    let Some(submission_id) = runner::run(&client, session).await? else {
        println!("Left the test without submitting.");
        return Ok(());
    };
    show_results(&client, &submission_id).await
}

async fn run_results(client: &ApiClient, store: &FileStore, submission_id: &str) -> Result<(), CliError> {
    let (client, _) = signed_in(client, store)?;
    show_results(&client, submission_id).await
}

async fn show_results(client: &ApiClient, submission_id: &str) -> Result<(), CliError> {
    let result = client.analysis(submission_id).await.map_err(CliError::from_api)?;
    print!("{}", report::render_results(&ResultsView::from_result(&result)));
    Ok(())
}
