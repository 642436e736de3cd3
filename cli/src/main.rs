mod api;
mod commands;
mod storage;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use session::{Credential, LoginError, SessionError, SessionStore};

use crate::api::AuthClient;
use crate::storage::FileStorage;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Login(#[from] LoginError),
    #[error("session update failed: {0}")]
    Session(#[from] SessionError),
    #[error("not logged in; run `login` first (redirected to {0})")]
    NotLoggedIn(&'static str),
}

impl CliError {
    /// Text for the terminal. Login failures use the same wording as the web form.
    fn user_message(&self) -> String {
        match self {
            Self::Login(e) => e.user_message(),
            other => other.to_string(),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "tokenpass-cli", about = "Log in to the tokenpass mock backend from a terminal")]
struct Cli {
    #[arg(long, env = "TOKENPASS_BASE_URL", default_value = "http://127.0.0.1:5000")]
    base_url: String,

    /// File holding the session token between invocations.
    #[arg(long, env = "TOKENPASS_TOKEN_FILE", default_value = ".tokenpass-token")]
    token_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Ping,
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    Logout,
    Profile,
    Status,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<String, CliError> {
    let mut store = SessionStore::restore(FileStorage::new(&cli.token_file));

    match cli.command {
        Command::Ping => {
            AuthClient::new(&cli.base_url)?.ping().await?;
            Ok("ok".to_owned())
        }
        Command::Login { username, password } => {
            let client = AuthClient::new(&cli.base_url)?;
            commands::login(&client, &mut store, Credential::new(username, password)).await
        }
        Command::Logout => commands::logout(&mut store),
        Command::Profile => commands::profile(&store),
        Command::Status => Ok(format!(
            "{} ({})",
            commands::status(&store),
            store.storage().path().display()
        )),
    }
}
