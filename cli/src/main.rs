mod args;
mod error;
mod report;
mod transport;

use std::io::{self, BufRead};

use clap::Parser;
use forms::{BLOB_ENDPOINT, BlobSubmitter, FormField, MESSAGE_ENDPOINT, MemoryField, MessageSubmitter, Session};
use tracing_subscriber::EnvFilter;

use args::{Cli, Command};
use error::CliError;
use transport::HttpTransport;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let session = cli.session();
    let transport = HttpTransport::new(&cli.base_url)?;
    tracing::debug!(base_url = transport.base_url(), room = %session.room(), "configured");

    match cli.command {
        Command::Message { text } => run_message(&session, transport, &cli.username, &text).await,
        Command::Blob { text } => run_blob(transport, &text).await,
        Command::Chat => run_chat(&session, transport, &cli.username).await,
    }
}

async fn run_message(session: &Session, transport: HttpTransport, username: &str, text: &str) -> Result<(), CliError> {
    let form = MessageSubmitter::new(session.clone(), MemoryField::new(text), MemoryField::new(username), transport);
    report::report(MESSAGE_ENDPOINT, form.submit().await)
}

async fn run_blob(transport: HttpTransport, text: &str) -> Result<(), CliError> {
    let form = BlobSubmitter::new(MemoryField::new(text), transport);
    report::report(BLOB_ENDPOINT, form.submit().await)
}

/// One submission per stdin line, awaited in order. Stops at EOF.
async fn run_chat(session: &Session, transport: HttpTransport, username: &str) -> Result<(), CliError> {
    let message = MemoryField::default();
    let form = MessageSubmitter::new(session.clone(), message.clone(), MemoryField::new(username), transport);

    let stdin = io::stdin();
    let mut sent = 0_usize;
    for (idx, line) in stdin.lock().lines().enumerate() {
        message.set_value(&line?);
        let outcome = form.submit().await;
        report::log_line(idx + 1, &outcome);
        if outcome.is_accepted() {
            sent += 1;
        }
    }

    tracing::info!(sent, room = %session.room(), "chat input closed");
    Ok(())
}
