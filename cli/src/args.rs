#[cfg(test)]
#[path = "args_test.rs"]
mod args_test;

use clap::{Parser, Subcommand};
use forms::{Session, SessionState};

#[derive(Parser, Debug)]
#[command(name = "liminal-forms", about = "Post chat messages and blob tickets to a liminal node")]
pub struct Cli {
    #[arg(long, env = "LIMINAL_BASE_URL", default_value = "http://127.0.0.1:8080")]
    pub base_url: String,

    #[arg(long, env = "LIMINAL_ROOM", default_value = forms::session::DEFAULT_ROOM)]
    pub room: String,

    /// Sent as `guest` when empty.
    #[arg(long, env = "LIMINAL_USERNAME", default_value = "")]
    pub username: String,

    /// Start with the session marked offline; message submits are skipped.
    #[arg(long, default_value_t = false)]
    pub disconnected: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Send one chat message to `/message`.
    Message {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Send one blob ticket to `/blob`.
    Blob {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Send every stdin line as a chat message.
    Chat,
}

impl Cli {
    pub fn session(&self) -> Session {
        Session::new(SessionState {
            room: self.room.clone(),
            connected: !self.disconnected,
            ..SessionState::default()
        })
    }
}
