//! Line-oriented assistant bot.
//!
//! The bot owns the address book and turns each input line into one reply.
//! [`run`] drives it over any async line reader and writer, which is stdin and
//! stdout in the binary and in-memory buffers in tests.

pub mod command;
pub mod handlers;

pub use command::{Command, ParsedInput};

use crate::config::Config;
use crate::error::{CommandError, CommandResult};
use crate::repositories::AddressBook;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

pub const GREETING: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const FAREWELL: &str = "Good bye!";
pub const INVALID_COMMAND: &str = "Invalid command.";

/// What the REPL should do after one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text and keep reading
    Reply(String),
    /// Print the text and stop
    Exit(String),
    /// Nothing to print (blank line)
    Silent,
}

/// Operator-facing text for a handler error.
pub fn render_error(err: &CommandError) -> &'static str {
    match err {
        CommandError::MissingArgument => "Enter the argument for the command",
        CommandError::InvalidValue(_) | CommandError::InvalidArgument(_) => "Not a valid value",
        CommandError::LookupIndex => "Invalid index in sequence",
    }
}

/// The assistant bot: an address book plus the settings its commands need.
#[derive(Debug, Clone)]
pub struct Bot {
    book: AddressBook,
    birthday_window_days: u32,
}

impl Bot {
    /// Create a bot with an empty address book.
    pub fn new(config: &Config) -> Self {
        Self::with_book(AddressBook::new(), config)
    }

    /// Create a bot around an existing address book.
    pub fn with_book(book: AddressBook, config: &Config) -> Self {
        Self {
            book,
            birthday_window_days: config.birthday_window_days,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Handle one line of input.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        let Some(input) = ParsedInput::parse(line) else {
            return Outcome::Silent;
        };

        let Some(command) = input.command() else {
            debug!(command = %input.command, "Unrecognized command");
            return Outcome::Reply(INVALID_COMMAND.to_string());
        };

        debug!(?command, args = input.args.len(), "Dispatching command");

        match self.dispatch(command, &input.args) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(?command, error = %err, "Command rejected");
                Outcome::Reply(render_error(&err).to_string())
            }
        }
    }

    fn dispatch(&mut self, command: Command, args: &[String]) -> CommandResult<Outcome> {
        let book = &mut self.book;
        let reply = match command {
            Command::Exit => return Ok(Outcome::Exit(FAREWELL.to_string())),
            Command::Hello => handlers::hello(),
            Command::Add => handlers::add(args, book)?,
            Command::Change => handlers::change(args, book)?,
            Command::Phone => handlers::phone(args, book)?,
            Command::All => handlers::all(args, book)?,
            Command::AddBirthday => handlers::add_birthday(args, book)?,
            Command::ShowBirthday => handlers::show_birthday(args, book)?,
            Command::Birthdays => handlers::birthdays(args, book, self.birthday_window_days)?,
        };
        Ok(Outcome::Reply(reply))
    }
}

/// Run the read-eval-print loop until `close`/`exit` or end of input.
///
/// # Errors
///
/// Only I/O errors from `reader` or `writer` are returned. Command failures
/// and undecodable input are printed and the loop continues.
pub async fn run<R, W>(bot: &mut Bot, mut reader: R, mut writer: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(format!("{}\n", GREETING).as_bytes()).await?;

    let mut buf = Vec::new();
    loop {
        writer.write_all(PROMPT.as_bytes()).await?;
        writer.flush().await?;

        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            info!("End of input, shutting down");
            writer.write_all(format!("\n{}\n", FAREWELL).as_bytes()).await?;
            break;
        }

        // Bytes that aren't UTF-8 become U+FFFD and reach dispatch like any other text
        let raw = String::from_utf8_lossy(&buf);
        let line = raw.trim_end_matches(['\n', '\r']);

        match bot.handle_line(line) {
            Outcome::Reply(text) => {
                writer.write_all(format!("{}\n", text).as_bytes()).await?;
            }
            Outcome::Exit(text) => {
                writer.write_all(format!("{}\n", text).as_bytes()).await?;
                info!("Exit requested");
                break;
            }
            Outcome::Silent => {}
        }
    }

    writer.flush().await
}
