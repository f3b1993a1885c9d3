//! Command-line parsing for the assistant bot.

use std::str::FromStr;

/// A recognized bot command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    /// `close` or `exit`
    Exit,
}

impl FromStr for Command {
    type Err = String;

    /// Case-insensitive command lookup.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hello" => Ok(Command::Hello),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "phone" => Ok(Command::Phone),
            "all" => Ok(Command::All),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            "close" | "exit" => Ok(Command::Exit),
            other => Err(other.to_string()),
        }
    }
}

/// One line of operator input split into a command token and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// The command token as typed
    pub command: String,

    /// Remaining whitespace-separated tokens, case preserved
    pub args: Vec<String>,
}

impl ParsedInput {
    /// Split `line` on whitespace. Returns `None` for a blank line.
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let command = tokens.next()?.to_string();
        let args = tokens.map(str::to_string).collect();
        Some(Self { command, args })
    }

    /// The recognized command, or `None` if the token is unknown.
    pub fn command(&self) -> Option<Command> {
        self.command.parse().ok()
    }
}
