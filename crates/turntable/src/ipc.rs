use std::fmt;
use std::str::FromStr;
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

pub const SOCKET_PATH: &str = "/tmp/turntable.sock";

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, StrumDisplay)]
#[strum(ascii_case_insensitive)]
enum Verb {
    #[strum(to_string = "next", serialize = "n")]
    Next,
    #[strum(to_string = "previous", serialize = "prev", serialize = "p")]
    Previous,
    #[strum(to_string = "select", serialize = "s", serialize = "goto")]
    Select,
    #[strum(to_string = "status")]
    Status,
    #[strum(to_string = "reload")]
    Reload,
}

/// A single line of the control protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    Select(usize),
    Status,
    Reload,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command '{0}'")]
    Unknown(String),
    #[error("Missing index for '{0}'")]
    MissingIndex(String),
    #[error("Invalid index '{0}'")]
    InvalidIndex(String),
    #[error("Unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let word = words.next().ok_or(CommandError::Empty)?;
        let verb = Verb::from_str(word).map_err(|_| CommandError::Unknown(word.to_string()))?;

        let command = match verb {
            Verb::Next => Command::Next,
            Verb::Previous => Command::Previous,
            Verb::Status => Command::Status,
            Verb::Reload => Command::Reload,
            Verb::Select => {
                let arg = words
                    .next()
                    .ok_or_else(|| CommandError::MissingIndex(word.to_string()))?;
                let index = arg
                    .parse()
                    .map_err(|_| CommandError::InvalidIndex(arg.to_string()))?;
                Command::Select(index)
            }
        };

        match words.next() {
            Some(extra) => Err(CommandError::UnexpectedArgument(extra.to_string())),
            None => Ok(command),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Next => write!(f, "{}", Verb::Next),
            Command::Previous => write!(f, "{}", Verb::Previous),
            Command::Select(index) => write!(f, "{} {}", Verb::Select, index),
            Command::Status => write!(f, "{}", Verb::Status),
            Command::Reload => write!(f, "{}", Verb::Reload),
        }
    }
}
