//! Commands that can be entered at the prompt and the opcodes they send.

use std::str::FromStr;

use crate::errors::ClientError;

/// A command entered by the user.
///
/// Stop, Forward and Reverse are written to the motor characteristic as their discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Stop = 0,
    Forward = 1,
    Reverse = 2,
    Quit,
}

impl Command {
    /// The byte written to the motor characteristic for this command.
    ///
    /// Quitting stops the motor before leaving, so it sends the Stop opcode.
    pub fn opcode(self) -> u8 {
        match self {
            Command::Stop | Command::Quit => Command::Stop as u8,
            Command::Forward => Command::Forward as u8,
            Command::Reverse => Command::Reverse as u8,
        }
    }

    /// The confirmation printed after the opcode has been written
    pub fn describe(self) -> &'static str {
        match self {
            Command::Stop => "Sent the motor stop command",
            Command::Forward => "Sent the motor forward command",
            Command::Reverse => "Sent the motor reverse command",
            Command::Quit => "Stopping the motor and exiting...",
        }
    }
}

impl FromStr for Command {
    type Err = ClientError;

    /// Parses a line with its terminator already removed.
    /// Matching is exact: surrounding whitespace makes the input invalid.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(Command::Stop),
            "1" => Ok(Command::Forward),
            "2" => Ok(Command::Reverse),
            "q" | "Q" => Ok(Command::Quit),
            other => Err(ClientError::InvalidInput(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_keys_parse() {
        assert_eq!("0".parse::<Command>().unwrap(), Command::Stop);
        assert_eq!("1".parse::<Command>().unwrap(), Command::Forward);
        assert_eq!("2".parse::<Command>().unwrap(), Command::Reverse);
        assert_eq!("q".parse::<Command>().unwrap(), Command::Quit);
        assert_eq!("Q".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn anything_else_is_invalid() {
        for input in ["", "3", " 1", "1 ", "quit", "stop", "01", "-1"] {
            match input.parse::<Command>() {
                Err(ClientError::InvalidInput(got)) => assert_eq!(got, input),
                other => panic!("{input:?} parsed as {other:?}"),
            }
        }
    }

    #[test]
    fn quit_sends_stop() {
        assert_eq!(Command::Stop.opcode(), 0);
        assert_eq!(Command::Forward.opcode(), 1);
        assert_eq!(Command::Reverse.opcode(), 2);
        assert_eq!(Command::Quit.opcode(), 0);
    }
}
