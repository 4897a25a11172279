use std::{error::Error, ops::ControlFlow};

use crate::storage::Store;

/// Commands that are not part of the database DSL.
///
/// These commands mostly control what the REPL session does
#[derive(Debug, Clone, PartialEq)]
pub enum MetaCommand {
    /// Close the current REPL session
    Exit,
    /// Prints out information about the open store
    Info,
}

impl MetaCommand {
    pub fn execute(&self, store: &Store) -> Result<ControlFlow<()>, Box<dyn Error>> {
        match self {
            Self::Exit => Ok(ControlFlow::Break(())),
            Self::Info => {
                println!("Database file: {}", store.path().display());
                println!("Records: {}", store.count()?);
                Ok(ControlFlow::Continue(()))
            }
        }
    }
}

impl TryFrom<&str> for MetaCommand {
    type Error = String;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        match input {
            ".exit" => Ok(MetaCommand::Exit),
            ".info" => Ok(MetaCommand::Info),
            _ => Err(format!("unknown command `{input}`.")),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_meta_commands() {
        assert_eq!(MetaCommand::try_from(".exit"), Ok(MetaCommand::Exit));
        assert_eq!(MetaCommand::try_from(".info"), Ok(MetaCommand::Info));
        assert!(MetaCommand::try_from(".layout").is_err());
    }
}
