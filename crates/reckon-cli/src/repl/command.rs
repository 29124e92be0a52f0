//! Parsing one REPL line into a [`ReplCommand`].

use thiserror::Error;

use reckon_core::domain::{DomainError, Operation, parse_operand};

/// A parsed line of REPL input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReplCommand {
    Calculate {
        operation: Operation,
        operand1: f64,
        operand2: f64,
    },
    List,
    Clear,
    Help,
    Exit,
}

/// Why a line could not be turned into a command.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Unknown operation '{0}'")]
    UnknownVerb(String),

    #[error("'{verb}' expects {expected} argument(s), got {got}")]
    WrongArity {
        verb: String,
        expected: usize,
        got: usize,
    },

    #[error(transparent)]
    Operand(#[from] DomainError),
}

impl ReplCommand {
    /// Parse a line. Blank lines yield `Ok(None)`.
    ///
    /// Verbs are case-insensitive. Keyword commands take no arguments;
    /// operations take exactly two numbers.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let mut tokens = line.split_whitespace();
        let Some(verb) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = tokens.collect();

        let keyword = match verb.to_ascii_lowercase().as_str() {
            "list" => Some(Self::List),
            "clear" => Some(Self::Clear),
            "help" => Some(Self::Help),
            "exit" => Some(Self::Exit),
            _ => None,
        };
        if let Some(command) = keyword {
            return if args.is_empty() {
                Ok(Some(command))
            } else {
                Err(ParseError::WrongArity {
                    verb: verb.to_owned(),
                    expected: 0,
                    got: args.len(),
                })
            };
        }

        let operation: Operation = verb.parse().map_err(|e| match e {
            DomainError::UnknownOperation { name } => ParseError::UnknownVerb(name),
            other => ParseError::Operand(other),
        })?;

        let [raw1, raw2] = args.as_slice() else {
            return Err(ParseError::WrongArity {
                verb: verb.to_owned(),
                expected: 2,
                got: args.len(),
            });
        };

        Ok(Some(Self::Calculate {
            operation,
            operand1: parse_operand(raw1)?,
            operand2: parse_operand(raw2)?,
        }))
    }
}
