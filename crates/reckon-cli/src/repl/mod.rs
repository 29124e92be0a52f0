//! The interactive read-eval-print loop.
//!
//! ## States
//!
//! ```text
//!   ┌─────────┐  exit / end of input  ┌────────┐
//!   │ Reading │ ────────────────────▶ │ Exited │
//!   └─────────┘                       └────────┘
//!     ▲     │ any other line
//!     └─────┘
//! ```
//!
//! Every error is recovered here: it is logged, turned into a one-line
//! message, and the loop keeps reading.

use std::io::{self, BufRead, Write};

use tracing::{debug, error, instrument};

use reckon_core::{
    application::Calculator,
    domain::{Operation, format_number},
    error::CalcError,
};

pub mod command;

pub use command::{ParseError, ReplCommand};

pub const WELCOME: &str = "Welcome to the OOP Calculator! Type 'help' for available commands.";
pub const GOODBYE: &str = "Exiting calculator...";
pub const INVALID_INPUT: &str =
    "Invalid input. Please enter a valid operation and two numbers. Type 'help' for instructions.";
pub const EMPTY_HISTORY: &str = "No calculations in history.";
pub const HISTORY_CLEARED: &str = "History cleared.";

/// Where the loop is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplState {
    Reading,
    Exited,
}

/// Presentation settings for a session.
#[derive(Debug, Clone)]
pub struct ReplSettings {
    pub prompt: String,
    pub banner: bool,
}

/// One interactive session over a calculator.
pub struct Repl<'a, R, W> {
    calculator: &'a Calculator,
    input: R,
    output: W,
    settings: ReplSettings,
    state: ReplState,
}

impl<'a, R: BufRead, W: Write> Repl<'a, R, W> {
    pub fn new(calculator: &'a Calculator, input: R, output: W, settings: ReplSettings) -> Self {
        Self {
            calculator,
            input,
            output,
            settings,
            state: ReplState::Reading,
        }
    }

    pub fn state(&self) -> ReplState {
        self.state
    }

    /// Run until `exit` or end of input.
    ///
    /// Only I/O failures on the session's own streams end the loop early.
    #[instrument(skip_all)]
    pub fn run(&mut self) -> io::Result<()> {
        if self.settings.banner {
            writeln!(self.output, "{WELCOME}")?;
        }

        while self.state() == ReplState::Reading {
            self.step()?;
        }

        debug!("REPL finished");
        Ok(())
    }

    /// Prompt, read and handle exactly one line.
    pub fn step(&mut self) -> io::Result<ReplState> {
        if self.state == ReplState::Exited {
            return Ok(self.state);
        }

        write!(self.output, "{}", self.settings.prompt)?;
        self.output.flush()?;

        // Raw bytes, so a stray non-UTF-8 byte becomes a bad token instead of
        // an I/O error that ends the session.
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            debug!("End of input");
            self.exit()?;
            return Ok(self.state);
        }
        let line = String::from_utf8_lossy(&raw);

        match ReplCommand::parse(&line) {
            Ok(Some(command)) => self.dispatch(command)?,
            Ok(None) => {}
            Err(err) => self.report_parse_error(&err)?,
        }

        Ok(self.state)
    }

    fn dispatch(&mut self, command: ReplCommand) -> io::Result<()> {
        match command {
            ReplCommand::Calculate {
                operation,
                operand1,
                operand2,
            } => self.calculate(operation, operand1, operand2),
            ReplCommand::List => self.list(),
            ReplCommand::Clear => self.clear(),
            ReplCommand::Help => self.help(),
            ReplCommand::Exit => self.exit(),
        }
    }

    fn calculate(&mut self, operation: Operation, a: f64, b: f64) -> io::Result<()> {
        match self.calculator.perform_operation(operation, a, b) {
            Ok(result) => writeln!(self.output, "Result: {}", format_number(result)),
            Err(err) => self.report_calc_error(&err),
        }
    }

    fn list(&mut self) -> io::Result<()> {
        let history = match self.calculator.history() {
            Ok(history) => history,
            Err(err) => return self.report_calc_error(&err),
        };

        if history.is_empty() {
            return writeln!(self.output, "{EMPTY_HISTORY}");
        }
        for calculation in &history {
            writeln!(self.output, "{calculation}")?;
        }
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        match self.calculator.clear_history() {
            Ok(()) => writeln!(self.output, "{HISTORY_CLEARED}"),
            Err(err) => self.report_calc_error(&err),
        }
    }

    fn help(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Available commands:")?;
        writeln!(self.output, "  add <num1> <num2>       : Add two numbers.")?;
        writeln!(
            self.output,
            "  subtract <num1> <num2>  : Subtract the second number from the first."
        )?;
        writeln!(self.output, "  multiply <num1> <num2>  : Multiply two numbers.")?;
        writeln!(
            self.output,
            "  divide <num1> <num2>    : Divide the first number by the second (cannot divide by zero)."
        )?;
        writeln!(self.output, "  list                    : Show the calculation history.")?;
        writeln!(self.output, "  clear                   : Clear the calculation history.")?;
        writeln!(self.output, "  exit                    : Exit the calculator.")?;
        writeln!(self.output)
    }

    fn exit(&mut self) -> io::Result<()> {
        writeln!(self.output, "{GOODBYE}")?;
        self.state = ReplState::Exited;
        Ok(())
    }

    fn report_parse_error(&mut self, err: &ParseError) -> io::Result<()> {
        match err {
            ParseError::UnknownVerb(verb) => writeln!(
                self.output,
                "Unknown operation '{verb}'. Type 'help' for available commands."
            ),
            ParseError::WrongArity { .. } | ParseError::Operand(_) => {
                error!("Invalid input or error: {err}");
                writeln!(self.output, "{INVALID_INPUT}")
            }
        }
    }

    fn report_calc_error(&mut self, err: &CalcError) -> io::Result<()> {
        error!("Invalid input or error: {err}");
        if err.as_domain().is_some() {
            writeln!(self.output, "{INVALID_INPUT}")
        } else {
            writeln!(self.output, "Error: {err}")
        }
    }
}
