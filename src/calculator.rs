//! # Calculator shell
//!
//! Interactive loop around the polynomial core: asks for two polynomials until both parse,
//! then applies `+`, `-` or `*` on request until the user types `x` (or `exit`).
//! Input and output are generic so the whole dialogue can be driven from memory.
//!
//! ```text
//! Program: Welcome to the polynomial calculator.
//!
//! Please enter the first polynomial
//! User: +2.0x^1 +3.0x^0
//!
//! Please enter the second polynomial
//! User: +1.0x^1
//!
//! Program: Choose operation: + (addition), - (subtraction), * (multiplication), x (exit program)
//! User: +
//!
//! Program: result= +3.0x^1 +3.0x^0
//! ```

use crate::Utils::config::{CalculatorConfig, ConfigError};
use crate::polynomial::parse_poly::ParseError;
use crate::polynomial::poly_algebra::{Operation, Polynomial};
use crate::polynomial::term::ArithmeticError;
use itertools::Itertools;
use log::{debug, info};
use std::fmt;
use std::io::{BufRead, Write};
use strum::{EnumMessage, IntoEnumIterator};

#[derive(Debug)]
pub enum CalcError {
    Io(std::io::Error),
    Parse(ParseError),
    Arithmetic(ArithmeticError),
    Config(ConfigError),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CalcError::Io(err) => write!(f, "I/O error: {}", err),
            CalcError::Parse(err) => write!(f, "{}", err),
            CalcError::Arithmetic(err) => write!(f, "{}", err),
            CalcError::Config(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CalcError {}

impl From<std::io::Error> for CalcError {
    fn from(err: std::io::Error) -> Self {
        CalcError::Io(err)
    }
}

impl From<ParseError> for CalcError {
    fn from(err: ParseError) -> Self {
        CalcError::Parse(err)
    }
}

impl From<ArithmeticError> for CalcError {
    fn from(err: ArithmeticError) -> Self {
        CalcError::Arithmetic(err)
    }
}

impl From<ConfigError> for CalcError {
    fn from(err: ConfigError) -> Self {
        CalcError::Config(err)
    }
}

/// What the user asked for at the operation menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Apply(Operation),
    Exit,
}

/// `x`/`exit` or one of the operation signs, case-insensitive, surrounding blanks ignored
pub fn parse_command(input: &str) -> Option<Command> {
    let command = input.trim().to_lowercase();
    match command.as_str() {
        "x" | "exit" => Some(Command::Exit),
        other => other.parse::<Operation>().ok().map(Command::Apply),
    }
}

/// "+ (addition), - (subtraction), * (multiplication), x (exit program)"
pub fn operation_menu() -> String {
    let operations = Operation::iter()
        .map(|operation| {
            format!(
                "{} ({})",
                operation,
                operation.get_message().unwrap_or_default()
            )
        })
        .join(", ");
    format!("{}, x (exit program)", operations)
}

pub struct Calculator<R, W> {
    input: R,
    output: W,
    config: CalculatorConfig,
}

impl<R: BufRead, W: Write> Calculator<R, W> {
    pub fn new(input: R, output: W, config: CalculatorConfig) -> Self {
        Calculator {
            input,
            output,
            config,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// prints the prompt and reads one line; `None` once the input is exhausted
    fn read_line(&mut self) -> Result<Option<String>, CalcError> {
        write!(self.output, "{}", self.config.prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// asks until the answer parses
    fn read_polynomial(&mut self, ordinal: &str) -> Result<Option<Polynomial>, CalcError> {
        loop {
            writeln!(self.output, "\nPlease enter the {} polynomial", ordinal)?;
            let Some(expression) = self.read_line()? else {
                return Ok(None);
            };
            match Polynomial::parse(&expression) {
                Ok(polynomial) => {
                    info!("{} polynomial: {}", ordinal, polynomial);
                    return Ok(Some(polynomial));
                }
                Err(err) => writeln!(self.output, " Program: ERROR: {}", err)?,
            }
        }
    }

    fn operation_loop(&mut self, first: &Polynomial, second: &Polynomial) -> Result<(), CalcError> {
        loop {
            writeln!(
                self.output,
                "\nProgram: Choose operation: {}",
                operation_menu()
            )?;
            let Some(line) = self.read_line()? else {
                return Ok(());
            };
            match parse_command(&line) {
                Some(Command::Exit) => return Ok(()),
                Some(Command::Apply(operation)) => {
                    debug!("applying {}", operation);
                    let result = first.combine_with(operation, second, self.config.subtraction)?;
                    writeln!(self.output, "\nProgram: result= {}", result)?;
                }
                None => writeln!(self.output, "Invalid command")?,
            }
        }
    }

    pub fn run(&mut self) -> Result<(), CalcError> {
        writeln!(self.output, "Program: Welcome to the polynomial calculator.")?;
        if let Some(first) = self.read_polynomial("first")? {
            if let Some(second) = self.read_polynomial("second")? {
                self.operation_loop(&first, &second)?;
            }
        }
        writeln!(self.output, "Program: Bye")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polynomial::poly_algebra::SubtractionMode;
    use std::io::Cursor;

    fn session(input: &str, config: CalculatorConfig) -> String {
        let mut calculator = Calculator::new(Cursor::new(input.to_string()), Vec::new(), config);
        calculator.run().unwrap();
        String::from_utf8(calculator.into_output()).unwrap()
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("+"), Some(Command::Apply(Operation::Add)));
        assert_eq!(parse_command(" - "), Some(Command::Apply(Operation::Subtract)));
        assert_eq!(parse_command("*\n"), Some(Command::Apply(Operation::Multiply)));
        assert_eq!(parse_command("X"), Some(Command::Exit));
        assert_eq!(parse_command("Exit"), Some(Command::Exit));
        assert_eq!(parse_command("/"), None);
        assert_eq!(parse_command(""), None);
    }

    #[test]
    fn test_operation_menu() {
        assert_eq!(
            operation_menu(),
            "+ (addition), - (subtraction), * (multiplication), x (exit program)"
        );
    }

    #[test]
    fn test_full_session() {
        let output = session(
            "+2.0x^1 +3.0x^0\n+1.0x^1\n+\n*\nx\n",
            CalculatorConfig::default(),
        );
        assert!(output.starts_with("Program: Welcome to the polynomial calculator."));
        assert!(output.contains("Please enter the first polynomial"));
        assert!(output.contains("Please enter the second polynomial"));
        assert!(output.contains("Program: result= +3.0x^1 +3.0x^0"));
        assert!(output.contains("Program: result= +2.0x^2 +3.0x^1"));
        assert!(output.trim_end().ends_with("Program: Bye"));
    }

    #[test]
    fn test_reprompt_on_parse_error() {
        let output = session(
            "\n+1.0x^1 junk\n+1.0x^1\n+2.0x^0\nx\n",
            CalculatorConfig::default(),
        );
        assert!(output.contains(" Program: ERROR: No terms found"));
        assert!(output.contains(" Program: ERROR: Unrecognized character combination junk"));
        assert_eq!(output.matches("Please enter the first polynomial").count(), 3);
        assert_eq!(output.matches("Please enter the second polynomial").count(), 1);
    }

    #[test]
    fn test_second_reprompt_keeps_first() {
        let output = session(
            "+1.0x^1\nbad\n+2.0x^1\n+\nexit\n",
            CalculatorConfig::default(),
        );
        assert_eq!(output.matches("Please enter the first polynomial").count(), 1);
        assert_eq!(output.matches("Please enter the second polynomial").count(), 2);
        assert!(output.contains("Program: result= +3.0x^1"));
    }

    #[test]
    fn test_invalid_command() {
        let output = session("+1.0x^1\n+1.0x^0\n/\nx\n", CalculatorConfig::default());
        assert!(output.contains("Invalid command"));
        assert!(!output.contains("result="));
        assert_eq!(output.matches("Choose operation").count(), 2);
    }

    #[test]
    fn test_subtraction_mode_from_config() {
        let input = "+5.0x^2\n+1.0x^1\n-\nx\n";
        let literal = session(input, CalculatorConfig::default());
        assert!(literal.contains("Program: result= +5.0x^2 +1.0x^1"));

        let config = CalculatorConfig {
            subtraction: SubtractionMode::Negate,
            ..CalculatorConfig::default()
        };
        let negated = session(input, config);
        assert!(negated.contains("Program: result= +5.0x^2 -1.0x^1"));
    }

    #[test]
    fn test_end_of_input() {
        let output = session("+1.0x^1\n", CalculatorConfig::default());
        assert!(output.trim_end().ends_with("Program: Bye"));
        assert!(!output.contains("Choose operation"));
    }

    #[test]
    fn test_custom_prompt() {
        let config = CalculatorConfig {
            prompt: "> ".to_string(),
            ..CalculatorConfig::default()
        };
        let output = session("+1.0x^1\n+1.0x^1\nx\n", config);
        assert!(output.contains("> "));
        assert!(!output.contains("User: "));
    }
}
