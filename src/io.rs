use crate::error::CliError;
use std::io::{Write, stdin, stdout};

/// Trait for handling terminal input/output to allow mocking in tests.
pub trait IoHandler {
    fn read_line(&mut self, prompt: &str) -> Result<String, CliError>;
    fn write_line(&mut self, line: &str) -> Result<(), CliError>;
}

/// Standard I/O handler using stdin and stdout.
#[derive(Default)]
pub struct StdIoHandler;

impl IoHandler for StdIoHandler {
    fn read_line(&mut self, prompt: &str) -> Result<String, CliError> {
        print!("{prompt} ");
        stdout().flush().map_err(CliError::Io)?;
        let mut input = String::new();
        stdin().read_line(&mut input).map_err(CliError::Io)?;
        Ok(input.trim().to_string())
    }

    fn write_line(&mut self, line: &str) -> Result<(), CliError> {
        println!("{line}");
        Ok(())
    }
}
