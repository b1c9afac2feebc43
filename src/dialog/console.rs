//! Line-oriented console implementation of the dialog interfaces
//!
//! Messages and prompts become lines on the output stream, answers are read
//! line by line from the input stream.

use super::interface::{
    format_line, InputOptions, InputRequester, MessageDisplay, MessageOptions,
};
use crate::constants::LINE_TERMINATOR;
use crate::error::{Error, Result};
use std::io::{self, BufRead, Stdout, StdinLock, Write};

/// Console dialog facade over one input reader and one output writer.
///
/// The reader is created once with the facade and shared by every input
/// request; `&mut self` on each operation keeps reads serialized.
pub struct ConsoleDialog<R, W> {
    input: R,
    output: W,
}

impl ConsoleDialog<StdinLock<'static>, Stdout> {
    /// Binds the facade to the process standard streams.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleDialog<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Releases the streams, e.g. to inspect a buffer the facade wrote to.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        self.output.write_all(line.as_bytes())?;
        self.output.write_all(LINE_TERMINATOR.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            log::debug!("Input stream exhausted");
            return Err(Error::InputExhausted);
        }
        log::trace!("Read {read} bytes from input");
        Ok(strip_line_terminator(line))
    }
}

/// Removes one trailing `\n` or `\r\n`, leaving everything else untouched.
fn strip_line_terminator(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

impl<R: BufRead, W: Write> MessageDisplay for ConsoleDialog<R, W> {
    fn display(&mut self, message: &str, options: &MessageOptions) -> Result<()> {
        log::debug!("Displaying {} message", options.severity);
        self.write_line(&format_line(message, options.title.as_deref()))
    }
}

impl<R: BufRead, W: Write> InputRequester for ConsoleDialog<R, W> {
    fn request_input(&mut self, prompt: &str, options: &InputOptions) -> Result<String> {
        log::debug!("Requesting {} input", options.severity);
        self.write_line(&format_line(prompt, options.title.as_deref()))?;
        self.read_line()
    }
}
