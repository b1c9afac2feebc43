//! Dialoguer-based implementation of the dialog interfaces
//!
//! Used when optionpane runs attached to an interactive terminal. Prompts
//! get line editing from dialoguer; the text shown follows the same
//! `title : message` rule as the console facade.

use super::interface::{
    format_line, InputOptions, InputRequester, MessageDisplay, MessageOptions,
};
use crate::error::{Error, Result};
use dialoguer::{console::Term, Input};
use std::io::ErrorKind;

/// Dialoguer-based dialog provider
pub struct TerminalDialog {
    term: Term,
}

impl TerminalDialog {
    pub fn new() -> Self {
        Self { term: Term::stdout() }
    }
}

impl Default for TerminalDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageDisplay for TerminalDialog {
    fn display(&mut self, message: &str, options: &MessageOptions) -> Result<()> {
        self.term.write_line(&format_line(message, options.title.as_deref()))?;
        Ok(())
    }
}

impl InputRequester for TerminalDialog {
    fn request_input(&mut self, prompt: &str, options: &InputOptions) -> Result<String> {
        Input::<String>::new()
            .with_prompt(format_line(prompt, options.title.as_deref()))
            .allow_empty(true)
            .interact_text_on(&self.term)
            .map_err(map_terminal_error)
    }
}

/// An end of file while the terminal waits for a line is input exhaustion.
fn map_terminal_error(err: dialoguer::Error) -> Error {
    match err {
        dialoguer::Error::IO(e) if e.kind() == ErrorKind::UnexpectedEof => {
            Error::InputExhausted
        }
        other => Error::TerminalError(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eof_maps_to_exhaustion() {
        let err = dialoguer::Error::IO(std::io::Error::new(ErrorKind::UnexpectedEof, "eof"));
        assert!(matches!(map_terminal_error(err), Error::InputExhausted));
    }

    #[test]
    fn other_failures_stay_terminal_errors() {
        let err = dialoguer::Error::IO(std::io::Error::new(ErrorKind::NotConnected, "no tty"));
        assert!(matches!(map_terminal_error(err), Error::TerminalError(_)));
    }
}
